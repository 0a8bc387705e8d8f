//! Ticket purchase

use anchor_lang::prelude::*;
use solana_program::{program::invoke, system_instruction};
use crate::constants::{FLIGHT_SEED, HOLDING_SEED, LEDGER_SEED};
use crate::error::ErrorCode;
use crate::events::TicketsPurchased;
use crate::handlers::{load_account, store_account};
use crate::state::{Flight, Ledger, TicketHolding};

#[derive(Accounts)]
#[instruction(flight_id: [u8; 32])]
pub struct PurchaseTicketsAccountConstraints<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,
    /// Receives the payment
    #[account(mut, seeds = [LEDGER_SEED, ledger.owner.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    /// CHECK: flight PDA of this ledger, empty if the flight was never registered
    #[account(mut, seeds = [FLIGHT_SEED, ledger.key().as_ref(), flight_id.as_ref()], bump)]
    pub flight: UncheckedAccount<'info>,
    #[account(
        init_if_needed,
        payer = buyer,
        space = TicketHolding::DISCRIMINATOR.len() + TicketHolding::INIT_SPACE,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), flight_id.as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub holding: Account<'info, TicketHolding>,
    pub system_program: Program<'info, System>,
}

pub fn purchase_tickets(
    context: Context<PurchaseTicketsAccountConstraints>,
    flight_id: [u8; 32],
    quantity: u64,
    payment: u64,
) -> Result<()> {
    let buyer = &context.accounts.buyer;
    let ledger = &mut context.accounts.ledger;
    let flight_info = &context.accounts.flight;
    let holding = &mut context.accounts.holding;

    // Exact payment only: no partial acceptance, no change
    let mut flight = load_account::<Flight>(flight_info)?;
    let cost = ledger.book_purchase(
        flight.as_mut(),
        flight_info.key(),
        holding,
        buyer.key(),
        quantity,
        payment,
        context.bumps.holding,
    )?;
    if let Some(flight) = &flight {
        store_account(flight_info, flight)?;
    }

    let ix = system_instruction::transfer(&buyer.key(), &ledger.key(), cost);
    invoke(
        &ix,
        &[
            buyer.to_account_info(),
            ledger.to_account_info(),
            context.accounts.system_program.to_account_info(),
        ],
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))?;

    emit!(TicketsPurchased {
        flight_id,
        buyer: buyer.key(),
        quantity,
    });
    msg!("{} tickets purchased for {} lamports", quantity, cost);

    Ok(())
}
