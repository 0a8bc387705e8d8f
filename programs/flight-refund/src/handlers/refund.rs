//! Delay refunds

use anchor_lang::prelude::*;
use crate::constants::{FLIGHT_SEED, HOLDING_SEED, LEDGER_SEED};
use crate::events::RefundIssued;
use crate::handlers::{load_account, pay_out, store_account};
use crate::state::{Flight, Ledger, TicketHolding};

#[derive(Accounts)]
#[instruction(flight_id: [u8; 32])]
pub struct ProcessRefundAccountConstraints<'info> {
    #[account(mut)]
    pub passenger: Signer<'info>,
    #[account(mut, seeds = [LEDGER_SEED, ledger.owner.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    /// CHECK: flight PDA of this ledger, empty if the flight was never registered
    #[account(seeds = [FLIGHT_SEED, ledger.key().as_ref(), flight_id.as_ref()], bump)]
    pub flight: UncheckedAccount<'info>,
    /// CHECK: holding PDA of the signer, empty if no ticket was ever bought
    #[account(
        mut,
        seeds = [HOLDING_SEED, ledger.key().as_ref(), flight_id.as_ref(), passenger.key().as_ref()],
        bump
    )]
    pub holding: UncheckedAccount<'info>,
}

pub fn process_refund(
    context: Context<ProcessRefundAccountConstraints>,
    flight_id: [u8; 32],
    delay_minutes: u32,
) -> Result<()> {
    let passenger = &context.accounts.passenger;
    let ledger = &mut context.accounts.ledger;
    let holding_info = &context.accounts.holding;

    let flight = load_account::<Flight>(&context.accounts.flight)?;
    let mut holding = load_account::<TicketHolding>(holding_info)?;

    // All bookkeeping happens before lamports leave the ledger
    let amount = ledger.book_refund(flight.as_ref(), holding.as_mut(), delay_minutes)?;
    if let Some(holding) = &holding {
        store_account(holding_info, holding)?;
    }

    pay_out(&ledger.to_account_info(), &passenger.to_account_info(), amount)?;

    emit!(RefundIssued {
        flight_id,
        claimant: passenger.key(),
        amount,
    });
    msg!("Refunded {} lamports for a {} minute delay", amount, delay_minutes);

    Ok(())
}
