//! Flight registration (owner only)

use anchor_lang::prelude::*;
use crate::constants::{FLIGHT_SEED, LEDGER_SEED};
use crate::events::FlightRegistered;
use crate::state::{Flight, Ledger};

#[derive(Accounts)]
#[instruction(flight_id: [u8; 32])]
pub struct RegisterFlightAccountConstraints<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(mut, seeds = [LEDGER_SEED, ledger.owner.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    /// Created on first registration; an existing active flight is rejected
    #[account(
        init_if_needed,
        payer = owner,
        space = Flight::DISCRIMINATOR.len() + Flight::INIT_SPACE,
        seeds = [FLIGHT_SEED, ledger.key().as_ref(), flight_id.as_ref()],
        bump
    )]
    pub flight: Account<'info, Flight>,
    pub system_program: Program<'info, System>,
}

pub fn register_flight(
    context: Context<RegisterFlightAccountConstraints>,
    flight_id: [u8; 32],
    ticket_price: u64,
) -> Result<()> {
    let owner = context.accounts.owner.key();
    let ledger = &mut context.accounts.ledger;
    let flight = &mut context.accounts.flight;

    let ledger_key = ledger.key();
    ledger.register_flight(
        &owner,
        ledger_key,
        flight,
        flight_id,
        ticket_price,
        context.bumps.flight,
    )?;

    emit!(FlightRegistered {
        flight_id,
        ticket_price,
    });
    msg!("Flight registered at {} lamports per ticket", ticket_price);

    Ok(())
}
