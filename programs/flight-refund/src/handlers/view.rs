//! Read accessors. Results go back through return data.

use anchor_lang::prelude::*;
use crate::constants::{FLIGHT_SEED, HOLDING_SEED, LEDGER_SEED};
use crate::handlers::load_account;
use crate::state::{Flight, FlightInfo, Ledger, TicketHolding};

#[derive(Accounts)]
#[instruction(flight_id: [u8; 32])]
pub struct GetFlightAccountConstraints<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.owner.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    /// CHECK: flight PDA of this ledger, may be empty
    #[account(seeds = [FLIGHT_SEED, ledger.key().as_ref(), flight_id.as_ref()], bump)]
    pub flight: UncheckedAccount<'info>,
}

pub fn get_flight(
    context: Context<GetFlightAccountConstraints>,
    _flight_id: [u8; 32],
) -> Result<FlightInfo> {
    Ok(load_account::<Flight>(&context.accounts.flight)?
        .map(|flight| flight.info())
        .unwrap_or_default())
}

#[derive(Accounts)]
#[instruction(flight_id: [u8; 32], passenger: Pubkey)]
pub struct GetTicketCountAccountConstraints<'info> {
    #[account(seeds = [LEDGER_SEED, ledger.owner.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
    /// CHECK: holding PDA of `passenger`, may be empty
    #[account(
        seeds = [HOLDING_SEED, ledger.key().as_ref(), flight_id.as_ref(), passenger.as_ref()],
        bump
    )]
    pub holding: UncheckedAccount<'info>,
}

pub fn get_ticket_count(
    context: Context<GetTicketCountAccountConstraints>,
    _flight_id: [u8; 32],
    _passenger: Pubkey,
) -> Result<u64> {
    Ok(load_account::<TicketHolding>(&context.accounts.holding)?
        .map_or(0, |holding| holding.count))
}
