#![allow(unexpected_cfgs)]
// See https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana)

pub mod constants;
pub mod error;
pub mod events;
pub mod handlers;
pub mod state;

use anchor_lang::prelude::*;
pub use handlers::*;
use state::FlightInfo;

declare_id!("FLXXhmE4AmrPJxn533haWk9KcDWKRPDBi2pHFUq6N1Jn");

#[program]
pub mod flight_refund {
    use super::*;

    /// Create the ledger owned by the signer.
    pub fn initialize_ledger(context: Context<InitializeLedgerAccountConstraints>) -> Result<()> {
        handlers::ledger::initialize_ledger(context)
    }

    /// Register a flight and its ticket price (owner only).
    pub fn register_flight(
        context: Context<RegisterFlightAccountConstraints>,
        flight_id: [u8; 32],
        ticket_price: u64,
    ) -> Result<()> {
        handlers::flight::register_flight(context, flight_id, ticket_price)
    }

    /// Buy `quantity` tickets, paying exactly `quantity * ticket_price`.
    pub fn purchase_tickets(
        context: Context<PurchaseTicketsAccountConstraints>,
        flight_id: [u8; 32],
        quantity: u64,
        payment: u64,
    ) -> Result<()> {
        handlers::ticket::purchase_tickets(context, flight_id, quantity, payment)
    }

    /// Claim a refund for a delayed flight.
    pub fn process_refund(
        context: Context<ProcessRefundAccountConstraints>,
        flight_id: [u8; 32],
        delay_minutes: u32,
    ) -> Result<()> {
        handlers::refund::process_refund(context, flight_id, delay_minutes)
    }

    /// Send the whole ledger balance to the owner.
    pub fn withdraw_funds(context: Context<WithdrawFundsAccountConstraints>) -> Result<()> {
        handlers::withdraw::withdraw_funds(context)
    }

    pub fn get_flight(
        context: Context<GetFlightAccountConstraints>,
        flight_id: [u8; 32],
    ) -> Result<FlightInfo> {
        handlers::view::get_flight(context, flight_id)
    }

    pub fn get_ticket_count(
        context: Context<GetTicketCountAccountConstraints>,
        flight_id: [u8; 32],
        passenger: Pubkey,
    ) -> Result<u64> {
        handlers::view::get_ticket_count(context, flight_id, passenger)
    }
}
