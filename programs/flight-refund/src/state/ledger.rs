//! Ledger account: the owner and the funds collected from ticket sales

use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::state::{check_delay, Flight, TicketHolding};

#[account]
#[derive(Debug, Default)]
pub struct Ledger {
    /// The administrator, fixed at initialization
    pub owner: Pubkey,
    /// Lamports owed to passengers and the owner (excludes the rent reserve)
    pub balance: u64,
    /// Sum of all accepted ticket payments
    pub total_collected: u64,
    /// Sum of all refunds paid out
    pub total_refunded: u64,
    /// Sum of all owner withdrawals
    pub total_withdrawn: u64,
    /// Number of flights registered
    pub flight_count: u32,
    /// PDA bump
    pub bump: u8,
}

impl Ledger {
    pub const INIT_SPACE: usize = 32 + 8 + 8 + 8 + 8 + 4 + 1;

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(self.owner == *caller, ErrorCode::AccessDenied);
        Ok(())
    }

    /// Register `flight` under this ledger (`ledger_key`). Owner only.
    pub fn register_flight(
        &mut self,
        caller: &Pubkey,
        ledger_key: Pubkey,
        flight: &mut Flight,
        flight_id: [u8; 32],
        ticket_price: u64,
        bump: u8,
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        let flight_count = self
            .flight_count
            .checked_add(1)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;

        flight.register(ledger_key, flight_id, ticket_price, bump)?;
        self.flight_count = flight_count;
        Ok(())
    }

    /// Sell `quantity` tickets on `flight` to `passenger` for exactly `payment`
    /// and return the amount to collect. `None` is an unregistered flight.
    /// Flight, holding and ledger are left untouched on error.
    #[allow(clippy::too_many_arguments)]
    pub fn book_purchase(
        &mut self,
        flight: Option<&mut Flight>,
        flight_key: Pubkey,
        holding: &mut TicketHolding,
        passenger: Pubkey,
        quantity: u64,
        payment: u64,
        holding_bump: u8,
    ) -> Result<u64> {
        let flight = flight.ok_or(error!(ErrorCode::FlightNotFound))?;

        let mut sold = flight.clone();
        let mut held = holding.clone();
        let mut booked = self.clone();

        let cost = sold.sell(quantity, payment)?;
        held.add_tickets(flight_key, passenger, quantity, holding_bump)?;
        booked.credit(cost)?;

        *flight = sold;
        *holding = held;
        *self = booked;
        Ok(cost)
    }

    /// Settle a delay refund claim and return the amount to pay out.
    /// Holding and ledger are left untouched on error.
    pub fn book_refund(
        &mut self,
        flight: Option<&Flight>,
        holding: Option<&mut TicketHolding>,
        delay_minutes: u32,
    ) -> Result<u64> {
        check_delay(delay_minutes)?;
        let flight = flight.ok_or(error!(ErrorCode::FlightNotFound))?;
        let holding = holding.ok_or(error!(ErrorCode::NoTicketsHeld))?;

        let mut claimed = holding.clone();
        let amount = claimed.claim_refund(flight.ticket_price, delay_minutes)?;
        self.debit_refund(amount)?;

        *holding = claimed;
        Ok(amount)
    }

    /// Empty the balance for the owner and return the amount taken.
    pub fn withdraw(&mut self, caller: &Pubkey) -> Result<u64> {
        self.ensure_owner(caller)?;
        let total_withdrawn = self
            .total_withdrawn
            .checked_add(self.balance)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;

        let amount = self.balance;
        self.balance = 0;
        self.total_withdrawn = total_withdrawn;
        Ok(amount)
    }

    fn credit(&mut self, amount: u64) -> Result<()> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
        let total_collected = self
            .total_collected
            .checked_add(amount)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
        self.balance = balance;
        self.total_collected = total_collected;
        Ok(())
    }

    fn debit_refund(&mut self, amount: u64) -> Result<()> {
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(error!(ErrorCode::InsufficientContractFunds))?;
        let total_refunded = self
            .total_refunded
            .checked_add(amount)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
        self.balance = balance;
        self.total_refunded = total_refunded;
        Ok(())
    }
}
