//! Flight account definition

use anchor_lang::prelude::*;
use crate::error::ErrorCode;

#[account]
#[derive(Debug, Default)]
pub struct Flight {
    /// The ledger this flight is sold through
    pub ledger: Pubkey,
    /// Padded flight identifier, e.g. "FLIGHT1\0\0..."
    pub flight_id: [u8; 32],
    /// Price of one ticket (in lamports), immutable after registration
    pub ticket_price: u64,
    /// Set on registration and never cleared
    pub is_active: bool,
    /// Tickets sold across all passengers
    pub tickets_sold: u64,
    /// PDA bump
    pub bump: u8,
}

/// Read-only view returned by `get_flight`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlightInfo {
    pub flight_id: [u8; 32],
    pub ticket_price: u64,
    pub is_active: bool,
    pub tickets_sold: u64,
}

impl Flight {
    pub const INIT_SPACE: usize = 32 + 32 + 8 + 1 + 8 + 1;

    pub fn register(
        &mut self,
        ledger: Pubkey,
        flight_id: [u8; 32],
        ticket_price: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_active, ErrorCode::FlightAlreadyRegistered);

        self.ledger = ledger;
        self.flight_id = flight_id;
        self.ticket_price = ticket_price;
        self.is_active = true;
        self.tickets_sold = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn ensure_active(&self) -> Result<()> {
        require!(self.is_active, ErrorCode::FlightInactive);
        Ok(())
    }

    /// Total price of `quantity` tickets.
    pub fn total_cost(&self, quantity: u64) -> Result<u64> {
        self.ensure_active()?;
        require!(quantity > 0, ErrorCode::InvalidQuantity);
        self.ticket_price
            .checked_mul(quantity)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))
    }

    /// Accept a purchase of `quantity` tickets paid with exactly `payment`.
    /// Returns the amount to collect. Nothing changes on error.
    pub fn sell(&mut self, quantity: u64, payment: u64) -> Result<u64> {
        let cost = self.total_cost(quantity)?;
        require!(payment == cost, ErrorCode::IncorrectPayment);

        self.tickets_sold = self
            .tickets_sold
            .checked_add(quantity)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
        Ok(cost)
    }

    pub fn info(&self) -> FlightInfo {
        FlightInfo {
            flight_id: self.flight_id,
            ticket_price: self.ticket_price,
            is_active: self.is_active,
            tickets_sold: self.tickets_sold,
        }
    }
}
