//! Ticket holding: tickets one passenger bought for one flight

use anchor_lang::prelude::*;
use crate::constants::{RefundTier, MIN_DELAY_MINUTES, REFUND_TIERS};
use crate::error::ErrorCode;

#[account]
#[derive(Debug, Default)]
pub struct TicketHolding {
    pub flight: Pubkey,
    pub passenger: Pubkey,
    /// Tickets bought; only ever grows
    pub count: u64,
    /// Tickets already covered by a refund
    pub refunded_count: u64,
    pub bump: u8,
}

impl TicketHolding {
    pub const INIT_SPACE: usize = 32 + 32 + 8 + 8 + 1;

    pub fn add_tickets(
        &mut self,
        flight: Pubkey,
        passenger: Pubkey,
        quantity: u64,
        bump: u8,
    ) -> Result<()> {
        let count = self
            .count
            .checked_add(quantity)
            .ok_or(error!(ErrorCode::ArithmeticOverflow))?;

        if self.passenger == Pubkey::default() {
            self.flight = flight;
            self.passenger = passenger;
            self.bump = bump;
        }
        self.count = count;
        Ok(())
    }

    /// Tickets not yet refunded.
    pub fn refundable(&self) -> u64 {
        self.count.saturating_sub(self.refunded_count)
    }

    /// Compute the refund for a reported delay and mark the covered tickets
    /// as refunded. Nothing changes on error. Delays below every band fail
    /// with `DelayTooShort`.
    pub fn claim_refund(&mut self, ticket_price: u64, delay_minutes: u32) -> Result<u64> {
        require!(self.count > 0, ErrorCode::NoTicketsHeld);

        let tickets = self.refundable();
        require!(tickets > 0, ErrorCode::RefundAlreadyClaimed);

        let percentage = refund_percentage(REFUND_TIERS, delay_minutes)
            .ok_or(error!(ErrorCode::DelayTooShort))?;
        let amount = refund_amount(tickets, ticket_price, percentage)?;
        require!(amount > 0, ErrorCode::RefundAmountZero);

        self.refunded_count = self.count;
        Ok(amount)
    }
}

pub fn check_delay(delay_minutes: u32) -> Result<()> {
    require!(delay_minutes >= MIN_DELAY_MINUTES, ErrorCode::DelayTooShort);
    Ok(())
}

/// Percentage of the highest band whose threshold `delay_minutes` reaches.
/// `tiers` is ordered by descending threshold.
pub fn refund_percentage(tiers: &[RefundTier], delay_minutes: u32) -> Option<u8> {
    tiers
        .iter()
        .find(|tier| delay_minutes >= tier.min_delay_minutes)
        .map(|tier| tier.percentage)
}

/// `tickets * ticket_price * percentage / 100`, rounded down.
pub fn refund_amount(tickets: u64, ticket_price: u64, percentage: u8) -> Result<u64> {
    let paid = (tickets as u128)
        .checked_mul(ticket_price as u128)
        .ok_or(error!(ErrorCode::ArithmeticOverflow))?;
    let amount = paid
        .checked_mul(percentage as u128)
        .ok_or(error!(ErrorCode::ArithmeticOverflow))?
        / 100;
    u64::try_from(amount).map_err(|_| error!(ErrorCode::ArithmeticOverflow))
}
