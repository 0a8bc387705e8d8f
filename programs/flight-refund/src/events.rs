//! Notifications consumed by off-chain clients

use anchor_lang::prelude::*;

#[event]
pub struct FlightRegistered {
    pub flight_id: [u8; 32],
    pub ticket_price: u64,
}

#[event]
pub struct TicketsPurchased {
    pub flight_id: [u8; 32],
    pub buyer: Pubkey,
    pub quantity: u64,
}

#[event]
pub struct RefundIssued {
    pub flight_id: [u8; 32],
    pub claimant: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub amount: u64,
}
