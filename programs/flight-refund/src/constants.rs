//! Seeds and refund policy

use anchor_lang::prelude::*;

#[constant]
pub const LEDGER_SEED: &[u8] = b"ledger";

#[constant]
pub const FLIGHT_SEED: &[u8] = b"flight";

#[constant]
pub const HOLDING_SEED: &[u8] = b"holding";

/// Reported delays below this never qualify for a refund.
#[constant]
pub const MIN_DELAY_MINUTES: u32 = 30;

/// Share of the paid amount returned for a qualifying delay.
#[constant]
pub const REFUND_PERCENTAGE: u8 = 50;

/// One band of the refund table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefundTier {
    pub min_delay_minutes: u32,
    pub percentage: u8,
}

/// Refund bands, ordered by descending `min_delay_minutes`.
/// The last band must start at `MIN_DELAY_MINUTES`.
pub const REFUND_TIERS: &[RefundTier] = &[RefundTier {
    min_delay_minutes: MIN_DELAY_MINUTES,
    percentage: REFUND_PERCENTAGE,
}];
