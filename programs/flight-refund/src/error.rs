use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Only the owner can call this function")]
    AccessDenied,
    #[msg("Flight does not exist")]
    FlightNotFound,
    #[msg("Flight is not active")]
    FlightInactive,
    #[msg("Flight is already registered")]
    FlightAlreadyRegistered,
    #[msg("Ticket quantity must be greater than zero")]
    InvalidQuantity,
    #[msg("Incorrect payment amount")]
    IncorrectPayment,
    #[msg("No tickets purchased for this flight")]
    NoTicketsHeld,
    #[msg("Delay must be at least 30 minutes")]
    DelayTooShort,
    #[msg("Refund already claimed for these tickets")]
    RefundAlreadyClaimed,
    #[msg("Refund amount rounds down to zero")]
    RefundAmountZero,
    #[msg("Insufficient funds in the ledger")]
    InsufficientContractFunds,
    #[msg("Transfer failed")]
    TransferFailed,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
