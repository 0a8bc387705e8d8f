pub mod flight;
pub mod holding;
pub mod ledger;

pub use flight::*;
pub use holding::*;
pub use ledger::*;
