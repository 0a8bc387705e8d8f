pub mod flight;
pub mod ledger;
pub mod refund;
pub mod ticket;
pub mod view;
pub mod withdraw;

pub use flight::*;
pub use ledger::*;
pub use refund::*;
pub use ticket::*;
pub use view::*;
pub use withdraw::*;

use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, AccountSerialize, Owner};
use crate::error::ErrorCode;

/// Deserialize a program account that may not exist yet.
/// An empty account is `None`.
pub(crate) fn load_account<T: AccountDeserialize + Owner>(
    info: &AccountInfo,
) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    if *info.owner != T::owner() {
        return Err(error!(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram));
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Write back an account loaded with `load_account`.
pub(crate) fn store_account<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    account.try_serialize(&mut writer)
}

/// Move `amount` lamports out of the program-owned ledger account.
/// The ledger keeps its rent reserve; the whole move fails if it cannot.
pub(crate) fn pay_out<'info>(
    ledger: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let rent_reserve = Rent::get()?.minimum_balance(ledger.data_len());
    let available = ledger.lamports().saturating_sub(rent_reserve);
    require!(amount <= available, ErrorCode::InsufficientContractFunds);

    let ledger_lamports = ledger.lamports() - amount;
    let recipient_lamports = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(error!(ErrorCode::TransferFailed))?;

    **ledger
        .try_borrow_mut_lamports()
        .map_err(|_| error!(ErrorCode::TransferFailed))? = ledger_lamports;
    **recipient
        .try_borrow_mut_lamports()
        .map_err(|_| error!(ErrorCode::TransferFailed))? = recipient_lamports;

    Ok(())
}
