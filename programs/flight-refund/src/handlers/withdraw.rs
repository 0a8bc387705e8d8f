//! Owner withdrawal

use anchor_lang::prelude::*;
use crate::constants::LEDGER_SEED;
use crate::events::FundsWithdrawn;
use crate::handlers::pay_out;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct WithdrawFundsAccountConstraints<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(mut, seeds = [LEDGER_SEED, ledger.owner.as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}

pub fn withdraw_funds(context: Context<WithdrawFundsAccountConstraints>) -> Result<()> {
    let owner = &context.accounts.owner;
    let ledger = &mut context.accounts.ledger;

    let amount = ledger.withdraw(&owner.key())?;
    pay_out(&ledger.to_account_info(), &owner.to_account_info(), amount)?;

    emit!(FundsWithdrawn { amount });
    msg!("Withdrew {} lamports", amount);

    Ok(())
}
