//! Ledger setup

use anchor_lang::prelude::*;
use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct InitializeLedgerAccountConstraints<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        init,
        payer = owner,
        space = Ledger::DISCRIMINATOR.len() + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED, owner.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, Ledger>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_ledger(context: Context<InitializeLedgerAccountConstraints>) -> Result<()> {
    let ledger = &mut context.accounts.ledger;
    ledger.owner = context.accounts.owner.key();
    ledger.balance = 0;
    ledger.total_collected = 0;
    ledger.total_refunded = 0;
    ledger.total_withdrawn = 0;
    ledger.flight_count = 0;
    ledger.bump = context.bumps.ledger;

    msg!("Ledger initialized for owner {}", ledger.owner);
    Ok(())
}
