use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Stake Instruction
//
// Moves `amount` from the owner's vault into the shared treasury pool.
// Updates vault.balance, yield_account.staked_amount and
// treasury.total_staked together; the next state of all three is computed
// before any lamports move.

#[derive(Accounts)]
pub struct Stake<'info> {
    pub authority: Signer<'info>,

    // Source of funds
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    // Stake position
    #[account(
        mut,
        seeds = [YIELD_SEED, yield_account.authority.as_ref()],
        bump = yield_account.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub yield_account: Account<'info, YieldAccount>,

    // Shared pool
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}

impl<'info> Stake<'info> {
    pub fn stake(&mut self, amount: u64) -> Result<()> {
        let next = StakeTransition::stake(&self.vault, &self.yield_account, &self.treasury, amount)?;

        move_lamports(
            &self.vault.to_account_info(),
            &self.treasury.to_account_info(),
            amount,
        )?;

        next.apply(&mut self.vault, &mut self.yield_account, &mut self.treasury);

        msg!(
            "Staked {} lamports (position {}, pool {})",
            amount,
            next.staked_amount,
            next.total_staked
        );
        emit!(Staked {
            owner: self.authority.key(),
            amount,
            vault_balance: next.vault_balance,
            staked_amount: next.staked_amount,
            total_staked: next.total_staked,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
