use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Unstake<'info> {
    pub authority: Signer<'info>,

    // Destination of funds
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [YIELD_SEED, yield_account.authority.as_ref()],
        bump = yield_account.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub yield_account: Account<'info, YieldAccount>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}

impl<'info> Unstake<'info> {
    pub fn unstake(&mut self, amount: u64) -> Result<()> {
        let next = StakeTransition::unstake(&self.vault, &self.yield_account, &self.treasury, amount)?;

        move_lamports(
            &self.treasury.to_account_info(),
            &self.vault.to_account_info(),
            amount,
        )?;

        next.apply(&mut self.vault, &mut self.yield_account, &mut self.treasury);

        msg!(
            "Unstaked {} lamports (position {}, pool {})",
            amount,
            next.staked_amount,
            next.total_staked
        );
        emit!(Unstaked {
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
