use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        self.vault.debit(amount)?;

        // The vault PDA is program-owned, so lamports move directly.
        // Its lamports are rent minimum + balance, so rent stays covered.
        move_lamports(
            &self.vault.to_account_info(),
            &self.authority.to_account_info(),
            amount,
        )?;

        msg!("Withdrew {} lamports, vault balance {}", amount, self.vault.balance);
        emit!(Withdrawn {
            owner: self.authority.key(),
            amount,
            balance: self.vault.balance,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
