use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Update Spending Limit Instruction
//
// Overwrites the limit with half of the current vault balance.
// amount_spent is untouched.

#[derive(Accounts)]
pub struct UpdateSpendingLimit<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [SPENDING_SEED, spending_account.authority.as_ref()],
        bump = spending_account.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub spending_account: Account<'info, SpendingAccount>,
}

impl<'info> UpdateSpendingLimit<'info> {
    pub fn update_spending_limit(&mut self) -> Result<()> {
        let vault_balance = self.vault.balance;
        let spending_limit = self.spending_account.recompute_limit(vault_balance);

        msg!(
            "Spending limit set to {} (vault balance {})",
            spending_limit,
            vault_balance
        );
        emit!(SpendingLimitUpdated {
            owner: self.authority.key(),
            vault_balance,
            spending_limit,
            amount_spent: self.spending_account.amount_spent,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
