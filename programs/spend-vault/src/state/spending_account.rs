use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// Revolving allowance backed by vault collateral
//
// spending_limit is recomputed from the vault balance on demand.
// amount_spent may sit above a freshly lowered limit, but no new spend
// is accepted while it does.
#[account]
#[derive(InitSpace)]
pub struct SpendingAccount {
    pub authority: Pubkey,
    pub spending_limit: u64,
    pub amount_spent: u64,
    pub bump: u8,
}

impl SpendingAccount {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn limit_for_collateral(vault_balance: u64) -> u64 {
        vault_balance / SPENDING_LIMIT_DIVISOR
    }

    // Full overwrite of the limit; amount_spent is left alone
    pub fn recompute_limit(&mut self, vault_balance: u64) -> u64 {
        self.spending_limit = Self::limit_for_collateral(vault_balance);
        self.spending_limit
    }

    pub fn remaining(&self) -> u64 {
        self.spending_limit.saturating_sub(self.amount_spent)
    }

    // amount_spent after a spend of `amount`, without writing it
    pub fn spent_after(&self, amount: u64) -> Result<u64> {
        if amount == 0 {
            return Ok(self.amount_spent);
        }
        let next = self
            .amount_spent
            .checked_add(amount)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        require!(next <= self.spending_limit, LedgerError::SpendingLimitExceeded);
        Ok(next)
    }

    pub fn authorize(&mut self, amount: u64) -> Result<()> {
        self.amount_spent = self.spent_after(amount)?;
        Ok(())
    }

    // Returns the amount that was cleared
    pub fn reset(&mut self) -> u64 {
        std::mem::take(&mut self.amount_spent)
    }
}
