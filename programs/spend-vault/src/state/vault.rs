use anchor_lang::prelude::*;
use crate::errors::*;

// Per-owner custody record
// The PDA itself holds the lamports: rent-exempt minimum + balance
#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub authority: Pubkey, // owner, fixed at creation
    pub balance: u64,      // custody balance in lamports
    pub bump: u8,
}

impl Vault {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    // Balance after adding `amount`, without writing it
    pub fn balance_after_credit(&self, amount: u64) -> Result<u64> {
        self.balance
            .checked_add(amount)
            .ok_or(error!(LedgerError::ArithmeticOverflow))
    }

    // Balance after removing `amount`, without writing it
    pub fn balance_after_debit(&self, amount: u64) -> Result<u64> {
        require!(amount <= self.balance, LedgerError::InsufficientFunds);
        Ok(self.balance - amount)
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self.balance_after_credit(amount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self.balance_after_debit(amount)?;
        Ok(())
    }
}
