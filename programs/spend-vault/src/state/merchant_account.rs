use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// Registered payee; payments go to `authority`'s wallet
#[account]
#[derive(InitSpace)]
pub struct MerchantAccount {
    pub authority: Pubkey,
    #[max_len(64)]
    pub name: String,
    pub bump: u8,
}

impl MerchantAccount {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn validate_name(name: &str) -> Result<()> {
        require!(!name.trim().is_empty(), LedgerError::InvalidName);
        require!(name.len() <= MAX_MERCHANT_NAME_LEN, LedgerError::InvalidName);
        Ok(())
    }
}
