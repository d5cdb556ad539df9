use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// Shared staking pool, one per program
//
// total_staked is the pooled balance: it always equals the sum of every
// YieldAccount.staked_amount. The PDA holds rent-exempt minimum + total_staked.
// The admin also owns the oracle settings used by risk checks.
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    pub authority: Pubkey,
    pub total_staked: u64,
    pub stakers_count: u64,
    pub price_feed_id: [u8; 32],
    pub max_price_age: u64,
    pub bump: u8,
}

impl Treasury {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn validate_price_config(max_price_age: u64) -> Result<()> {
        require!(
            max_price_age > 0 && max_price_age <= MAX_PRICE_AGE_CAP,
            LedgerError::InvalidPriceConfig
        );
        Ok(())
    }

    pub fn set_price_config(&mut self, price_feed_id: [u8; 32], max_price_age: u64) -> Result<()> {
        Self::validate_price_config(max_price_age)?;
        self.price_feed_id = price_feed_id;
        self.max_price_age = max_price_age;
        Ok(())
    }
}
