use anchor_lang::prelude::*;

// Per-owner stake position in the treasury pool
#[account]
#[derive(InitSpace)]
pub struct YieldAccount {
    pub authority: Pubkey,
    pub staked_amount: u64,
    pub bump: u8,
}

impl YieldAccount {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn has_stake(&self) -> bool {
        self.staked_amount > 0
    }
}
