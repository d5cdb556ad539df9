//! Events emitted by the spend vault program.
//!
//! Every state change is also logged with `msg!`; events carry the same
//! information in a form indexers can decode.

use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct SpendingLimitUpdated {
    pub owner: Pubkey,
    pub vault_balance: u64,
    pub spending_limit: u64,
    pub amount_spent: u64,
    pub timestamp: i64,
}

#[event]
pub struct SpendAuthorized {
    pub owner: Pubkey,
    pub amount: u64,
    pub amount_spent: u64,
    pub spending_limit: u64,
    pub timestamp: i64,
}

#[event]
pub struct SpendTrackerReset {
    pub owner: Pubkey,
    pub previous_amount_spent: u64,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryInitialized {
    pub treasury: Pubkey,
    pub authority: Pubkey,
    pub price_feed_id: [u8; 32],
    pub max_price_age: u64,
    pub timestamp: i64,
}

#[event]
pub struct PriceConfigUpdated {
    pub authority: Pubkey,
    pub price_feed_id: [u8; 32],
    pub max_price_age: u64,
    pub timestamp: i64,
}

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub staked_amount: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub staked_amount: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct MerchantRegistered {
    pub merchant: Pubkey,
    pub owner: Pubkey,
    pub name: String,
    pub timestamp: i64,
}

#[event]
pub struct PaymentProcessed {
    pub payer: Pubkey,
    pub merchant: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub amount_spent: u64,
    pub timestamp: i64,
}

#[event]
pub struct PriceChecked {
    pub price_feed_id: [u8; 32],
    pub price: i64,
    pub exponent: i32,
    pub price_cents: u64,
    pub publish_time: i64,
}

#[event]
pub struct RiskEvaluated {
    pub subject: Pubkey,
    pub staked_amount: u64,
    pub amount_spent: u64,
    pub staked_value_cents: u64,
    pub collateral_ratio_pct: u64,
    pub below_threshold: bool,
    pub timestamp: i64,
}
