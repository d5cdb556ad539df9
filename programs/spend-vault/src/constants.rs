use anchor_lang::prelude::*;

// Seeds for PDA derivation: ["vault", owner]
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

// Seeds for PDA derivation: ["spending", owner]
#[constant]
pub const SPENDING_SEED: &[u8] = b"spending";

// Seeds for PDA derivation: ["yield", owner]
#[constant]
pub const YIELD_SEED: &[u8] = b"yield";

// Seeds for PDA derivation: ["merchant", owner]
#[constant]
pub const MERCHANT_SEED: &[u8] = b"merchant";

// Seeds for PDA derivation: ["treasury"] (one pool for the whole program)
#[constant]
pub const TREASURY_SEED: &[u8] = b"treasury";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Spending limit = vault balance / SPENDING_LIMIT_DIVISOR (50% collateral factor)
pub const SPENDING_LIMIT_DIVISOR: u64 = 2;

// Merchant display names are stored with a fixed upper bound (bytes)
pub const MAX_MERCHANT_NAME_LEN: usize = 64;

// Positions under this collateral ratio (percent) are flagged in the risk report
pub const LIQUIDATION_THRESHOLD_PCT: u64 = 120;

// Reported ratio when there is no spend exposure at all
pub const RATIO_UNBOUNDED: u64 = u64::MAX;

// Upper bound the admin may configure for quote freshness
pub const MAX_PRICE_AGE_CAP: u64 = 3_600;

// Native unit decimals (1 SOL = 10^9 lamports)
pub const LAMPORTS_DECIMALS: u32 = 9;

// Quotes are normalised to cents
pub const CENTS_DECIMALS: i32 = 2;
