// Spend Vault Program
//
// Collateralized spending ledger. Owners keep lamports in a personal vault,
// may stake part of it into a shared treasury pool, and get a revolving
// allowance worth half of the vault balance. Payments to registered
// merchants are drawn from the payer's wallet against that allowance.
// A permissionless risk check values the stake through a Pyth quote and
// reports the collateral ratio against outstanding spend.
//
// Instructions:
// - initialize / deposit / withdraw: vault custody
// - initialize_spending_account / update_spending_limit / authorize_spend /
//   reset_spend_tracker: allowance bookkeeping
// - initialize_treasury / update_price_config: pool and oracle settings
// - initialize_yield_account / stake / unstake: pool positions
// - initialize_merchant_account / process_payment: merchant settlement
// - check_price / liquidate: read-only oracle and risk reports

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod oracle;
pub mod pda;
pub mod state;

pub use instructions::*;
pub use errors::*;
pub use state::*;

declare_id!("5R1B4h6xHuGJJFzYTBL3wwit7MB6X9iB2SLAiLJNNcgr");

#[program]
pub mod spend_vault {
    use super::*;

    pub fn initialize(ctx: Context<InitializeVault>) -> Result<()> {
        ctx.accounts.initialize_vault(&ctx.bumps)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)
    }

    pub fn initialize_spending_account(ctx: Context<InitializeSpendingAccount>) -> Result<()> {
        ctx.accounts.initialize_spending_account(&ctx.bumps)
    }

    // Limit = vault balance / 2; amount_spent is untouched
    pub fn update_spending_limit(ctx: Context<UpdateSpendingLimit>) -> Result<()> {
        ctx.accounts.update_spending_limit()
    }

    pub fn authorize_spend(ctx: Context<AuthorizeSpend>, amount: u64) -> Result<()> {
        ctx.accounts.authorize_spend(amount)
    }

    pub fn reset_spend_tracker(ctx: Context<ResetSpendTracker>) -> Result<()> {
        ctx.accounts.reset_spend_tracker()
    }

    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        price_feed_id: [u8; 32],
        max_price_age: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_treasury(price_feed_id, max_price_age, &ctx.bumps)
    }

    // Admin only
    pub fn update_price_config(
        ctx: Context<UpdatePriceConfig>,
        price_feed_id: [u8; 32],
        max_price_age: u64,
    ) -> Result<()> {
        ctx.accounts.update_price_config(price_feed_id, max_price_age)
    }

    pub fn initialize_yield_account(ctx: Context<InitializeYieldAccount>) -> Result<()> {
        ctx.accounts.initialize_yield_account(&ctx.bumps)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        ctx.accounts.stake(amount)
    }

    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        ctx.accounts.unstake(amount)
    }

    pub fn initialize_merchant_account(
        ctx: Context<InitializeMerchantAccount>,
        name: String,
    ) -> Result<()> {
        ctx.accounts.initialize_merchant_account(name, &ctx.bumps)
    }

    // Funds come from the payer's wallet, not the vault
    pub fn process_payment(ctx: Context<ProcessPayment>, amount: u64) -> Result<()> {
        ctx.accounts.process_payment(amount)
    }

    pub fn check_price(ctx: Context<CheckPrice>) -> Result<PriceReport> {
        ctx.accounts.check_price()
    }

    // Permissionless; reports only
    pub fn liquidate(ctx: Context<Liquidate>) -> Result<RiskReport> {
        ctx.accounts.liquidate()
    }
}
