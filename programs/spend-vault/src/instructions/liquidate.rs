use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

use crate::{constants::*, events::*, oracle::read_price_quote, state::*};

// Liquidate Instruction
//
// Read-only risk check on `subject`. Anyone may call it. The report is
// logged, emitted and returned; no collateral is seized.

#[derive(Accounts)]
pub struct Liquidate<'info> {
    /// CHECK: only used as a seed; the records below are derived from it
    pub subject: UncheckedAccount<'info>,

    #[account(
        seeds = [SPENDING_SEED, subject.key().as_ref()],
        bump = spending_account.bump,
    )]
    pub spending_account: Account<'info, SpendingAccount>,

    #[account(
        seeds = [YIELD_SEED, subject.key().as_ref()],
        bump = yield_account.bump,
    )]
    pub yield_account: Account<'info, YieldAccount>,

    #[account(
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub price_update: Account<'info, PriceUpdateV2>,
}

impl<'info> Liquidate<'info> {
    pub fn liquidate(&self) -> Result<RiskReport> {
        let clock = Clock::get()?;
        let quote = read_price_quote(
            &self.price_update,
            &self.treasury.price_feed_id,
            self.treasury.max_price_age,
            &clock,
        )?;

        let report = RiskReport::evaluate(
            self.subject.key(),
            self.yield_account.staked_amount,
            self.spending_account.amount_spent,
            &quote,
        )?;

        if report.has_exposure {
            msg!(
                "Subject {}: staked value {} cents, ratio {}%{}",
                report.subject,
                report.staked_value_cents,
                report.collateral_ratio_pct,
                if report.below_threshold { " (below threshold)" } else { "" }
            );
        } else {
            msg!(
                "Subject {}: staked value {} cents, no exposure",
                report.subject,
                report.staked_value_cents
            );
        }
        emit!(RiskEvaluated {
            subject: report.subject,
            staked_amount: report.staked_amount,
            amount_spent: report.amount_spent,
            staked_value_cents: report.staked_value_cents,
            collateral_ratio_pct: report.collateral_ratio_pct,
            below_threshold: report.below_threshold,
            timestamp: clock.unix_timestamp,
        });

        Ok(report)
    }
}
