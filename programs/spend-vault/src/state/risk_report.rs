use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, oracle::PriceQuote};

// Returned by `liquidate`; never stored
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RiskReport {
    pub subject: Pubkey,
    pub staked_amount: u64,
    pub amount_spent: u64,
    pub staked_value_cents: u64,
    // staked_value_cents * 100 / amount_spent, RATIO_UNBOUNDED with no exposure
    pub collateral_ratio_pct: u64,
    pub has_exposure: bool,
    pub below_threshold: bool,
    pub publish_time: i64,
}

impl RiskReport {
    pub fn evaluate(
        subject: Pubkey,
        staked_amount: u64,
        amount_spent: u64,
        quote: &PriceQuote,
    ) -> Result<Self> {
        let staked_value_cents = quote.value_cents(staked_amount)?;
        let has_exposure = amount_spent > 0;

        let collateral_ratio_pct = if has_exposure {
            let ratio = (staked_value_cents as u128)
                .checked_mul(100)
                .ok_or(error!(LedgerError::ArithmeticOverflow))?
                / amount_spent as u128;
            // a ratio too large for u64 is as good as unbounded
            u64::try_from(ratio).unwrap_or(RATIO_UNBOUNDED)
        } else {
            RATIO_UNBOUNDED
        };

        Ok(Self {
            subject,
            staked_amount,
            amount_spent,
            staked_value_cents,
            collateral_ratio_pct,
            has_exposure,
            below_threshold: has_exposure && collateral_ratio_pct < LIQUIDATION_THRESHOLD_PCT,
            publish_time: quote.publish_time,
        })
    }
}

// Returned by `check_price`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PriceReport {
    pub price_feed_id: [u8; 32],
    pub price: i64,
    pub conf: u64,
    pub exponent: i32,
    pub publish_time: i64,
    pub price_cents: u64,
}

impl PriceReport {
    pub fn from_quote(quote: &PriceQuote) -> Result<Self> {
        Ok(Self {
            price_feed_id: quote.feed_id,
            price: quote.price,
            conf: quote.conf,
            exponent: quote.exponent,
            publish_time: quote.publish_time,
            price_cents: quote.price_cents()?,
        })
    }
}
