use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

use crate::{constants::*, events::*, oracle::read_price_quote, state::*};

#[derive(Accounts)]
pub struct CheckPrice<'info> {
    #[account(
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub price_update: Account<'info, PriceUpdateV2>,
}

impl<'info> CheckPrice<'info> {
    pub fn check_price(&self) -> Result<PriceReport> {
        let clock = Clock::get()?;
        let quote = read_price_quote(
            &self.price_update,
            &self.treasury.price_feed_id,
            self.treasury.max_price_age,
            &clock,
        )?;
        let report = PriceReport::from_quote(&quote)?;

        msg!(
            "Price {} x 10^{} ({} cents), published at {}",
            report.price,
            report.exponent,
            report.price_cents,
            report.publish_time
        );
        emit!(PriceChecked {
            price_feed_id: report.price_feed_id,
            price: report.price,
            exponent: report.exponent,
            price_cents: report.price_cents,
            publish_time: report.publish_time,
        });

        Ok(report)
    }
}
