use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdatePriceConfig<'info> {
    pub authority: Signer<'info>,

    // Only the treasury admin may change oracle settings
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub treasury: Account<'info, Treasury>,
}

impl<'info> UpdatePriceConfig<'info> {
    pub fn update_price_config(&mut self, price_feed_id: [u8; 32], max_price_age: u64) -> Result<()> {
        self.treasury.set_price_config(price_feed_id, max_price_age)?;

        msg!("Price config updated, max age {}s", max_price_age);
        emit!(PriceConfigUpdated {
            authority: self.authority.key(),
            price_feed_id,
            max_price_age,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
