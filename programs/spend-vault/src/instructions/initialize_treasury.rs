use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Initialize Treasury Instruction
//
// Creates the single staking pool at ["treasury"]. The signer becomes the
// admin and sets the oracle feed and freshness bound used by risk checks.
// The first caller wins; every later call fails with AlreadyInitialized.

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Treasury::INIT_SPACE,
        seeds = [TREASURY_SEED],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeTreasury<'info> {
    pub fn initialize_treasury(
        &mut self,
        price_feed_id: [u8; 32],
        max_price_age: u64,
        bumps: &InitializeTreasuryBumps,
    ) -> Result<()> {
        require!(!self.treasury.is_initialized(), LedgerError::AlreadyInitialized);
        Treasury::validate_price_config(max_price_age)?;

        self.treasury.set_inner(Treasury {
            authority: self.admin.key(),
            total_staked: 0,
            stakers_count: 0,
            price_feed_id,
            max_price_age,
            bump: bumps.treasury,
        });

        msg!("Treasury initialized, admin {}", self.admin.key());
        emit!(TreasuryInitialized {
            treasury: self.treasury.key(),
            authority: self.admin.key(),
            price_feed_id,
            max_price_age,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
