use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializeYieldAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + YieldAccount::INIT_SPACE,
        seeds = [YIELD_SEED, owner.key().as_ref()],
        bump
    )]
    pub yield_account: Account<'info, YieldAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeYieldAccount<'info> {
    pub fn initialize_yield_account(&mut self, bumps: &InitializeYieldAccountBumps) -> Result<()> {
        require!(
            !self.yield_account.is_initialized(),
            LedgerError::AlreadyInitialized
        );

        self.yield_account.set_inner(YieldAccount {
            authority: self.owner.key(),
            staked_amount: 0,
            bump: bumps.yield_account,
        });

        msg!("Yield account initialized for {}", self.owner.key());
        Ok(())
    }
}
