use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializeSpendingAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + SpendingAccount::INIT_SPACE,
        seeds = [SPENDING_SEED, owner.key().as_ref()],
        bump
    )]
    pub spending_account: Account<'info, SpendingAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeSpendingAccount<'info> {
    pub fn initialize_spending_account(
        &mut self,
        bumps: &InitializeSpendingAccountBumps,
    ) -> Result<()> {
        require!(
            !self.spending_account.is_initialized(),
            LedgerError::AlreadyInitialized
        );

        self.spending_account.set_inner(SpendingAccount {
            authority: self.owner.key(),
            spending_limit: 0,
            amount_spent: 0,
            bump: bumps.spending_account,
        });

        msg!("Spending account initialized for {}", self.owner.key());
        Ok(())
    }
}
