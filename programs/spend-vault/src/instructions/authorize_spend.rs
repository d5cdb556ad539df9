use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Authorize Spend Instruction
//
// Bookkeeping only: records a spend against the allowance (e.g. a hold)
// without moving any lamports.

#[derive(Accounts)]
pub struct AuthorizeSpend<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SPENDING_SEED, spending_account.authority.as_ref()],
        bump = spending_account.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub spending_account: Account<'info, SpendingAccount>,
}

impl<'info> AuthorizeSpend<'info> {
    pub fn authorize_spend(&mut self, amount: u64) -> Result<()> {
        self.spending_account.authorize(amount)?;

        msg!(
            "Spend of {} authorized ({} of {} used, {} left)",
            amount,
            self.spending_account.amount_spent,
            self.spending_account.spending_limit,
            self.spending_account.remaining()
        );
        emit!(SpendAuthorized {
            owner: self.authority.key(),
            amount,
            amount_spent: self.spending_account.amount_spent,
            spending_limit: self.spending_account.spending_limit,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
