use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Reset Spend Tracker Instruction
//
// Billing-period boundary: clears amount_spent, keeps the limit.
// Called by the owner (or a scheduler signing as the owner).

#[derive(Accounts)]
pub struct ResetSpendTracker<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SPENDING_SEED, spending_account.authority.as_ref()],
        bump = spending_account.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub spending_account: Account<'info, SpendingAccount>,
}

impl<'info> ResetSpendTracker<'info> {
    pub fn reset_spend_tracker(&mut self) -> Result<()> {
        let previous_amount_spent = self.spending_account.reset();

        msg!("Spend tracker reset (was {})", previous_amount_spent);
        emit!(SpendTrackerReset {
            owner: self.authority.key(),
            previous_amount_spent,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
