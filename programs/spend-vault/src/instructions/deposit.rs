use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{constants::*, errors::*, events::*, state::*};

// Deposit Instruction
//
// Moves lamports from the owner's wallet into the vault PDA and credits
// the custody balance. A zero amount is a successful no-op; a wallet
// that cannot cover the amount fails with InsufficientFunds.

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // Re-derived from the stored owner, so a foreign signer fails has_one
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.authority.as_ref()],
        bump = vault.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        require!(
            self.authority.lamports() >= amount,
            LedgerError::InsufficientFunds
        );
        self.vault.credit(amount)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.authority.to_account_info(),
                    to: self.vault.to_account_info(),
                },
            ),
            amount,
        )?;

        msg!("Deposited {} lamports, vault balance {}", amount, self.vault.balance);
        emit!(Deposited {
            owner: self.authority.key(),
            amount,
            balance: self.vault.balance,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
