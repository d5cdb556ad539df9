use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Initialize Vault Instruction
//
// Creates the caller's custody record at ["vault", owner] with a zero balance.
// init_if_needed + the claimed check turns a repeat call into
// AlreadyInitialized instead of a system program error.

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVault<'info> {
    pub fn initialize_vault(&mut self, bumps: &InitializeVaultBumps) -> Result<()> {
        require!(!self.vault.is_initialized(), LedgerError::AlreadyInitialized);

        self.vault.set_inner(Vault {
            authority: self.owner.key(),
            balance: 0,
            bump: bumps.vault,
        });

        msg!("Vault initialized for {}", self.owner.key());
        emit!(VaultInitialized {
            owner: self.owner.key(),
            vault: self.vault.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
