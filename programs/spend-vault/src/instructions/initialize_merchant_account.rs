use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Initialize Merchant Account Instruction
//
// Registers the signer as a payee under a display name.
// Onboarding is open: any wallet may register itself once.

#[derive(Accounts)]
pub struct InitializeMerchantAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + MerchantAccount::INIT_SPACE,
        seeds = [MERCHANT_SEED, owner.key().as_ref()],
        bump
    )]
    pub merchant_account: Account<'info, MerchantAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeMerchantAccount<'info> {
    pub fn initialize_merchant_account(
        &mut self,
        name: String,
        bumps: &InitializeMerchantAccountBumps,
    ) -> Result<()> {
        require!(
            !self.merchant_account.is_initialized(),
            LedgerError::AlreadyInitialized
        );
        MerchantAccount::validate_name(&name)?;

        self.merchant_account.set_inner(MerchantAccount {
            authority: self.owner.key(),
            name: name.clone(),
            bump: bumps.merchant_account,
        });

        msg!("Merchant {} registered by {}", name, self.owner.key());
        emit!(MerchantRegistered {
            merchant: self.merchant_account.key(),
            owner: self.owner.key(),
            name,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
