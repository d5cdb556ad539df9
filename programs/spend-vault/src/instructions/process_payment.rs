use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{constants::*, errors::*, events::*, state::*};

// Process Payment Instruction
//
// Settles a payment from the payer's wallet to a registered merchant's
// wallet. The vault is not touched: the allowance derived from vault
// collateral only gates the spend.

#[derive(Accounts)]
pub struct ProcessPayment<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SPENDING_SEED, spending_account.authority.as_ref()],
        bump = spending_account.bump,
        has_one = authority @ LedgerError::Unauthorized,
    )]
    pub spending_account: Account<'info, SpendingAccount>,

    #[account(
        seeds = [MERCHANT_SEED, merchant_account.authority.as_ref()],
        bump = merchant_account.bump,
    )]
    pub merchant_account: Account<'info, MerchantAccount>,

    /// CHECK: must be the wallet the merchant registered with
    #[account(
        mut,
        address = merchant_account.authority @ LedgerError::MerchantMismatch,
    )]
    pub merchant_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProcessPayment<'info> {
    pub fn process_payment(&mut self, amount: u64) -> Result<()> {
        let amount_spent = self.spending_account.spent_after(amount)?;

        if amount > 0 {
            require!(
                self.authority.lamports() >= amount,
                LedgerError::InsufficientFunds
            );

            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.authority.to_account_info(),
                        to: self.merchant_authority.to_account_info(),
                    },
                ),
                amount,
            )?;
        }

        self.spending_account.amount_spent = amount_spent;

        msg!(
            "Paid {} lamports to merchant {} ({} of {} used)",
            amount,
            self.merchant_account.name,
            amount_spent,
            self.spending_account.spending_limit
        );
        emit!(PaymentProcessed {
            payer: self.authority.key(),
            merchant: self.merchant_account.key(),
            recipient: self.merchant_authority.key(),
            amount,
            amount_spent,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
