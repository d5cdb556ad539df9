// Spend Vault Helper Functions
//
// Lamport movement between program-owned records and the stake/unstake
// transition math shared by the staking instructions.

use anchor_lang::prelude::*;

use crate::{errors::*, state::*};

// LAMPORT MOVEMENT

// Move lamports out of a program-owned account
// `from` must be owned by this program; `to` can be any writable account
pub fn move_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_lamports = from
        .lamports()
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientFunds)?;
    let to_lamports = to
        .lamports()
        .checked_add(amount)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_lamports;
    **to.try_borrow_mut_lamports()? = to_lamports;

    Ok(())
}

// STAKE TRANSITIONS

// Next state of the three records a stake/unstake touches
//
// Built from read-only borrows so every precondition is checked before
// anything is written; `apply` then writes all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeTransition {
    pub vault_balance: u64,
    pub staked_amount: u64,
    pub total_staked: u64,
    pub stakers_count: u64,
}

impl StakeTransition {
    // Vault -> pool
    pub fn stake(
        vault: &Vault,
        position: &YieldAccount,
        treasury: &Treasury,
        amount: u64,
    ) -> Result<Self> {
        let vault_balance = vault.balance_after_debit(amount)?;

        let staked_amount = position
            .staked_amount
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let total_staked = treasury
            .total_staked
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let stakers_count = if !position.has_stake() && staked_amount > 0 {
            treasury
                .stakers_count
                .checked_add(1)
                .ok_or(LedgerError::ArithmeticOverflow)?
        } else {
            treasury.stakers_count
        };

        Ok(Self { vault_balance, staked_amount, total_staked, stakers_count })
    }

    // Pool -> vault
    pub fn unstake(
        vault: &Vault,
        position: &YieldAccount,
        treasury: &Treasury,
        amount: u64,
    ) -> Result<Self> {
        require!(amount <= position.staked_amount, LedgerError::InsufficientStake);
        let staked_amount = position.staked_amount - amount;

        // The pool always holds at least this owner's stake
        let total_staked = treasury
            .total_staked
            .checked_sub(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        let vault_balance = vault.balance_after_credit(amount)?;

        let stakers_count = if position.has_stake() && staked_amount == 0 {
            treasury
                .stakers_count
                .checked_sub(1)
                .ok_or(LedgerError::ArithmeticOverflow)?
        } else {
            treasury.stakers_count
        };

        Ok(Self { vault_balance, staked_amount, total_staked, stakers_count })
    }

    pub fn apply(&self, vault: &mut Vault, position: &mut YieldAccount, treasury: &mut Treasury) {
        vault.balance = self.vault_balance;
        position.staked_amount = self.staked_amount;
        treasury.total_staked = self.total_staked;
        treasury.stakers_count = self.stakers_count;
    }
}
