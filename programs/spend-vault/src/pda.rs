//! Record addresses.
//!
//! Every record lives at a program-derived address built from a namespace
//! seed and, for per-owner records, the owner key. These functions are the
//! off-chain mirror of the `seeds = [...]` constraints on the instruction
//! contexts.

use anchor_lang::prelude::*;

use crate::constants::*;

pub fn vault_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref()], &crate::ID)
}

pub fn spending_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SPENDING_SEED, owner.as_ref()], &crate::ID)
}

pub fn yield_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[YIELD_SEED, owner.as_ref()], &crate::ID)
}

pub fn merchant_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MERCHANT_SEED, owner.as_ref()], &crate::ID)
}

pub fn treasury_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED], &crate::ID)
}
