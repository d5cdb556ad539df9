// Test utilities for the spend vault program

#![allow(dead_code)]

use anchor_lang::Discriminator;
use litesvm::LiteSVM;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use sha2::{Digest, Sha256};
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;
use spend_vault::pda;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(spend_vault::ID.to_bytes());

// Pyth receiver program that owns PriceUpdateV2 accounts
pub const PYTH_RECEIVER_ID: Pubkey = Pubkey::new_from_array(pyth_solana_receiver_sdk::ID.to_bytes());

pub const FEED_ID: [u8; 32] = [0xef; 32];
pub const MAX_PRICE_AGE: u64 = 60;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let digest = Sha256::digest(format!("global:{}", method).as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

// Setup LiteSVM with the spend vault program (built by `anchor build`)
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/spend_vault.so");
    let program_bytes = std::fs::read(path).expect("spend_vault.so missing, run `anchor build` first");
    svm.add_program(PROGRAM_ID, &program_bytes)
        .expect("Program should load");
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map(|a| a.lamports).unwrap_or(0)
}

pub fn rent_exempt(svm: &LiteSVM, space: usize) -> u64 {
    svm.minimum_balance_for_rent_exemption(space)
}

// Send `ix` signed by `signers`; the first signer pays fees
pub fn send(
    svm: &mut LiteSVM,
    ix: Instruction,
    signers: &[&Keypair],
) -> Result<litesvm::types::TransactionMetadata, String> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signers[0].pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx).map_err(|e| format!("{:?}", e.err));
    // identical follow-up transactions get a fresh blockhash
    svm.expire_blockhash();
    result
}

// Send and expect failure, returning the debug-formatted error
pub fn send_expect_err(svm: &mut LiteSVM, ix: Instruction, signers: &[&Keypair]) -> String {
    let result = send(svm, ix, signers);
    assert!(result.is_err(), "Transaction should have failed");
    result.err().unwrap()
}

pub fn assert_custom_error(err: &str, code: u32) {
    assert!(
        err.contains(&format!("Custom({})", code)),
        "expected custom error {}, got {}",
        code,
        err
    );
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

pub fn now(svm: &LiteSVM) -> i64 {
    svm.get_sysvar::<solana_sdk::clock::Clock>().unix_timestamp
}

// ======================== PDAS ========================

// Addresses come from the program's own derivation, converted to SDK keys

fn to_sdk((address, bump): (anchor_lang::prelude::Pubkey, u8)) -> (Pubkey, u8) {
    (Pubkey::new_from_array(address.to_bytes()), bump)
}

fn to_anchor(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

pub fn derive_vault_pda(owner: &Pubkey) -> (Pubkey, u8) {
    to_sdk(pda::vault_address(&to_anchor(owner)))
}

pub fn derive_spending_pda(owner: &Pubkey) -> (Pubkey, u8) {
    to_sdk(pda::spending_address(&to_anchor(owner)))
}

pub fn derive_yield_pda(owner: &Pubkey) -> (Pubkey, u8) {
    to_sdk(pda::yield_address(&to_anchor(owner)))
}

pub fn derive_merchant_pda(owner: &Pubkey) -> (Pubkey, u8) {
    to_sdk(pda::merchant_address(&to_anchor(owner)))
}

pub fn derive_treasury_pda() -> (Pubkey, u8) {
    to_sdk(pda::treasury_address())
}

// ======================== STATE READERS ========================
// Offsets skip the 8-byte account discriminator and the 32-byte authority

fn read_u64(svm: &LiteSVM, address: &Pubkey, offset: usize) -> u64 {
    let account = svm.get_account(address).expect("Account should exist");
    u64::from_le_bytes(account.data[offset..offset + 8].try_into().unwrap())
}

pub fn vault_balance(svm: &LiteSVM, owner: &Pubkey) -> u64 {
    read_u64(svm, &derive_vault_pda(owner).0, 40)
}

pub fn spending_limit(svm: &LiteSVM, owner: &Pubkey) -> u64 {
    read_u64(svm, &derive_spending_pda(owner).0, 40)
}

pub fn amount_spent(svm: &LiteSVM, owner: &Pubkey) -> u64 {
    read_u64(svm, &derive_spending_pda(owner).0, 48)
}

pub fn staked_amount(svm: &LiteSVM, owner: &Pubkey) -> u64 {
    read_u64(svm, &derive_yield_pda(owner).0, 40)
}

pub fn total_staked(svm: &LiteSVM) -> u64 {
    read_u64(svm, &derive_treasury_pda().0, 40)
}

pub fn stakers_count(svm: &LiteSVM) -> u64 {
    read_u64(svm, &derive_treasury_pda().0, 48)
}

pub fn max_price_age(svm: &LiteSVM) -> u64 {
    // authority, total_staked, stakers_count, price_feed_id
    read_u64(svm, &derive_treasury_pda().0, 8 + 32 + 8 + 8 + 32)
}

pub fn merchant_name(svm: &LiteSVM, owner: &Pubkey) -> String {
    let account = svm
        .get_account(&derive_merchant_pda(owner).0)
        .expect("Merchant should exist");
    let len = u32::from_le_bytes(account.data[40..44].try_into().unwrap()) as usize;
    String::from_utf8(account.data[44..44 + len].to_vec()).unwrap()
}

// RiskReport as returned by `liquidate`
#[derive(Debug)]
pub struct RiskReportView {
    pub subject: Pubkey,
    pub staked_amount: u64,
    pub amount_spent: u64,
    pub staked_value_cents: u64,
    pub collateral_ratio_pct: u64,
    pub has_exposure: bool,
    pub below_threshold: bool,
    pub publish_time: i64,
}

// Return data may come back with trailing zero bytes trimmed
fn padded(data: &[u8], len: usize) -> Vec<u8> {
    let mut buf = data.to_vec();
    buf.resize(len.max(data.len()), 0);
    buf
}

pub fn parse_risk_report(data: &[u8]) -> RiskReportView {
    let data = padded(data, 74);
    let u64_at = |o: usize| u64::from_le_bytes(data[o..o + 8].try_into().unwrap());
    RiskReportView {
        subject: Pubkey::new_from_array(data[0..32].try_into().unwrap()),
        staked_amount: u64_at(32),
        amount_spent: u64_at(40),
        staked_value_cents: u64_at(48),
        collateral_ratio_pct: u64_at(56),
        has_exposure: data[64] == 1,
        below_threshold: data[65] == 1,
        publish_time: i64::from_le_bytes(data[66..74].try_into().unwrap()),
    }
}

// PriceReport as returned by `check_price`: (price, exponent, price_cents)
pub fn parse_price_report(data: &[u8]) -> (i64, i32, u64) {
    let data = padded(data, 68);
    let price = i64::from_le_bytes(data[32..40].try_into().unwrap());
    // skip conf
    let exponent = i32::from_le_bytes(data[48..52].try_into().unwrap());
    // skip publish_time
    let price_cents = u64::from_le_bytes(data[60..68].try_into().unwrap());
    (price, exponent, price_cents)
}

// ======================== PRICE FEED ========================

// Write a fully verified PriceUpdateV2 account at a fresh address
pub fn set_price_update(
    svm: &mut LiteSVM,
    feed_id: [u8; 32],
    price: i64,
    exponent: i32,
    publish_time: i64,
) -> Pubkey {
    set_price_account(svm, PYTH_RECEIVER_ID, feed_id, price, exponent, publish_time)
}

pub fn set_price_account(
    svm: &mut LiteSVM,
    owner: Pubkey,
    feed_id: [u8; 32],
    price: i64,
    exponent: i32,
    publish_time: i64,
) -> Pubkey {
    // VerificationLevel::Full
    write_price_account(svm, owner, &[1], feed_id, price, exponent, publish_time)
}

// Receiver-owned update that only passed a partial guardian quorum
pub fn set_partial_price_update(
    svm: &mut LiteSVM,
    feed_id: [u8; 32],
    price: i64,
    exponent: i32,
    publish_time: i64,
) -> Pubkey {
    // VerificationLevel::Partial { num_signatures: 3 }
    write_price_account(svm, PYTH_RECEIVER_ID, &[0, 3], feed_id, price, exponent, publish_time)
}

fn write_price_account(
    svm: &mut LiteSVM,
    owner: Pubkey,
    verification: &[u8],
    feed_id: [u8; 32],
    price: i64,
    exponent: i32,
    publish_time: i64,
) -> Pubkey {
    let mut data = PriceUpdateV2::DISCRIMINATOR.to_vec();
    data.extend_from_slice(Pubkey::new_unique().as_ref()); // write authority
    data.extend_from_slice(verification);
    data.extend_from_slice(&feed_id);
    data.extend_from_slice(&price.to_le_bytes());
    data.extend_from_slice(&10_000u64.to_le_bytes()); // conf
    data.extend_from_slice(&exponent.to_le_bytes());
    data.extend_from_slice(&publish_time.to_le_bytes());
    data.extend_from_slice(&publish_time.to_le_bytes()); // prev_publish_time
    data.extend_from_slice(&price.to_le_bytes()); // ema_price
    data.extend_from_slice(&10_000u64.to_le_bytes()); // ema_conf
    data.extend_from_slice(&1u64.to_le_bytes()); // posted_slot

    let address = Pubkey::new_unique();
    svm.set_account(
        address,
        Account {
            lamports: 1_000_000_000,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        },
    )
    .expect("Price account should be set");
    address
}

// ======================== INSTRUCTION BUILDERS ========================

fn ix(accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

fn with_amount(method: &str, amount: u64) -> Vec<u8> {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data
}

pub fn build_initialize_ix(owner: &Pubkey) -> Instruction {
    let (vault, _) = derive_vault_pda(owner);
    ix(
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        anchor_discriminator("initialize").to_vec(),
    )
}

// `vault_owner` picks the record; `signer` is who claims to own it
pub fn build_deposit_ix(signer: &Pubkey, vault_owner: &Pubkey, amount: u64) -> Instruction {
    let (vault, _) = derive_vault_pda(vault_owner);
    ix(
        vec![
            AccountMeta::new(*signer, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        with_amount("deposit", amount),
    )
}

pub fn build_withdraw_ix(signer: &Pubkey, vault_owner: &Pubkey, amount: u64) -> Instruction {
    let (vault, _) = derive_vault_pda(vault_owner);
    ix(
        vec![
            AccountMeta::new(*signer, true),
            AccountMeta::new(vault, false),
        ],
        with_amount("withdraw", amount),
    )
}

pub fn build_initialize_spending_account_ix(owner: &Pubkey) -> Instruction {
    let (spending, _) = derive_spending_pda(owner);
    ix(
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(spending, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        anchor_discriminator("initialize_spending_account").to_vec(),
    )
}

pub fn build_update_spending_limit_ix(signer: &Pubkey, owner: &Pubkey) -> Instruction {
    let (vault, _) = derive_vault_pda(owner);
    let (spending, _) = derive_spending_pda(owner);
    ix(
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new_readonly(vault, false),
            AccountMeta::new(spending, false),
        ],
        anchor_discriminator("update_spending_limit").to_vec(),
    )
}

pub fn build_authorize_spend_ix(signer: &Pubkey, owner: &Pubkey, amount: u64) -> Instruction {
    let (spending, _) = derive_spending_pda(owner);
    ix(
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new(spending, false),
        ],
        with_amount("authorize_spend", amount),
    )
}

pub fn build_reset_spend_tracker_ix(signer: &Pubkey, owner: &Pubkey) -> Instruction {
    let (spending, _) = derive_spending_pda(owner);
    ix(
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new(spending, false),
        ],
        anchor_discriminator("reset_spend_tracker").to_vec(),
    )
}

pub fn build_initialize_treasury_ix(admin: &Pubkey, feed_id: [u8; 32], max_age: u64) -> Instruction {
    let (treasury, _) = derive_treasury_pda();
    let mut data = anchor_discriminator("initialize_treasury").to_vec();
    data.extend_from_slice(&feed_id);
    data.extend_from_slice(&max_age.to_le_bytes());
    ix(
        vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(treasury, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_update_price_config_ix(signer: &Pubkey, feed_id: [u8; 32], max_age: u64) -> Instruction {
    let (treasury, _) = derive_treasury_pda();
    let mut data = anchor_discriminator("update_price_config").to_vec();
    data.extend_from_slice(&feed_id);
    data.extend_from_slice(&max_age.to_le_bytes());
    ix(
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new(treasury, false),
        ],
        data,
    )
}

pub fn build_initialize_yield_account_ix(owner: &Pubkey) -> Instruction {
    let (yield_account, _) = derive_yield_pda(owner);
    ix(
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(yield_account, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        anchor_discriminator("initialize_yield_account").to_vec(),
    )
}

fn stake_accounts(signer: &Pubkey, owner: &Pubkey) -> Vec<AccountMeta> {
    let (vault, _) = derive_vault_pda(owner);
    let (yield_account, _) = derive_yield_pda(owner);
    let (treasury, _) = derive_treasury_pda();
    vec![
        AccountMeta::new_readonly(*signer, true),
        AccountMeta::new(vault, false),
        AccountMeta::new(yield_account, false),
        AccountMeta::new(treasury, false),
    ]
}

pub fn build_stake_ix(signer: &Pubkey, owner: &Pubkey, amount: u64) -> Instruction {
    ix(stake_accounts(signer, owner), with_amount("stake", amount))
}

pub fn build_unstake_ix(signer: &Pubkey, owner: &Pubkey, amount: u64) -> Instruction {
    ix(stake_accounts(signer, owner), with_amount("unstake", amount))
}

pub fn build_initialize_merchant_account_ix(owner: &Pubkey, name: &str) -> Instruction {
    let (merchant, _) = derive_merchant_pda(owner);

    let mut data = anchor_discriminator("initialize_merchant_account").to_vec();
    // Borsh serialization: len (4 bytes) + string bytes
    data.extend_from_slice(&(name.len() as u32).to_le_bytes());
    data.extend_from_slice(name.as_bytes());

    ix(
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(merchant, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    )
}

pub fn build_process_payment_ix(
    payer: &Pubkey,
    merchant_owner: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Instruction {
    let (spending, _) = derive_spending_pda(payer);
    let (merchant, _) = derive_merchant_pda(merchant_owner);
    ix(
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(spending, false),
            AccountMeta::new_readonly(merchant, false),
            AccountMeta::new(*recipient, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        with_amount("process_payment", amount),
    )
}

pub fn build_check_price_ix(price_update: &Pubkey) -> Instruction {
    let (treasury, _) = derive_treasury_pda();
    ix(
        vec![
            AccountMeta::new_readonly(treasury, false),
            AccountMeta::new_readonly(*price_update, false),
        ],
        anchor_discriminator("check_price").to_vec(),
    )
}

pub fn build_liquidate_ix(subject: &Pubkey, price_update: &Pubkey) -> Instruction {
    let (spending, _) = derive_spending_pda(subject);
    let (yield_account, _) = derive_yield_pda(subject);
    let (treasury, _) = derive_treasury_pda();
    ix(
        vec![
            AccountMeta::new_readonly(*subject, false),
            AccountMeta::new_readonly(spending, false),
            AccountMeta::new_readonly(yield_account, false),
            AccountMeta::new_readonly(treasury, false),
            AccountMeta::new_readonly(*price_update, false),
        ],
        anchor_discriminator("liquidate").to_vec(),
    )
}

// ======================== SETUP HELPERS ========================

// Vault + spending + yield records for `owner`
pub fn onboard(svm: &mut LiteSVM, owner: &Keypair) {
    for ix in [
        build_initialize_ix(&owner.pubkey()),
        build_initialize_spending_account_ix(&owner.pubkey()),
        build_initialize_yield_account_ix(&owner.pubkey()),
    ] {
        send(svm, ix, &[owner]).expect("Onboarding should succeed");
    }
}

pub fn init_treasury(svm: &mut LiteSVM, admin: &Keypair) {
    send(
        svm,
        build_initialize_treasury_ix(&admin.pubkey(), FEED_ID, MAX_PRICE_AGE),
        &[admin],
    )
    .expect("Treasury init should succeed");
}
