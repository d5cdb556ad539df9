use anchor_lang::prelude::*;

// Error codes are assigned in declaration order starting at 6000.
// Clients branch on them, so new variants go at the end.
#[error_code]
pub enum LedgerError {
    #[msg("Account has already been initialized")]
    AlreadyInitialized, // 6000

    #[msg("Signer is not the recorded owner of this account")]
    Unauthorized, // 6001

    #[msg("Amount exceeds the available vault balance")]
    InsufficientFunds, // 6002

    #[msg("Amount exceeds the recorded staked amount")]
    InsufficientStake, // 6003

    #[msg("The requested spend exceeds the remaining spending limit")]
    SpendingLimitExceeded, // 6004

    #[msg("Merchant name must be non-empty and at most 64 bytes")]
    InvalidName, // 6005

    #[msg("Price quote is older than the configured freshness bound")]
    StaleQuote, // 6006

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6007

    #[msg("Recipient does not match the merchant account owner")]
    MerchantMismatch, // 6008

    #[msg("Price quote account is malformed, unverified or non-positive")]
    InvalidPriceQuote, // 6009

    #[msg("Price quote is for a different feed than the one configured")]
    PriceFeedMismatch, // 6010

    #[msg("Maximum price age must be between 1 and 3600 seconds")]
    InvalidPriceConfig, // 6011
}
