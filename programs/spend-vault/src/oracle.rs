// Price Oracle
//
// Quotes come from Pyth `PriceUpdateV2` accounts. The receiver SDK checks
// owner, layout, verification level, feed id and age; this module adds the
// sign check and converts prices to cents.

use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::{
    error::GetPriceError,
    price_update::{Price, PriceUpdateV2},
};

use crate::{constants::*, errors::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceQuote {
    pub feed_id: [u8; 32],
    pub price: i64,
    pub conf: u64,
    pub exponent: i32,
    pub publish_time: i64,
}

impl PriceQuote {
    pub fn from_price(feed_id: [u8; 32], price: Price) -> Result<Self> {
        require!(price.price > 0, LedgerError::InvalidPriceQuote);
        Ok(Self {
            feed_id,
            price: price.price,
            conf: price.conf,
            exponent: price.exponent,
            publish_time: price.publish_time,
        })
    }

    // Value of `lamports` in cents at this quote, rounded toward zero
    pub fn value_cents(&self, lamports: u64) -> Result<u64> {
        let scale = self.exponent + CENTS_DECIMALS - LAMPORTS_DECIMALS as i32;
        let raw = (lamports as u128)
            .checked_mul(self.price as u128)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?;
        scale_by_pow10(raw, scale)
    }

    // One whole unit (1 SOL) in cents
    pub fn price_cents(&self) -> Result<u64> {
        scale_by_pow10(self.price as u128, self.exponent + CENTS_DECIMALS)
    }
}

fn scale_by_pow10(value: u128, scale: i32) -> Result<u64> {
    let scaled = match 10u128.checked_pow(scale.unsigned_abs()) {
        Some(factor) if scale >= 0 => value
            .checked_mul(factor)
            .ok_or(error!(LedgerError::ArithmeticOverflow))?,
        Some(factor) => value / factor,
        // any u128 divided by a power of ten past u128::MAX is zero
        None if scale < 0 => 0,
        None => return err!(LedgerError::ArithmeticOverflow),
    };
    u64::try_from(scaled).map_err(|_| error!(LedgerError::ArithmeticOverflow))
}

pub fn quote_error(err: GetPriceError) -> Error {
    match err {
        GetPriceError::PriceTooOld => error!(LedgerError::StaleQuote),
        GetPriceError::MismatchedFeedId => error!(LedgerError::PriceFeedMismatch),
        _ => error!(LedgerError::InvalidPriceQuote),
    }
}

// Fully verified, matching feed, no older than `max_age` seconds, positive
pub fn read_price_quote(
    price_update: &PriceUpdateV2,
    feed_id: &[u8; 32],
    max_age: u64,
    clock: &Clock,
) -> Result<PriceQuote> {
    let price = price_update
        .get_price_no_older_than(clock, max_age, feed_id)
        .map_err(quote_error)?;
    PriceQuote::from_price(*feed_id, price)
}
