pub mod initialize_vault;
pub mod deposit;
pub mod withdraw;
pub mod initialize_spending_account;
pub mod update_spending_limit;
pub mod authorize_spend;
pub mod reset_spend_tracker;
pub mod initialize_treasury;
pub mod update_price_config;
pub mod initialize_yield_account;
pub mod stake;
pub mod unstake;
pub mod initialize_merchant_account;
pub mod process_payment;
pub mod check_price;
pub mod liquidate;

pub use initialize_vault::*;
pub use deposit::*;
pub use withdraw::*;
pub use initialize_spending_account::*;
pub use update_spending_limit::*;
pub use authorize_spend::*;
pub use reset_spend_tracker::*;
pub use initialize_treasury::*;
pub use update_price_config::*;
pub use initialize_yield_account::*;
pub use stake::*;
pub use unstake::*;
pub use initialize_merchant_account::*;
pub use process_payment::*;
pub use check_price::*;
pub use liquidate::*;
