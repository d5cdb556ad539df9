pub mod vault;
pub mod spending_account;
pub mod yield_account;
pub mod treasury;
pub mod merchant_account;
pub mod risk_report;

pub use vault::*;
pub use spending_account::*;
pub use yield_account::*;
pub use treasury::*;
pub use merchant_account::*;
pub use risk_report::*;
