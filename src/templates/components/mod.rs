pub mod alert;
pub mod card;
pub mod filter;
pub mod paginator;

pub use alert::{error_alert, success_notice};
pub use card::listing_card;
pub use filter::category_filter;
pub use paginator::paginator;
