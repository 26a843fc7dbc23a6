pub mod create_listing;
pub mod error;
pub mod listing_detail;
pub mod listings;

pub use create_listing::create_listing_page;
pub use error::error_page;
pub use listing_detail::listing_detail_page;
pub use listings::listings_page;
