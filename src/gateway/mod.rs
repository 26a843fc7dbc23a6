mod client;
mod gateway_error;
pub mod models;

pub use client::HttpGateway;
pub use gateway_error::GatewayError;

use crate::domain::{Category, ListingDetail, ListingSummary, NewListing, Page};

/// Default ordering for the unfiltered listing.
pub const DEFAULT_SORT: &[&str] = &["name"];

/// Every call the views make to the listings service goes through here.
pub trait ListingsGateway: Send + Sync {
    fn fetch_all(
        &self,
        page: u32,
        page_size: u32,
        sort_keys: &[&str],
    ) -> Result<Page<ListingSummary>, GatewayError>;

    fn fetch_by_category(
        &self,
        category: Category,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ListingSummary>, GatewayError>;

    fn fetch_by_id(&self, id: &str) -> Result<ListingDetail, GatewayError>;

    /// Returns the record as the service stored it.
    fn create(&self, listing: &NewListing) -> Result<ListingDetail, GatewayError>;
}
