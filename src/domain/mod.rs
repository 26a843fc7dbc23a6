pub mod category;
pub mod listing;
pub mod page;
pub mod pagination;
pub mod validation;

pub use category::{Category, CATEGORY_LABELS};
pub use listing::{ListingDetail, ListingSummary, NewListing};
pub use page::{Page, PageDescriptor};
pub use pagination::{compute_window, PageSlot};
pub use validation::{Field, FieldError, SubmissionForm};
