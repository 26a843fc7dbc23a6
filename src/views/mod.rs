//! Per-request view state. A view owns everything one page shows, talks to
//! the gateway at most once per action, and absorbs gateway failures into
//! its own error state.

pub mod browser;
pub mod detail;
pub mod submission;

pub use browser::BrowserView;
pub use detail::{DetailState, DetailView};
pub use submission::{SubmissionView, SubmitOutcome};
