pub mod assets;
pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use assets::{stylesheet_response, text_response};
pub use errors::html_error_response;
pub use html::{html_response, html_response_with_status};
pub use redirect::see_other;
