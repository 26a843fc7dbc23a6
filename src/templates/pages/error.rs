use crate::paths;
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

/// Full error page for requests the router could not serve.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        Nav::Other,
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href=(paths::HOME) { "← Back to home" } }
            }
        },
    )
}
