use maud::{html, Markup};

pub fn error_alert(message: &str, retry_href: Option<&str>) -> Markup {
    html! {
        div class="alert error" role="alert" {
            span { (message) }
            @if let Some(href) = retry_href {
                a class="btn" href=(href) { "Try again" }
            }
        }
    }
}

pub fn success_notice(message: &str) -> Markup {
    html! {
        div class="alert success" role="status" {
            span { (message) }
        }
    }
}
