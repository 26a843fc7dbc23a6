use crate::paths;
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Gulistan Life";

/// Which navbar entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Browse,
    Create,
    Other,
}

pub fn desktop_layout(title: &str, active: Nav, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (SITE_NAME) }
                link rel="stylesheet" href=(paths::STYLESHEET);
            }
            body {
                header {
                    a class="brand" href=(paths::HOME) {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        div {
                            strong { (SITE_NAME) }
                            small { "Local places directory" }
                        }
                    }
                    nav {
                        ul {
                            li { a href=(paths::HOME) class=[active_class(active, Nav::Browse)] { span class="label" { "Home" } } }
                            li { a href=(paths::CREATE) class=[active_class(active, Nav::Create)] { "+ " span class="label" { "Add a place" } } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

fn active_class(active: Nav, item: Nav) -> Option<&'static str> {
    (active == item).then_some("active")
}
