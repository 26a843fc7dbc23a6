use crate::domain::{Category, CATEGORY_LABELS};
use crate::paths;
use maud::{html, Markup};

/// "All" plus one button per category. Choosing a filter starts from page 0.
pub fn category_filter(selected: Option<Category>) -> Markup {
    html! {
        nav class="filter" aria-label="Categories" {
            a class=(button_class(selected.is_none())) href=(paths::browse_path(None, 0)) { "All" }
            @for (category, label) in CATEGORY_LABELS {
                a
                    class=(button_class(selected == Some(*category)))
                    href=(paths::browse_path(Some(*category), 0))
                { (label) }
            }
        }
    }
}

fn button_class(selected: bool) -> &'static str {
    if selected {
        "btn selected"
    } else {
        "btn"
    }
}
