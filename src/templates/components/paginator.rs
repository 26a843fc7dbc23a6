use crate::domain::{compute_window, Category, PageDescriptor, PageSlot};
use crate::paths;
use maud::{html, Markup};

/// Prev / numbered pages / next. Numbers are shown one-based.
pub fn paginator(category: Option<Category>, page: &PageDescriptor) -> Markup {
    let current = page.number();
    let prev = current.saturating_sub(1);
    let next = current + 1;

    html! {
        nav class="paginator" aria-label="Pages" {
            @if page.is_first() {
                span class="btn" aria-disabled="true" { "‹" }
            } @else {
                a class="btn" rel="prev" href=(paths::browse_path(category, prev)) { "‹" }
            }

            @for slot in compute_window(current, page.total_pages()) {
                @match slot {
                    PageSlot::Page(n) if n == current => {
                        span class="btn selected" aria-current="page" { (n + 1) }
                    }
                    PageSlot::Page(n) => {
                        a class="btn" href=(paths::browse_path(category, n)) { (n + 1) }
                    }
                    PageSlot::Gap => {
                        span class="gap" { "…" }
                    }
                }
            }

            @if page.is_last() {
                span class="btn" aria-disabled="true" { "›" }
            } @else {
                a class="btn" rel="next" href=(paths::browse_path(category, next)) { "›" }
            }
        }
    }
}
