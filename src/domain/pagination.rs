// src/domain/pagination.rs

/// How many page buttons fit before the window starts collapsing.
pub const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    /// Rendered as an ellipsis.
    Gap,
}

/// Page indices (zero-based) and separators to render for a paginator.
///
/// Short ranges are listed in full. Longer ones always keep the first and
/// last page and show a small neighbourhood around `current_page`.
pub fn compute_window(current_page: u32, total_pages: u32) -> Vec<PageSlot> {
    use PageSlot::{Gap, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return (0..total_pages).map(Page).collect();
    }

    let last = total_pages - 1;

    if current_page < 3 {
        let mut slots: Vec<PageSlot> = (0..4).map(Page).collect();
        slots.push(Gap);
        slots.push(Page(last));
        slots
    } else if current_page > total_pages - 4 {
        let mut slots = vec![Page(0), Gap];
        slots.extend((total_pages - 4..total_pages).map(Page));
        slots
    } else {
        vec![
            Page(0),
            Gap,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Gap,
            Page(last),
        ]
    }
}
