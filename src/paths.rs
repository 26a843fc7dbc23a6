// src/paths.rs
//! Links between the site's own pages.

use crate::domain::Category;

pub const HOME: &str = "/";
pub const CREATE: &str = "/create";
pub const STYLESHEET: &str = "/static/main.css";

/// Notice value the list page understands after a successful submission.
pub const NOTICE_CREATED: &str = "created";

/// Detail page for a listing. Listings are addressed by name, which the
/// service treats as the unique key.
pub fn listing_path(id: &str) -> String {
    format!("/listing/{}", urlencoding::encode(id))
}

/// List page for an optional category filter and zero-based page.
pub fn browse_path(category: Option<Category>, page: u32) -> String {
    let mut params = Vec::new();
    if let Some(category) = category {
        params.push(format!("category={}", category.token()));
    }
    if page > 0 {
        params.push(format!("page={page}"));
    }

    if params.is_empty() {
        HOME.to_string()
    } else {
        format!("{HOME}?{}", params.join("&"))
    }
}

/// Where to land after a successful submission.
pub fn created_notice_path(name: &str) -> String {
    format!(
        "{HOME}?notice={NOTICE_CREATED}&name={}",
        urlencoding::encode(name)
    )
}
