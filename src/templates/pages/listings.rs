use crate::templates::components::{
    category_filter, error_alert, listing_card, paginator, success_notice,
};
use crate::templates::layouts::desktop::SITE_NAME;
use crate::templates::{desktop_layout, Nav};
use crate::views::BrowserView;
use maud::{html, Markup};

pub fn listings_page(view: &BrowserView) -> Markup {
    let title = match view.category() {
        Some(category) => category.label(),
        None => "All places",
    };

    desktop_layout(
        title,
        Nav::Browse,
        html! {
            main class="container" {
                section class="hero" {
                    h1 { (SITE_NAME) }
                    p { "The best places in Gulistan" }
                }

                @if let Some(notice) = view.notice() {
                    (success_notice(notice))
                }

                (category_filter(view.category()))

                @if let Some(error) = view.error() {
                    (error_alert(error, Some(&view.retry_path())))
                } @else if view.listings().is_empty() {
                    p class="empty" { "Nothing found." }
                } @else {
                    @if let Some((first, last)) = view.descriptor().item_range() {
                        p class="count" {
                            "Showing " (first) "–" (last)
                            " of " (view.descriptor().total_elements()) " places"
                        }
                    }
                    div class="grid" {
                        @for listing in view.listings() {
                            (listing_card(listing))
                        }
                    }
                    @if view.shows_paginator() {
                        (paginator(view.category(), view.descriptor()))
                    }
                }
            }
        },
    )
}
