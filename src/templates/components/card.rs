use crate::domain::ListingSummary;
use crate::paths;
use maud::{html, Markup};

/// One venue in the list grid; the whole card links to its detail page.
pub fn listing_card(listing: &ListingSummary) -> Markup {
    html! {
        article class="card" {
            a href=(paths::listing_path(&listing.name)) {
                div class="image" {
                    img src=(listing.image_url) alt=(listing.name) loading="lazy";
                    span class="badge" { (listing.category.label()) }
                }
                div class="card-body" {
                    h2 { (listing.name) }
                    ul class="facts" {
                        li { "☎ " (listing.phone) }
                        li { "🕑 " (listing.opening_hours) }
                        li { "📍 " (listing.address) }
                    }
                }
            }
        }
    }
}
