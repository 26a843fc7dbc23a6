use crate::domain::ListingDetail;
use crate::paths;
use crate::templates::components::error_alert;
use crate::templates::{desktop_layout, Nav};
use crate::views::{DetailState, DetailView};
use maud::{html, Markup};

pub fn listing_detail_page(view: &DetailView) -> Markup {
    match view.state() {
        DetailState::Loaded(detail) => loaded(detail),
        DetailState::Failed { message, .. } => desktop_layout(
            "Listing unavailable",
            Nav::Other,
            html! {
                main class="container narrow" {
                    (error_alert(message, Some(&paths::listing_path(view.id()))))
                    p { a href=(paths::HOME) { "← Back to all places" } }
                }
            },
        ),
    }
}

fn loaded(detail: &ListingDetail) -> Markup {
    desktop_layout(
        &detail.name,
        Nav::Other,
        html! {
            main class="container narrow detail" {
                p { a class="btn" href=(paths::HOME) { "← Back" } }

                article class="card" {
                    div class="image" {
                        img src=(detail.image_url) alt=(detail.name);
                        span class="badge" { (detail.category.label()) }
                    }
                    div class="card-body" {
                        h1 { (detail.name) }
                        ul class="facts" {
                            li { "☎ " a href=(format!("tel:{}", detail.phone)) { (detail.phone) } }
                            li { "🕑 " (detail.opening_hours) }
                            li { "📍 " (detail.address) }
                        }

                        @if !detail.description.trim().is_empty() {
                            h2 { "Description" }
                            p class="description" { (detail.description) }
                        }

                        @if let Some((lat, lon)) = detail.location() {
                            h2 { "Location" }
                            iframe
                                class="map"
                                title="Map"
                                loading="lazy"
                                src=(map_embed_url(lat, lon)) {}
                        }
                    }
                }
            }
        },
    )
}

/// OpenStreetMap embed centred on one point with a marker.
fn map_embed_url(lat: f64, lon: f64) -> String {
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={lon},{lat},{lon},{lat}&layer=mapnik&marker={lat},{lon}"
    )
}
