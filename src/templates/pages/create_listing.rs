use crate::domain::{Field, CATEGORY_LABELS};
use crate::paths;
use crate::templates::components::error_alert;
use crate::templates::{desktop_layout, Nav};
use crate::views::SubmissionView;
use maud::{html, Markup};

pub fn create_listing_page(view: &SubmissionView) -> Markup {
    desktop_layout(
        "Add a place",
        Nav::Create,
        html! {
            main class="container narrow" {
                p { a class="btn" href=(paths::HOME) { "← Back to home" } }
                h1 { "Add a new place" }
                p { "Fill in the form below. Fields marked * are required." }

                @if let Some(alert) = view.alert() {
                    (error_alert(alert, None))
                }

                form class="listing-form card card-body" method="post" action=(paths::CREATE) novalidate {
                    (text_field(view, Field::Name, "Name *", "text", None))
                    (category_select(view))
                    (text_field(view, Field::Phone, "Phone *", "tel", None))
                    (text_field(view, Field::OpeningHours, "Opening hours *", "text", Some("09:00 - 18:00")))
                    (text_field(view, Field::Address, "Address *", "text", None))
                    (text_field(view, Field::ImageUrl, "Image URL *", "url", None))
                    (text_field(view, Field::Latitude, "Latitude", "text", Some("40.489700")))
                    (text_field(view, Field::Longitude, "Longitude", "text", Some("68.784200")))
                    (text_field(view, Field::Password, "Password *", "password", None))

                    div class=(field_class(view, Field::Description, true)) {
                        label for=(Field::Description.key()) { "Description *" }
                        textarea id=(Field::Description.key()) name=(Field::Description.key()) {
                            (view.form().value(Field::Description))
                        }
                        (field_error(view, Field::Description))
                    }

                    div class="wide" {
                        button type="submit" class="btn primary" { "Save" }
                    }
                }
            }
        },
    )
}

fn text_field(
    view: &SubmissionView,
    field: Field,
    label: &str,
    input_type: &str,
    placeholder: Option<&str>,
) -> Markup {
    let key = field.key();
    html! {
        div class=(field_class(view, field, false)) {
            label for=(key) { (label) }
            input
                id=(key)
                name=(key)
                type=(input_type)
                value=(view.form().value(field))
                placeholder=[placeholder];
            (field_error(view, field))
        }
    }
}

fn category_select(view: &SubmissionView) -> Markup {
    let key = Field::Category.key();
    let current = view.form().value(Field::Category);
    html! {
        div class=(field_class(view, Field::Category, false)) {
            label for=(key) { "Category *" }
            select id=(key) name=(key) {
                @for (category, label) in CATEGORY_LABELS {
                    option value=(category.token()) selected[current == category.token()] { (label) }
                }
            }
            (field_error(view, Field::Category))
        }
    }
}

fn field_class(view: &SubmissionView, field: Field, wide: bool) -> String {
    let mut class = String::from("field");
    if wide {
        class.push_str(" wide");
    }
    if view.error_for(field).is_some() {
        class.push_str(" invalid");
    }
    class
}

fn field_error(view: &SubmissionView, field: Field) -> Markup {
    html! {
        @if let Some(message) = view.error_for(field) {
            p class="field-error" { (message) }
        }
    }
}
