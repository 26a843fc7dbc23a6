// src/domain/validation.rs

use crate::domain::category::Category;
use crate::domain::listing::NewListing;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Category,
    Phone,
    Latitude,
    Longitude,
    ImageUrl,
    OpeningHours,
    Address,
    Password,
}

impl Field {
    /// Form input name.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Category => "type",
            Field::Phone => "phone",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::ImageUrl => "imageUrl",
            Field::OpeningHours => "openingHours",
            Field::Address => "address",
            Field::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw form input exactly as the browser posted it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub phone: String,
    pub latitude: String,
    pub longitude: String,
    pub image_url: String,
    pub opening_hours: String,
    pub address: String,
    pub password: String,
}

impl SubmissionForm {
    /// Blank form with the default category preselected.
    pub fn blank() -> Self {
        Self {
            category: Category::default().token().to_string(),
            ..Self::default()
        }
    }

    /// Reads `application/x-www-form-urlencoded` pairs. Unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut form.name,
                "description" => &mut form.description,
                "type" => &mut form.category,
                "phone" => &mut form.phone,
                "latitude" => &mut form.latitude,
                "longitude" => &mut form.longitude,
                "imageUrl" => &mut form.image_url,
                "openingHours" => &mut form.opening_hours,
                "address" => &mut form.address,
                "password" => &mut form.password,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        form
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Category => &self.category,
            Field::Phone => &self.phone,
            Field::Latitude => &self.latitude,
            Field::Longitude => &self.longitude,
            Field::ImageUrl => &self.image_url,
            Field::OpeningHours => &self.opening_hours,
            Field::Address => &self.address,
            Field::Password => &self.password,
        }
    }

    /// Same input with the password cleared, for re-rendering.
    pub fn without_password(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }

    /// Checks every rule and returns either the payload to send or all
    /// violations in form order.
    pub fn validate(&self) -> Result<NewListing, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = min_chars(
            &mut errors,
            Field::Name,
            &self.name,
            2,
            "Name must be at least 2 characters",
        );
        let category = match self.category.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push(FieldError::new(
                    Field::Category,
                    "Choose a category from the list",
                ));
                None
            }
        };
        let phone = min_chars(
            &mut errors,
            Field::Phone,
            &self.phone,
            9,
            "Phone number must be at least 9 characters",
        );
        let opening_hours = min_chars(
            &mut errors,
            Field::OpeningHours,
            &self.opening_hours,
            2,
            "Enter the opening hours",
        );
        let address = min_chars(
            &mut errors,
            Field::Address,
            &self.address,
            5,
            "Address must be at least 5 characters",
        );

        let image_url = self.image_url.trim();
        if Url::parse(image_url).is_err() {
            errors.push(FieldError::new(Field::ImageUrl, "Enter a valid image URL"));
        }

        let latitude = coordinate(&mut errors, Field::Latitude, &self.latitude);
        let longitude = coordinate(&mut errors, Field::Longitude, &self.longitude);

        if self.password.chars().count() < 6 {
            errors.push(FieldError::new(
                Field::Password,
                "Password must be at least 6 characters",
            ));
        }

        let description = min_chars(
            &mut errors,
            Field::Description,
            &self.description,
            10,
            "Description must be at least 10 characters",
        );

        match category {
            Some(category) if errors.is_empty() => Ok(NewListing {
                name,
                description,
                category,
                phone,
                latitude,
                longitude,
                image_url: image_url.to_string(),
                opening_hours,
                address,
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

fn min_chars(
    errors: &mut Vec<FieldError>,
    field: Field,
    raw: &str,
    min: usize,
    message: &str,
) -> String {
    let value = raw.trim();
    if value.chars().count() < min {
        errors.push(FieldError::new(field, message));
    }
    value.to_string()
}

fn coordinate(errors: &mut Vec<FieldError>, field: Field, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            errors.push(FieldError::new(field, "Must be a number"));
            None
        }
    }
}
