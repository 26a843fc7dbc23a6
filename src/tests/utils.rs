use crate::domain::{Category, ListingDetail, ListingSummary, NewListing, Page, PageDescriptor};
use crate::gateway::{GatewayError, ListingsGateway};
use crate::router::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    All {
        page: u32,
        size: u32,
        sort: Vec<String>,
    },
    ByCategory {
        category: Category,
        page: u32,
        size: u32,
    },
    ById(String),
    Create(NewListing),
}

/// In-memory stand-in for the listings service. Pages are cut from
/// `listings` the way the service would cut them.
#[derive(Default)]
pub struct FakeGateway {
    listings: Vec<ListingSummary>,
    details: HashMap<String, ListingDetail>,
    fail_all: Option<GatewayError>,
    fail_create: Option<GatewayError>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listings(mut self, listings: Vec<ListingSummary>) -> Self {
        self.listings = listings;
        self
    }

    pub fn with_detail(mut self, detail: ListingDetail) -> Self {
        self.details.insert(detail.name.clone(), detail);
        self
    }

    /// Every call fails with `err`.
    pub fn failing(mut self, err: GatewayError) -> Self {
        self.fail_all = Some(err);
        self
    }

    pub fn rejecting_create(mut self, err: GatewayError) -> Self {
        self.fail_create = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_all {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn page_of(
        &self,
        matching: Vec<ListingSummary>,
        page: u32,
        size: u32,
    ) -> Page<ListingSummary> {
        let total = matching.len() as u32;
        let total_pages = total.div_ceil(size);
        let items: Vec<ListingSummary> = matching
            .into_iter()
            .skip((page * size) as usize)
            .take(size as usize)
            .collect();
        let len = items.len() as u32;

        Page {
            descriptor: PageDescriptor::new(page, total_pages, u64::from(total), size, len),
            items,
        }
    }
}

impl ListingsGateway for FakeGateway {
    fn fetch_all(
        &self,
        page: u32,
        page_size: u32,
        sort_keys: &[&str],
    ) -> Result<Page<ListingSummary>, GatewayError> {
        self.record(Call::All {
            page,
            size: page_size,
            sort: sort_keys.iter().map(|s| s.to_string()).collect(),
        })?;
        let mut all = self.listings.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(self.page_of(all, page, page_size))
    }

    fn fetch_by_category(
        &self,
        category: Category,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ListingSummary>, GatewayError> {
        self.record(Call::ByCategory {
            category,
            page,
            size: page_size,
        })?;
        let matching = self
            .listings
            .iter()
            .filter(|l| l.category == category)
            .cloned()
            .collect();
        Ok(self.page_of(matching, page, page_size))
    }

    fn fetch_by_id(&self, id: &str) -> Result<ListingDetail, GatewayError> {
        self.record(Call::ById(id.to_string()))?;
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    fn create(&self, listing: &NewListing) -> Result<ListingDetail, GatewayError> {
        self.record(Call::Create(listing.clone()))?;
        if let Some(err) = &self.fail_create {
            return Err(err.clone());
        }
        Ok(ListingDetail {
            name: listing.name.clone(),
            category: listing.category,
            phone: listing.phone.clone(),
            image_url: listing.image_url.clone(),
            opening_hours: listing.opening_hours.clone(),
            address: listing.address.clone(),
            description: listing.description.clone(),
            latitude: listing.latitude,
            longitude: listing.longitude,
        })
    }
}

pub fn summary(name: &str, category: Category) -> ListingSummary {
    ListingSummary {
        name: name.to_string(),
        category,
        phone: "+998 67 225 00 00".to_string(),
        image_url: format!("https://img.example/{}.jpg", name.to_lowercase()),
        opening_hours: "09:00 - 21:00".to_string(),
        address: "Gulistan, Birlik ko'chasi".to_string(),
    }
}

pub fn detail(name: &str, category: Category) -> ListingDetail {
    let s = summary(name, category);
    ListingDetail {
        name: s.name,
        category: s.category,
        phone: s.phone,
        image_url: s.image_url,
        opening_hours: s.opening_hours,
        address: s.address,
        description: "Shahar markazidagi qulay joy.".to_string(),
        latitude: Some(40.4897),
        longitude: Some(68.7842),
    }
}

/// `n` listings named `Place 01`, `Place 02`, … alternating between
/// restaurants (odd) and cafés (even).
pub fn numbered_listings(n: usize) -> Vec<ListingSummary> {
    (1..=n)
        .map(|i| {
            let category = if i % 2 == 0 {
                Category::Kafe
            } else {
                Category::Restoran
            };
            summary(&format!("Place {i:02}"), category)
        })
        .collect()
}

pub fn app_with(gateway: FakeGateway) -> (AppState, Arc<FakeGateway>) {
    let gateway = Arc::new(gateway);
    let state = AppState {
        gateway: gateway.clone(),
        page_size: 10,
    };
    (state, gateway)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
