// gateway/client.rs
use crate::domain::{Category, ListingDetail, ListingSummary, NewListing, Page};
use crate::gateway::models::RemotePage;
use crate::gateway::{GatewayError, ListingsGateway};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("venue-directory/", env!("CARGO_PKG_VERSION"));

/// Longest service error text carried into a message.
const MAX_MESSAGE_CHARS: usize = 200;

/// Which call a response belongs to; decides how failures are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Detail,
    Create,
}

/// Blocking HTTP client for the listings REST service.
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Transport(format!("unusable base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn execute<T: DeserializeOwned>(
        &self,
        call: Call,
        request: RequestBuilder,
        subject: &str,
    ) -> Result<T, GatewayError> {
        let start = Instant::now();

        let resp = request
            .send()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        debug!(?call, %status, elapsed = ?start.elapsed(), "listings service responded");

        if !status.is_success() {
            return Err(classify_failure(call, status.as_u16(), &text, subject));
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::Server {
            status: status.as_u16(),
            message: format!("unreadable response body: {e}"),
        })
    }
}

impl ListingsGateway for HttpGateway {
    fn fetch_all(
        &self,
        page: u32,
        page_size: u32,
        sort_keys: &[&str],
    ) -> Result<Page<ListingSummary>, GatewayError> {
        let url = self.endpoint(&["listing", "all"])?;

        let mut query = vec![("page", page.to_string()), ("size", page_size.to_string())];
        query.extend(sort_keys.iter().map(|key| ("sort", key.to_string())));

        debug!(page, page_size, ?sort_keys, "fetching all listings");
        let remote: RemotePage<ListingSummary> =
            self.execute(Call::List, self.client.get(url).query(&query), "all")?;
        Ok(remote.into_page())
    }

    fn fetch_by_category(
        &self,
        category: Category,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ListingSummary>, GatewayError> {
        let url = self.endpoint(&["type", category.token()])?;
        let query = [("page", page.to_string()), ("size", page_size.to_string())];

        debug!(category = category.token(), page, page_size, "fetching listings by category");
        let remote: RemotePage<ListingSummary> = self.execute(
            Call::List,
            self.client.get(url).query(&query),
            category.token(),
        )?;
        Ok(remote.into_page())
    }

    fn fetch_by_id(&self, id: &str) -> Result<ListingDetail, GatewayError> {
        let url = self.endpoint(&["listing", id])?;

        debug!(id, "fetching listing detail");
        self.execute(Call::Detail, self.client.get(url), id)
    }

    fn create(&self, listing: &NewListing) -> Result<ListingDetail, GatewayError> {
        let url = self.endpoint(&["create"])?;

        debug!(name = %listing.name, category = listing.category.token(), "submitting listing");
        self.execute(Call::Create, self.client.post(url).json(listing), &listing.name)
    }
}

/// Maps a non-success status to the error the caller should see.
pub(crate) fn classify_failure(call: Call, status: u16, body: &str, subject: &str) -> GatewayError {
    match (call, status) {
        (Call::Detail, 404) => GatewayError::NotFound(subject.to_string()),
        (Call::Create, 400 | 422) => GatewayError::Validation(service_message(body, status)),
        _ => GatewayError::Server {
            status,
            message: service_message(body, status),
        },
    }
}

/// Pulls a readable message out of an error body. Understands Spring's
/// default error JSON and its validation `errors[]` list; anything else is
/// passed through as text.
fn service_message(body: &str, status: u16) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {status}");
    }

    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(errors) = json.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.get("defaultMessage").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return truncate(&messages.join("; "));
            }
        }

        for key in ["message", "error", "detail"] {
            if let Some(msg) = json.get(key).and_then(Value::as_str) {
                if !msg.trim().is_empty() {
                    return truncate(msg.trim());
                }
            }
        }
    }

    truncate(body)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_MESSAGE_CHARS).collect();
        format!("{cut}…")
    }
}
