use crate::domain::ListingDetail;
use crate::gateway::{GatewayError, ListingsGateway};
use tracing::warn;

#[derive(Debug, Clone)]
pub enum DetailState {
    Loaded(ListingDetail),
    Failed { message: String, not_found: bool },
}

#[derive(Debug, Clone)]
pub struct DetailView {
    id: String,
    state: DetailState,
}

impl DetailView {
    pub fn load(gateway: &dyn ListingsGateway, id: &str) -> Self {
        let state = match gateway.fetch_by_id(id) {
            Ok(detail) => DetailState::Loaded(detail),
            Err(err) => {
                warn!(error = %err, id, "listing detail fetch failed");
                DetailState::Failed {
                    message: err.user_message(),
                    not_found: matches!(err, GatewayError::NotFound(_)),
                }
            }
        };

        Self {
            id: id.to_string(),
            state,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// HTTP status for the rendered page.
    pub fn status(&self) -> u16 {
        match self.state {
            DetailState::Loaded(_) => 200,
            DetailState::Failed {
                not_found: true, ..
            } => 404,
            DetailState::Failed { .. } => 502,
        }
    }
}
