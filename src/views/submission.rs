use crate::domain::{Field, FieldError, ListingDetail, SubmissionForm};
use crate::gateway::{GatewayError, ListingsGateway};
use tracing::{info, warn};

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Accepted; carries the record the service echoed back.
    Submitted(ListingDetail),
    /// Blocked locally; nothing was sent.
    Invalid,
    /// Sent, but the service refused it or could not be reached.
    Rejected(GatewayError),
}

/// The "add a listing" form: current input, field messages and a
/// form-level alert.
#[derive(Debug, Clone, Default)]
pub struct SubmissionView {
    form: SubmissionForm,
    errors: Vec<FieldError>,
    alert: Option<String>,
}

impl SubmissionView {
    pub fn blank() -> Self {
        Self {
            form: SubmissionForm::blank(),
            ..Self::default()
        }
    }

    pub fn from_form(form: SubmissionForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Validates, then makes the single create call if the input is clean.
    /// On any failure the password is dropped from the kept input.
    pub fn submit(&mut self, gateway: &dyn ListingsGateway) -> SubmitOutcome {
        self.errors.clear();
        self.alert = None;

        let listing = match self.form.validate() {
            Ok(listing) => listing,
            Err(errors) => {
                self.alert = errors.first().map(|e| e.message.clone());
                self.errors = errors;
                self.form = self.form.without_password();
                return SubmitOutcome::Invalid;
            }
        };

        match gateway.create(&listing) {
            Ok(created) => {
                info!(
                    name = %created.name,
                    category = created.category.token(),
                    "listing created"
                );
                self.form = SubmissionForm::blank();
                SubmitOutcome::Submitted(created)
            }
            Err(err) => {
                warn!(error = %err, name = %listing.name, "listing submission failed");
                self.alert = Some(err.user_message());
                self.form = self.form.without_password();
                SubmitOutcome::Rejected(err)
            }
        }
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }
}
