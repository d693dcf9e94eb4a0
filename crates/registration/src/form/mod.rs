//! Registration form controller.
//!
//! [`RegistrationForm`] owns the [`CustomerDraft`] under edit and drives
//! the two remote interactions of the workflow: CEP lookup per address
//! row and submission of the whole draft. It performs no I/O itself -
//! both operations borrow the service client to use.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut form = RegistrationForm::new();
//! form.draft_mut().name.set("Maria Oliveira");
//!
//! match form.lookup_postal_code(0, &viacep).await {
//!     LookupOutcome::Filled => {}
//!     outcome => {
//!         if let Some(notice) = outcome.notice() {
//!             show(notice);
//!         }
//!     }
//! }
//! ```

mod draft;
mod validate;

pub use draft::{AddressDraft, CustomerDraft, Field, LookupStatus};
pub use validate::{
    FieldError, NAME_MAX_CHARS, NAME_MIN_CHARS, validate_birth_date, validate_cep, validate_cpf,
    validate_email, validate_name, validate_required, validate_uf,
};

use cadastro_core::{Cep, CustomerRecord, CustomerRequest};

use crate::services::customers::{CustomerApiError, CustomerClient};
use crate::services::viacep::{CepLookup, ViaCepClient, ViaCepError};

/// Result of one CEP lookup attempt on an address row.
#[derive(Debug)]
pub enum LookupOutcome {
    /// Address fields were filled from the lookup result.
    Filled,
    /// Precondition failed: the row's CEP is not 8 digits, or is still
    /// flagged from a previous not-found lookup. The field was marked
    /// touched; nothing else changed and no request went out.
    InvalidPostalCode,
    /// No address row at that index.
    NoSuchRow,
    /// The service does not know this CEP. The row's auto-filled fields
    /// were cleared and its CEP field flagged until edited.
    NotFound,
    /// Transport failure. The row was left unchanged.
    Failed(ViaCepError),
}

impl LookupOutcome {
    /// The user-facing notice for this outcome, if it warrants one.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::NotFound => {
                Some("CEP nao encontrado. Por favor, verifique o numero digitado.")
            }
            Self::Failed(_) => Some("Ocorreu um erro ao consultar o CEP. Tente novamente."),
            Self::Filled | Self::InvalidPostalCode | Self::NoSuchRow => None,
        }
    }
}

/// Result of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The draft is invalid; every field was marked touched and no request
    /// went out.
    Invalid,
    /// The customer was created and the form reset to a fresh draft.
    Created(CustomerRecord),
    /// The API call failed. Field values and touched flags are preserved
    /// so the user can retry without re-entering data.
    Failed(CustomerApiError),
}

impl SubmitOutcome {
    /// The user-facing notice for this outcome, if it warrants one.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Created(_) => Some("Cliente criado com sucesso!"),
            Self::Failed(_) => Some("Nao foi possivel salvar o cliente. Tente novamente."),
            Self::Invalid => None,
        }
    }
}

/// The registration form: draft state plus submission flags.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    draft: CustomerDraft,
    submitted: bool,
    is_submitting: bool,
}

impl RegistrationForm {
    /// A fresh form: empty draft, one empty address row, nothing touched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft under edit.
    #[must_use]
    pub const fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    /// Mutable access to the draft for field edits.
    pub const fn draft_mut(&mut self) -> &mut CustomerDraft {
        &mut self.draft
    }

    /// Whether a submission has been attempted since the last reset.
    #[must_use]
    pub const fn submitted(&self) -> bool {
        self.submitted
    }

    /// Whether a submission call is currently in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Append one empty address row.
    pub fn add_address(&mut self) {
        self.draft.add_address();
    }

    /// Remove the address row at `index`; no-op at one remaining row.
    pub fn remove_address(&mut self, index: usize) {
        self.draft.remove_address(index);
    }

    /// Look up the CEP of the address row at `index` and auto-fill the
    /// row from the result.
    ///
    /// Repeated lookups on the same row are not deduplicated or
    /// cancelled; the last completion wins. Lookups on different rows are
    /// independent.
    pub async fn lookup_postal_code(
        &mut self,
        index: usize,
        viacep: &ViaCepClient,
    ) -> LookupOutcome {
        let Some(row) = self.draft.address_mut(index) else {
            return LookupOutcome::NoSuchRow;
        };

        let Ok(cep) = Cep::parse(row.postal_code.value()) else {
            row.postal_code.touch();
            return LookupOutcome::InvalidPostalCode;
        };

        // A "not found" flag blocks further lookups like any other invalid
        // CEP; editing the field clears it and re-enables the lookup.
        if row.postal_code.marked_error().is_some() {
            row.postal_code.touch();
            return LookupOutcome::InvalidPostalCode;
        }

        row.set_lookup_status(LookupStatus::Loading);

        // Loading never outlives this call: every arm below replaces it.
        match viacep.lookup(&cep).await {
            Ok(CepLookup::Found(address)) => {
                row.street.set(address.street);
                row.neighborhood.set(address.neighborhood);
                row.city.set(address.city);
                row.state_code.set(address.state_code.to_uppercase());
                row.set_lookup_status(LookupStatus::Idle);
                LookupOutcome::Filled
            }
            Ok(CepLookup::NotFound) => {
                row.clear_looked_up_fields();
                row.postal_code.mark_invalid(FieldError::CepNotFound);
                row.set_lookup_status(LookupStatus::Idle);
                tracing::warn!(cep = %cep, row = index, "CEP not found");
                LookupOutcome::NotFound
            }
            Err(err) => {
                row.set_lookup_status(LookupStatus::Failed);
                tracing::error!(error = %err, cep = %cep, row = index, "CEP lookup failed");
                LookupOutcome::Failed(err)
            }
        }
    }

    /// Validate the whole draft and, when valid, create the customer.
    ///
    /// Marks every field touched regardless of validity, so all
    /// validation messages become visible. On success the form resets to
    /// a fresh draft; on failure everything is preserved for a retry.
    pub async fn submit(&mut self, customers: &CustomerClient) -> SubmitOutcome {
        self.submitted = true;
        self.draft.touch_all();

        if !self.draft.is_valid() {
            tracing::warn!("registration draft invalid; submission aborted");
            return SubmitOutcome::Invalid;
        }

        let request = self.build_request();

        self.is_submitting = true;
        let result = customers.create(&request).await;
        self.is_submitting = false;

        match result {
            Ok(record) => {
                tracing::info!(id = %record.id, "customer created");
                self.reset();
                SubmitOutcome::Created(record)
            }
            Err(err) => {
                tracing::error!(error = %err, "customer creation failed");
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Serialize the draft into the outbound request shape.
    fn build_request(&self) -> CustomerRequest {
        self.draft.to_request()
    }

    /// Discard the draft and start over with a fresh one.
    pub fn reset(&mut self) {
        self.draft = CustomerDraft::new();
        self.submitted = false;
    }
}
