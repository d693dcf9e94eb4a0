//! Draft state: the client-side, not-yet-persisted customer under edit.

use cadastro_core::{AddressRequest, CustomerRequest};

use super::validate::{
    FieldError, validate_birth_date, validate_cep, validate_cpf, validate_email, validate_name,
    validate_required, validate_uf,
};

/// One editable input field: a free-text value plus a touched flag.
///
/// "Touched" controls when validation messages become visible; it never
/// affects validity itself. A field may also carry a marked error left by
/// a failed CEP lookup - any edit clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    value: String,
    touched: bool,
    marked: Option<FieldError>,
}

impl Field {
    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the user has interacted with this field.
    #[must_use]
    pub const fn touched(&self) -> bool {
        self.touched
    }

    /// Replace the value. Clears any marked error.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.marked = None;
    }

    /// Mark the field as touched.
    pub const fn touch(&mut self) {
        self.touched = true;
    }

    /// Attach an error that stays until the next edit.
    pub fn mark_invalid(&mut self, error: FieldError) {
        self.marked = Some(error);
    }

    /// The marked error, if one is attached.
    #[must_use]
    pub const fn marked_error(&self) -> Option<&FieldError> {
        self.marked.as_ref()
    }
}

/// Lookup state of one address row.
///
/// Explicit per row so concurrent lookups on different rows stay
/// independent; there is no shared "which row is loading" index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupStatus {
    /// No lookup in flight.
    #[default]
    Idle,
    /// A lookup for this row is in flight.
    Loading,
    /// The last lookup for this row failed in transport.
    Failed,
}

/// One address row of the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    /// Eight-digit CEP.
    pub postal_code: Field,
    /// Street name (auto-filled by lookup).
    pub street: Field,
    /// Complement - apartment, unit, etc.
    pub complement: Field,
    /// Street number.
    pub number: Field,
    /// Neighborhood (auto-filled by lookup).
    pub neighborhood: Field,
    /// City (auto-filled by lookup).
    pub city: Field,
    /// Two-letter UF (auto-filled by lookup).
    pub state_code: Field,
    lookup: LookupStatus,
}

impl AddressDraft {
    /// An empty address row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup state of this row.
    #[must_use]
    pub const fn lookup_status(&self) -> LookupStatus {
        self.lookup
    }

    pub(crate) const fn set_lookup_status(&mut self, status: LookupStatus) {
        self.lookup = status;
    }

    /// Whether every field of this row is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_cep(&self.postal_code).is_none()
            && validate_required(&self.street).is_none()
            && validate_required(&self.complement).is_none()
            && validate_required(&self.number).is_none()
            && validate_required(&self.neighborhood).is_none()
            && validate_required(&self.city).is_none()
            && validate_uf(&self.state_code).is_none()
    }

    /// Mark every field of this row as touched.
    pub const fn touch_all(&mut self) {
        self.postal_code.touch();
        self.street.touch();
        self.complement.touch();
        self.number.touch();
        self.neighborhood.touch();
        self.city.touch();
        self.state_code.touch();
    }

    /// Clear the fields a lookup fills: street, neighborhood, city, UF.
    ///
    /// Postal code, complement, and number are never cleared here.
    pub fn clear_looked_up_fields(&mut self) {
        self.street.set("");
        self.neighborhood.set("");
        self.city.set("");
        self.state_code.set("");
    }

    fn to_request(&self) -> AddressRequest {
        AddressRequest {
            street: self.street.value().trim().to_string(),
            complement: self.complement.value().trim().to_string(),
            number: self.number.value().trim().to_string(),
            neighborhood: self.neighborhood.value().trim().to_string(),
            city: self.city.value().trim().to_string(),
            state_code: self.state_code.value().to_uppercase(),
            // Passed through as-is
            postal_code: self.postal_code.value().to_string(),
        }
    }
}

/// The customer being registered: top-level fields plus one or more
/// address rows.
///
/// The address list never goes below one entry; removal at length one is
/// silently ignored (business rule, mirrored in the UI's disabled remove
/// button).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    /// Full name.
    pub name: Field,
    /// Email address.
    pub email: Field,
    /// Eleven-digit CPF.
    pub cpf: Field,
    /// Birth date, ISO `yyyy-mm-dd`.
    pub birth_date: Field,
    addresses: Vec<AddressDraft>,
}

impl CustomerDraft {
    /// An empty draft with exactly one empty address row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Field::default(),
            email: Field::default(),
            cpf: Field::default(),
            birth_date: Field::default(),
            addresses: vec![AddressDraft::new()],
        }
    }

    /// The address rows, in order. Always at least one.
    #[must_use]
    pub fn addresses(&self) -> &[AddressDraft] {
        &self.addresses
    }

    /// Mutable access to one address row.
    pub fn address_mut(&mut self, index: usize) -> Option<&mut AddressDraft> {
        self.addresses.get_mut(index)
    }

    /// Append one empty address row. No upper bound.
    pub fn add_address(&mut self) {
        self.addresses.push(AddressDraft::new());
    }

    /// Remove the address row at `index`.
    ///
    /// No-op when only one row remains, or when `index` is out of range.
    pub fn remove_address(&mut self, index: usize) {
        if self.addresses.len() > 1 && index < self.addresses.len() {
            self.addresses.remove(index);
        }
    }

    /// Whether every field of the draft is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_name(&self.name).is_none()
            && validate_email(&self.email).is_none()
            && validate_cpf(&self.cpf).is_none()
            && validate_birth_date(&self.birth_date).is_none()
            && self.addresses.iter().all(AddressDraft::is_valid)
    }

    /// Mark every field, including every address row's, as touched.
    pub fn touch_all(&mut self) {
        self.name.touch();
        self.email.touch();
        self.cpf.touch();
        self.birth_date.touch();
        for address in &mut self.addresses {
            address.touch_all();
        }
    }

    /// Serialize the draft into the API request shape.
    ///
    /// Name, email, and each address's free-text fields are trimmed; UF is
    /// uppercased; CPF, birth date, and CEP pass through as entered.
    #[must_use]
    pub fn to_request(&self) -> CustomerRequest {
        CustomerRequest {
            name: self.name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            cpf: self.cpf.value().to_string(),
            birth_date: self.birth_date.value().to_string(),
            addresses: self.addresses.iter().map(AddressDraft::to_request).collect(),
        }
    }
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self::new()
    }
}
