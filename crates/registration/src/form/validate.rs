//! Per-field validation rules.
//!
//! Each function takes a [`Field`] and returns the first rule it breaks,
//! or `None` when the field is valid. Validity is recomputed on every
//! call, so edits are reflected immediately; the only sticky state is the
//! marker a failed CEP lookup leaves on the postal-code field, and
//! [`Field::set`] clears that.

use cadastro_core::{Cep, Cpf, Email, Uf};

use super::draft::Field;

/// Minimum length of the customer name.
pub const NAME_MIN_CHARS: usize = 8;
/// Maximum length of the customer name.
pub const NAME_MAX_CHARS: usize = 100;

/// Why a single field is invalid.
///
/// The `Display` messages are user-facing and rendered next to the field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Empty field that must be filled.
    #[error("Campo obrigatorio.")]
    Required,
    /// Fewer characters than the rule allows.
    #[error("Minimo de {min} caracteres.")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// More characters than the rule allows.
    #[error("Maximo de {max} caracteres.")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Only whitespace characters.
    #[error("Nao pode conter apenas espacos.")]
    Blank,
    /// Not a well-formed email address.
    #[error("Email invalido.")]
    InvalidEmail,
    /// Not exactly 11 digits.
    #[error("CPF deve ter exatamente 11 digitos.")]
    InvalidCpf,
    /// Not exactly 8 digits.
    #[error("CEP deve ter exatamente 8 digitos.")]
    InvalidCep,
    /// The lookup service did not recognize this CEP.
    #[error("CEP nao encontrado.")]
    CepNotFound,
    /// Not exactly 2 letters.
    #[error("UF deve ter exatamente 2 letras.")]
    InvalidUf,
}

/// Name: required, 8-100 characters, at least one non-whitespace char.
#[must_use]
pub fn validate_name(field: &Field) -> Option<FieldError> {
    let value = field.value();
    if value.is_empty() {
        return Some(FieldError::Required);
    }

    let chars = value.chars().count();
    if chars < NAME_MIN_CHARS {
        return Some(FieldError::TooShort {
            min: NAME_MIN_CHARS,
        });
    }
    if chars > NAME_MAX_CHARS {
        return Some(FieldError::TooLong {
            max: NAME_MAX_CHARS,
        });
    }

    if value.chars().all(char::is_whitespace) {
        return Some(FieldError::Blank);
    }

    None
}

/// Email: required, well-formed address.
#[must_use]
pub fn validate_email(field: &Field) -> Option<FieldError> {
    let value = field.value();
    if value.is_empty() {
        return Some(FieldError::Required);
    }

    if Email::parse(value).is_err() {
        return Some(FieldError::InvalidEmail);
    }

    None
}

/// CPF: required, exactly 11 digits.
#[must_use]
pub fn validate_cpf(field: &Field) -> Option<FieldError> {
    let value = field.value();
    if value.is_empty() {
        return Some(FieldError::Required);
    }

    if Cpf::parse(value).is_err() {
        return Some(FieldError::InvalidCpf);
    }

    None
}

/// Birth date: required.
#[must_use]
pub fn validate_birth_date(field: &Field) -> Option<FieldError> {
    if field.value().is_empty() {
        return Some(FieldError::Required);
    }

    None
}

/// CEP: required, exactly 8 digits, and not flagged by a failed lookup.
#[must_use]
pub fn validate_cep(field: &Field) -> Option<FieldError> {
    let value = field.value();
    if value.is_empty() {
        return Some(FieldError::Required);
    }

    if Cep::parse(value).is_err() {
        return Some(FieldError::InvalidCep);
    }

    // A "CEP not found" marker stays until the field is edited
    field.marked_error().cloned()
}

/// UF: required, exactly 2 letters (case-insensitive on input).
#[must_use]
pub fn validate_uf(field: &Field) -> Option<FieldError> {
    let value = field.value();
    if value.is_empty() {
        return Some(FieldError::Required);
    }

    if Uf::parse(value).is_err() {
        return Some(FieldError::InvalidUf);
    }

    None
}

/// Free-text address fields: required, non-empty.
#[must_use]
pub fn validate_required(field: &Field) -> Option<FieldError> {
    if field.value().is_empty() {
        return Some(FieldError::Required);
    }

    None
}
