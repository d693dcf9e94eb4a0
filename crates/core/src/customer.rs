//! JSON wire types for the customer API.
//!
//! Field names on the wire follow the backend's contract (Portuguese,
//! camelCase): `nome`, `dataNascimento`, `enderecos`, `logradouro` and so
//! on. Rust-side names stay in English; serde does the renaming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One address as sent to the customer API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRequest {
    /// Street name.
    #[serde(rename = "logradouro")]
    pub street: String,
    /// Complement (apartment, unit, etc.).
    #[serde(rename = "complemento")]
    pub complement: String,
    /// Street number.
    #[serde(rename = "numero")]
    pub number: String,
    /// Neighborhood.
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    /// City name.
    #[serde(rename = "cidade")]
    pub city: String,
    /// Two-letter state code, always uppercase.
    #[serde(rename = "uf")]
    pub state_code: String,
    /// Eight-digit postal code.
    #[serde(rename = "cep")]
    pub postal_code: String,
}

/// Payload for creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {
    /// Full name, trimmed.
    #[serde(rename = "nome")]
    pub name: String,
    /// Email address, trimmed.
    pub email: String,
    /// Eleven-digit CPF.
    pub cpf: String,
    /// Birth date as the form entered it (ISO `yyyy-mm-dd`).
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    /// At least one address.
    #[serde(rename = "enderecos")]
    pub addresses: Vec<AddressRequest>,
}

/// A customer as returned by the API: the request fields plus the
/// server-assigned identity. Received only; the client never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Server-assigned identifier.
    pub id: String,
    /// Full name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Email address.
    pub email: String,
    /// Eleven-digit CPF.
    pub cpf: String,
    /// Birth date.
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    /// Registered addresses.
    #[serde(rename = "enderecos")]
    pub addresses: Vec<AddressRequest>,
    /// Registration timestamp, when the backend provides one.
    #[serde(rename = "dataCadastro", default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}
