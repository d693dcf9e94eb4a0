//! ViaCEP API client for postal-code lookup.
//!
//! ViaCEP answers `GET {base}/{cep}/json/` with the address registered
//! for an 8-digit CEP. An unknown-but-well-formed CEP comes back as a
//! `200` with `{"erro": true}` - a business outcome, not an error, and
//! modeled as [`CepLookup::NotFound`] here.

use cadastro_core::Cep;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when querying ViaCEP.
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, when readable.
        message: String,
    },

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The address ViaCEP registered for a CEP.
///
/// `state_code` is returned as ViaCEP sends it (lowercase happens);
/// normalization to uppercase is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViaCepAddress {
    /// Street name (`logradouro`).
    pub street: String,
    /// Neighborhood (`bairro`).
    pub neighborhood: String,
    /// City (`localidade`).
    pub city: String,
    /// Two-letter UF (`uf`), case as received.
    pub state_code: String,
}

/// Outcome of a successful lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CepLookup {
    /// The CEP is registered; here is its address.
    Found(ViaCepAddress),
    /// Well-formed CEP, but ViaCEP does not know it.
    NotFound,
}

/// Raw response body. ViaCEP omits `erro` on hits and sends `true` on
/// misses; every other field may be missing on a miss.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(rename = "logradouro", default)]
    street: String,
    #[serde(rename = "bairro", default)]
    neighborhood: String,
    #[serde(rename = "localidade", default)]
    city: String,
    #[serde(rename = "uf", default)]
    state_code: String,
    #[serde(rename = "erro", default)]
    not_found: bool,
}

/// ViaCEP API client.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new ViaCEP client against `base_url` (no trailing slash
    /// needed; one is stripped if present).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Look up the address registered for `cep`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport, the service
    /// answers non-2xx, or the body does not parse. An unknown CEP is not
    /// an error; it is [`CepLookup::NotFound`].
    pub async fn lookup(&self, cep: &Cep) -> Result<CepLookup, ViaCepError> {
        let url = format!("{}/{}/json/", self.base_url, cep);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ViaCepError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| ViaCepError::Parse(e.to_string()))?;

        if body.not_found {
            return Ok(CepLookup::NotFound);
        }

        Ok(CepLookup::Found(ViaCepAddress {
            street: body.street,
            neighborhood: body.neighborhood,
            city: body.city,
            state_code: body.state_code,
        }))
    }
}
