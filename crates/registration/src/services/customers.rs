//! Customer API client.
//!
//! A stateless façade over one collection resource: create (POST), update
//! (PUT by id), list (GET), delete (DELETE by id). JSON in, JSON out.
//! Failures propagate verbatim to the caller - no retries, no
//! interpretation; whether a failure is worth a notice, a retry, or an
//! abort is the form controller's call.

use cadastro_core::{CustomerRecord, CustomerRequest};
use thiserror::Error;

/// Errors that can occur when calling the customer API.
#[derive(Debug, Error)]
pub enum CustomerApiError {
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

/// Customer API client.
///
/// The sole component permitted to perform I/O against the customer
/// resource.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    client: reqwest::Client,
    base_url: String,
}

impl CustomerClient {
    /// Create a new client against the collection root `base_url` (no
    /// trailing slash needed; one is stripped if present).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a customer. Resolves with the created record, including the
    /// server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport, the API
    /// answers non-2xx, or the body does not parse.
    pub async fn create(
        &self,
        customer: &CustomerRequest,
    ) -> Result<CustomerRecord, CustomerApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(customer)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Update the customer addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport, the API
    /// answers non-2xx, or the body does not parse.
    pub async fn update(
        &self,
        id: &str,
        customer: &CustomerRequest,
    ) -> Result<CustomerRecord, CustomerApiError> {
        let url = format!("{}/{id}", self.base_url);
        let response = self.client.put(&url).json(customer).send().await?;

        Self::decode(response).await
    }

    /// List all customers, in the order the API returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport, the API
    /// answers non-2xx, or the body does not parse.
    pub async fn list(&self) -> Result<Vec<CustomerRecord>, CustomerApiError> {
        let response = self.client.get(&self.base_url).send().await?;

        Self::decode(response).await
    }

    /// Delete the customer addressed by `id`. No payload on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport or the API
    /// answers non-2xx.
    pub async fn delete(&self, id: &str) -> Result<(), CustomerApiError> {
        let url = format!("{}/{id}", self.base_url);
        let response = self.client.delete(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CustomerApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    /// Check the status and decode a JSON body.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CustomerApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CustomerApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CustomerApiError::Parse(e.to_string()))
    }
}
