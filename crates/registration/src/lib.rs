//! Cadastro Registration - customer registration workflow.
//!
//! # Architecture
//!
//! Three pieces:
//!
//! - [`form`] - The [`form::RegistrationForm`] controller: owns the draft
//!   under edit (one customer section, a variable-length list of address
//!   rows), validates every field, orchestrates CEP lookups, and drives
//!   submission state. No I/O of its own.
//! - [`services`] - The network edge: [`services::ViaCepClient`] for
//!   postal-code lookups and [`services::CustomerClient`], the only
//!   component allowed to talk to the customer API.
//! - [`config`] - Environment-based configuration for both service URLs.
//!
//! # Example
//!
//! ```rust,ignore
//! use cadastro_registration::{RegistrationForm, RegistrationConfig};
//! use cadastro_registration::services::{CustomerClient, ViaCepClient};
//!
//! let config = RegistrationConfig::from_env();
//! let viacep = ViaCepClient::new(&config.viacep_base_url);
//! let customers = CustomerClient::new(&config.customer_api_url);
//!
//! let mut form = RegistrationForm::new();
//! form.draft_mut().name.set("Maria Oliveira");
//! form.draft_mut().address_mut(0).unwrap().postal_code.set("01001000");
//!
//! let outcome = form.lookup_postal_code(0, &viacep).await;
//! // ... fill the remaining fields ...
//! let outcome = form.submit(&customers).await;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod form;
pub mod services;

pub use config::RegistrationConfig;
pub use form::{LookupOutcome, RegistrationForm, SubmitOutcome};
