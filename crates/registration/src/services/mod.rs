//! Network edge of the registration workflow.
//!
//! Two reqwest-backed clients, each a thin stateless façade:
//!
//! - [`ViaCepClient`] - read-only CEP lookup against ViaCEP
//! - [`CustomerClient`] - CRUD against the customer API collection
//!
//! Both propagate failures verbatim; retry policy belongs to the caller.

pub mod customers;
pub mod viacep;

pub use customers::{CustomerApiError, CustomerClient};
pub use viacep::{CepLookup, ViaCepAddress, ViaCepClient, ViaCepError};
