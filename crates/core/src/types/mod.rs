//! Core types for Cadastro.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cep;
pub mod cpf;
pub mod email;
pub mod uf;

pub use cep::{Cep, CepError};
pub use cpf::{Cpf, CpfError};
pub use email::{Email, EmailError};
pub use uf::{Uf, UfError};
