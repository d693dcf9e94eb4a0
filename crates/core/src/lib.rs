//! Cadastro Core - Shared types library.
//!
//! This crate provides common types used across all Cadastro components:
//! - `registration` - Form controller and API clients
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for validated fields: emails, CPFs, CEPs,
//!   and UF state codes
//! - [`customer`] - JSON wire types for the customer API

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod customer;
pub mod types;

pub use customer::*;
pub use types::*;
