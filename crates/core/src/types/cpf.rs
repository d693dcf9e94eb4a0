//! CPF (national identification number) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Cpf`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CpfError {
    /// The input string is empty.
    #[error("CPF cannot be empty")]
    Empty,
    /// The input is not exactly 11 characters long.
    #[error("CPF must have exactly 11 digits, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a character that is not an ASCII digit.
    #[error("CPF must contain only digits")]
    NonDigit,
}

/// A CPF, the Brazilian national identification number.
///
/// Accepts exactly 11 ASCII digits, no punctuation. Inputs such as
/// `123.456.789-01` must be stripped by the caller before parsing; the
/// backend contract carries the bare digit string.
///
/// Check-digit verification is intentionally not performed here - the
/// backend is authoritative for that.
///
/// ## Examples
///
/// ```
/// use cadastro_core::Cpf;
///
/// assert!(Cpf::parse("12345678901").is_ok());
/// assert!(Cpf::parse("123").is_err());
/// assert!(Cpf::parse("123.456.789-01").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Number of digits in a CPF.
    pub const LENGTH: usize = 11;

    /// Parse a `Cpf` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not exactly 11 characters,
    /// or contains anything other than ASCII digits.
    pub fn parse(s: &str) -> Result<Self, CpfError> {
        if s.is_empty() {
            return Err(CpfError::Empty);
        }

        if s.len() != Self::LENGTH {
            return Err(CpfError::WrongLength { len: s.len() });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CpfError::NonDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the CPF as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Cpf` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
