//! CEP (postal code) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Cep`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CepError {
    /// The input string is empty.
    #[error("CEP cannot be empty")]
    Empty,
    /// The input is not exactly 8 characters long.
    #[error("CEP must have exactly 8 digits, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a character that is not an ASCII digit.
    #[error("CEP must contain only digits")]
    NonDigit,
}

/// A CEP, the Brazilian postal code.
///
/// Accepts exactly 8 ASCII digits, no hyphen. The hyphenated display form
/// (`01001-000`) is a presentation concern; the lookup URL and the backend
/// contract both carry the bare digit string.
///
/// ## Examples
///
/// ```
/// use cadastro_core::Cep;
///
/// assert!(Cep::parse("01001000").is_ok());
/// assert!(Cep::parse("01001-000").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Number of digits in a CEP.
    pub const LENGTH: usize = 8;

    /// Parse a `Cep` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not exactly 8 characters,
    /// or contains anything other than ASCII digits.
    pub fn parse(s: &str) -> Result<Self, CepError> {
        if s.is_empty() {
            return Err(CepError::Empty);
        }

        if s.len() != Self::LENGTH {
            return Err(CepError::WrongLength { len: s.len() });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CepError::NonDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the CEP as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Cep` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Cep {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
