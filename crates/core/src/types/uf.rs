//! UF (federative unit / state code) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Uf`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UfError {
    /// The input string is empty.
    #[error("UF cannot be empty")]
    Empty,
    /// The input is not exactly 2 characters long.
    #[error("UF must have exactly 2 letters, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contains a character that is not an ASCII letter.
    #[error("UF must contain only letters")]
    NonLetter,
}

/// A UF, the two-letter code of a Brazilian federative unit.
///
/// Input is case-insensitive; the stored value is always uppercase. The
/// set of valid codes is not enforced beyond the shape - ViaCEP and the
/// backend only ever produce real ones, and user typos are caught server
/// side.
///
/// ## Examples
///
/// ```
/// use cadastro_core::Uf;
///
/// let uf = Uf::parse("sp").unwrap();
/// assert_eq!(uf.as_str(), "SP");
/// assert!(Uf::parse("S1").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Uf(String);

impl Uf {
    /// Number of letters in a UF code.
    pub const LENGTH: usize = 2;

    /// Parse a `Uf` from a string, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not exactly 2 characters,
    /// or contains anything other than ASCII letters.
    pub fn parse(s: &str) -> Result<Self, UfError> {
        if s.is_empty() {
            return Err(UfError::Empty);
        }

        if s.len() != Self::LENGTH {
            return Err(UfError::WrongLength { len: s.len() });
        }

        if !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(UfError::NonLetter);
        }

        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Returns the UF code as a string slice (always uppercase).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Uf` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Uf {
    type Err = UfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Uf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
