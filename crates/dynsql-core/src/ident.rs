//! Validated SQL identifiers.
//!
//! Table and column names end up verbatim in statement text, so they are
//! checked once, here, against `[A-Za-z_][A-Za-z0-9_]*`. Quoting and
//! dotted names are not supported.

use std::fmt;
use std::str::FromStr;

use crate::error::{BuildError, Result};

/// A table or column name that is safe to interpolate into SQL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    /// Longest accepted identifier, in bytes.
    pub const MAX_LEN: usize = 128;

    /// Validates `name` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidIdentifier`] when the name is empty,
    /// too long, starts with a digit, or contains anything other than
    /// ASCII letters, digits and underscores.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if let Some(reason) = check(&name) {
            return Err(BuildError::InvalidIdentifier { name, reason });
        }
        Ok(Self(name))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

fn check(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("must not be empty");
    };
    if name.len() > Ident::MAX_LEN {
        return Some("longer than 128 bytes");
    }
    if !(first == '_' || first.is_ascii_alphabetic()) {
        return Some("must start with a letter or underscore");
    }
    if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        return Some("only letters, digits and underscores are allowed");
    }
    None
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ident {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Ident {
    type Error = BuildError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Ident {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

/// Conversion into an [`Ident`], validating when needed.
///
/// Lets APIs accept either a ready `Ident` or a plain string.
pub trait IntoIdent {
    /// Converts `self` into a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidIdentifier`] for invalid names.
    fn into_ident(self) -> Result<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> Result<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> Result<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> Result<Ident> {
        Ident::new(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> Result<Ident> {
        Ident::new(self)
    }
}

impl IntoIdent for &String {
    fn into_ident(self) -> Result<Ident> {
        Ident::new(self.as_str())
    }
}
