//! Numeric text validation and coercion.
//!
//! DESIGN
//! ======
//! Field values are kept as text so the user sees exactly what they typed
//! ("1.", ".5", "007"). [`validate`] gates raw keystrokes: it either yields a
//! [`NumericText`] or a [`ValidationError`] whose message is shown inline next
//! to the input. Interpretation as a number happens later, in [`to_number`].

#[cfg(test)]
#[path = "numeric_test.rs"]
mod numeric_test;

use std::fmt;
use std::ops::Deref;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Why a candidate string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A character other than an ASCII digit or `.` was present.
    #[error("Only numbers and at most one decimal point are allowed")]
    InvalidCharacter,
    /// Only digits and dots, but more than one dot.
    #[error("Only one decimal point is allowed")]
    MultipleDecimalPoints,
}

/// Text that is empty or an unsigned decimal with at most one decimal point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct NumericText(String);

impl NumericText {
    /// The empty value.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a literal known to satisfy the grammar.
    pub(crate) fn from_static(text: &'static str) -> Self {
        debug_assert!(validate(text).is_ok(), "invalid numeric literal {text:?}");
        Self(text.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric interpretation, see [`to_number`].
    #[must_use]
    pub fn to_number(&self) -> f64 {
        to_number(&self.0)
    }
}

impl Deref for NumericText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NumericText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NumericText> for String {
    fn from(value: NumericText) -> Self {
        value.0
    }
}

impl TryFrom<&str> for NumericText {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

/// Persisted representation: the current text form, or a bare number written
/// by older releases that stored parsed values.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredNumber {
    Text(String),
    Number(f64),
}

impl<'de> Deserialize<'de> for NumericText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StoredNumber::deserialize(deserializer)? {
            StoredNumber::Text(text) => validate(&text).map_err(de::Error::custom),
            StoredNumber::Number(n) if n.is_finite() && n >= 0.0 => {
                validate(&n.to_string()).map_err(de::Error::custom)
            }
            StoredNumber::Number(n) => Err(de::Error::custom(format!(
                "stored number {n} is negative or not finite"
            ))),
        }
    }
}

/// Validate a candidate field value.
///
/// The empty string is always accepted. Otherwise every character must be an
/// ASCII digit or `.`, and at most one `.` may appear. A foreign character
/// takes precedence over a repeated dot when choosing the message.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCharacter`] for signs, letters,
/// whitespace, separators and the like, and
/// [`ValidationError::MultipleDecimalPoints`] for digit-and-dot text with more
/// than one dot.
pub fn validate(candidate: &str) -> Result<NumericText, ValidationError> {
    if candidate.chars().any(|c| !c.is_ascii_digit() && c != '.') {
        return Err(ValidationError::InvalidCharacter);
    }
    if candidate.matches('.').count() > 1 {
        return Err(ValidationError::MultipleDecimalPoints);
    }
    Ok(NumericText(candidate.to_owned()))
}

/// Interpret text as a non-negative number.
///
/// Empty, unparsable, non-finite and negative input all coerce to `0.0`, so a
/// total derived from these values is never negative.
#[must_use]
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}
