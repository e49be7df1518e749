//! Key combination normalisation
//!
//! Users type combinations as `SUPER, Q` or `SUPER + Q`. Lookups always
//! compare the comma form with every token trimmed (`SUPER,Q`), so input is
//! normalised here before it reaches `BindingSet::check_unique`.
//!
//! Token order is preserved: `SUPER,Q` and `Q,SUPER` stay different.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// Separator used between trigger tokens in normalised form
pub const TRIGGER_SEPARATOR: &str = ",";

/// Delimiter the user typed between tokens
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Delimiter {
    /// `SUPER, Q`
    #[default]
    Comma,
    /// `SUPER + Q`
    Plus,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Plus => '+',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown delimiter '{0}' (expected ',', '+', 'comma' or 'plus')")]
pub struct UnknownDelimiter(pub String);

impl FromStr for Delimiter {
    type Err = UnknownDelimiter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "," | "comma" => Ok(Delimiter::Comma),
            "+" | "plus" => Ok(Delimiter::Plus),
            _ => Err(UnknownDelimiter(s.to_string())),
        }
    }
}

/// Normalises a comma-separated trigger: split on `,`, trim, re-join with `,`.
pub fn normalize_trigger(text: &str) -> String {
    normalize_combination(text, Delimiter::Comma)
}

/// Normalises user input typed with `delimiter` into the comma form.
///
/// # Example
/// ```
/// use hyprbind::core::combo::{normalize_combination, Delimiter};
///
/// assert_eq!(normalize_combination(" SUPER + Q ", Delimiter::Plus), "SUPER,Q");
/// ```
pub fn normalize_combination(input: &str, delimiter: Delimiter) -> String {
    input
        .split(delimiter.as_char())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(TRIGGER_SEPARATOR)
}
