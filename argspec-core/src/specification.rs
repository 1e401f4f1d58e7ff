//! Argument tiers.
//!
//! A specification pairs a hierarchy level with the delimiter that marks
//! tokens of that level, e.g. `0 => "--"` for root commands and `1 => "-"`
//! for their switches.

use serde::{Deserialize, Serialize};

use crate::error::{ArgSpecError, Result};

/// One tier of the argument tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specification {
    hierarchy: u32,
    delimiter: String,
}

impl Specification {
    /// Create a tier, rejecting empty delimiters and delimiters containing
    /// alphanumeric characters.
    pub fn new(hierarchy: u32, delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() || delimiter.chars().any(char::is_alphanumeric) {
            return Err(ArgSpecError::InvalidDelimiter(delimiter));
        }

        Ok(Self {
            hierarchy,
            delimiter,
        })
    }

    /// Nesting level, 0 being the root
    pub fn hierarchy(&self) -> u32 {
        self.hierarchy
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Whether this tier ranks above `other` (a lower hierarchy value)
    pub fn outranks(&self, other: &Specification) -> bool {
        self.hierarchy < other.hierarchy
    }
}
