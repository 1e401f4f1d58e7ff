//! String comparison policy used when matching tokens against commands.

use serde::{Deserialize, Serialize};

/// How tokens are compared against commands and delimiters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringComparison {
    /// Exact, case-sensitive comparison
    #[default]
    Ordinal,

    /// Case-insensitive comparison using Unicode lowercase folding
    OrdinalIgnoreCase,
}

impl StringComparison {
    /// Compare two strings for equality under this policy
    pub fn equals(self, a: &str, b: &str) -> bool {
        match self {
            StringComparison::Ordinal => a == b,
            StringComparison::OrdinalIgnoreCase => {
                a.chars()
                    .flat_map(char::to_lowercase)
                    .eq(b.chars().flat_map(char::to_lowercase))
            }
        }
    }

    /// Check whether `value` begins with `prefix` under this policy
    pub fn starts_with(self, value: &str, prefix: &str) -> bool {
        match self {
            StringComparison::Ordinal => value.starts_with(prefix),
            StringComparison::OrdinalIgnoreCase => {
                let mut chars = value.chars().flat_map(char::to_lowercase);
                prefix
                    .chars()
                    .flat_map(char::to_lowercase)
                    .all(|p| chars.next() == Some(p))
            }
        }
    }
}
