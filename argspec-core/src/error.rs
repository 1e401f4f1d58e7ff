//! Error types for argument declarations and matcher usage.
//!
//! Observed argument vectors that break a restriction are not errors; they
//! are reported as [`Violation`](crate::Violation) values instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for declaring and querying argument trees.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgSpecError {
    /// A delimiter was empty or contained an alphanumeric character
    #[error("Invalid delimiter '{0}': must be non-empty and contain no alphanumeric characters")]
    InvalidDelimiter(String),

    /// A specification with this hierarchy already exists in the registry
    #[error("A specification with hierarchy {0} is already registered")]
    DuplicateHierarchy(u32),

    /// A specification with this delimiter already exists in the registry
    #[error("A specification with delimiter '{0}' is already registered")]
    DuplicateDelimiter(String),

    /// An argument with this command already exists for the specification
    #[error("Argument '{command}' is already registered for hierarchy {hierarchy}")]
    DuplicateArgument { command: String, hierarchy: u32 },

    /// Argument names must contain at least one non-whitespace character
    #[error("Argument name must not be empty or whitespace")]
    EmptyArgumentName,

    /// The specification does not belong to this registry
    #[error("Specification with hierarchy {0} is not registered")]
    UnknownSpecification(u32),

    /// A call-chain or grouping parent chain had no arguments
    #[error("Call-chain must contain at least one argument")]
    EmptyChain,

    /// Parameter count bounds where the minimum exceeds the maximum
    #[error("Invalid parameter bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },

    /// Mutually exclusive presence options were combined
    #[error("Conflicting presence options: {0}")]
    ConflictingOptions(String),

    /// Option bits that do not correspond to any presence policy
    #[error("Unrecognized presence options: {0:#04x}")]
    UnrecognizedOptions(u8),
}

/// Result type alias for declaration and matcher operations
pub type Result<T> = std::result::Result<T, ArgSpecError>;
