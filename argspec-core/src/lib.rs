//! Core types and matching for tiered command-line arguments.
//!
//! Callers declare tiers ([`Specification`]) in a [`Registry`], bind
//! [`Argument`]s to them, and describe legal parent/child combinations as
//! [`Grouping`]s. A [`Matcher`] then locates arguments and call-chains in a
//! flat token stream, and [`Restriction`]s turn those answers into
//! [`Violation`] records.
//!
//! ```
//! use argspec_core::{FoundOptions, Registry};
//!
//! let mut registry = Registry::new();
//! let root = registry.add_specification(0, "--").unwrap();
//! let child = registry.add_specification(1, "-").unwrap();
//! let convert = registry.add_argument(&root, "convert").unwrap();
//! let input = registry.add_argument(&child, "in").unwrap();
//!
//! let tokens = ["--convert", "-in", "a.txt"];
//! let matcher = registry.matcher();
//! assert_eq!(matcher.chain_params(&[convert.clone(), input], &tokens), ["a.txt"]);
//! assert!(matcher.found(&convert, FoundOptions::WITH_CHILDREN, &tokens).unwrap());
//! ```

mod argument;
mod compare;
mod error;
mod matcher;
mod options;
mod registry;
pub mod restriction;
pub mod segment;
pub mod sequence;
mod specification;
pub mod tokens;

pub use argument::{join_commands, Argument, Grouping};
pub use compare::StringComparison;
pub use error::{ArgSpecError, Result};
pub use matcher::Matcher;
pub use options::{FoundOptions, FoundPolicy, Requirement};
pub use registry::Registry;
pub use restriction::{Restriction, RestrictionSet, Violation};
pub use specification::Specification;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
