//! Registry of declared tiers and arguments.
//!
//! The registry is the sole owner of specification and argument identity.
//! Every insert checks uniqueness first and leaves the registry untouched
//! when the check fails. Registration takes `&mut self`, so a registry that
//! is shared across threads has to sit behind a lock for the duration of
//! setup.

use std::sync::Arc;

use tracing::debug;

use crate::argument::Argument;
use crate::compare::StringComparison;
use crate::error::{ArgSpecError, Result};
use crate::specification::Specification;

/// Declared tiers and arguments, plus the default comparison policy.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    specifications: Vec<Arc<Specification>>,
    arguments: Vec<Arc<Argument>>,
    comparison: StringComparison,
}

impl Registry {
    /// Create an empty registry using ordinal comparison
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with a different default comparison policy
    pub fn with_comparison(comparison: StringComparison) -> Self {
        Self {
            comparison,
            ..Self::default()
        }
    }

    pub fn comparison(&self) -> StringComparison {
        self.comparison
    }

    /// Declare a new tier.
    pub fn add_specification(
        &mut self,
        hierarchy: u32,
        delimiter: &str,
    ) -> Result<Arc<Specification>> {
        let specification = Specification::new(hierarchy, delimiter)?;

        if self
            .specifications
            .iter()
            .any(|existing| existing.hierarchy() == hierarchy)
        {
            debug!(hierarchy, "rejected duplicate hierarchy");
            return Err(ArgSpecError::DuplicateHierarchy(hierarchy));
        }

        if self
            .specifications
            .iter()
            .any(|existing| existing.delimiter() == delimiter)
        {
            debug!(delimiter, "rejected duplicate delimiter");
            return Err(ArgSpecError::DuplicateDelimiter(delimiter.to_string()));
        }

        let specification = Arc::new(specification);
        self.specifications.push(specification.clone());
        Ok(specification)
    }

    /// Declare a new argument on a registered tier.
    pub fn add_argument(
        &mut self,
        specification: &Arc<Specification>,
        name: &str,
    ) -> Result<Arc<Argument>> {
        self.insert_argument(Argument::new(specification.clone(), name)?)
    }

    /// Declare a new argument with a description.
    pub fn add_described_argument(
        &mut self,
        specification: &Arc<Specification>,
        name: &str,
        description: &str,
    ) -> Result<Arc<Argument>> {
        let argument = Argument::new(specification.clone(), name)?.with_description(description);
        self.insert_argument(argument)
    }

    fn insert_argument(&mut self, argument: Argument) -> Result<Arc<Argument>> {
        let specification = argument.specification();
        if !self
            .specifications
            .iter()
            .any(|existing| existing.as_ref() == specification.as_ref())
        {
            return Err(ArgSpecError::UnknownSpecification(specification.hierarchy()));
        }

        let duplicate = self.arguments.iter().any(|existing| {
            existing.specification() == specification
                && self.comparison.equals(existing.command(), argument.command())
        });
        if duplicate {
            debug!(command = argument.command(), "rejected duplicate argument");
            return Err(ArgSpecError::DuplicateArgument {
                command: argument.command().to_string(),
                hierarchy: specification.hierarchy(),
            });
        }

        let argument = Arc::new(argument);
        self.arguments.push(argument.clone());
        Ok(argument)
    }

    pub fn specifications(&self) -> &[Arc<Specification>] {
        &self.specifications
    }

    pub fn arguments(&self) -> &[Arc<Argument>] {
        &self.arguments
    }

    /// All declared delimiters, in declaration order
    pub fn delimiters(&self) -> impl Iterator<Item = &str> {
        self.specifications.iter().map(|spec| spec.delimiter())
    }

    /// The tier with the lowest hierarchy value
    pub fn root_specification(&self) -> Option<&Arc<Specification>> {
        self.specifications.iter().min_by_key(|spec| spec.hierarchy())
    }

    /// Arguments declared on the given tier
    pub fn arguments_of<'a>(
        &'a self,
        specification: &'a Specification,
    ) -> impl Iterator<Item = &'a Arc<Argument>> {
        self.arguments
            .iter()
            .filter(move |argument| argument.specification().as_ref() == specification)
    }

    /// Find the argument whose command equals `command`
    pub fn find_argument(
        &self,
        command: &str,
        comparison: StringComparison,
    ) -> Option<&Arc<Argument>> {
        self.arguments
            .iter()
            .find(|argument| comparison.equals(argument.command(), command))
    }

    pub fn is_known_command(&self, command: &str, comparison: StringComparison) -> bool {
        self.find_argument(command, comparison).is_some()
    }

    /// Tier a token belongs to: the specification with the longest
    /// delimiter that prefixes the token.
    pub fn classify(
        &self,
        token: &str,
        comparison: StringComparison,
    ) -> Option<&Arc<Specification>> {
        self.specifications
            .iter()
            .filter(|spec| comparison.starts_with(token, spec.delimiter()))
            .max_by_key(|spec| spec.delimiter().len())
    }

    /// Whether the token begins with any declared delimiter
    pub fn has_known_delimiter(&self, token: &str, comparison: StringComparison) -> bool {
        self.delimiters()
            .any(|delimiter| comparison.starts_with(token, delimiter))
    }
}
