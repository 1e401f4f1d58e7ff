//! Arguments, call-chains and groupings.

use std::fmt;
use std::sync::Arc;

use crate::error::{ArgSpecError, Result};
use crate::specification::Specification;

/// A named switch bound to one tier.
///
/// The command is derived from the tier's delimiter and the name, so an
/// argument `in` on the `-` tier is matched by the token `-in`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    specification: Arc<Specification>,
    name: String,
    command: String,
    description: Option<String>,
}

impl Argument {
    /// Create an argument; the name must contain a non-whitespace character
    pub fn new(specification: Arc<Specification>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArgSpecError::EmptyArgumentName);
        }

        let command = format!("{}{}", specification.delimiter(), name);
        Ok(Self {
            specification,
            name,
            command,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn specification(&self) -> &Arc<Specification> {
        &self.specification
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token that matches this argument: delimiter followed by name
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn delimiter(&self) -> &str {
        self.specification.delimiter()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Join the commands of a call-chain with single spaces.
pub fn join_commands(chain: &[Arc<Argument>]) -> String {
    chain
        .iter()
        .map(|argument| argument.command())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One legal combination of a parent call-chain and the children that may
/// appear inside it.
///
/// A grouping is not a wildcard: two different legal child sets under the
/// same parent are two groupings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    parent_chain: Vec<Arc<Argument>>,
    children: Vec<Arc<Argument>>,
    description: Option<String>,
}

impl Grouping {
    pub fn new(parent_chain: Vec<Arc<Argument>>, children: Vec<Arc<Argument>>) -> Result<Self> {
        if parent_chain.is_empty() {
            return Err(ArgSpecError::EmptyChain);
        }

        Ok(Self {
            parent_chain,
            children,
            description: None,
        })
    }

    /// A grouping consisting of a single parent with no children
    pub fn single(parent: Arc<Argument>) -> Self {
        Self {
            parent_chain: vec![parent],
            children: Vec::new(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn parent_chain(&self) -> &[Arc<Argument>] {
        &self.parent_chain
    }

    pub fn children(&self) -> &[Arc<Argument>] {
        &self.children
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Parent chain followed by children
    pub fn flattened(&self) -> Vec<Arc<Argument>> {
        self.parent_chain
            .iter()
            .chain(self.children.iter())
            .cloned()
            .collect()
    }

    /// Commands of the flattened grouping, in declaration order
    pub fn commands(&self) -> Vec<&str> {
        self.parent_chain
            .iter()
            .chain(self.children.iter())
            .map(|argument| argument.command())
            .collect()
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commands().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers() -> (Arc<Specification>, Arc<Specification>) {
        (
            Arc::new(Specification::new(0, "--").unwrap()),
            Arc::new(Specification::new(1, "-").unwrap()),
        )
    }

    #[test]
    fn test_command_is_delimiter_plus_name() {
        let (root, _) = tiers();
        let convert = Argument::new(root, "convert").unwrap();
        assert_eq!(convert.command(), "--convert");
        assert_eq!(convert.delimiter(), "--");
        assert_eq!(convert.to_string(), "--convert");
    }

    #[test]
    fn test_rejects_blank_names() {
        let (_, child) = tiers();
        assert_eq!(
            Argument::new(child.clone(), ""),
            Err(ArgSpecError::EmptyArgumentName)
        );
        assert_eq!(
            Argument::new(child, " \t"),
            Err(ArgSpecError::EmptyArgumentName)
        );
    }

    #[test]
    fn test_grouping_requires_parent() {
        let (_, child) = tiers();
        let input = Arc::new(Argument::new(child, "in").unwrap());
        assert_eq!(
            Grouping::new(Vec::new(), vec![input]),
            Err(ArgSpecError::EmptyChain)
        );
    }

    #[test]
    fn test_grouping_flattening() {
        let (root, child) = tiers();
        let convert = Arc::new(Argument::new(root, "convert").unwrap());
        let input = Arc::new(Argument::new(child.clone(), "in").unwrap());
        let output = Arc::new(Argument::new(child, "out").unwrap());

        let grouping = Grouping::new(vec![convert], vec![input, output])
            .unwrap()
            .with_description("convert a file");

        assert_eq!(grouping.commands(), vec!["--convert", "-in", "-out"]);
        assert_eq!(grouping.flattened().len(), 3);
        assert_eq!(grouping.to_string(), "--convert -in -out");
        assert_eq!(grouping.description(), Some("convert a file"));
        assert_eq!(join_commands(grouping.parent_chain()), "--convert");
    }
}
