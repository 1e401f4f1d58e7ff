//! Restrictions over an observed argument vector.
//!
//! Each restriction is a stateless predicate: given a [`Matcher`] and the
//! token stream it reports zero or more [`Violation`]s. Restrictions never
//! mutate the stream or the registry, so any number of them can be
//! evaluated against the same input in any order.

mod combo;
mod count;
mod structure;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher::Matcher;

pub use combo::{IllegalComboRestriction, MandatedComboRestriction};
pub use count::{
    CannotContainAnyArgumentsRestriction, EmptinessTrigger,
    MustContainAtLeastOneArgumentRestriction, ParameterCountRestriction,
};
pub use structure::{
    FirstArgMustBeRootRestriction, LegalArgumentsRestriction, UnknownArgumentsRestriction,
};

/// A failed restriction, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the restriction that produced the violation
    pub kind: String,

    /// The offending tokens or commands
    pub message: String,
}

impl Violation {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// A declared constraint on the argument vector.
pub trait Restriction: fmt::Debug + Send + Sync {
    /// Tag carried by every violation this restriction produces
    fn kind(&self) -> &'static str;

    /// Every violation found in `tokens`.
    ///
    /// The result is finite and recomputed on each call; calling twice with
    /// the same inputs yields the same violations.
    fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation>;

    fn is_violated(&self, matcher: &Matcher<'_>, tokens: &[String]) -> bool {
        !self.violations(matcher, tokens).is_empty()
    }
}

/// An ordered collection of restrictions evaluated together.
#[derive(Debug, Default)]
pub struct RestrictionSet {
    restrictions: Vec<Box<dyn Restriction>>,
}

impl RestrictionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, restriction: impl Restriction + 'static) {
        self.restrictions.push(Box::new(restriction));
    }

    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, restriction: impl Restriction + 'static) -> Self {
        self.push(restriction);
        self
    }

    pub fn len(&self) -> usize {
        self.restrictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Restriction> {
        self.restrictions.iter().map(|restriction| restriction.as_ref())
    }

    /// Violations of every restriction, concatenated in declaration order
    pub fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        self.restrictions
            .iter()
            .flat_map(|restriction| {
                let found = restriction.violations(matcher, tokens);
                if !found.is_empty() {
                    debug!(
                        restriction = restriction.kind(),
                        count = found.len(),
                        "restriction violated"
                    );
                }
                found
            })
            .collect()
    }

    pub fn is_violated(&self, matcher: &Matcher<'_>, tokens: &[String]) -> bool {
        self.restrictions
            .iter()
            .any(|restriction| restriction.is_violated(matcher, tokens))
    }
}
