//! Presence options for the matcher and the policy table they resolve to.

use bitflags::bitflags;

use crate::error::{ArgSpecError, Result};

bitflags! {
    /// Refinements applied when asking whether an argument is present.
    ///
    /// Flags combine as a conjunction. The pairs `WITH_CHILDREN` /
    /// `WITHOUT_CHILDREN`, `WITH_SIBLINGS` / `WITHOUT_SIBLINGS` and
    /// `WITH_PARAMS` / `WITHOUT_PARAMS` are mutually exclusive; resolving a
    /// set that holds both halves of a pair is a usage error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FoundOptions: u8 {
        const WITH_CHILDREN = 1 << 0;
        const WITHOUT_CHILDREN = 1 << 1;
        const WITH_SIBLINGS = 1 << 2;
        const WITHOUT_SIBLINGS = 1 << 3;
        const WITH_PARAMS = 1 << 4;
        const WITHOUT_PARAMS = 1 << 5;
    }
}

/// Requirement on one property of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Requirement {
    #[default]
    Any,
    Present,
    Absent,
}

impl Requirement {
    /// Check an observed property against the requirement
    pub fn admits(self, present: bool) -> bool {
        match self {
            Requirement::Any => true,
            Requirement::Present => present,
            Requirement::Absent => !present,
        }
    }

    fn resolve(
        options: FoundOptions,
        with: FoundOptions,
        without: FoundOptions,
        pair: &str,
    ) -> Result<Self> {
        match (options.contains(with), options.contains(without)) {
            (false, false) => Ok(Requirement::Any),
            (true, false) => Ok(Requirement::Present),
            (false, true) => Ok(Requirement::Absent),
            (true, true) => Err(ArgSpecError::ConflictingOptions(pair.to_string())),
        }
    }
}

/// Resolved presence policy: one requirement per property.
///
/// Children and parameters are judged against the argument's segment while
/// siblings are judged against the scope the argument was searched in, so
/// each axis is kept separate rather than folded into one predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FoundPolicy {
    pub children: Requirement,
    pub siblings: Requirement,
    pub params: Requirement,
}

impl FoundPolicy {
    /// Resolve an option set into a policy row.
    ///
    /// Bits outside the known flags are rejected rather than ignored.
    pub fn resolve(options: FoundOptions) -> Result<Self> {
        if options.bits() & !FoundOptions::all().bits() != 0 {
            return Err(ArgSpecError::UnrecognizedOptions(options.bits()));
        }
        Ok(Self {
            children: Requirement::resolve(
                options,
                FoundOptions::WITH_CHILDREN,
                FoundOptions::WITHOUT_CHILDREN,
                "WITH_CHILDREN | WITHOUT_CHILDREN",
            )?,
            siblings: Requirement::resolve(
                options,
                FoundOptions::WITH_SIBLINGS,
                FoundOptions::WITHOUT_SIBLINGS,
                "WITH_SIBLINGS | WITHOUT_SIBLINGS",
            )?,
            params: Requirement::resolve(
                options,
                FoundOptions::WITH_PARAMS,
                FoundOptions::WITHOUT_PARAMS,
                "WITH_PARAMS | WITHOUT_PARAMS",
            )?,
        })
    }

    /// Resolve raw option bits, rejecting bits outside the known flags.
    pub fn from_bits(bits: u8) -> Result<Self> {
        let options =
            FoundOptions::from_bits(bits).ok_or(ArgSpecError::UnrecognizedOptions(bits))?;
        Self::resolve(options)
    }

    /// Whether the policy only asks for presence
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

impl TryFrom<FoundOptions> for FoundPolicy {
    type Error = ArgSpecError;

    fn try_from(options: FoundOptions) -> Result<Self> {
        Self::resolve(options)
    }
}
