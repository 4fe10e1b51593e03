//! Host environment probe

use std::sync::Arc;

use crate::binder::PrefixStrategy;

/// Coarse classification of the host runtime's sink behavior
///
/// The only trait of the host the binder cares about is whether the sink
/// substitutes template patterns in a forwarded call's first argument
/// recursively, so the prefix can travel as its own template argument.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostClass {
    /// The sink substitutes patterns in the first argument recursively
    RecursiveSubstitution,
    /// The sink performs no recursive substitution
    PlainSubstitution,
    /// The host could not be classified
    Unknown,
}

impl HostClass {
    /// The prefix strategy used when binding under this classification
    ///
    /// Any class other than `RecursiveSubstitution`, including ones added in
    /// the future, falls back to merging the prefix into the first argument.
    pub(crate) fn prefix_strategy(self) -> PrefixStrategy {
        match self {
            HostClass::RecursiveSubstitution => PrefixStrategy::RecursiveTemplate,
            _ => PrefixStrategy::MergeFirstArgument,
        }
    }
}

/// Probe answering the single question the binder asks about its host
///
/// The registry consults the installed probe whenever a logger's methods are
/// (re)bound; see [`crate::registry::set_host_probe`].
pub trait HostProbe: Send + Sync {
    /// Classify the host runtime
    fn classify(&self) -> HostClass;
}

/// Type alias for an Arc-wrapped host probe
pub type SharedHostProbe = Arc<dyn HostProbe>;

/// The default probe: assumes no recursive substitution support
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHostProbe;

impl HostProbe for PlainHostProbe {
    fn classify(&self) -> HostClass {
        HostClass::PlainSubstitution
    }
}

/// A probe that always reports a fixed classification
///
/// Useful when the host is known at build time, and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedHostProbe {
    class: HostClass,
}

impl FixedHostProbe {
    /// Create a probe reporting `class`
    pub fn new(class: HostClass) -> Self {
        Self { class }
    }
}

impl HostProbe for FixedHostProbe {
    fn classify(&self) -> HostClass {
        self.class
    }
}
