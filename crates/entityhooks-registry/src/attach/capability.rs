//! Behavioral capabilities a host type can be instrumented with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Events whose hooks wrap the core mutation operations.
pub const LIFECYCLE_EVENTS: [&str; 3] = ["create", "update", "destroy"];

/// A behavior attached to a host type so its hooks can be dispatched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Pre/post wrapping of create, update and destroy.
    LifecycleOrchestration,
    /// Firing hooks for arbitrary named events.
    GenericCallback,
}

impl Capability {
    /// All capabilities, in application order.
    pub const ALL: [Capability; 2] = [Self::LifecycleOrchestration, Self::GenericCallback];

    /// Returns the string name of this capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LifecycleOrchestration => "lifecycle_orchestration",
            Self::GenericCallback => "generic_callback",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::LifecycleOrchestration => 1 << 0,
            Self::GenericCallback => 1 << 1,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of capabilities, compared by membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(0)
    }

    /// Adds a capability. Returns `false` if it was already present.
    pub fn insert(&mut self, capability: Capability) -> bool {
        let added = !self.contains(capability);
        self.0 |= capability.bit();
        added
    }

    /// Returns whether the capability is present.
    pub fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of capabilities in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the capabilities in application order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Capability> for CapabilitySet {
    fn extend<I: IntoIterator<Item = Capability>>(&mut self, iter: I) {
        for capability in iter {
            self.insert(capability);
        }
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|c| c.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}
