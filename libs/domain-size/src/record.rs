//! The domain-size record itself.

use std::fmt;

/// Cardinality of the discrete domain of a variable type.
///
/// This is the number of distinct values a variable of the annotated type may
/// take. A record is plain immutable data. With the `serde` feature it serializes
/// as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DomainSize {
    value: u32,
}

impl DomainSize {
    /// Create a record for a domain with `value` distinct values.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// The recorded cardinality.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }
}

impl From<u32> for DomainSize {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<DomainSize> for u32 {
    fn from(size: DomainSize) -> Self {
        size.value
    }
}

impl fmt::Display for DomainSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
