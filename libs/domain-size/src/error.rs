use thiserror::Error;

use crate::record::DomainSize;

/// Errors surfaced by the runtime registry.
///
/// A type without a domain size is not an error; queries return `None` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("type '{type_name}' is registered with conflicting domain sizes {first} and {second}")]
    ConflictingDomainSize {
        type_name: &'static str,
        first: DomainSize,
        second: DomainSize,
    },
}
