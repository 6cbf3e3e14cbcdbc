//! Type-level domain-size metadata for factor-graph variable types.
//!
//! A variable type in a factor graph ranges over a discrete domain. This crate lets
//! the author of such a type record the domain's cardinality on the type itself,
//! so the host library can read it back without constructing a value.
//!
//! ```rust
//! use domain_size::{DomainSize, HasDomainSize, domain_size_of};
//!
//! #[derive(DomainSize)]
//! #[domain_size(6)]
//! pub struct Die;
//!
//! pub struct Unknown;
//!
//! // Compile-time query
//! assert_eq!(Die::DOMAIN_SIZE.value(), 6);
//!
//! // Runtime query, given only a type handle
//! assert_eq!(domain_size_of::<Die>(), Some(DomainSize::new(6)));
//! assert_eq!(domain_size_of::<Unknown>(), None);
//! ```
//!
//! Three pieces cooperate:
//! - [`DomainSize`]: the immutable record holding `value`
//! - [`HasDomainSize`]: the compile-time contract (`const DOMAIN_SIZE`)
//! - [`DomainSizeRegistry`]: a process-wide `TypeId` table filled at link time
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Lets `#[derive(DomainSize)]` expand to `::domain_size::...` inside this crate too.
extern crate self as domain_size;

pub mod contract;
pub mod error;
pub mod record;
pub mod registry;

pub use contract::HasDomainSize;
pub use error::RegistryError;
pub use record::DomainSize;
pub use registry::{
    DomainSizeEntry, DomainSizeRegistry, RegisteredDomainSize, domain_size_of,
    try_domain_size_of,
};

/// Derive macro attaching a [`DomainSize`] to a type.
///
/// See [`domain_size_macros::DomainSize`] for the accepted attribute forms.
pub use domain_size_macros::DomainSize;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}
