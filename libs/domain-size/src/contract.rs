//! Compile-time contract for types that carry a domain size.

use crate::record::DomainSize;

/// A type whose values range over a discrete domain of known cardinality.
///
/// Implemented by `#[derive(DomainSize)]`. The size is a property of the type,
/// so it can be read without an instance:
///
/// ```rust
/// use domain_size::{DomainSize, HasDomainSize};
///
/// #[derive(DomainSize)]
/// #[domain_size(value = 2)]
/// pub struct Coin;
///
/// fn cardinality<T: HasDomainSize>() -> u32 {
///     T::DOMAIN_SIZE.value()
/// }
///
/// assert_eq!(cardinality::<Coin>(), 2);
/// ```
///
/// The record is not inherited: `&T`, `Box<T>` and newtypes around `T` carry no
/// size unless they declare their own.
pub trait HasDomainSize {
    /// The record attached to this type.
    const DOMAIN_SIZE: DomainSize;
}
