// Proc-macro crate for domain-size metadata
//
//! # domain-size-macros
//!
//! ## `#[derive(DomainSize)]`
//!
//! Attaches the cardinality of a discrete domain to a type. The derive implements
//! `domain_size::HasDomainSize` and, for non-generic types, registers the type in
//! the runtime registry so it can be queried by `TypeId`.
//!
//! ### Example
//!
//! ```ignore
//! use domain_size::DomainSize;
//!
//! #[derive(DomainSize)]
//! #[domain_size(6)]
//! pub struct Die;
//! ```
//!
//! Use the re-export from `domain_size`; the expansion refers to `::domain_size`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for implementing `HasDomainSize`.
///
/// # Attributes
///
/// Exactly one `#[domain_size(...)]` attribute is required:
///
/// - `#[domain_size(6)]` - integer literal
/// - `#[domain_size(value = 6)]` - same, with the key spelled out
/// - `#[domain_size(LABELS)]` - path to a `u32` constant
///
/// Literals must be non-negative and fit in `u32`.
///
/// # Generic types
///
/// Generic types get the trait impl for every instantiation but are not
/// registered, since they have no single `TypeId`. Register the instantiations
/// you need with `domain_size::register_domain_size!(MyType<u8>)`.
///
/// # Example
///
/// ```ignore
/// #[derive(DomainSize)]
/// #[domain_size(value = 2)]
/// pub enum Coin {
///     Heads,
///     Tails,
/// }
/// ```
#[proc_macro_derive(DomainSize, attributes(domain_size))]
pub fn derive_domain_size(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive::expand_derive_domain_size(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
