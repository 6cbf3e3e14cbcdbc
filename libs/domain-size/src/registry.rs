//! Runtime lookup of domain sizes by type handle.
//!
//! `#[derive(DomainSize)]` and [`register_domain_size!`](crate::register_domain_size)
//! submit a [`DomainSizeEntry`] through `inventory` at link time. The first query
//! collects every entry into an immutable [`DomainSizeRegistry`], which is shared
//! by the whole process from then on.

use std::any::{self, TypeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use crate::error::RegistryError;
use crate::record::DomainSize;

/// A link-time registration of one type's domain size.
///
/// Built through [`DomainSizeEntry::of`], normally from a macro expansion.
#[derive(Debug, Clone, Copy)]
pub struct DomainSizeEntry {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    size: DomainSize,
}

impl DomainSizeEntry {
    /// Registration of `size` for type `T`.
    #[must_use]
    pub const fn of<T: ?Sized + 'static>(size: DomainSize) -> Self {
        Self {
            type_id: TypeId::of::<T>,
            type_name: any::type_name::<T>,
            size,
        }
    }

    #[must_use]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    #[must_use]
    pub const fn size(&self) -> DomainSize {
        self.size
    }
}

inventory::collect!(DomainSizeEntry);

/// One registered type, as listed by [`DomainSizeRegistry::entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegisteredDomainSize {
    pub type_name: &'static str,
    pub size: DomainSize,
}

/// Immutable `TypeId -> DomainSize` table.
///
/// Duplicate registrations of a type with the same size collapse into one.
/// Registrations with different sizes make the type a conflict: it is no longer
/// answered by [`get`](Self::get) and shows up in [`conflicts`](Self::conflicts).
#[derive(Debug, Default)]
pub struct DomainSizeRegistry {
    sizes: HashMap<TypeId, RegisteredDomainSize>,
    conflicts: HashMap<TypeId, RegistryError>,
}

impl DomainSizeRegistry {
    /// Build a registry from an explicit set of entries.
    #[must_use]
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a DomainSizeEntry>,
    {
        let mut registry = Self::default();
        for entry in entries {
            registry.insert(entry);
        }

        tracing::debug!(
            registered = registry.sizes.len(),
            conflicts = registry.conflicts.len(),
            "Built domain size registry"
        );
        registry
    }

    /// The process-wide registry of every linked-in registration.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<DomainSizeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::from_entries(inventory::iter::<DomainSizeEntry>))
    }

    fn insert(&mut self, entry: &DomainSizeEntry) {
        let type_id = entry.type_id();
        let type_name = entry.type_name();
        let size = entry.size();

        if let Some(RegistryError::ConflictingDomainSize { first, second, .. }) =
            self.conflicts.get(&type_id)
        {
            tracing::warn!(
                type_name,
                size = size.value(),
                first = first.value(),
                second = second.value(),
                "Ignoring registration of a type with conflicting domain sizes"
            );
            return;
        }

        match self.sizes.entry(type_id) {
            Entry::Vacant(slot) => {
                slot.insert(RegisteredDomainSize { type_name, size });
            }
            Entry::Occupied(slot) if slot.get().size == size => {
                tracing::debug!(
                    type_name,
                    size = size.value(),
                    "Duplicate domain size registration with identical size"
                );
            }
            Entry::Occupied(slot) => {
                let first = slot.remove().size;
                tracing::warn!(
                    type_name,
                    first = first.value(),
                    second = size.value(),
                    "Conflicting domain size registrations"
                );
                self.conflicts.insert(
                    type_id,
                    RegistryError::ConflictingDomainSize {
                        type_name,
                        first,
                        second: size,
                    },
                );
            }
        }
    }

    /// Domain size of `T`, or `None` when `T` carries none.
    #[must_use]
    pub fn get<T: ?Sized + 'static>(&self) -> Option<DomainSize> {
        self.get_by_id(TypeId::of::<T>())
    }

    /// Domain size of the type identified by `type_id`.
    #[must_use]
    pub fn get_by_id(&self, type_id: TypeId) -> Option<DomainSize> {
        self.sizes.get(&type_id).map(|registered| registered.size)
    }

    /// Like [`get`](Self::get), but reports conflicting registrations.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ConflictingDomainSize`] if `T` was registered
    /// more than once with different sizes.
    pub fn try_get<T: ?Sized + 'static>(&self) -> Result<Option<DomainSize>, RegistryError> {
        let type_id = TypeId::of::<T>();
        match self.conflicts.get(&type_id) {
            Some(err) => Err(err.clone()),
            None => Ok(self.get_by_id(type_id)),
        }
    }

    #[must_use]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.sizes.contains_key(&TypeId::of::<T>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// All answered registrations, sorted by type name.
    #[must_use]
    pub fn entries(&self) -> Vec<RegisteredDomainSize> {
        let mut entries: Vec<_> = self.sizes.values().copied().collect();
        entries.sort_by_key(|registered| registered.type_name);
        entries
    }

    /// Conflicting registrations, sorted by type name.
    #[must_use]
    pub fn conflicts(&self) -> Vec<RegistryError> {
        let mut conflicts: Vec<_> = self.conflicts.values().cloned().collect();
        conflicts.sort_by_key(|RegistryError::ConflictingDomainSize { type_name, .. }| *type_name);
        conflicts
    }

    /// Check that no type was registered with conflicting sizes.
    ///
    /// # Errors
    ///
    /// Returns the first conflict (by type name) if any exists.
    pub fn validate(&self) -> Result<(), RegistryError> {
        match self.conflicts().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Domain size of `T` from the global registry.
///
/// Returns `None` for types that were never registered, and for types with
/// conflicting registrations.
#[must_use]
pub fn domain_size_of<T: ?Sized + 'static>() -> Option<DomainSize> {
    DomainSizeRegistry::global().get::<T>()
}

/// Domain size of `T` from the global registry, reporting conflicts.
///
/// # Errors
///
/// Returns [`RegistryError::ConflictingDomainSize`] if `T` was registered more
/// than once with different sizes.
pub fn try_domain_size_of<T: ?Sized + 'static>() -> Result<Option<DomainSize>, RegistryError> {
    DomainSizeRegistry::global().try_get::<T>()
}

/// Register a type in the global registry.
///
/// `register_domain_size!(Ty)` uses `<Ty as HasDomainSize>::DOMAIN_SIZE`. This is
/// how concrete instantiations of generic types become queryable at runtime.
///
/// `register_domain_size!(Ty, n)` registers any `'static` type with size `n`,
/// including types from other crates.
///
/// ```rust
/// use domain_size::{DomainSize, domain_size_of, register_domain_size};
///
/// #[derive(DomainSize)]
/// #[domain_size(4)]
/// pub struct Slot<T>(std::marker::PhantomData<T>);
///
/// register_domain_size!(Slot<u8>);
/// register_domain_size!(bool, 2);
///
/// assert_eq!(domain_size_of::<Slot<u8>>(), Some(DomainSize::new(4)));
/// assert_eq!(domain_size_of::<Slot<u16>>(), None);
/// assert_eq!(domain_size_of::<bool>(), Some(DomainSize::new(2)));
/// ```
#[macro_export]
macro_rules! register_domain_size {
    ($ty:ty $(,)?) => {
        $crate::__private::inventory::submit! {
            $crate::DomainSizeEntry::of::<$ty>(
                <$ty as $crate::HasDomainSize>::DOMAIN_SIZE
            )
        }
    };
    ($ty:ty, $value:expr $(,)?) => {
        $crate::__private::inventory::submit! {
            $crate::DomainSizeEntry::of::<$ty>($crate::DomainSize::new($value))
        }
    };
}
