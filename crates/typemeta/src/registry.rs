//! Two-tier type registry
//!
//! Process-wide state behind the metadata API: an ahead-of-time map
//! populated by generated registration calls before first use, and an
//! introspection cache populated lazily on first lookup. An ahead-of-time
//! entry always shadows introspection for the same identity; the cache is a
//! pure fallback.
//!
//! Registration is expected to finish before concurrent lookups begin, but
//! both maps tolerate concurrent readers, and the cache guarantees that at
//! most one derived descriptor is ever stored per identity even under
//! concurrent first access.

use std::any::{type_name, TypeId};
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::factory;
use crate::introspect::Introspect;
use crate::ty::TypeDescriptor;
use crate::value::Value;
use crate::ReflectError;

static GLOBAL: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

/// Registry of type descriptors from both metadata sources
pub struct TypeRegistry {
    /// Ahead-of-time descriptors, first registration wins
    registered: RwLock<FxHashMap<TypeId, Arc<TypeDescriptor>>>,
    /// Introspected descriptors, derived at most once per identity
    derived: DashMap<TypeId, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            registered: RwLock::new(FxHashMap::default()),
            derived: DashMap::new(),
        }
    }

    /// The process-wide registry instance
    ///
    /// Generated registration calls target this instance at process start;
    /// tests construct isolated registries with [`TypeRegistry::new`].
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Register an ahead-of-time descriptor
    ///
    /// No-op if a descriptor for the same identity is already registered;
    /// the first registration wins and is never overwritten.
    pub fn register(&self, descriptor: TypeDescriptor) {
        let mut map = self.registered.write();
        map.entry(descriptor.ident())
            .or_insert_with(|| Arc::new(descriptor));
    }

    /// Look up a descriptor by identity
    ///
    /// Consults the ahead-of-time map first, then (when permitted)
    /// descriptors already cached by introspection. Identity alone cannot
    /// derive a new descriptor; use [`lookup_of`](Self::lookup_of) for that.
    pub fn lookup(&self, ident: TypeId, allow_introspection: bool) -> Option<Arc<TypeDescriptor>> {
        if let Some(descriptor) = self.registered.read().get(&ident) {
            return Some(descriptor.clone());
        }
        if allow_introspection {
            return self.derived.get(&ident).map(|entry| entry.value().clone());
        }
        None
    }

    /// Look up the descriptor for `T`, deriving one on demand if permitted
    ///
    /// On a miss with introspection allowed, derives `T::introspect()` and
    /// caches it; concurrent first lookups for the same `T` store exactly
    /// one entry and all receive it.
    pub fn lookup_of<T: Introspect>(&self, allow_introspection: bool) -> Option<Arc<TypeDescriptor>> {
        let ident = TypeId::of::<T>();
        if let Some(descriptor) = self.registered.read().get(&ident) {
            return Some(descriptor.clone());
        }
        if allow_introspection {
            let entry = self
                .derived
                .entry(ident)
                .or_insert_with(|| Arc::new(T::introspect()));
            return Some(entry.value().clone());
        }
        None
    }

    /// As [`lookup`](Self::lookup), but absence is an error
    pub fn require(
        &self,
        ident: TypeId,
        allow_introspection: bool,
    ) -> Result<Arc<TypeDescriptor>, ReflectError> {
        self.lookup(ident, allow_introspection)
            .ok_or_else(|| ReflectError::DescriptorNotFound {
                // Identity-only lookups have no display name to report.
                type_name: format!("{ident:?} (name unknown)"),
            })
    }

    /// As [`lookup_of`](Self::lookup_of), but absence is an error
    pub fn require_of<T: Introspect>(
        &self,
        allow_introspection: bool,
    ) -> Result<Arc<TypeDescriptor>, ReflectError> {
        self.lookup_of::<T>(allow_introspection)
            .ok_or_else(|| ReflectError::DescriptorNotFound {
                type_name: type_name::<T>().to_string(),
            })
    }

    /// Snapshot of all ahead-of-time descriptors
    ///
    /// Introspected entries are a fallback mechanism, not part of the
    /// declared universe, and are excluded.
    pub fn all_registered(&self) -> Vec<Arc<TypeDescriptor>> {
        self.registered.read().values().cloned().collect()
    }

    /// Construct a `T` from a registered descriptor and positional arguments
    ///
    /// Ahead-of-time only; fails with
    /// [`ReflectError::DescriptorNotFound`] when `T` was never registered.
    pub fn create<T: std::any::Any + Send + Sync>(
        &self,
        args: &[Value],
    ) -> Result<T, ReflectError> {
        let descriptor = self.lookup(TypeId::of::<T>(), false).ok_or_else(|| {
            ReflectError::DescriptorNotFound {
                type_name: type_name::<T>().to_string(),
            }
        })?;
        factory::create_instance(&descriptor, args)?.take()
    }

    /// Construct a `T`, optionally deriving its descriptor by introspection
    pub fn create_with<T: Introspect>(
        &self,
        args: &[Value],
        allow_introspection: bool,
    ) -> Result<T, ReflectError> {
        let descriptor = self.require_of::<T>(allow_introspection)?;
        factory::create_instance(&descriptor, args)?.take()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
