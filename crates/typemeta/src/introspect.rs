//! On-demand descriptor derivation
//!
//! Types that opt into the fallback metadata path implement [`Introspect`]:
//! a structural self-description built with the same
//! [`TypeDescriptorBuilder`](crate::TypeDescriptorBuilder) as generated
//! registration code, but tagged as introspected and carrying late-bound
//! member handles. The registry calls [`Introspect::introspect`] at most
//! once per type, on the first lookup that permits introspection, and caches
//! the result for the process lifetime.

use std::any::Any;

use crate::ty::TypeDescriptor;

/// A type that can derive its own descriptor on demand
///
/// Implementations build the descriptor with
/// [`TypeDescriptor::build`], tag it with
/// [`introspected`](crate::TypeDescriptorBuilder::introspected), and use the
/// `late_bound` member constructors so the invocation strategy is recorded
/// correctly. Enum implementations expose each named member as a static
/// field whose getter returns the member's underlying integral value, in
/// declaration order.
pub trait Introspect: Any + Send + Sync + Sized {
    /// Derive this type's descriptor from its own structure
    fn introspect() -> TypeDescriptor;
}
