//! Queryable type-metadata registry and instance factory
//!
//! This crate provides a unified metadata layer over two sources:
//! - Ahead-of-time descriptors, registered at process start by generated
//!   code, whose member handles are closures captured at generation time
//! - Introspected descriptors, derived on first request from a type's own
//!   [`Introspect`] implementation and cached thereafter
//!
//! Consumers query descriptors through a [`TypeRegistry`] and construct
//! instances through the factory in [`factory`], which resolves the best
//! matching constructor over a positional argument list and invokes its
//! handle regardless of which source produced it.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod factory;
pub mod introspect;
pub mod member;
pub mod registry;
pub mod ty;
pub mod value;

pub use factory::{create_instance, resolve_constructor};
pub use introspect::Introspect;
pub use member::{
    Accessibility, ConstructorDescriptor, FieldDescriptor, Handle, MethodDescriptor, Nullability,
    ParameterDescriptor, PropertyDescriptor,
};
pub use registry::TypeRegistry;
pub use ty::{EnumRepr, TypeDescriptor, TypeDescriptorBuilder, TypeKind};
pub use value::Value;

/// Reflection errors
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    /// No descriptor exists for the requested type
    #[error("no type descriptor found for `{type_name}`; register the type ahead of time or enable runtime introspection")]
    DescriptorNotFound {
        /// Display name of the requested type
        type_name: String,
    },

    /// The supplied argument list matches no declared constructor
    #[error("no constructor of `{type_name}` accepts {arg_count} argument(s)")]
    NoApplicableConstructor {
        /// Display name of the target type
        type_name: String,
        /// Number of arguments supplied
        arg_count: usize,
    },

    /// Two or more constructors are equally good matches
    #[error("constructor call on `{type_name}` with {arg_count} argument(s) is ambiguous")]
    AmbiguousConstructor {
        /// Display name of the target type
        type_name: String,
        /// Number of arguments supplied
        arg_count: usize,
    },

    /// The target type is a static container with no instances
    #[error("`{type_name}` is a static container and cannot be instantiated")]
    NotInstantiable {
        /// Display name of the target type
        type_name: String,
    },

    /// Write attempted on a read-only field
    #[error("field `{name}` is read-only")]
    ReadOnlyMember {
        /// Member name
        name: String,
    },

    /// Read attempted on a member without read capability
    #[error("member `{name}` is not readable")]
    NotReadable {
        /// Member name
        name: String,
    },

    /// Write attempted on a member without write capability
    #[error("member `{name}` is not writable")]
    NotWritable {
        /// Member name
        name: String,
    },

    /// Indexer accessed with the wrong number of index arguments
    #[error("indexer `{name}` expects {expected} index argument(s), got {actual}")]
    IndexerArity {
        /// Indexer name
        name: String,
        /// Declared indexer parameter count
        expected: usize,
        /// Supplied index argument count
        actual: usize,
    },

    /// Instance member accessed without an owning instance
    #[error("member `{name}` requires an instance")]
    MissingInstance {
        /// Member name
        name: String,
    },

    /// A handle was invoked with a wrong-length argument list
    #[error("expected {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Declared parameter count
        expected: usize,
        /// Supplied argument count
        actual: usize,
    },

    /// A value could not be converted to the requested type
    #[error("value is not a `{expected}`")]
    CastFailed {
        /// Name of the expected type
        expected: String,
    },
}
