//! Type descriptors
//!
//! A [`TypeDescriptor`] aggregates a type's identity, structural
//! classification, and four lazily-materialized sequences of declared
//! members. Member sequences are seeded with initializer closures and
//! computed at most once, on first access; a descriptor that is never asked
//! for its methods never pays for enumerating them.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::member::{
    Accessibility, ConstructorDescriptor, FieldDescriptor, MethodDescriptor, PropertyDescriptor,
};
use crate::value::Value;

/// Structural classification of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Ordinary (reference-like) type
    Ordinary,
    /// Value struct
    ValueStruct,
    /// Enum
    Enum,
}

/// Underlying integral representation of an enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumRepr {
    /// `i8`
    I8,
    /// `u8`
    U8,
    /// `i16`
    I16,
    /// `u16`
    U16,
    /// `i32`
    I32,
    /// `u32`
    U32,
    /// `i64`
    I64,
    /// `u64`
    U64,
}

impl EnumRepr {
    /// Identity of the underlying primitive type
    pub fn type_id(&self) -> TypeId {
        match self {
            EnumRepr::I8 => TypeId::of::<i8>(),
            EnumRepr::U8 => TypeId::of::<u8>(),
            EnumRepr::I16 => TypeId::of::<i16>(),
            EnumRepr::U16 => TypeId::of::<u16>(),
            EnumRepr::I32 => TypeId::of::<i32>(),
            EnumRepr::U32 => TypeId::of::<u32>(),
            EnumRepr::I64 => TypeId::of::<i64>(),
            EnumRepr::U64 => TypeId::of::<u64>(),
        }
    }
}

type MemberInit<T> = Box<dyn Fn() -> Vec<T> + Send + Sync>;

/// Compute-once cell for a declared-member sequence
struct MemberCell<T> {
    cell: OnceCell<Vec<T>>,
    init: MemberInit<T>,
}

impl<T: 'static> MemberCell<T> {
    fn new(init: MemberInit<T>) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    fn empty() -> Self {
        Self::new(Box::new(Vec::new))
    }

    fn get(&self) -> &[T] {
        self.cell.get_or_init(|| (self.init)())
    }
}

/// Zero-value producer for value types (the all-defaults bit pattern)
pub type ZeroValueFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Metadata record for a single type
///
/// Created either by the ahead-of-time producer (via registration calls) or
/// by the introspection path (via [`Introspect`](crate::Introspect)); the
/// `is_introspected` tag records which. Immutable after construction apart
/// from the memoization of its member cells.
pub struct TypeDescriptor {
    ident: TypeId,
    name: String,
    accessibility: Accessibility,
    kind: TypeKind,
    enum_repr: Option<EnumRepr>,
    is_readonly: bool,
    is_static: bool,
    base_type: Option<TypeId>,
    is_introspected: bool,
    zero_value: Option<ZeroValueFn>,
    constructors: MemberCell<ConstructorDescriptor>,
    methods: MemberCell<MethodDescriptor>,
    fields: MemberCell<FieldDescriptor>,
    properties: MemberCell<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Start building a descriptor for `T`
    pub fn build<T: Any>(name: &str) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(TypeId::of::<T>(), name)
    }

    /// Process-unique identity of the described type
    pub fn ident(&self) -> TypeId {
        self.ident
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared accessibility
    pub fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    /// Structural classification
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Underlying integral representation, enums only
    pub fn enum_repr(&self) -> Option<EnumRepr> {
        self.enum_repr
    }

    /// Whether declared as an immutable value type
    pub fn is_readonly(&self) -> bool {
        self.is_readonly
    }

    /// Whether the type is a non-instantiable static container
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Identity of the base type, absent for value structs and enums
    pub fn base_type(&self) -> Option<TypeId> {
        self.base_type
    }

    /// Whether this descriptor was derived by introspection
    pub fn is_introspected(&self) -> bool {
        self.is_introspected
    }

    /// Whether the type has value semantics (struct or enum)
    pub fn is_value_type(&self) -> bool {
        matches!(self.kind, TypeKind::ValueStruct | TypeKind::Enum)
    }

    /// Produce the all-defaults instance, if the type provides one
    pub fn zero_value(&self) -> Option<Value> {
        self.zero_value.as_ref().map(|f| f())
    }

    /// Declared constructors, materialized on first access
    pub fn declared_constructors(&self) -> &[ConstructorDescriptor] {
        self.constructors.get()
    }

    /// Declared methods, materialized on first access
    pub fn declared_methods(&self) -> &[MethodDescriptor] {
        self.methods.get()
    }

    /// Declared fields, materialized on first access
    pub fn declared_fields(&self) -> &[FieldDescriptor] {
        self.fields.get()
    }

    /// Declared properties, materialized on first access
    pub fn declared_properties(&self) -> &[PropertyDescriptor] {
        self.properties.get()
    }

    /// Find a declared field by name
    pub fn find_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.declared_fields().iter().find(|f| f.name == name)
    }

    /// Find a declared method by name
    pub fn find_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.declared_methods().iter().find(|m| m.name == name)
    }

    /// Find a declared property by name
    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.declared_properties().iter().find(|p| p.name == name)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("is_introspected", &self.is_introspected)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TypeDescriptor`]
///
/// Used both by generated registration code (bound handles) and by
/// [`Introspect`](crate::Introspect) implementations (late-bound handles,
/// plus [`introspected`](TypeDescriptorBuilder::introspected)).
pub struct TypeDescriptorBuilder {
    ident: TypeId,
    name: String,
    accessibility: Accessibility,
    kind: TypeKind,
    enum_repr: Option<EnumRepr>,
    is_readonly: bool,
    is_static: bool,
    base_type: Option<TypeId>,
    is_introspected: bool,
    zero_value: Option<ZeroValueFn>,
    constructors: MemberCell<ConstructorDescriptor>,
    methods: MemberCell<MethodDescriptor>,
    fields: MemberCell<FieldDescriptor>,
    properties: MemberCell<PropertyDescriptor>,
}

impl TypeDescriptorBuilder {
    fn new(ident: TypeId, name: &str) -> Self {
        Self {
            ident,
            name: name.to_string(),
            accessibility: Accessibility::Public,
            kind: TypeKind::Ordinary,
            enum_repr: None,
            is_readonly: false,
            is_static: false,
            base_type: None,
            is_introspected: false,
            zero_value: None,
            constructors: MemberCell::empty(),
            methods: MemberCell::empty(),
            fields: MemberCell::empty(),
            properties: MemberCell::empty(),
        }
    }

    /// Set the declared accessibility
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Set the structural classification
    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the underlying integral representation (enums)
    pub fn enum_repr(mut self, repr: EnumRepr) -> Self {
        self.enum_repr = Some(repr);
        self
    }

    /// Mark as an immutable (readonly) value type
    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    /// Mark as a non-instantiable static container
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Record the base type identity
    pub fn base<B: Any>(mut self) -> Self {
        self.base_type = Some(TypeId::of::<B>());
        self
    }

    /// Tag the descriptor as derived by introspection
    pub fn introspected(mut self) -> Self {
        self.is_introspected = true;
        self
    }

    /// Provide the all-defaults instance for a value type
    pub fn zero_value_of<T: Any + Send + Sync + Default>(mut self) -> Self {
        self.zero_value = Some(Arc::new(|| Value::object(T::default())));
        self
    }

    /// Seed the declared-constructor sequence
    pub fn constructors(
        mut self,
        init: impl Fn() -> Vec<ConstructorDescriptor> + Send + Sync + 'static,
    ) -> Self {
        self.constructors = MemberCell::new(Box::new(init));
        self
    }

    /// Seed the declared-method sequence
    pub fn methods(
        mut self,
        init: impl Fn() -> Vec<MethodDescriptor> + Send + Sync + 'static,
    ) -> Self {
        self.methods = MemberCell::new(Box::new(init));
        self
    }

    /// Seed the declared-field sequence
    pub fn fields(
        mut self,
        init: impl Fn() -> Vec<FieldDescriptor> + Send + Sync + 'static,
    ) -> Self {
        self.fields = MemberCell::new(Box::new(init));
        self
    }

    /// Seed the declared-property sequence
    pub fn properties(
        mut self,
        init: impl Fn() -> Vec<PropertyDescriptor> + Send + Sync + 'static,
    ) -> Self {
        self.properties = MemberCell::new(Box::new(init));
        self
    }

    /// Finalize the descriptor
    pub fn finish(self) -> TypeDescriptor {
        TypeDescriptor {
            ident: self.ident,
            name: self.name,
            accessibility: self.accessibility,
            kind: self.kind,
            enum_repr: self.enum_repr,
            is_readonly: self.is_readonly,
            is_static: self.is_static,
            base_type: self.base_type,
            is_introspected: self.is_introspected,
            zero_value: self.zero_value,
            constructors: self.constructors,
            methods: self.methods,
            fields: self.fields,
            properties: self.properties,
        }
    }
}
