//! Member descriptors and invocation handles
//!
//! Every member descriptor pairs metadata (name, accessibility, flags) with
//! an opaque invocation handle. Handles come in two flavors behind one
//! [`Handle`] enum: `Bound` closures captured at generation time by the
//! ahead-of-time producer, and `LateBound` closures built by the
//! introspection path. Callers invoke either transparently; only the tag
//! records which strategy produced the member.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::value::Value;
use crate::ReflectError;

/// Declared accessibility of a type or member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    /// Visible everywhere
    Public,
    /// Visible within the declaring assembly/crate
    Internal,
    /// Visible to the declaring type and subtypes
    Protected,
    /// Visible to the declaring type only
    Private,
}

/// Nullability annotation on a type usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    /// No annotation
    None,
    /// Explicitly annotated as nullable
    Annotated,
}

/// Invocation handle tagged with the strategy that produced it
///
/// `Bound` handles were captured once at generation time; `LateBound`
/// handles were built on demand by the introspection path. Both wrap the
/// same callable shape and invoke identically.
pub enum Handle<F> {
    /// Pre-bound closure from the ahead-of-time producer
    Bound(F),
    /// Closure built by on-demand introspection
    LateBound(F),
}

impl<F> Handle<F> {
    /// The wrapped callable, regardless of strategy
    pub fn callable(&self) -> &F {
        match self {
            Handle::Bound(f) | Handle::LateBound(f) => f,
        }
    }

    /// Whether this handle came from the introspection path
    pub fn is_late_bound(&self) -> bool {
        matches!(self, Handle::LateBound(_))
    }
}

impl<F: Clone> Clone for Handle<F> {
    fn clone(&self) -> Self {
        match self {
            Handle::Bound(f) => Handle::Bound(f.clone()),
            Handle::LateBound(f) => Handle::LateBound(f.clone()),
        }
    }
}

impl<F> fmt::Debug for Handle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handle::Bound(_) => f.write_str("Bound"),
            Handle::LateBound(_) => f.write_str("LateBound"),
        }
    }
}

/// Constructor callable: full argument list in, constructed instance out
pub type ConstructFn = Arc<dyn Fn(&[Value]) -> Result<Value, ReflectError> + Send + Sync>;

/// Method callable: optional instance plus argument list in, result out
pub type InvokeFn =
    Arc<dyn Fn(Option<&Value>, &[Value]) -> Result<Value, ReflectError> + Send + Sync>;

/// Field/property read callable
pub type GetFn = Arc<dyn Fn(Option<&Value>) -> Result<Value, ReflectError> + Send + Sync>;

/// Field write callable
pub type SetFn = Arc<dyn Fn(Option<&mut Value>, Value) -> Result<(), ReflectError> + Send + Sync>;

/// Property read callable taking indexer arguments (empty for plain properties)
pub type IndexGetFn =
    Arc<dyn Fn(Option<&Value>, &[Value]) -> Result<Value, ReflectError> + Send + Sync>;

/// Property write callable taking indexer arguments (empty for plain properties)
pub type IndexSetFn = Arc<
    dyn Fn(Option<&mut Value>, &[Value], Value) -> Result<(), ReflectError> + Send + Sync,
>;

/// Descriptor for a single parameter
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// Parameter name
    pub name: String,
    /// Identity of the declared parameter type
    pub param_type: TypeId,
    /// Whether the parameter declares a default value
    pub has_default: bool,
    /// The default value, meaningful only when `has_default` is set
    pub default_value: Option<Value>,
    /// Nullability annotation
    pub nullability: Nullability,
}

impl ParameterDescriptor {
    /// New parameter of declared type `T` with no default
    pub fn new<T: Any>(name: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: TypeId::of::<T>(),
            has_default: false,
            default_value: None,
            nullability: Nullability::None,
        }
    }

    /// Attach a default value
    pub fn with_default(mut self, value: Value) -> Self {
        self.has_default = true;
        self.default_value = Some(value);
        self
    }

    /// Mark the parameter type as nullability-annotated
    pub fn nullable(mut self) -> Self {
        self.nullability = Nullability::Annotated;
        self
    }
}

/// Descriptor for a declared constructor
#[derive(Debug, Clone)]
pub struct ConstructorDescriptor {
    /// Constructor name (conventionally `new`)
    pub name: String,
    /// Declared accessibility
    pub accessibility: Accessibility,
    /// Whether this is a static (type-initializer) constructor
    pub is_static: bool,
    /// Ordered parameter descriptors
    pub parameters: Vec<ParameterDescriptor>,
    handle: Handle<ConstructFn>,
}

impl ConstructorDescriptor {
    /// Constructor with a pre-bound handle (ahead-of-time path)
    pub fn bound(
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        construct: impl Fn(&[Value]) -> Result<Value, ReflectError> + Send + Sync + 'static,
    ) -> Self {
        Self::with_handle(name, parameters, Handle::Bound(Arc::new(construct)))
    }

    /// Constructor with a late-bound handle (introspection path)
    pub fn late_bound(
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        construct: impl Fn(&[Value]) -> Result<Value, ReflectError> + Send + Sync + 'static,
    ) -> Self {
        Self::with_handle(name, parameters, Handle::LateBound(Arc::new(construct)))
    }

    fn with_handle(
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        handle: Handle<ConstructFn>,
    ) -> Self {
        Self {
            name: name.to_string(),
            accessibility: Accessibility::Public,
            is_static: false,
            parameters,
            handle,
        }
    }

    /// Override the declared accessibility
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Mark as a static constructor
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Whether the handle came from the introspection path
    pub fn is_late_bound(&self) -> bool {
        self.handle.is_late_bound()
    }

    /// Invoke the constructor with a fully substituted argument list
    ///
    /// The argument list must already match the declared parameter count;
    /// default substitution happens in the factory before invocation.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, ReflectError> {
        if args.len() != self.parameters.len() {
            return Err(ReflectError::ArityMismatch {
                expected: self.parameters.len(),
                actual: args.len(),
            });
        }
        (self.handle.callable())(args)
    }
}

/// Descriptor for a declared method
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// Method name
    pub name: String,
    /// Declared accessibility
    pub accessibility: Accessibility,
    /// Whether the method is static
    pub is_static: bool,
    /// Identity of the declared return type
    pub return_type: TypeId,
    /// Nullability annotation on the return type
    pub return_nullability: Nullability,
    /// Ordered parameter descriptors
    pub parameters: Vec<ParameterDescriptor>,
    handle: Handle<InvokeFn>,
}

impl MethodDescriptor {
    /// Method with a pre-bound handle; `R` is the declared return type
    pub fn bound<R: Any>(
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        invoke: impl Fn(Option<&Value>, &[Value]) -> Result<Value, ReflectError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self::with_handle::<R>(name, parameters, Handle::Bound(Arc::new(invoke)))
    }

    /// Method with a late-bound handle; `R` is the declared return type
    pub fn late_bound<R: Any>(
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        invoke: impl Fn(Option<&Value>, &[Value]) -> Result<Value, ReflectError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self::with_handle::<R>(name, parameters, Handle::LateBound(Arc::new(invoke)))
    }

    fn with_handle<R: Any>(
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        handle: Handle<InvokeFn>,
    ) -> Self {
        Self {
            name: name.to_string(),
            accessibility: Accessibility::Public,
            is_static: false,
            return_type: TypeId::of::<R>(),
            return_nullability: Nullability::None,
            parameters,
            handle,
        }
    }

    /// Override the declared accessibility
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Mark as a static method
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the return type as nullability-annotated
    pub fn nullable_return(mut self) -> Self {
        self.return_nullability = Nullability::Annotated;
        self
    }

    /// Whether the handle came from the introspection path
    pub fn is_late_bound(&self) -> bool {
        self.handle.is_late_bound()
    }

    /// Invoke the method against an optional owning instance
    pub fn invoke(
        &self,
        instance: Option<&Value>,
        args: &[Value],
    ) -> Result<Value, ReflectError> {
        if args.len() != self.parameters.len() {
            return Err(ReflectError::ArityMismatch {
                expected: self.parameters.len(),
                actual: args.len(),
            });
        }
        (self.handle.callable())(instance, args)
    }
}

/// Descriptor for a declared field
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Declared accessibility
    pub accessibility: Accessibility,
    /// Whether the field is static
    pub is_static: bool,
    /// Identity of the declared field type
    pub field_type: TypeId,
    /// Whether the field is read-only
    pub is_readonly: bool,
    /// Whether the field is declared required
    pub is_required: bool,
    /// Nullability annotation
    pub nullability: Nullability,
    getter: Handle<GetFn>,
    setter: Option<Handle<SetFn>>,
}

impl FieldDescriptor {
    /// Field with a pre-bound getter; `T` is the declared field type
    pub fn bound<T: Any>(
        name: &str,
        get: impl Fn(Option<&Value>) -> Result<Value, ReflectError> + Send + Sync + 'static,
    ) -> Self {
        Self::with_getter::<T>(name, Handle::Bound(Arc::new(get)))
    }

    /// Field with a late-bound getter; `T` is the declared field type
    pub fn late_bound<T: Any>(
        name: &str,
        get: impl Fn(Option<&Value>) -> Result<Value, ReflectError> + Send + Sync + 'static,
    ) -> Self {
        Self::with_getter::<T>(name, Handle::LateBound(Arc::new(get)))
    }

    fn with_getter<T: Any>(name: &str, getter: Handle<GetFn>) -> Self {
        Self {
            name: name.to_string(),
            accessibility: Accessibility::Public,
            is_static: false,
            field_type: TypeId::of::<T>(),
            is_readonly: false,
            is_required: false,
            nullability: Nullability::None,
            getter,
            setter: None,
        }
    }

    /// Attach a write handle, using the same strategy as the getter
    pub fn with_setter(
        mut self,
        set: impl Fn(Option<&mut Value>, Value) -> Result<(), ReflectError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        let f: SetFn = Arc::new(set);
        self.setter = Some(match self.getter {
            Handle::Bound(_) => Handle::Bound(f),
            Handle::LateBound(_) => Handle::LateBound(f),
        });
        self
    }

    /// Override the declared accessibility
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Mark as a static field
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as read-only
    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    /// Mark as declared required
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Mark the field type as nullability-annotated
    pub fn nullable(mut self) -> Self {
        self.nullability = Nullability::Annotated;
        self
    }

    /// Whether the handles came from the introspection path
    pub fn is_late_bound(&self) -> bool {
        self.getter.is_late_bound()
    }

    /// Read the field from an optional owning instance (omitted for statics)
    pub fn get(&self, instance: Option<&Value>) -> Result<Value, ReflectError> {
        (self.getter.callable())(instance)
    }

    /// Write the field on an optional owning instance
    ///
    /// Fails with [`ReflectError::ReadOnlyMember`] for read-only fields and
    /// [`ReflectError::NotWritable`] when no write handle exists.
    pub fn set(&self, instance: Option<&mut Value>, value: Value) -> Result<(), ReflectError> {
        if self.is_readonly {
            return Err(ReflectError::ReadOnlyMember {
                name: self.name.clone(),
            });
        }
        let setter = self.setter.as_ref().ok_or_else(|| ReflectError::NotWritable {
            name: self.name.clone(),
        })?;
        (setter.callable())(instance, value)
    }
}

/// Descriptor for a declared property
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Property name
    pub name: String,
    /// Declared accessibility
    pub accessibility: Accessibility,
    /// Whether the property is static
    pub is_static: bool,
    /// Identity of the declared property type
    pub property_type: TypeId,
    /// Whether the property has a read accessor
    pub can_read: bool,
    /// Whether the property has a write accessor
    pub can_write: bool,
    /// Whether the write accessor is init-only
    pub is_init_only: bool,
    /// Whether the property is declared required
    pub is_required: bool,
    /// Whether the property is abstract
    pub is_abstract: bool,
    /// Whether the property is virtual
    pub is_virtual: bool,
    /// Whether the property is an indexer
    pub is_indexer: bool,
    /// Indexer parameter descriptors, empty for plain properties
    pub indexer_parameters: Vec<ParameterDescriptor>,
    /// Nullability annotation
    pub nullability: Nullability,
    late_bound: bool,
    getter: Option<Handle<IndexGetFn>>,
    setter: Option<Handle<IndexSetFn>>,
}

impl PropertyDescriptor {
    /// Property shell with pre-bound accessor strategy; `T` is the declared type
    pub fn bound<T: Any>(name: &str) -> Self {
        Self::shell::<T>(name, false)
    }

    /// Property shell with late-bound accessor strategy; `T` is the declared type
    pub fn late_bound<T: Any>(name: &str) -> Self {
        Self::shell::<T>(name, true)
    }

    fn shell<T: Any>(name: &str, late_bound: bool) -> Self {
        Self {
            name: name.to_string(),
            accessibility: Accessibility::Public,
            is_static: false,
            property_type: TypeId::of::<T>(),
            can_read: false,
            can_write: false,
            is_init_only: false,
            is_required: false,
            is_abstract: false,
            is_virtual: false,
            is_indexer: false,
            indexer_parameters: Vec::new(),
            nullability: Nullability::None,
            late_bound,
            getter: None,
            setter: None,
        }
    }

    fn wrap<F>(&self, f: F) -> Handle<F> {
        if self.late_bound {
            Handle::LateBound(f)
        } else {
            Handle::Bound(f)
        }
    }

    /// Attach a read accessor
    pub fn with_getter(
        mut self,
        get: impl Fn(Option<&Value>, &[Value]) -> Result<Value, ReflectError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        let f: IndexGetFn = Arc::new(get);
        self.getter = Some(self.wrap(f));
        self.can_read = true;
        self
    }

    /// Attach a write accessor
    pub fn with_setter(
        mut self,
        set: impl Fn(Option<&mut Value>, &[Value], Value) -> Result<(), ReflectError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        let f: IndexSetFn = Arc::new(set);
        self.setter = Some(self.wrap(f));
        self.can_write = true;
        self
    }

    /// Declare the property as an indexer with the given index parameters
    pub fn indexer(mut self, parameters: Vec<ParameterDescriptor>) -> Self {
        self.is_indexer = !parameters.is_empty();
        self.indexer_parameters = parameters;
        self
    }

    /// Override the declared accessibility
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Mark as a static property
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the write accessor as init-only
    pub fn init_only(mut self) -> Self {
        self.is_init_only = true;
        self
    }

    /// Mark as declared required
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Mark as abstract
    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark as virtual
    pub fn as_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Mark the property type as nullability-annotated
    pub fn nullable(mut self) -> Self {
        self.nullability = Nullability::Annotated;
        self
    }

    /// Whether the accessors came from the introspection path
    pub fn is_late_bound(&self) -> bool {
        self.late_bound
    }

    /// Read a plain (non-indexed) property
    pub fn get(&self, instance: Option<&Value>) -> Result<Value, ReflectError> {
        self.get_indexed(instance, &[])
    }

    /// Read the property with indexer arguments
    pub fn get_indexed(
        &self,
        instance: Option<&Value>,
        index: &[Value],
    ) -> Result<Value, ReflectError> {
        if index.len() != self.indexer_parameters.len() {
            return Err(ReflectError::IndexerArity {
                name: self.name.clone(),
                expected: self.indexer_parameters.len(),
                actual: index.len(),
            });
        }
        let getter = self.getter.as_ref().ok_or_else(|| ReflectError::NotReadable {
            name: self.name.clone(),
        })?;
        (getter.callable())(instance, index)
    }

    /// Write a plain (non-indexed) property
    pub fn set(&self, instance: Option<&mut Value>, value: Value) -> Result<(), ReflectError> {
        self.set_indexed(instance, &[], value)
    }

    /// Write the property with indexer arguments
    pub fn set_indexed(
        &self,
        instance: Option<&mut Value>,
        index: &[Value],
        value: Value,
    ) -> Result<(), ReflectError> {
        if index.len() != self.indexer_parameters.len() {
            return Err(ReflectError::IndexerArity {
                name: self.name.clone(),
                expected: self.indexer_parameters.len(),
                actual: index.len(),
            });
        }
        let setter = self.setter.as_ref().ok_or_else(|| ReflectError::NotWritable {
            name: self.name.clone(),
        })?;
        (setter.callable())(instance, index, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn x_field() -> FieldDescriptor {
        FieldDescriptor::bound::<i32>("x", |instance| {
            let point = Value::instance_ref::<Point>(instance, "x")?;
            Ok(Value::I32(point.x))
        })
        .with_setter(|instance, value| {
            let x = value.to_i32()?;
            let point = Value::instance_mut::<Point>(instance, "x")?;
            point.x = x;
            Ok(())
        })
    }

    #[test]
    fn test_field_get_and_set() {
        let field = x_field();
        let mut instance = Value::object(Point { x: 3, y: 4 });

        assert_eq!(field.get(Some(&instance)).unwrap(), Value::I32(3));

        field.set(Some(&mut instance), Value::I32(9)).unwrap();
        assert_eq!(field.get(Some(&instance)).unwrap(), Value::I32(9));
    }

    #[test]
    fn test_field_set_readonly_fails() {
        let field = x_field().readonly();
        let mut instance = Value::object(Point { x: 3, y: 4 });

        let err = field.set(Some(&mut instance), Value::I32(9)).unwrap_err();
        assert!(matches!(err, ReflectError::ReadOnlyMember { name } if name == "x"));
    }

    #[test]
    fn test_field_without_setter_not_writable() {
        let field = FieldDescriptor::bound::<i32>("x", |_| Ok(Value::I32(0)));
        let err = field.set(None, Value::I32(1)).unwrap_err();
        assert!(matches!(err, ReflectError::NotWritable { .. }));
    }

    #[test]
    fn test_static_field_reads_without_instance() {
        let field = FieldDescriptor::bound::<i32>("answer", |_| Ok(Value::I32(42))).as_static();
        assert_eq!(field.get(None).unwrap(), Value::I32(42));
    }

    #[test]
    fn test_constructor_invoke_checks_arity() {
        let ctor = ConstructorDescriptor::bound(
            "new",
            vec![ParameterDescriptor::new::<i32>("x")],
            |args| {
                Ok(Value::object(Point {
                    x: args[0].to_i32()?,
                    y: 0,
                }))
            },
        );

        let err = ctor.invoke(&[]).unwrap_err();
        assert!(matches!(
            err,
            ReflectError::ArityMismatch {
                expected: 1,
                actual: 0
            }
        ));

        let instance = ctor.invoke(&[Value::I32(5)]).unwrap();
        assert_eq!(instance.downcast_ref::<Point>().unwrap().x, 5);
    }

    #[test]
    fn test_method_invoke_with_instance() {
        let method = MethodDescriptor::bound::<i32>(
            "sum",
            vec![ParameterDescriptor::new::<i32>("extra")],
            |instance, args| {
                let point = Value::instance_ref::<Point>(instance, "sum")?;
                Ok(Value::I32(point.x + point.y + args[0].to_i32()?))
            },
        );

        let instance = Value::object(Point { x: 1, y: 2 });
        let result = method.invoke(Some(&instance), &[Value::I32(10)]).unwrap();
        assert_eq!(result, Value::I32(13));

        let err = method.invoke(None, &[Value::I32(10)]).unwrap_err();
        assert!(matches!(err, ReflectError::MissingInstance { .. }));
    }

    #[test]
    fn test_property_accessors() {
        let property = PropertyDescriptor::bound::<i32>("X")
            .with_getter(|instance, _| {
                let point = Value::instance_ref::<Point>(instance, "X")?;
                Ok(Value::I32(point.x))
            })
            .with_setter(|instance, _, value| {
                let x = value.to_i32()?;
                let point = Value::instance_mut::<Point>(instance, "X")?;
                point.x = x;
                Ok(())
            });

        assert!(property.can_read);
        assert!(property.can_write);

        let mut instance = Value::object(Point { x: 7, y: 0 });
        assert_eq!(property.get(Some(&instance)).unwrap(), Value::I32(7));
        property.set(Some(&mut instance), Value::I32(8)).unwrap();
        assert_eq!(property.get(Some(&instance)).unwrap(), Value::I32(8));
    }

    #[test]
    fn test_property_without_getter_not_readable() {
        let property = PropertyDescriptor::bound::<i32>("WriteOnly")
            .with_setter(|_, _, _| Ok(()));
        let err = property.get(None).unwrap_err();
        assert!(matches!(err, ReflectError::NotReadable { .. }));
    }

    #[test]
    fn test_indexer_arity_checked() {
        let property = PropertyDescriptor::bound::<i32>("Item")
            .indexer(vec![ParameterDescriptor::new::<i32>("index")])
            .with_getter(|instance, index| {
                let point = Value::instance_ref::<Point>(instance, "Item")?;
                match index[0].to_i32()? {
                    0 => Ok(Value::I32(point.x)),
                    1 => Ok(Value::I32(point.y)),
                    _ => Err(ReflectError::CastFailed {
                        expected: "index in 0..2".to_string(),
                    }),
                }
            });

        assert!(property.is_indexer);

        let instance = Value::object(Point { x: 10, y: 20 });
        assert_eq!(
            property.get_indexed(Some(&instance), &[Value::I32(1)]).unwrap(),
            Value::I32(20)
        );

        let err = property.get(Some(&instance)).unwrap_err();
        assert!(matches!(
            err,
            ReflectError::IndexerArity {
                expected: 1,
                actual: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_handle_strategy_tags() {
        let bound = FieldDescriptor::bound::<i32>("a", |_| Ok(Value::I32(0)));
        let late = FieldDescriptor::late_bound::<i32>("b", |_| Ok(Value::I32(0)));
        assert!(!bound.is_late_bound());
        assert!(late.is_late_bound());
    }

    #[test]
    fn test_parameter_default() {
        let param = ParameterDescriptor::new::<String>("value").with_default(Value::str("d"));
        assert!(param.has_default);
        assert_eq!(param.default_value, Some(Value::str("d")));

        let plain = ParameterDescriptor::new::<String>("value");
        assert!(!plain.has_default);
        assert!(plain.default_value.is_none());
    }
}
