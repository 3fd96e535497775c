//! Instance construction over value-type fixtures
//!
//! Fixture registration mirrors what the ahead-of-time generation step
//! emits at process start: one `register` call per opted-in type, with
//! bound member handles. The `Reflection*` fixtures are the same shapes
//! reached through the introspection fallback instead.

use typemeta::{
    create_instance, ConstructorDescriptor, Introspect, ParameterDescriptor, PropertyDescriptor,
    ReflectError, TypeDescriptor, TypeKind, TypeRegistry, Value,
};

#[derive(Debug, Default, PartialEq)]
struct ParameterlessCtorStruct {
    value: String,
}

#[derive(Debug, Default, PartialEq)]
struct DefaultCtorStruct {
    value: String,
}

#[derive(Debug, Default, PartialEq)]
struct ParametersCtorStruct {
    value: String,
}

#[derive(Debug, Default, PartialEq)]
struct DefaultedParamStruct {
    value: String,
}

fn value_property<T: std::any::Any + Send + Sync>(
    get: impl Fn(&T) -> String + Send + Sync + 'static,
) -> PropertyDescriptor {
    PropertyDescriptor::bound::<String>("Value").with_getter(move |instance, _| {
        let target = Value::instance_ref::<T>(instance, "Value")?;
        Ok(Value::str(get(target)))
    })
}

fn registry_with_fixtures() -> TypeRegistry {
    let registry = TypeRegistry::new();

    registry.register(
        TypeDescriptor::build::<ParameterlessCtorStruct>("ParameterlessCtorStruct")
            .kind(TypeKind::ValueStruct)
            .zero_value_of::<ParameterlessCtorStruct>()
            .constructors(|| {
                vec![ConstructorDescriptor::bound("new", vec![], |_| {
                    Ok(Value::object(ParameterlessCtorStruct {
                        value: "Default".to_string(),
                    }))
                })]
            })
            .properties(|| vec![value_property(|s: &ParameterlessCtorStruct| s.value.clone())])
            .finish(),
    );

    registry.register(
        TypeDescriptor::build::<DefaultCtorStruct>("DefaultCtorStruct")
            .kind(TypeKind::ValueStruct)
            .zero_value_of::<DefaultCtorStruct>()
            .properties(|| vec![value_property(|s: &DefaultCtorStruct| s.value.clone())])
            .finish(),
    );

    registry.register(
        TypeDescriptor::build::<ParametersCtorStruct>("ParametersCtorStruct")
            .kind(TypeKind::ValueStruct)
            .zero_value_of::<ParametersCtorStruct>()
            .constructors(|| {
                vec![
                    ConstructorDescriptor::bound("new", vec![], |_| {
                        Ok(Value::object(ParametersCtorStruct {
                            value: "Default".to_string(),
                        }))
                    }),
                    ConstructorDescriptor::bound(
                        "new",
                        vec![ParameterDescriptor::new::<String>("value")],
                        |args| {
                            Ok(Value::object(ParametersCtorStruct {
                                value: args[0].to_str()?.to_string(),
                            }))
                        },
                    ),
                ]
            })
            .properties(|| vec![value_property(|s: &ParametersCtorStruct| s.value.clone())])
            .finish(),
    );

    registry.register(
        TypeDescriptor::build::<DefaultedParamStruct>("DefaultedParamStruct")
            .kind(TypeKind::ValueStruct)
            .zero_value_of::<DefaultedParamStruct>()
            .constructors(|| {
                vec![ConstructorDescriptor::bound(
                    "new",
                    vec![ParameterDescriptor::new::<String>("value")
                        .with_default(Value::str("Default"))],
                    |args| {
                        Ok(Value::object(DefaultedParamStruct {
                            value: args[0].to_str()?.to_string(),
                        }))
                    },
                )]
            })
            .finish(),
    );

    registry
}

#[test]
fn test_create_with_parameterless_ctor() {
    let registry = registry_with_fixtures();
    let instance: ParameterlessCtorStruct = registry.create(&[]).unwrap();
    assert_eq!(instance.value, "Default");
}

#[test]
fn test_create_with_default_ctor() {
    let registry = registry_with_fixtures();
    let instance: DefaultCtorStruct = registry.create(&[]).unwrap();
    assert_eq!(instance.value, "");
}

#[test]
fn test_create_with_parameter_ctor_default_invoke() {
    let registry = registry_with_fixtures();
    let instance: ParametersCtorStruct = registry.create(&[]).unwrap();
    assert_eq!(instance.value, "Default");
}

#[test]
fn test_create_with_parameter_ctor_argument_invoke() {
    let registry = registry_with_fixtures();
    let instance: ParametersCtorStruct = registry.create(&[Value::str("Test")]).unwrap();
    assert_eq!(instance.value, "Test");
}

#[test]
fn test_create_substitutes_trailing_default() {
    let registry = registry_with_fixtures();

    let defaulted: DefaultedParamStruct = registry.create(&[]).unwrap();
    assert_eq!(defaulted.value, "Default");

    let explicit: DefaultedParamStruct = registry.create(&[Value::str("X")]).unwrap();
    assert_eq!(explicit.value, "X");
}

#[test]
fn test_create_unregistered_type_fails() {
    #[derive(Debug)]
    struct Unregistered;
    let registry = TypeRegistry::new();
    let err = registry.create::<Unregistered>(&[]).unwrap_err();
    assert!(matches!(err, ReflectError::DescriptorNotFound { .. }));
}

#[test]
fn test_descriptor_entry_point_agrees_with_typed_entry_point() {
    let registry = registry_with_fixtures();

    let descriptor = registry
        .lookup(std::any::TypeId::of::<ParametersCtorStruct>(), false)
        .unwrap();
    let instance = create_instance(&descriptor, &[]).unwrap();
    assert_eq!(
        instance.downcast_ref::<ParametersCtorStruct>().unwrap().value,
        "Default"
    );

    let property = descriptor.find_property("Value").unwrap();
    assert_eq!(property.get(Some(&instance)).unwrap(), Value::str("Default"));
}

// Introspection-path fixtures: same shapes, late-bound handles, never
// registered ahead of time.

#[derive(Debug, Default, PartialEq)]
struct ReflectionDefaultCtorStruct {
    value: String,
}

impl Introspect for ReflectionDefaultCtorStruct {
    fn introspect() -> TypeDescriptor {
        TypeDescriptor::build::<ReflectionDefaultCtorStruct>("ReflectionDefaultCtorStruct")
            .kind(TypeKind::ValueStruct)
            .introspected()
            .zero_value_of::<ReflectionDefaultCtorStruct>()
            .finish()
    }
}

#[derive(Debug, Default, PartialEq)]
struct ReflectionParameterlessCtorStruct {
    value: String,
}

impl Introspect for ReflectionParameterlessCtorStruct {
    fn introspect() -> TypeDescriptor {
        TypeDescriptor::build::<ReflectionParameterlessCtorStruct>(
            "ReflectionParameterlessCtorStruct",
        )
        .kind(TypeKind::ValueStruct)
        .introspected()
        .zero_value_of::<ReflectionParameterlessCtorStruct>()
        .constructors(|| {
            vec![ConstructorDescriptor::late_bound("new", vec![], |_| {
                Ok(Value::object(ReflectionParameterlessCtorStruct {
                    value: "Default".to_string(),
                }))
            })]
        })
        .finish()
    }
}

#[derive(Debug, Default, PartialEq)]
struct ReflectionParametersCtorStruct {
    value: String,
}

impl Introspect for ReflectionParametersCtorStruct {
    fn introspect() -> TypeDescriptor {
        TypeDescriptor::build::<ReflectionParametersCtorStruct>("ReflectionParametersCtorStruct")
            .kind(TypeKind::ValueStruct)
            .introspected()
            .zero_value_of::<ReflectionParametersCtorStruct>()
            .constructors(|| {
                vec![
                    ConstructorDescriptor::late_bound("new", vec![], |_| {
                        Ok(Value::object(ReflectionParametersCtorStruct {
                            value: "Default".to_string(),
                        }))
                    }),
                    ConstructorDescriptor::late_bound(
                        "new",
                        vec![ParameterDescriptor::new::<String>("value")],
                        |args| {
                            Ok(Value::object(ReflectionParametersCtorStruct {
                                value: args[0].to_str()?.to_string(),
                            }))
                        },
                    ),
                ]
            })
            .finish()
    }
}

#[test]
fn test_reflection_create_with_default_ctor() {
    let registry = TypeRegistry::new();
    let instance: ReflectionDefaultCtorStruct = registry.create_with(&[], true).unwrap();
    assert_eq!(instance.value, "");
}

#[test]
fn test_reflection_create_with_parameterless_ctor() {
    let registry = TypeRegistry::new();
    let instance: ReflectionParameterlessCtorStruct = registry.create_with(&[], true).unwrap();
    assert_eq!(instance.value, "Default");
}

#[test]
fn test_reflection_create_with_parameter_ctor_default_invoke() {
    let registry = TypeRegistry::new();
    let instance: ReflectionParametersCtorStruct = registry.create_with(&[], true).unwrap();
    assert_eq!(instance.value, "Default");
}

#[test]
fn test_reflection_create_with_parameter_ctor_argument_invoke() {
    let registry = TypeRegistry::new();
    let instance: ReflectionParametersCtorStruct =
        registry.create_with(&[Value::str("Test")], true).unwrap();
    assert_eq!(instance.value, "Test");
}

#[test]
fn test_reflection_create_disallowed_fails() {
    let registry = TypeRegistry::new();
    let err = registry
        .create_with::<ReflectionDefaultCtorStruct>(&[], false)
        .unwrap_err();
    assert!(matches!(err, ReflectError::DescriptorNotFound { .. }));
}
