//! Runtime value representation for reflection calls
//!
//! [`Value`] is the dynamic currency that crosses the reflection boundary:
//! constructor arguments, member get/set payloads, and constructed instances
//! all travel as values. Primitives are stored inline; everything else is an
//! [`Object`](Value::Object) holding a shared, type-erased instance.
//!
//! Overload resolution may widen a numeric argument (`I32` into an `i64` or
//! `f64` parameter); invocation handles therefore read numeric arguments
//! through the coercing [`to_i64`](Value::to_i64) / [`to_f64`](Value::to_f64)
//! accessors rather than matching the exact variant.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::ReflectError;

/// A dynamically typed value
#[derive(Clone)]
pub enum Value {
    /// Absence of a value
    Null,
    /// Boolean
    Bool(bool),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 64-bit float
    F64(f64),
    /// Owned string
    Str(String),
    /// Shared, type-erased instance of any other type
    Object(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap a concrete instance as an [`Value::Object`]
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Value::Object(Arc::new(value))
    }

    /// Build a [`Value::Str`] from anything string-like
    pub fn str(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    /// The [`TypeId`] of the contained value, `None` for [`Value::Null`]
    pub fn type_id(&self) -> Option<TypeId> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(TypeId::of::<bool>()),
            Value::I32(_) => Some(TypeId::of::<i32>()),
            Value::I64(_) => Some(TypeId::of::<i64>()),
            Value::F64(_) => Some(TypeId::of::<f64>()),
            Value::Str(_) => Some(TypeId::of::<String>()),
            Value::Object(obj) => Some(obj.as_ref().type_id()),
        }
    }

    /// Whether this is [`Value::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow as `bool`, exact variant only
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow as `i32`, exact variant only
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow as `&str`, exact variant only
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Coerce to `bool` or fail with [`ReflectError::CastFailed`]
    pub fn to_bool(&self) -> Result<bool, ReflectError> {
        self.as_bool().ok_or_else(|| cast_failed::<bool>())
    }

    /// Coerce to `i32` or fail with [`ReflectError::CastFailed`]
    pub fn to_i32(&self) -> Result<i32, ReflectError> {
        self.as_i32().ok_or_else(|| cast_failed::<i32>())
    }

    /// Coerce to `i64`, widening from `I32`
    pub fn to_i64(&self) -> Result<i64, ReflectError> {
        match self {
            Value::I32(v) => Ok(i64::from(*v)),
            Value::I64(v) => Ok(*v),
            _ => Err(cast_failed::<i64>()),
        }
    }

    /// Coerce to `f64`, widening from `I32` and `I64`
    pub fn to_f64(&self) -> Result<f64, ReflectError> {
        match self {
            Value::I32(v) => Ok(f64::from(*v)),
            Value::I64(v) => Ok(*v as f64),
            Value::F64(v) => Ok(*v),
            _ => Err(cast_failed::<f64>()),
        }
    }

    /// Coerce to `&str` or fail with [`ReflectError::CastFailed`]
    pub fn to_str(&self) -> Result<&str, ReflectError> {
        self.as_str().ok_or_else(|| cast_failed::<String>())
    }

    /// Borrow the contained instance as a concrete `T`
    ///
    /// Only [`Value::Object`] values can be borrowed this way.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Object(obj) => obj.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Mutably borrow the contained instance as a concrete `T`
    ///
    /// Requires unique ownership of the underlying instance; returns `None`
    /// if the instance is shared or the type does not match.
    pub fn downcast_mut<T: Any + Send + Sync>(&mut self) -> Option<&mut T> {
        match self {
            Value::Object(obj) => Arc::get_mut(obj)?.downcast_mut::<T>(),
            _ => None,
        }
    }

    /// Take ownership of the contained instance as a concrete `T`
    ///
    /// Fails with [`ReflectError::CastFailed`] when the value is not an
    /// object of type `T` or when the instance is still shared elsewhere.
    pub fn take<T: Any + Send + Sync>(self) -> Result<T, ReflectError> {
        match self {
            Value::Object(obj) => {
                let arc = obj.downcast::<T>().map_err(|_| cast_failed::<T>())?;
                Arc::try_unwrap(arc).map_err(|_| cast_failed::<T>())
            }
            _ => Err(cast_failed::<T>()),
        }
    }

    /// Resolve an optional owning instance to a concrete `&T`
    ///
    /// Shared helper for member access handles: `member` names the member for
    /// diagnostics when no instance was supplied.
    pub fn instance_ref<'a, T: Any>(
        instance: Option<&'a Value>,
        member: &str,
    ) -> Result<&'a T, ReflectError> {
        instance
            .ok_or_else(|| ReflectError::MissingInstance {
                name: member.to_string(),
            })?
            .downcast_ref::<T>()
            .ok_or_else(|| cast_failed::<T>())
    }

    /// Resolve an optional owning instance to a concrete `&mut T`
    pub fn instance_mut<'a, T: Any + Send + Sync>(
        instance: Option<&'a mut Value>,
        member: &str,
    ) -> Result<&'a mut T, ReflectError> {
        instance
            .ok_or_else(|| ReflectError::MissingInstance {
                name: member.to_string(),
            })?
            .downcast_mut::<T>()
            .ok_or_else(|| cast_failed::<T>())
    }
}

fn cast_failed<T>() -> ReflectError {
    ReflectError::CastFailed {
        expected: type_name::<T>().to_string(),
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(v) => write!(f, "Bool({v})"),
            Value::I32(v) => write!(f, "I32({v})"),
            Value::I64(v) => write!(f, "I64({v})"),
            Value::F64(v) => write!(f, "F64({v})"),
            Value::Str(v) => write!(f, "Str({v:?})"),
            Value::Object(_) => write!(f, "Object(..)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
