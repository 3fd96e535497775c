//! Instance factory and constructor overload resolution
//!
//! Stateless: given a descriptor and a positional argument list, resolve the
//! best-matching declared constructor and invoke its handle, whichever
//! strategy the handle encodes. Resolution itself is a pure function over
//! the candidate list and a conversion-cost predicate, so it can be tested
//! without constructing anything.
//!
//! Resolution order for an empty argument list on a value type: an explicit
//! public zero-parameter constructor wins, then a constructor whose every
//! parameter has a default, then the descriptor's zero-value handle (the
//! all-defaults bit pattern). The same rule applies to every entry point.

use std::any::TypeId;
use std::cmp::Ordering;

use crate::member::{Accessibility, ConstructorDescriptor, Nullability, ParameterDescriptor};
use crate::ty::TypeDescriptor;
use crate::value::Value;
use crate::ReflectError;

/// Construct an instance of the described type from positional arguments
pub fn create_instance(
    descriptor: &TypeDescriptor,
    args: &[Value],
) -> Result<Value, ReflectError> {
    if descriptor.is_static() {
        return Err(ReflectError::NotInstantiable {
            type_name: descriptor.name().to_string(),
        });
    }

    let constructors = descriptor.declared_constructors();

    // Declared public zero-parameter constructor takes precedence for
    // argument-free construction.
    if args.is_empty() {
        let parameterless = constructors.iter().find(|c| {
            !c.is_static && c.parameters.is_empty() && c.accessibility == Accessibility::Public
        });
        if let Some(ctor) = parameterless {
            return ctor.invoke(&[]);
        }
    }

    match resolve_constructor(descriptor.name(), constructors, args) {
        Ok(index) => {
            let ctor = &constructors[index];
            let full_args = fill_defaults(&ctor.parameters, args)?;
            ctor.invoke(&full_args)
        }
        Err(err) => {
            // A value type without any matching constructor still has its
            // all-defaults instance.
            if args.is_empty() && descriptor.is_value_type() {
                if let Some(zero) = descriptor.zero_value() {
                    return Ok(zero);
                }
            }
            Err(err)
        }
    }
}

/// Resolve the best-matching constructor for the supplied arguments
///
/// Returns the index of the winning candidate within `constructors`.
/// Applicability: a constructor qualifies when every supplied argument is
/// convertible to its positional parameter type and every trailing unfilled
/// parameter declares a default. Betterness among applicable candidates:
/// positional conversion-cost dominance, then fewer default substitutions,
/// then lower total conversion cost; an unresolved tie is an error.
pub fn resolve_constructor(
    type_name: &str,
    constructors: &[ConstructorDescriptor],
    args: &[Value],
) -> Result<usize, ReflectError> {
    let candidates: Vec<Candidate> = constructors
        .iter()
        .enumerate()
        .filter_map(|(index, ctor)| Candidate::applicable(index, ctor, args))
        .collect();

    if candidates.is_empty() {
        return Err(ReflectError::NoApplicableConstructor {
            type_name: type_name.to_string(),
            arg_count: args.len(),
        });
    }

    // Betterness is not a total order (positional dominance is partial), so
    // a single-pass tournament would depend on declaration order. The winner
    // must strictly beat every other applicable candidate.
    let winner = candidates.iter().find(|candidate| {
        candidates
            .iter()
            .filter(|other| other.index != candidate.index)
            .all(|other| candidate.compare(other) == Ordering::Less)
    });

    match winner {
        Some(candidate) => Ok(candidate.index),
        None => Err(ReflectError::AmbiguousConstructor {
            type_name: type_name.to_string(),
            arg_count: args.len(),
        }),
    }
}

/// An applicable constructor with its per-position conversion costs
struct Candidate {
    index: usize,
    costs: Vec<u8>,
    defaults_used: usize,
}

impl Candidate {
    fn applicable(index: usize, ctor: &ConstructorDescriptor, args: &[Value]) -> Option<Self> {
        // Static (type-initializer) constructors never construct instances.
        if ctor.is_static {
            return None;
        }
        let params = &ctor.parameters;
        if args.len() > params.len() {
            return None;
        }
        // Every parameter past the supplied arguments must be defaultable.
        if !params[args.len()..].iter().all(|p| p.has_default) {
            return None;
        }

        let mut costs = Vec::with_capacity(args.len());
        for (arg, param) in args.iter().zip(params) {
            costs.push(conversion_cost(arg, param)?);
        }

        Some(Self {
            index,
            costs,
            defaults_used: params.len() - args.len(),
        })
    }

    /// `Less` means `self` is the better candidate
    fn compare(&self, other: &Self) -> Ordering {
        let mut self_dominates = false;
        let mut other_dominates = false;
        for (a, b) in self.costs.iter().zip(&other.costs) {
            if a < b {
                self_dominates = true;
            }
            if b < a {
                other_dominates = true;
            }
        }
        match (self_dominates, other_dominates) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        self.defaults_used
            .cmp(&other.defaults_used)
            .then_with(|| self.total_cost().cmp(&other.total_cost()))
    }

    fn total_cost(&self) -> u32 {
        self.costs.iter().map(|c| u32::from(*c)).sum()
    }
}

/// Cost of converting `arg` into `param`'s declared type
///
/// `None` means not convertible. Exact matches are free; numeric widening
/// carries a cost proportional to distance; `Null` fits any
/// nullability-annotated parameter.
fn conversion_cost(arg: &Value, param: &ParameterDescriptor) -> Option<u8> {
    if arg.is_null() {
        return match param.nullability {
            Nullability::Annotated => Some(1),
            Nullability::None => None,
        };
    }

    let arg_type = arg.type_id()?;
    if arg_type == param.param_type {
        return Some(0);
    }

    match arg {
        Value::I32(_) if param.param_type == TypeId::of::<i64>() => Some(1),
        Value::I32(_) if param.param_type == TypeId::of::<f64>() => Some(2),
        Value::I64(_) if param.param_type == TypeId::of::<f64>() => Some(2),
        _ => None,
    }
}

/// Extend `args` with the default values of the trailing parameters
fn fill_defaults(
    params: &[ParameterDescriptor],
    args: &[Value],
) -> Result<Vec<Value>, ReflectError> {
    let mut full = Vec::with_capacity(params.len());
    full.extend_from_slice(args);
    for param in &params[args.len()..] {
        let default = param
            .default_value
            .clone()
            .ok_or_else(|| ReflectError::ArityMismatch {
                expected: params.len(),
                actual: args.len(),
            })?;
        full.push(default);
    }
    Ok(full)
}
