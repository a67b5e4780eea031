//! Ordered, short-circuiting rule checks per constraint variant.

mod array;
mod number;
mod object;
mod string;

use crate::domain::constraint::{Constraint, Rules};
use crate::domain::error::Violation;
use crate::domain::value::Value;
use crate::domain::value_type::ValueType;
use crate::engine::traverse::IndexSampler;

/// Tests `value` against `constraint`, stopping at the first violated rule.
///
/// The base-type check always runs first; the variant routine only sees values
/// of the kind the constraint is bound to.
pub fn test(
    constraint: &Constraint,
    value: &Value,
    sampler: &mut dyn IndexSampler,
) -> Result<(), Violation> {
    match (&constraint.rules, value) {
        (Rules::Number(rules), Value::Number(number)) => number::test(rules, *number),
        (Rules::String(rules), Value::String(text)) => string::test(rules, text),
        (Rules::Object(rules), Value::Object(object)) => object::test(rules, object),
        (Rules::Array(rules), Value::Array(items)) => array::test(rules, items, sampler),
        (Rules::Base, value) if ValueType::of(value) == constraint.value_type() => Ok(()),
        (_, value) => Err(Violation::BasicType {
            expected: constraint.value_type(),
            actual: ValueType::of(value),
        }),
    }
}
