use crate::interpreter::{
    operator::Op,
    value::core::{Num, Value},
};

/// Applies a unary operator to an already-evaluated operand.
///
/// Kind behavior:
/// - `Positive` is the identity; `Negative` and `Abs` preserve the numeric
///   kind of the operand (a boolean counts as its integer projection).
/// - `Not` rounds to the nearest integer and complements the bit pattern,
///   yielding an integer.
/// - `Round` yields the nearest integer; every other function coerces the
///   operand to a float and yields a float, `Truncate` included.
///
/// Out-of-domain inputs to the inverse trigonometric functions are not
/// intercepted; the resulting `NaN` propagates into the rendering.
///
/// # Parameters
/// - `op`: The unary operator descriptor.
/// - `operand`: The operand popped off the evaluation stack.
///
/// # Returns
/// A freshly constructed value; operands are never mutated in place.
#[must_use]
pub fn apply_unary(op: Op, operand: &Value) -> Value {
    match op {
        Op::Positive => *operand,
        Op::Negative => match operand.num() {
            Num::Int(value) => Value::Integer(value.wrapping_neg()),
            Num::Float(value) => Value::Float(-value),
        },
        Op::Not => Value::Integer(!operand.rounded()),
        Op::Abs => match operand.num() {
            Num::Int(value) => Value::Integer(value.wrapping_abs()),
            Num::Float(value) => Value::Float(value.abs()),
        },
        Op::Round => Value::Integer(operand.rounded()),
        Op::Acos => Value::Float(operand.as_f64().acos()),
        Op::Asin => Value::Float(operand.as_f64().asin()),
        Op::Atan => Value::Float(operand.as_f64().atan()),
        Op::Ceiling => Value::Float(operand.as_f64().ceil()),
        Op::Cos => Value::Float(operand.as_f64().cos()),
        Op::Exp => Value::Float(operand.as_f64().exp()),
        Op::Floor => Value::Float(operand.as_f64().floor()),
        Op::Log10 => Value::Float(operand.as_f64().log10()),
        Op::Log => Value::Float(operand.as_f64().ln()),
        Op::Sin => Value::Float(operand.as_f64().sin()),
        Op::Sqrt => Value::Float(operand.as_f64().sqrt()),
        Op::Tan => Value::Float(operand.as_f64().tan()),
        Op::Truncate => Value::Float(operand.as_f64().trunc()),
        // Binary operators and the parenthesis markers are routed by arity
        // and never reach this function.
        _ => unreachable!(),
    }
}
