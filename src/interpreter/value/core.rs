use crate::{interpreter::value::format::render_float, util::num::round_to_i64};

/// Represents an operand value during evaluation.
///
/// Values are immutable once constructed; every operator produces a new
/// instance. A boolean is not a separate numeric domain: it participates in
/// arithmetic as `-1` (true) or `0` (false) through [`Value::num`] and only
/// differs in rendering, where it prints `True`/`False`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision floating-point number.
    Float(f64),
    /// A boolean, numerically `-1` (true) or `0` (false).
    Bool(bool),
}

/// The numeric projection of a [`Value`]: the two domains arithmetic is
/// actually defined over. Booleans project to their integer representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    /// An integer operand (including projected booleans).
    Int(i64),
    /// A float operand.
    Float(f64),
}

impl Num {
    /// Widens the operand to a double.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl Value {
    /// Projects the value into its numeric domain. `True` becomes `-1`,
    /// `False` becomes `0`.
    ///
    /// # Example
    /// ```
    /// use basicalc::interpreter::value::core::{Num, Value};
    ///
    /// assert_eq!(Value::Bool(true).num(), Num::Int(-1));
    /// assert_eq!(Value::Integer(7).num(), Num::Int(7));
    /// assert_eq!(Value::Float(2.5).num(), Num::Float(2.5));
    /// ```
    #[must_use]
    pub const fn num(&self) -> Num {
        match self {
            Self::Integer(value) => Num::Int(*value),
            Self::Float(value) => Num::Float(*value),
            Self::Bool(value) => Num::Int(-(*value as i64)),
        }
    }

    /// Widens the value to a double.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.num().as_f64()
    }

    /// Rounds the value to the nearest integer, ties to even. This is the
    /// coercion used by integer division, the bit operators and `Round`.
    #[must_use]
    pub fn rounded(&self) -> i64 {
        match self.num() {
            Num::Int(value) => value,
            Num::Float(value) => round_to_i64(value),
        }
    }

    /// Returns `true` if the value is numerically non-zero. This is the
    /// truthiness `AndAlso`/`OrElse` evaluate.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self.num() {
            Num::Int(value) => value != 0,
            Num::Float(value) => value != 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{}", render_float(*value)),
            Self::Bool(value) => write!(f, "{}", if *value { "True" } else { "False" }),
        }
    }
}
