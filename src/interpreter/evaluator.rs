/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic with type
/// promotion, both divisions, `Mod`, the bit operators, comparisons and the
/// two-valued logic operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the sign operators, `Not`, `Abs`, the transcendental functions
/// and the rounding family.
pub mod unary;

/// The two-stack evaluation engine.
///
/// Contains the shunting-yard reduction loop, the parse-context handling for
/// unary reinterpretation, and error propagation.
pub mod core;
