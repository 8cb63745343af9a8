/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing a statement or
/// parsing its declarations prefix. Parse errors include unexpected tokens,
/// truncated declarations, and numeric literals outside the representable
/// range.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unresolved
/// variable references, malformed expressions that leave the evaluation
/// stacks inconsistent, and division by a rounded-zero divisor.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
