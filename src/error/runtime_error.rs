#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to reference a variable with no binding.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator was applied with too few operands on the stack.
    MissingOperand,
    /// A `)` had no matching `(`, or a `(` was never closed.
    UnmatchedParenthesis,
    /// The statement did not reduce to exactly one value.
    MalformedStatement,
    /// Integer division or integer `Mod` by a divisor that rounds to zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::MissingOperand => write!(f, "An operator is missing an operand."),
            Self::UnmatchedParenthesis => write!(f, "Parentheses are not balanced."),
            Self::MalformedStatement => {
                write!(f, "The statement did not reduce to a single value.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
