#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a statement or
/// parsing its declarations.
pub enum ParseError {
    /// Found a character sequence that is not a recognized token.
    UnexpectedToken {
        /// The offending text.
        token: String,
    },
    /// The declarations prefix ended in the middle of an `alias = value`
    /// pair.
    UnexpectedEndOfInput,
    /// A declaration alias was not followed by `=`.
    ExpectedAssignment {
        /// The alias missing its assignment.
        alias: String,
    },
    /// A numeric literal exceeds the 64-bit integer or double range.
    LiteralOutOfRange {
        /// The literal as written.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "Unexpected token: '{token}'."),
            Self::UnexpectedEndOfInput => {
                write!(f, "Unexpected end of input inside the declarations.")
            },
            Self::ExpectedAssignment { alias } => {
                write!(f, "Expected '=' after the alias '{alias}'.")
            },
            Self::LiteralOutOfRange { literal } => {
                write!(f, "Numeric literal '{literal}' is out of range.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
