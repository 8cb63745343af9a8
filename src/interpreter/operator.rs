use crate::interpreter::lexer::Token;

/// Describes every operator and function the evaluator knows, including the
/// two parenthesis markers and the two unary sign operators that only exist
/// as reinterpretations of `+`/`-` after an operator token.
///
/// Precedence and arity are intrinsic to the tag and exposed through
/// [`Op::precedence`] and [`Op::arity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `^`; always yields a float.
    Power,
    /// `*`
    Multiplication,
    /// `/`; always yields a float.
    FloatDivision,
    /// `\`; rounds both operands to the nearest integer, then truncates.
    IntegerDivision,
    /// `Mod`
    Mod,
    /// Binary `+`.
    Sum,
    /// Binary `-`.
    Difference,
    /// `<<`
    LeftBitshift,
    /// `>>`
    RightBitshift,
    /// `=`
    Equality,
    /// `<>`
    Inequality,
    /// `<=`
    LessThanEqual,
    /// `>=`
    GreaterThanEqual,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `AndAlso`; two-valued logic over truthiness.
    AndAlso,
    /// `And`; bitwise.
    And,
    /// `OrElse`; two-valued logic over truthiness.
    OrElse,
    /// `Or`; bitwise.
    Or,
    /// `Xor`; bitwise.
    Xor,
    /// `(`; an opaque barrier on the operator stack.
    LeftParenthesis,
    /// `)`; never pushed, reduces to the matching barrier.
    RightParenthesis,
    /// `Abs`
    Abs,
    /// `Acos`
    Acos,
    /// `Asin`
    Asin,
    /// `Atan`
    Atan,
    /// `Ceiling`
    Ceiling,
    /// `Cos`
    Cos,
    /// `Exp`
    Exp,
    /// `Floor`
    Floor,
    /// `Log10`
    Log10,
    /// `Log`; the natural logarithm.
    Log,
    /// `Round`; the only rounding function that yields an integer.
    Round,
    /// `Sin`
    Sin,
    /// `Sqrt`
    Sqrt,
    /// `Tan`
    Tan,
    /// `Truncate`; truncates but stays a float.
    Truncate,
    /// `Not`; rounds to integer, then complements the bit pattern.
    Not,
    /// Unary `+`; identity.
    Positive,
    /// Unary `-`.
    Negative,
}

impl Op {
    /// Returns the operator's precedence. Lower binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::LeftParenthesis | Self::RightParenthesis => 0,
            Self::Abs
            | Self::Acos
            | Self::Asin
            | Self::Atan
            | Self::Ceiling
            | Self::Cos
            | Self::Exp
            | Self::Floor
            | Self::Log10
            | Self::Log
            | Self::Round
            | Self::Sin
            | Self::Sqrt
            | Self::Tan
            | Self::Truncate => 1,
            Self::Power => 2,
            Self::Positive | Self::Negative => 3,
            Self::Multiplication | Self::FloatDivision => 4,
            Self::IntegerDivision => 5,
            Self::Mod => 6,
            Self::Sum | Self::Difference => 7,
            Self::LeftBitshift | Self::RightBitshift => 9,
            Self::Equality
            | Self::Inequality
            | Self::LessThanEqual
            | Self::GreaterThanEqual
            | Self::LessThan
            | Self::GreaterThan => 10,
            Self::Not => 11,
            Self::AndAlso | Self::And => 12,
            Self::OrElse | Self::Or => 13,
            Self::Xor => 14,
        }
    }

    /// Returns the number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> u8 {
        match self {
            Self::Power
            | Self::Multiplication
            | Self::FloatDivision
            | Self::IntegerDivision
            | Self::Mod
            | Self::Sum
            | Self::Difference
            | Self::LeftBitshift
            | Self::RightBitshift
            | Self::Equality
            | Self::Inequality
            | Self::LessThanEqual
            | Self::GreaterThanEqual
            | Self::LessThan
            | Self::GreaterThan
            | Self::AndAlso
            | Self::And
            | Self::OrElse
            | Self::Or
            | Self::Xor => 2,
            _ => 1,
        }
    }

    /// Maps an operator token to its descriptor. Returns `None` for literal
    /// and identifier tokens.
    ///
    /// `+`/`-` always map to their binary descriptors here; the engine
    /// reinterprets them as [`Op::Positive`]/[`Op::Negative`] when the parse
    /// context says the previous token was an operator.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        Some(match token {
                 Token::Caret => Self::Power,
                 Token::Star => Self::Multiplication,
                 Token::Slash => Self::FloatDivision,
                 Token::Backslash => Self::IntegerDivision,
                 Token::Mod => Self::Mod,
                 Token::Plus => Self::Sum,
                 Token::Minus => Self::Difference,
                 Token::LeftShift => Self::LeftBitshift,
                 Token::RightShift => Self::RightBitshift,
                 Token::Equals => Self::Equality,
                 Token::NotEquals => Self::Inequality,
                 Token::LessEqual => Self::LessThanEqual,
                 Token::GreaterEqual => Self::GreaterThanEqual,
                 Token::Less => Self::LessThan,
                 Token::Greater => Self::GreaterThan,
                 Token::AndAlso => Self::AndAlso,
                 Token::And => Self::And,
                 Token::OrElse => Self::OrElse,
                 Token::Or => Self::Or,
                 Token::Xor => Self::Xor,
                 Token::LParen => Self::LeftParenthesis,
                 Token::RParen => Self::RightParenthesis,
                 Token::Abs => Self::Abs,
                 Token::Acos => Self::Acos,
                 Token::Asin => Self::Asin,
                 Token::Atan => Self::Atan,
                 Token::Ceiling => Self::Ceiling,
                 Token::Cos => Self::Cos,
                 Token::Exp => Self::Exp,
                 Token::Floor => Self::Floor,
                 Token::Log10 => Self::Log10,
                 Token::Log => Self::Log,
                 Token::Round => Self::Round,
                 Token::Sin => Self::Sin,
                 Token::Sqrt => Self::Sqrt,
                 Token::Tan => Self::Tan,
                 Token::Truncate => Self::Truncate,
                 Token::Not => Self::Not,
                 _ => return None,
             })
    }
}
