use logos::Logos;

use crate::error::ParseError;

/// Classifies a lexer failure so [`tokenize`] can report it precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFault {
    /// Text that no token rule accepts, or a rule rejected at its boundary.
    #[default]
    Unexpected,
    /// A numeric literal that does not fit its value domain.
    OutOfRange,
}

/// Represents a lexical token in a statement.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Overlapping symbols (`<=` vs `<`, `AndAlso` vs `And`, `Log10` vs `Log`)
/// resolve by longest match, and exact keyword tokens beat the identifier
/// pattern at equal length. A keyword followed by more word characters
/// (`Android`) therefore lexes as an identifier. Every multi-character
/// operator additionally has to sit on a token boundary, and an integer
/// literal must not be glued to a word.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
pub enum Token {
    /// Float literal tokens, such as `3.14`, `.5` or `2.1e-10`. The consumed
    /// text must contain a decimal point followed by at least one digit, so
    /// plain integers defer to [`Token::Integer`].
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, `True` or `False`.
    #[token("True", |_| true)]
    #[token("False", |_| false)]
    Bool(bool),
    /// `^`
    #[token("^")]
    Caret,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `Mod`
    #[token("Mod", operator_boundary)]
    Mod,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `<<`
    #[token("<<", operator_boundary)]
    LeftShift,
    /// `>>`
    #[token(">>", operator_boundary)]
    RightShift,
    /// `=`
    #[token("=")]
    Equals,
    /// `<>`
    #[token("<>", operator_boundary)]
    NotEquals,
    /// `<=`
    #[token("<=", operator_boundary)]
    LessEqual,
    /// `>=`
    #[token(">=", operator_boundary)]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `AndAlso`
    #[token("AndAlso", operator_boundary)]
    AndAlso,
    /// `And`
    #[token("And", operator_boundary)]
    And,
    /// `OrElse`
    #[token("OrElse", operator_boundary)]
    OrElse,
    /// `Or`
    #[token("Or", operator_boundary)]
    Or,
    /// `Xor`
    #[token("Xor", operator_boundary)]
    Xor,
    /// `Not`
    #[token("Not", operator_boundary)]
    Not,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `Abs`
    #[token("Abs", operator_boundary)]
    Abs,
    /// `Acos`
    #[token("Acos", operator_boundary)]
    Acos,
    /// `Asin`
    #[token("Asin", operator_boundary)]
    Asin,
    /// `Atan`
    #[token("Atan", operator_boundary)]
    Atan,
    /// `Ceiling`
    #[token("Ceiling", operator_boundary)]
    Ceiling,
    /// `Cos`
    #[token("Cos", operator_boundary)]
    Cos,
    /// `Exp`
    #[token("Exp", operator_boundary)]
    Exp,
    /// `Floor`
    #[token("Floor", operator_boundary)]
    Floor,
    /// `Log10`
    #[token("Log10", operator_boundary)]
    Log10,
    /// `Log`
    #[token("Log", operator_boundary)]
    Log,
    /// `Round`
    #[token("Round", operator_boundary)]
    Round,
    /// `Sin`
    #[token("Sin", operator_boundary)]
    Sin,
    /// `Sqrt`
    #[token("Sqrt", operator_boundary)]
    Sqrt,
    /// `Tan`
    #[token("Tan", operator_boundary)]
    Tan,
    /// `Truncate`
    #[token("Truncate", operator_boundary)]
    Truncate,
    /// Identifier tokens; variable aliases such as `x` or `x1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Whitespace between tokens.
    #[regex(r"[ \t\n\x0B\x0C\r]+", logos::skip)]
    Ignored,
}

/// Parses a floating-point literal from the current token slice.
///
/// Fails when the written literal overflows the double range, which surfaces
/// as a [`ParseError::LiteralOutOfRange`] in [`tokenize`].
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    let value: f64 = lex.slice().parse().map_err(|_| LexFault::OutOfRange)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexFault::OutOfRange)
    }
}
/// Parses an integer literal from the current token slice.
///
/// Fails when the digit run is glued to a word (`2Mod 3` rejects the `2`) or
/// when the literal exceeds the signed 64-bit range. A glued `.` needs no
/// check here: the float pattern wins it by longest match, and a bare
/// trailing `.` is no token at all.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFault> {
    if lex.remainder().starts_with(|ch: char| ch.is_alphabetic()) {
        return Err(LexFault::Unexpected);
    }

    lex.slice().parse().map_err(|_| LexFault::OutOfRange)
}
/// Rejects a multi-character operator, symbolic or keyword, that is not on a
/// token boundary: the character after the match must be whitespace, `(`,
/// `+`, `-` or end-of-input. `1 <= 3` lexes; `1<=3` and `1 And.5` do not.
fn operator_boundary(lex: &logos::Lexer<Token>) -> Result<(), LexFault> {
    match lex.remainder().chars().next() {
        None => Ok(()),
        Some(next) if next.is_whitespace() || matches!(next, '(' | '+' | '-') => Ok(()),
        Some(_) => Err(LexFault::Unexpected),
    }
}

/// Tokenizes one expression (or declarations prefix) into a token list.
///
/// # Errors
/// Returns [`ParseError::LiteralOutOfRange`] for numeric literals the value
/// domains cannot represent, and [`ParseError::UnexpectedToken`] for any
/// other unrecognized text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(LexFault::OutOfRange) => {
                return Err(ParseError::LiteralOutOfRange { literal: lexer.slice().to_string() });
            },
            Err(LexFault::Unexpected) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string() });
            },
        }
    }

    Ok(tokens)
}
