use crate::{
    error::ParseError,
    interpreter::{
        lexer::{tokenize, Token},
        value::core::{Num, Value},
    },
};

/// One `alias = value` pair from the declarations prefix.
///
/// Bindings are created once while the declarations are parsed and never
/// mutated afterwards; referencing one from the expression copies its value
/// onto the operand stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The variable name: a letter followed by alphanumerics or underscores.
    pub alias: String,
    /// The bound value.
    pub value: Value,
}

/// Parses the declarations prefix into an ordered binding list.
///
/// The grammar is zero or more whitespace-separated `alias = value` pairs,
/// where `value` is an optional `+`/`-` sign followed by a boolean, float or
/// integer literal. A `-` negates the literal through its numeric projection
/// (so `-True` binds the integer `1`); a `+` leaves the operand exactly as
/// parsed. Duplicate aliases are kept as written; resolution order makes the
/// first one win.
///
/// # Errors
/// Returns a [`ParseError`] when the prefix does not tokenize or a pair is
/// malformed or truncated. Declarations fail fast, like everything else.
pub fn parse_declarations(declarations: &str) -> Result<Vec<Binding>, ParseError> {
    let tokens = tokenize(declarations)?;
    let mut bindings = Vec::new();
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        let alias = match token {
            Token::Identifier(alias) => alias,
            other => return Err(ParseError::UnexpectedToken { token: format!("{other:?}") }),
        };

        match tokens.next() {
            Some(Token::Equals) => {},
            Some(_) => return Err(ParseError::ExpectedAssignment { alias }),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }

        let negate = match tokens.peek() {
            Some(Token::Minus) => {
                tokens.next();
                true
            },
            Some(Token::Plus) => {
                tokens.next();
                false
            },
            _ => false,
        };

        let value = match tokens.next() {
            Some(Token::Bool(value)) => Value::Bool(value),
            Some(Token::Float(value)) => Value::Float(value),
            Some(Token::Integer(value)) => Value::Integer(value),
            Some(other) => return Err(ParseError::UnexpectedToken { token: format!("{other:?}") }),
            None => return Err(ParseError::UnexpectedEndOfInput),
        };

        let value = if negate {
            match value.num() {
                Num::Int(value) => Value::Integer(value.wrapping_neg()),
                Num::Float(value) => Value::Float(-value),
            }
        } else {
            value
        };

        bindings.push(Binding { alias, value });
    }

    Ok(bindings)
}

/// Resolves a variable reference by exact-name linear scan.
///
/// The scan starts at the first declaration, so with duplicate aliases the
/// first declared binding wins.
#[must_use]
pub fn lookup<'a>(bindings: &'a [Binding], alias: &str) -> Option<&'a Value> {
    bindings.iter()
            .find(|binding| binding.alias == alias)
            .map(|binding| &binding.value)
}
