/// The category of the most recently recognized token.
///
/// Only three categories matter to the engine: after an operator (including
/// at the very start of the expression) a `+` or `-` is a unary sign, after
/// an operand or variable it is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// An operator symbol, keyword or `(` was recognized last.
    Operator,
    /// A literal or a closing `)` was recognized last.
    Operand,
    /// A variable reference was recognized last.
    Variable,
}

/// Mutable parse state scoped to one statement evaluation.
///
/// The context is created fresh for every evaluation call, mutated on every
/// successful token recognition, and discarded afterwards. It is never
/// persisted and never shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// The category of the last recognized token. Starts as
    /// [`TokenCategory::Operator`] so a leading sign is unary.
    pub last_token: TokenCategory,
    /// Parenthesis nesting depth. Incremented on `(`, decremented on `)`;
    /// not used to validate balance at the top level, the engine detects an
    /// unmatched parenthesis from the operator stack instead.
    pub parentheses_open: i32,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates the initial context for one evaluation.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_token:       TokenCategory::Operator,
               parentheses_open: 0, }
    }
}
