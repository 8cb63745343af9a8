//! # basicalc
//!
//! basicalc evaluates single-statement arithmetic and logical expressions
//! written in a small BASIC-like syntax. A statement consists of zero or more
//! `alias = value` declarations terminated by `;`, followed by one expression
//! over integers, floating-point numbers and booleans.
//!
//! ```text
//! x = 3 y = 5; -x * y + 3
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{bindings::parse_declarations, evaluator::core::eval_tokens,
                         lexer::tokenize};

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while lexing a statement,
/// parsing its declarations, or evaluating the tail expression. Every failure
/// is fatal: the statement aborts with no partial result.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, declarations,
///   evaluator).
/// - Renders each failure as a human-readable description.
pub mod error;
/// Orchestrates the entire evaluation pipeline.
///
/// This module ties together the tokenizer, the parse context, the operator
/// table, variable bindings, the two-stack evaluation engine and the value
/// types to reduce one statement to one value.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, context, operators, bindings,
///   evaluator, and value types.
/// - Provides the building blocks behind [`run`] and [`get_result`].
pub mod interpreter;
/// General numeric utilities.
///
/// # Responsibilities
/// - Provides the nearest-integer rounding used by integer division, the bit
///   operators and `Round`.
pub mod util;

/// Evaluates one statement and returns the rendering of its result.
///
/// The statement is split at the last `;`: everything before it is parsed as
/// `alias = value` declarations, everything after it is the expression. When
/// no `;` is present the whole input is the expression and no bindings exist.
///
/// # Errors
/// Returns an error if tokenizing, declaration parsing or evaluation fails.
/// There is no partial result; each call is all-or-nothing.
///
/// # Examples
/// ```
/// let rendered = basicalc::run("x = 3 y = 5; -x * y + 3").unwrap();
/// assert_eq!(rendered, "-12");
///
/// // Without declarations the whole input is the expression.
/// assert_eq!(basicalc::run("2 ^ 8").unwrap(), "256");
/// ```
pub fn run(statement: &str) -> Result<String, Box<dyn std::error::Error>> {
    let (declarations, expression) = match statement.rsplit_once(';') {
        Some(split) => split,
        None => ("", statement),
    };

    let bindings = parse_declarations(declarations)?;
    let tokens = tokenize(expression)?;
    let result = eval_tokens(&tokens, &bindings)?;

    Ok(result.to_string())
}

/// Evaluates one statement, rendering failures as an error block.
///
/// This is the outermost boundary: any fault reported by [`run`] is converted
/// into the `Error(s):` block instead of being propagated.
///
/// # Examples
/// ```
/// assert_eq!(basicalc::get_result("Sin(30)"), "-0,988031624092862");
///
/// let failed = basicalc::get_result("2 + x");
/// assert!(failed.starts_with("Error(s):"));
/// ```
#[must_use]
pub fn get_result(statement: &str) -> String {
    match run(statement) {
        Ok(rendered) => rendered,
        Err(e) => format!("Error(s):\n\n{e}\n"),
    }
}
