/// Variable bindings from the declarations prefix.
///
/// The declarations section is the optional `alias = value` prefix terminated
/// by the last `;` of the statement. This module parses it into an ordered
/// list of bindings and resolves references by exact-name linear scan.
///
/// # Responsibilities
/// - Parses `alias = [+|-] literal` pairs into [`bindings::Binding`] values.
/// - Resolves variable references; the first declaration of an alias wins.
pub mod bindings;
/// Per-evaluation parse state.
///
/// # Responsibilities
/// - Tracks the category of the last recognized token, which decides whether
///   `+`/`-` are unary or binary.
/// - Tracks the parenthesis nesting depth.
pub mod context;
/// The evaluator module reduces the token stream to one value.
///
/// The evaluator folds tokens through the two-stack operator-precedence
/// (shunting-yard) algorithm and dispatches every operator to its
/// computational semantics, including the type-promotion rules between
/// integers and floats.
///
/// # Responsibilities
/// - Runs the shunting-yard reduction over the token stream.
/// - Applies unary and binary operators with type promotion.
/// - Reports runtime errors such as unresolved variables or imbalanced
///   parentheses.
pub mod evaluator;
/// The lexer module tokenizes a statement.
///
/// The lexer reads the raw text and produces a stream of tokens: operator
/// symbols and keywords, boolean/float/integer literals, and identifiers.
/// Overlapping symbols (`<=` before `<`, `AndAlso` before `And`) resolve by
/// longest match; multi-character operators must sit on a token boundary,
/// and an integer literal must not be glued to a word.
///
/// # Responsibilities
/// - Converts the input text into tokens.
/// - Validates numeric literals against the 64-bit integer and double ranges.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The static operator registry.
///
/// # Responsibilities
/// - Defines every operator/function tag with its precedence (lower binds
///   tighter) and arity.
/// - Maps operator tokens to their descriptors, including the reinterpretation
///   of `+`/`-` as unary sign operators.
pub mod operator;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the operand values produced during evaluation:
/// 64-bit integers, double-precision floats, and booleans. A boolean is a
/// rendering-flavored integer: it participates in arithmetic as `-1` (true)
/// or `0` (false) and only differs in how it prints. The module also owns the
/// canonical text rendering of results.
///
/// # Responsibilities
/// - Defines the [`value::core::Value`] enum and its numeric projection.
/// - Renders results, including the locale-specific float format.
pub mod value;
