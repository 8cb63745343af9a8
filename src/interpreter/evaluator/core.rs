use crate::{
    error::RuntimeError,
    interpreter::{
        bindings::{lookup, Binding},
        context::{Context, TokenCategory},
        evaluator::{binary::apply_binary, unary::apply_unary},
        lexer::Token,
        operator::Op,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a token stream to a single value with the two-stack
/// operator-precedence algorithm.
///
/// Operator tokens are folded against the operator stack: while the stack top
/// is not a `(` barrier, the incoming operator is binary, and its precedence
/// value is greater than or equal to the top's (lower binds tighter), the top
/// is applied first. The `>=` makes equal-precedence binary operators group
/// left-to-right; chained exponentiation and sign sequences appear
/// right-to-left only because unary descriptors interpose on the stack.
///
/// Operand tokens push their value; variable references resolve against the
/// bindings by linear scan. At end of input the remaining operators are
/// applied outermost-last, and exactly one operand must remain.
///
/// # Parameters
/// - `tokens`: The token stream of the tail expression.
/// - `bindings`: The bindings from the declarations prefix.
///
/// # Returns
/// The single resulting value, or the first fatal fault.
pub fn eval_tokens(tokens: &[Token], bindings: &[Binding]) -> EvalResult<Value> {
    let mut operators: Vec<Op> = Vec::new();
    let mut operands: Vec<Value> = Vec::new();
    let mut context = Context::new();

    for token in tokens {
        if let Some(op) = Op::from_token(token) {
            push_operator(op, &mut operators, &mut operands, &mut context)?;
            continue;
        }

        match token {
            Token::Bool(value) => {
                operands.push(Value::Bool(*value));
                context.last_token = TokenCategory::Operand;
            },
            Token::Float(value) => {
                operands.push(Value::Float(*value));
                context.last_token = TokenCategory::Operand;
            },
            Token::Integer(value) => {
                operands.push(Value::Integer(*value));
                context.last_token = TokenCategory::Operand;
            },
            Token::Identifier(name) => {
                context.last_token = TokenCategory::Variable;

                match lookup(bindings, name) {
                    Some(value) => operands.push(*value),
                    None => {
                        return Err(RuntimeError::UnknownVariable { name: name.clone() });
                    },
                }
            },
            // Every remaining token kind maps to an operator descriptor.
            _ => unreachable!(),
        }
    }

    while let Some(op) = operators.pop() {
        if op == Op::LeftParenthesis {
            return Err(RuntimeError::UnmatchedParenthesis);
        }
        apply(op, &mut operands)?;
    }

    match operands.pop() {
        Some(result) if operands.is_empty() => Ok(result),
        _ => Err(RuntimeError::MalformedStatement),
    }
}

/// Folds one operator token into the stacks.
///
/// `+`/`-` are reinterpreted as the unary sign operators when the previous
/// token was an operator, including at expression start. `(` pushes an opaque
/// barrier; `)` reduces to the matching barrier and counts as an operand
/// afterwards.
fn push_operator(op: Op,
                 operators: &mut Vec<Op>,
                 operands: &mut Vec<Value>,
                 context: &mut Context)
                 -> EvalResult<()> {
    let op = if context.last_token == TokenCategory::Operator {
        match op {
            Op::Sum => Op::Positive,
            Op::Difference => Op::Negative,
            other => other,
        }
    } else {
        op
    };

    context.last_token = TokenCategory::Operator;

    match op {
        Op::LeftParenthesis => {
            context.parentheses_open += 1;
            operators.push(op);
        },
        Op::RightParenthesis => {
            context.parentheses_open -= 1;
            context.last_token = TokenCategory::Operand;

            loop {
                match operators.pop() {
                    Some(Op::LeftParenthesis) => break,
                    Some(top) => apply(top, operands)?,
                    None => return Err(RuntimeError::UnmatchedParenthesis),
                }
            }
        },
        _ => {
            if op.arity() > 1 {
                while let Some(&top) = operators.last() {
                    if top == Op::LeftParenthesis || op.precedence() < top.precedence() {
                        break;
                    }
                    operators.pop();
                    apply(top, operands)?;
                }
            }
            operators.push(op);
        },
    }

    Ok(())
}

/// Pops the operands an operator needs, applies it, and pushes the result.
fn apply(op: Op, operands: &mut Vec<Value>) -> EvalResult<()> {
    if op.arity() <= 1 {
        let operand = operands.pop().ok_or(RuntimeError::MissingOperand)?;
        operands.push(apply_unary(op, &operand));
    } else {
        let right = operands.pop().ok_or(RuntimeError::MissingOperand)?;
        let left = operands.pop().ok_or(RuntimeError::MissingOperand)?;
        operands.push(apply_binary(op, &left, &right)?);
    }

    Ok(())
}
