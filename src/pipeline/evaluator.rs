use crate::{
    error::RuntimeError,
    token::{Operator, Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence into a single number.
///
/// Numbers are converted and pushed onto a value stack; each operator pops
/// its operands and pushes its result. A sequence is well-formed exactly
/// when every operator finds enough operands and a single value remains at
/// the end.
///
/// Numeric conversion happens here rather than in the tokenizer, so a
/// lexically accepted literal like `1.2.3` fails at this point.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by the parser.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `InvalidNumber` for a literal that is not a valid number.
/// - `InsufficientOperands` when an operator finds too few operands.
/// - `DivisionByZero` and `ModuloByZero` for a zero right operand.
/// - `UnexpectedParenthesis` for a parenthesis in the sequence; the parser
///   never emits one, so this only guards hand-built input.
/// - `MalformedExpression` when the final stack holds anything other than
///   exactly one value.
///
/// # Example
/// ```
/// use numeval::pipeline::{evaluator::evaluate, parser::parse, tokenizer::tokenize};
///
/// let tokens = tokenize("(4 + 5) / 2").unwrap();
/// let postfix = parse(&tokens).unwrap();
///
/// assert_eq!(evaluate(&postfix).unwrap(), 4.5);
/// ```
pub fn evaluate(postfix: &[(Token, usize)]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for (token, position) in postfix {
        match token {
            Token::Number(literal) => {
                let value =
                    literal.parse::<f64>()
                           .map_err(|_| RuntimeError::InvalidNumber { literal:  literal.clone(),
                                                                      position: *position, })?;
                stack.push(value);
            },

            Token::Operator(op) if op.is_unary() => {
                let operand =
                    stack.pop()
                         .ok_or(RuntimeError::InsufficientOperands { operator: *op,
                                                                     position: *position, })?;
                stack.push(-operand);
            },

            Token::Operator(op) => {
                // The right operand sits on top of the stack.
                let right =
                    stack.pop()
                         .ok_or(RuntimeError::InsufficientOperands { operator: *op,
                                                                     position: *position, })?;
                let left =
                    stack.pop()
                         .ok_or(RuntimeError::InsufficientOperands { operator: *op,
                                                                     position: *position, })?;
                stack.push(apply_binary(*op, left, right, *position)?);
            },

            Token::OpenParen | Token::CloseParen => {
                return Err(RuntimeError::UnexpectedParenthesis { position: *position });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(RuntimeError::MalformedExpression { remaining: stack.len() }),
    }
}

/// Applies a binary operator to its operands.
///
/// Divisor checks happen before the operation, so `/` and `%` with a zero
/// right operand fail instead of silently producing an infinity or NaN.
/// The `%` operator keeps the sign of the dividend, and `^` supports
/// fractional and negative exponents.
fn apply_binary(op: Operator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    use Operator::{Add, Div, Mod, Mul, Neg, Pow, Sub};

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div => {
               if right == 0.0 {
                   return Err(RuntimeError::DivisionByZero { position });
               }
               left / right
           },
           Mod => {
               if right == 0.0 {
                   return Err(RuntimeError::ModuloByZero { position });
               }
               left % right
           },
           Pow => left.powf(right),
           // Unary negation never reaches here; `evaluate` applies it directly.
           Neg => unreachable!(),
       })
}
