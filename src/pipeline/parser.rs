use crate::{
    error::ParseError,
    token::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders a token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm: numbers go straight to the output,
/// operators wait on a stack until an operator of lower precedence arrives,
/// and parentheses fence off groups.
///
/// An operator entering the stack first pops every waiting operator of equal
/// or higher precedence. Popping on *equal* precedence makes every operator
/// left-associative, including `^`: `2 ^ 3 ^ 2` groups as `(2 ^ 3) ^ 2`,
/// which is 64. This deviates from the common mathematical convention of
/// right-associative exponentiation and is kept on purpose; see DESIGN.md.
///
/// # Parameters
/// - `tokens`: The token sequence in source order.
///
/// # Returns
/// The same tokens in postfix order. Parentheses are consumed by the
/// reordering and never reach the output, so an empty input produces an
/// empty (and inevaluable) postfix sequence rather than an error here.
///
/// # Errors
/// - `UnmatchedCloseParen` when a `)` finds no `(` on the operator stack.
/// - `UnmatchedOpenParen` when a `(` is still waiting after all input.
///
/// # Example
/// ```
/// use numeval::{
///     pipeline::{parser::parse, tokenizer::tokenize},
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("3 + 4 * 2").unwrap();
/// let postfix = parse(&tokens).unwrap();
///
/// // 3 4 2 * +
/// assert_eq!(postfix.len(), 5);
/// assert_eq!(postfix[2].0, Token::Number("2".to_string()));
/// assert_eq!(postfix[3].0, Token::Operator(Operator::Mul));
/// assert_eq!(postfix[4].0, Token::Operator(Operator::Add));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Vec<(Token, usize)>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<(Token, usize)> = Vec::new();

    for (token, position) in tokens {
        match token {
            Token::Number(_) => output.push((token.clone(), *position)),

            Token::Operator(op) => {
                while let Some(&(Token::Operator(top), top_position)) = operators.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    operators.pop();
                    output.push((Token::Operator(top), top_position));
                }
                operators.push((token.clone(), *position));
            },

            Token::OpenParen => operators.push((token.clone(), *position)),

            Token::CloseParen => loop {
                match operators.pop() {
                    Some((Token::OpenParen, _)) => break,
                    Some(entry) => output.push(entry),
                    None => return Err(ParseError::UnmatchedCloseParen { position: *position }),
                }
            },
        }
    }

    while let Some((token, position)) = operators.pop() {
        if matches!(token, Token::OpenParen) {
            return Err(ParseError::UnmatchedOpenParen { position });
        }
        output.push((token, position));
    }

    Ok(output)
}
