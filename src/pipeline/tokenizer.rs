use logos::Logos;

use crate::{
    error::ParseError,
    token::{Operator, Token},
};

/// Raw lexemes recognized by the generated lexer.
///
/// Whether a `-` is binary subtraction or unary negation is contextual and
/// therefore not a lexical matter; [`tokenize`] resolves it while collecting
/// lexemes into [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Lexeme {
    /// Numeric literal text, such as `3`, `4.5` or `.5`.
    ///
    /// Digits and dots are consumed greedily, so an ill-formed literal like
    /// `1.2.3` is accepted here and rejected during evaluation when its text
    /// fails numeric conversion.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

/// Splits an expression into positioned tokens.
///
/// Every token is paired with the byte offset of its first character, which
/// the later stages carry into their errors.
///
/// Whether an operator position is unary is decided by what came before it:
/// at the start of the expression, after another operator and after an
/// opening parenthesis, a `-` means negation and a `+` is a no-op that is
/// dropped entirely. After a number or a closing parenthesis both are
/// binary.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// `ParseError::InvalidCharacter` on the first character that does not
/// belong to any token; nothing is scanned past it.
///
/// # Example
/// ```
/// use numeval::{
///     pipeline::tokenizer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("3 - -5").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Number("3".to_string()),
///                 Token::Operator(Operator::Sub),
///                 Token::Operator(Operator::Neg),
///                 Token::Number("5".to_string())]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);
    let mut unary_position = true;

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;

        let Ok(lexeme) = lexeme else {
            return Err(ParseError::InvalidCharacter { found: lexer.slice().to_string(),
                                                      position });
        };

        let token = match lexeme {
            Lexeme::Number(text) => Token::Number(text),
            Lexeme::Plus if unary_position => continue,
            Lexeme::Minus if unary_position => Token::Operator(Operator::Neg),
            Lexeme::Plus => Token::Operator(Operator::Add),
            Lexeme::Minus => Token::Operator(Operator::Sub),
            Lexeme::Star => Token::Operator(Operator::Mul),
            Lexeme::Slash => Token::Operator(Operator::Div),
            Lexeme::Percent => Token::Operator(Operator::Mod),
            Lexeme::Caret => Token::Operator(Operator::Pow),
            Lexeme::OpenParen => Token::OpenParen,
            Lexeme::CloseParen => Token::CloseParen,
            // Skipped by the lexer; the arm only keeps the match exhaustive.
            Lexeme::Whitespace => continue,
        };

        unary_position = matches!(token, Token::Operator(_) | Token::OpenParen);
        tokens.push((token, position));
    }

    Ok(tokens)
}
