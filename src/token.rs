/// A classified unit of an arithmetic expression.
///
/// `Token` covers everything the tokenizer can produce: numeric literals,
/// operators and parentheses. Numeric literals keep their source text
/// verbatim, so conversion to a number is delayed until evaluation and a
/// malformed literal fails there rather than during scanning.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, stored as the exact text found in the source.
    Number(String),
    /// A unary or binary operator.
    Operator(Operator),
    /// An opening parenthesis `(`.
    OpenParen,
    /// A closing parenthesis `)`.
    CloseParen,
}

/// Represents an operator.
///
/// Operators include the six binary operators and the unary negation marker
/// the tokenizer produces when a `-` appears where no left operand exists.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Unary negation (`-x`), recognized from context by the tokenizer.
    Neg,
}

impl Operator {
    /// Gets the binding strength used by the parser.
    ///
    /// Higher values bind tighter: unary negation binds above
    /// exponentiation, which binds above the multiplicative operators,
    /// which bind above the additive ones.
    ///
    /// ## Example
    /// ```
    /// use numeval::token::Operator;
    ///
    /// assert!(Operator::Neg.precedence() > Operator::Pow.precedence());
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Div.precedence(), Operator::Mod.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Neg => 4,
            Self::Pow => 3,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Returns `true` when the operator consumes a single operand.
    ///
    /// ## Example
    /// ```
    /// use numeval::token::Operator;
    ///
    /// assert!(Operator::Neg.is_unary());
    /// assert!(!Operator::Sub.is_unary());
    /// ```
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Neg)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Operator::{Add, Div, Mod, Mul, Neg, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub | Neg => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}
