use crate::token::Operator;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operator found fewer operands on the stack than it consumes.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: Operator,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// A numeric literal could not be converted to a number.
    InvalidNumber {
        /// The literal text as found in the source.
        literal:  String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A parenthesis appeared inside a postfix sequence.
    UnexpectedParenthesis {
        /// Byte offset of the parenthesis in the source.
        position: usize,
    },
    /// Evaluation finished with more or fewer than one value on the stack.
    MalformedExpression {
        /// How many values were left when the sequence was exhausted.
        remaining: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator, position } => write!(f,
                                                                        "Error at offset {position}: Insufficient operands for operator '{operator}'."),

            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },
            Self::ModuloByZero { position } => {
                write!(f, "Error at offset {position}: Modulo by zero.")
            },
            Self::InvalidNumber { literal, position } => write!(f,
                                                                "Error at offset {position}: Invalid numeric literal '{literal}'."),

            Self::UnexpectedParenthesis { position } => write!(f,
                                                               "Error at offset {position}: Parentheses cannot appear in a postfix sequence."),

            Self::MalformedExpression { remaining } => write!(f,
                                                              "Error: Malformed expression, expected a single result but {remaining} values remain."),
        }
    }
}

impl std::error::Error for RuntimeError {}
