/// The evaluator module computes a number from a postfix sequence.
///
/// The evaluator walks the postfix tokens left to right with a value stack:
/// numbers are converted and pushed, operators pop their operands and push
/// the result. It is the final stage of the pipeline.
///
/// # Responsibilities
/// - Converts literal text to numbers, rejecting malformed literals.
/// - Applies unary and binary operators with operand-count checking.
/// - Reports runtime errors such as division or modulo by zero.
pub mod evaluator;
/// The parser module reorders tokens into postfix (Reverse Polish) order.
///
/// The parser consumes the token sequence produced by the tokenizer and
/// rearranges it with the shunting-yard algorithm, so that the evaluator can
/// process it in a single left-to-right pass. This is the middle stage of
/// the pipeline.
///
/// # Responsibilities
/// - Resolves operator precedence with a left-associative tie-break.
/// - Matches parentheses, reporting unmatched ones with their position.
/// - Emits a postfix sequence free of parentheses.
pub mod parser;
/// The tokenizer module splits source text into tokens.
///
/// The tokenizer reads the raw expression text and produces a stream of
/// positioned tokens: numeric literals, operators and parentheses. This is
/// the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the character stream into tokens paired with byte offsets.
/// - Distinguishes unary negation from binary subtraction by context.
/// - Reports the first unrecognized character as a lexical error.
pub mod tokenizer;
