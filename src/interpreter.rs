/// The evaluator module computes the value of a prefix token sequence.
///
/// The evaluator walks the prefix sequence with an operand stack and performs
/// all arithmetic in 8-bit two's-complement, wrapping out-of-range results
/// and signaling each overflow through a caller-supplied sink. It is the
/// final stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates prefix token sequences on a transient operand stack.
/// - Wraps arithmetic into the 8-bit signed range and signals overflow.
/// - Reports evaluation errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module tokenizes one expression line.
///
/// The lexer (tokenizer) reads the raw expression text and produces the
/// sequence of tokens the later stages operate on: numeric literals, the four
/// binary operators, and parentheses. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens in source order.
/// - Accumulates digit runs into numeric literal tokens.
/// - Skips every unrecognized character, including whitespace.
pub mod lexer;
/// The prefix module reorders infix tokens into prefix notation.
///
/// The converter processes the disambiguated token sequence in reverse with
/// an operator-precedence stack, a reverse-scan adaptation of shunting-yard.
/// It assumes well-formed input and performs no balance validation; malformed
/// input propagates as a malformed prefix sequence.
///
/// # Responsibilities
/// - Converts infix token sequences into prefix order.
/// - Resolves operator precedence, keeping the strict-inequality tie-break.
/// - Renders prefix sequences as space-separated notation strings.
pub mod prefix;
/// The unary module disambiguates unary minus from subtraction.
///
/// A minus sign in unary position (start of expression, after an opening
/// parenthesis, or after a binary operator) is rewritten into a distinct
/// negation marker so that conversion and evaluation never confuse negation
/// with subtraction.
///
/// # Responsibilities
/// - Classifies each `-` token against the previous raw input token.
/// - Replaces unary occurrences with the synthetic negation marker.
/// - Passes every other token through unchanged.
pub mod unary;
