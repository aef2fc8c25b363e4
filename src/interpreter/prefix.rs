use crate::interpreter::lexer::Token;

/// Reorders a disambiguated infix token sequence into prefix order.
///
/// The scan runs over the input in reverse with an operator stack, a mirror
/// image of shunting-yard. A `)` (met first because of the reversal) is
/// pushed as a scope marker; a `(` pops operators to the output until the
/// marker, which is discarded. An operator first pops every stack top of
/// *strictly greater* precedence, then pushes itself. Equal precedence does
/// not pop: with the reversed scan this tie-break decides how same-precedence
/// chains such as `8-3-2` group, and downstream output depends on it, so it
/// must stay a strict inequality. After the scan the stack is drained and the
/// whole output reversed.
///
/// Input is assumed well-formed. Unbalanced parentheses do not panic here;
/// they yield a malformed prefix sequence that the evaluator reports as an
/// error.
///
/// # Parameters
/// - `tokens`: The token sequence produced by the unary resolver.
///
/// # Returns
/// A new token sequence in prefix order.
///
/// # Examples
/// ```
/// use prefixa::interpreter::{
///     lexer::tokenize,
///     prefix::{infix_to_prefix, prefix_notation},
///     unary::resolve_unary,
/// };
///
/// let prefix = infix_to_prefix(&resolve_unary(&tokenize("(2+3)*4")));
/// assert_eq!(prefix_notation(&prefix), "* + 2 3 4");
/// ```
#[must_use]
pub fn infix_to_prefix(tokens: &[Token]) -> Vec<Token> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens.iter().rev() {
        match token {
            Token::Number(_) => output.push(token.clone()),

            Token::RParen => stack.push(Token::RParen),

            Token::LParen => {
                // Pop to the matching scope marker; the marker itself is
                // consumed, not emitted.
                while let Some(top) = stack.pop() {
                    if top == Token::RParen {
                        break;
                    }
                    output.push(top);
                }
            },

            _ => {
                while stack.last()
                           .is_some_and(|top| precedence(top) > precedence(token))
                {
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(token.clone());
            },
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    output.reverse();
    output
}

/// Renders a prefix token sequence as tokens joined by single spaces.
#[must_use]
pub fn prefix_notation(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Returns the binding strength of an operator token.
/// Non-operator tokens bind weakest of all.
const fn precedence(token: &Token) -> u8 {
    match token {
        Token::Negate => 3,
        Token::Star | Token::Slash => 2,
        Token::Plus | Token::Minus => 1,
        _ => 0,
    }
}
