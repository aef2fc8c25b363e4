use crate::interpreter::lexer::Token;

/// Rewrites every unary-position `-` into the negation marker.
///
/// A `-` is unary when the immediately preceding token is absent (start of
/// expression), an opening parenthesis, or one of the four binary operators;
/// otherwise it is binary subtraction and passes through unchanged. The pass
/// tracks the previous *raw* token, not the previous resolved one, so each
/// minus in a chain like `--5` is classified independently against the
/// literal token before it and becomes its own marker; no double-negation
/// collapsing happens here.
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// A new sequence of the same length with unary minuses replaced by
/// [`Token::Negate`].
///
/// # Examples
/// ```
/// use prefixa::interpreter::{lexer::tokenize, unary::resolve_unary};
/// use prefixa::interpreter::lexer::Token;
///
/// let resolved = resolve_unary(&tokenize("-5+3"));
/// assert_eq!(resolved[0], Token::Negate);
///
/// // After `(` and after `*` the minus is unary as well.
/// let resolved = resolve_unary(&tokenize("2*(-3)"));
/// assert_eq!(resolved[3], Token::Negate);
/// ```
#[must_use]
pub fn resolve_unary(tokens: &[Token]) -> Vec<Token> {
    let mut resolved = Vec::with_capacity(tokens.len());
    let mut previous: Option<&Token> = None;

    for token in tokens {
        let unary_position =
            matches!(previous,
                     None
                     | Some(Token::LParen
                            | Token::Plus
                            | Token::Minus
                            | Token::Star
                            | Token::Slash));

        if *token == Token::Minus && unary_position {
            resolved.push(Token::Negate);
        } else {
            resolved.push(token.clone());
        }

        previous = Some(token);
    }

    resolved
}
