use logos::Logos;

/// Represents a lexical token in one expression line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens plus the synthetic negation
/// marker, which enters a token sequence only through the unary resolver.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`. The value is the non-negative
    /// magnitude as written; two's-complement reinterpretation happens in the
    /// evaluator.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`, binary subtraction.
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// The unary-minus marker, written `^`. Produced by the unary resolver;
    /// a literal `^` in the input is not part of the expression alphabet and
    /// is dropped by [`tokenize`] like any other unrecognized character.
    #[token("^")]
    Negate,
    /// Every other character, whitespace included, is skipped silently.
    #[regex(r"[^0-9+\-*/()^]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Negate => write!(f, "^"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Tokenizes one expression line into source-order tokens.
///
/// Consecutive digits accumulate into a single `Number` token, the six
/// punctuation characters map to their tokens, and anything else is skipped.
/// The tokenizer validates nothing: unbalanced parentheses and bad
/// operand/operator adjacency pass through and surface later, during
/// evaluation.
///
/// # Parameters
/// - `source`: One expression line.
///
/// # Returns
/// The tokens in left-to-right source order; empty input yields an empty
/// sequence.
///
/// # Examples
/// ```
/// use prefixa::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("12 + 3");
/// assert_eq!(tokens, vec![Token::Number(12), Token::Plus, Token::Number(3)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source).filter_map(Result::ok)
                        .filter(|token| *token != Token::Negate)
                        .collect()
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed non-negative magnitude if successful.
/// - `None`: If the digit run does not fit an `i64`; the token is then
///   dropped like an unrecognized character.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
