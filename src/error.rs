#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a prefix sequence.
///
/// Errors are sentinel values, not panics: a failing expression reports its
/// error string and the caller moves on to the next expression. Overflow is
/// deliberately not an error; it is signaled separately and evaluation
/// continues with the wrapped result.
pub enum EvalError {
    /// A unary operator found an empty evaluation stack.
    NotEnoughOperands,
    /// A binary operator found fewer than two operands on the stack.
    NotEnoughOperandsForOperation,
    /// The right-hand operand of a division was zero.
    DivisionByZero,
    /// The evaluation stack was empty after every token was consumed.
    InvalidExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughOperands => write!(f, "Error: Not enough operands"),

            Self::NotEnoughOperandsForOperation => {
                write!(f, "Error: Not enough operands for operation")
            },

            Self::DivisionByZero => write!(f, "Div by 0"),

            Self::InvalidExpression => write!(f, "Error: Invalid expression"),
        }
    }
}

impl std::error::Error for EvalError {}
