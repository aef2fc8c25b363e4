use crate::{error::EvalError, interpreter::lexer::Token};

/// A non-fatal overflow signal raised during evaluation.
///
/// Overflow is a notice, not a failure: the offending result is wrapped into
/// 8 bits and evaluation continues. Both variants render as the same fixed
/// report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// An addition, subtraction, or multiplication result fell outside the
    /// 8-bit signed range before wrapping.
    Wrapped,
    /// A product of two non-zero operands wrapped to exactly zero. This is an
    /// independent signal; an out-of-range product raises `Wrapped` as well.
    ZeroProduct,
}

impl std::fmt::Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wrapped | Self::ZeroProduct => write!(f, "Overflow occurs!"),
        }
    }
}

/// Evaluates a prefix token sequence with 8-bit two's-complement arithmetic.
///
/// The scan runs over the tokens in reverse, pushing operands and applying
/// operators against a transient stack. For a binary operator the stack top
/// is the operand written closer to the operator in prefix order, which is
/// the left-hand operand of the original infix expression; it is popped
/// first, the right-hand operand second.
///
/// Arithmetic semantics:
/// - A literal magnitude greater than 127 is reinterpreted as an
///   already-wrapped byte by subtracting 256 before the push.
/// - Unary negation pushes `(-x) & 0xFF`, an unsigned-style wrapped byte; it
///   never signals overflow on its own.
/// - `+`, `-` and `*` push the result masked with `& 0xFF` and signal
///   [`Overflow::Wrapped`] whenever the unmasked result lies outside
///   `[-128, 127]`. A non-zero product that masks to zero additionally
///   signals [`Overflow::ZeroProduct`] first.
/// - `/` fails with [`EvalError::DivisionByZero`] before anything else when
///   the right operand is zero; otherwise it pushes the mathematical floor
///   quotient (negative quotients round down), unwrapped and exempt from the
///   overflow check.
///
/// Stray parenthesis tokens, which only a malformed conversion can leave in
/// the sequence, are skipped.
///
/// # Parameters
/// - `tokens`: The token sequence in prefix order.
/// - `on_overflow`: Sink invoked once per overflow notice, in the order the
///   notices occur.
///
/// # Returns
/// The final stack value reinterpreted as a signed byte, or the evaluation
/// error.
///
/// # Errors
/// - [`EvalError::NotEnoughOperands`] when negation meets an empty stack.
/// - [`EvalError::NotEnoughOperandsForOperation`] when a binary operator
///   finds fewer than two operands.
/// - [`EvalError::DivisionByZero`] when dividing by zero.
/// - [`EvalError::InvalidExpression`] when the stack is empty after the scan.
///
/// # Examples
/// ```
/// use prefixa::{interpreter::evaluator::evaluate_prefix, to_prefix};
///
/// let prefix = to_prefix("5-3");
/// assert_eq!(evaluate_prefix(&prefix, |_| {}), Ok(2));
///
/// // 200 is hosted as the byte -56, and floor division rounds down.
/// let prefix = to_prefix("200/3");
/// assert_eq!(evaluate_prefix(&prefix, |_| {}), Ok(-19));
/// ```
pub fn evaluate_prefix(tokens: &[Token],
                       mut on_overflow: impl FnMut(Overflow))
                       -> Result<i8, EvalError> {
    let mut stack: Vec<i64> = Vec::new();

    for token in tokens.iter().rev() {
        let value = match token {
            Token::Number(magnitude) => as_byte(*magnitude),

            Token::Negate => {
                let operand = stack.pop().ok_or(EvalError::NotEnoughOperands)?;
                (-operand) & 0xFF
            },

            Token::Plus => {
                let (a, b) = pop_operands(&mut stack)?;
                wrap(i128::from(a) + i128::from(b), &mut on_overflow)
            },

            Token::Minus => {
                let (a, b) = pop_operands(&mut stack)?;
                wrap(i128::from(a) - i128::from(b), &mut on_overflow)
            },

            Token::Star => {
                let (a, b) = pop_operands(&mut stack)?;
                let product = i128::from(a) * i128::from(b);
                if a != 0 && b != 0 && product & 0xFF == 0 {
                    on_overflow(Overflow::ZeroProduct);
                }
                wrap(product, &mut on_overflow)
            },

            Token::Slash => {
                let (a, b) = pop_operands(&mut stack)?;
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                floor_div(a, b)
            },

            // Leftovers of a malformed conversion; the original pipeline
            // ignores them, so the garbage propagates unchanged.
            Token::LParen | Token::RParen | Token::Ignored => continue,
        };

        stack.push(value);
    }

    let answer = stack.pop().ok_or(EvalError::InvalidExpression)?;
    Ok(as_signed_byte(answer))
}

/// Reinterprets a literal magnitude as an already-wrapped byte.
/// Magnitudes above 127 are reduced by 256; `200` is hosted as `-56`.
const fn as_byte(magnitude: i64) -> i64 {
    if magnitude > 127 {
        magnitude - 256
    } else {
        magnitude
    }
}

/// Wraps an unmasked arithmetic result into 8 bits, signaling overflow
/// whenever the result did not fit the signed byte range to begin with.
fn wrap(result: i128, on_overflow: &mut impl FnMut(Overflow)) -> i64 {
    if !(-128..=127).contains(&result) {
        on_overflow(Overflow::Wrapped);
    }
    (result & 0xFF) as i64
}

/// Pops the two operands of a binary operator: left first, right second.
fn pop_operands(stack: &mut Vec<i64>) -> Result<(i64, i64), EvalError> {
    let a = stack.pop().ok_or(EvalError::NotEnoughOperandsForOperation)?;
    let b = stack.pop().ok_or(EvalError::NotEnoughOperandsForOperation)?;
    Ok((a, b))
}

/// Computes the mathematical floor quotient. Unlike Rust's truncating `/`,
/// negative quotients round down: `floor_div(-56, 3)` is `-19`.
const fn floor_div(a: i64, b: i64) -> i64 {
    let quotient = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Reads the low byte of a stack value as a signed two's-complement byte.
const fn as_signed_byte(value: i64) -> i8 {
    (value & 0xFF) as u8 as i8
}
