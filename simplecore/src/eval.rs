//! Arithmetic evaluator for the simple calculator.
//!
//! Pure functions only: the form snapshot goes in, a displayable outcome
//! comes out. Divide-by-zero and an unknown operator symbol are defined
//! results the user can read, not faults. The only error is an operand
//! that does not parse as a number.

use thiserror::Error;

/// Displayed when the divisor is zero.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// Displayed when the operator symbol is not one of the four.
pub const INVALID_OPERATION: &str = "Invalid operation";

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in the order the form presents them.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Resolve a surface symbol (whitespace-trimmed) to an operator.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol.trim() {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The surface symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division by zero (including negative zero) yields the
    /// [`DIVIDE_BY_ZERO`] message rather than infinity or NaN.
    pub fn apply(self, first: f64, second: f64) -> CalcResult {
        match self {
            Operator::Add => CalcResult::Value(first + second),
            Operator::Subtract => CalcResult::Value(first - second),
            Operator::Multiply => CalcResult::Value(first * second),
            Operator::Divide => {
                if second == 0.0 {
                    CalcResult::Message(DIVIDE_BY_ZERO)
                } else {
                    CalcResult::Value(first / second)
                }
            }
        }
    }
}

/// The outcome of one calculation: a number, or a displayable message.
/// Never partially computed; replaced wholesale on every trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcResult {
    Value(f64),
    Message(&'static str),
}

impl std::fmt::Display for CalcResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcResult::Value(v) => f.write_str(&format_number(*v)),
            CalcResult::Message(m) => f.write_str(m),
        }
    }
}

/// A calculation that could not even start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operand's text is not parseable as a number.
    #[error("\"{0}\" is not a number")]
    Parse(String),
}

/// Parse one operand. Whitespace around the number is accepted.
pub fn parse_operand(text: &str) -> Result<f64, EvalError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| EvalError::Parse(text.trim().to_string()))
}

/// Evaluate the full text-level contract: parse both operands, resolve the
/// operator symbol, apply. The first operand is reported first if both fail
/// to parse. An unknown symbol is a displayable result, not an error.
pub fn evaluate(first: &str, symbol: &str, second: &str) -> Result<CalcResult, EvalError> {
    let first = parse_operand(first)?;
    let second = parse_operand(second)?;
    match Operator::from_symbol(symbol) {
        Some(op) => Ok(op.apply(first, second)),
        None => Ok(CalcResult::Message(INVALID_OPERATION)),
    }
}

/// Format a number for the result display.
/// Integers print without a fractional part; very large and very small
/// magnitudes fall back to scientific notation; everything else is printed
/// to ten places with trailing zeros trimmed.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "Error".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    if n == n.floor() && n.abs() < 1e12 {
        format!("{}", n as i64)
    } else if n.abs() >= 1e12 || (n.abs() < 1e-6 && n != 0.0) {
        format!("{:.6e}", n)
    } else {
        let s = format!("{:.10}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_operations() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), CalcResult::Value(7.0));
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), CalcResult::Value(-1.0));
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), CalcResult::Value(12.0));
        assert_eq!(Operator::Divide.apply(10.0, 2.0), CalcResult::Value(5.0));
        assert_eq!(Operator::Divide.apply(1.0, 3.0), CalcResult::Value(1.0 / 3.0));
    }

    #[test]
    fn test_divide_by_zero_is_a_message() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            CalcResult::Message(DIVIDE_BY_ZERO)
        );
        // Negative zero compares equal to zero and is guarded the same way.
        assert_eq!(
            Operator::Divide.apply(5.0, -0.0),
            CalcResult::Message(DIVIDE_BY_ZERO)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, 0.0),
            CalcResult::Message(DIVIDE_BY_ZERO)
        );
    }

    #[test]
    fn test_symbol_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol(" * "), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol("plus"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn test_default_operator_is_add() {
        assert_eq!(Operator::default(), Operator::Add);
    }

    #[test]
    fn test_evaluate_happy_path() {
        assert_eq!(evaluate("3", "+", "4"), Ok(CalcResult::Value(7.0)));
        assert_eq!(evaluate("10", "/", "2"), Ok(CalcResult::Value(5.0)));
        assert_eq!(evaluate("1.5", "*", "2"), Ok(CalcResult::Value(3.0)));
        assert_eq!(evaluate(" -2 ", "-", "3"), Ok(CalcResult::Value(-5.0)));
    }

    #[test]
    fn test_evaluate_divide_by_zero_literal() {
        assert_eq!(
            evaluate("5", "/", "0"),
            Ok(CalcResult::Message(DIVIDE_BY_ZERO))
        );
    }

    #[test]
    fn test_evaluate_unknown_symbol_literal() {
        assert_eq!(
            evaluate("2", "%", "3"),
            Ok(CalcResult::Message(INVALID_OPERATION))
        );
    }

    #[test]
    fn test_evaluate_parse_errors() {
        assert_eq!(
            evaluate("abc", "+", "1"),
            Err(EvalError::Parse("abc".to_string()))
        );
        assert_eq!(
            evaluate("1", "+", ""),
            Err(EvalError::Parse("".to_string()))
        );
        // First operand reported first when both are bad.
        assert_eq!(
            evaluate("x", "+", "y"),
            Err(EvalError::Parse("x".to_string()))
        );
        assert_eq!(
            EvalError::Parse("abc".to_string()).to_string(),
            "\"abc\" is not a number"
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let a = evaluate("7.25", "*", "-3");
        let b = evaluate("7.25", "*", "-3");
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(f64::INFINITY), "Inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_number(f64::NAN), "Error");
        assert_eq!(format_number(1e13), "1.000000e13");
    }

    #[test]
    fn test_result_display() {
        assert_eq!(CalcResult::Value(7.0).to_string(), "7");
        assert_eq!(
            CalcResult::Message(DIVIDE_BY_ZERO).to_string(),
            "Cannot divide by zero"
        );
    }
}
