use std::fmt;

use log::debug;

use crate::parser::{ParseError, RPNExpr, ShuntingParser};
use crate::rpneval::{DomainError, EvalErr, Evaluation, MathContext, PostfixEvaluator};

/// Status reported along with every calculation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    Ok = 0,
    /// The input couldn't be tokenized or converted to postfix.
    Syntax = 1,
    /// Some operation was undefined for its arguments.
    Computation = 2,
}

impl ErrorCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&ParseError> for ErrorCode {
    fn from(_: &ParseError) -> Self {
        ErrorCode::Syntax
    }
}

impl From<&EvalErr> for ErrorCode {
    fn from(_: &EvalErr) -> Self {
        ErrorCode::Syntax
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(_: &DomainError) -> Self {
        ErrorCode::Computation
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Fixed point with 7 fractional digits, never scientific notation.
/// Non-finite values print as `nan`, `inf` and `-inf`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        format!("nan")
    } else if value.is_infinite() {
        format!("{}inf", if value < 0.0 { "-" } else { "" })
    } else {
        format!("{:.7}", value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalcOutput {
    /// Only trustworthy when `code` is `ErrorCode::Ok`.
    pub result: String,
    pub code: ErrorCode,
}

impl CalcOutput {
    /// `expr = result` line, with `rpn` printed back as infix.
    pub fn echo(&self, rpn: &RPNExpr) -> String {
        format!("{} = {}", rpn, self.result)
    }
}

pub struct Calculator {
    cx: MathContext,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator { cx: MathContext::new() }
    }

    pub fn with_x(x: f64) -> Calculator {
        let mut calc = Calculator::new();
        calc.set_x(x);
        calc
    }

    /// Value substituted for the variable `x`.
    pub fn set_x(&mut self, x: f64) {
        self.cx.setvar("x", x);
    }

    pub fn context(&self) -> &MathContext {
        &self.cx
    }

    pub fn to_postfix(&self, input: &str) -> Result<RPNExpr, ParseError> {
        ShuntingParser::parse_str(input, &self.cx)
    }

    /// Evaluates an already converted expression.
    pub fn evaluate(&self, rpn: &RPNExpr) -> CalcOutput {
        let (value, code) = match PostfixEvaluator::eval(rpn) {
            Err(e) => (0.0, ErrorCode::from(&e)),
            Ok(Evaluation { value, error: None }) => (value, ErrorCode::Ok),
            Ok(Evaluation { value, error: Some(e) }) => (value, ErrorCode::from(&e)),
        };
        CalcOutput { result: format_result(value), code }
    }

    /// Converts and evaluates `input`. Conversion failures skip evaluation
    /// and format a zero result.
    pub fn smart_calc(&self, input: &str) -> CalcOutput {
        match self.to_postfix(input) {
            Ok(rpn) => self.evaluate(&rpn),
            Err(e) => {
                debug!("conversion of {:?} failed: {}", input, e);
                CalcOutput { result: format_result(0.0), code: ErrorCode::from(&e) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting() {
        assert_eq!(format_result(1.0), "1.0000000");
        assert_eq!(format_result(-1.0 / 3.0), "-0.3333333");
        assert_eq!(format_result(std::f64::consts::PI), "3.1415927");
        assert_eq!(format_result(-2.0), "-2.0000000");
        assert_eq!(format_result(1e20), "100000000000000000000.0000000");
        assert_eq!(format_result(2.5e-8), "0.0000000");
        assert_eq!(format_result(f64::NAN), "nan");
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn codes() {
        assert_eq!(ErrorCode::Ok.code(), 0);
        assert_eq!(ErrorCode::Syntax.code(), 1);
        assert_eq!(ErrorCode::Computation.code(), 2);
        assert_eq!(ErrorCode::from(&DomainError::DivisionByZero), ErrorCode::Computation);
        assert_eq!(ErrorCode::from(&ParseError::Empty), ErrorCode::Syntax);
    }
}
