use std::collections::HashMap;

use log::{trace, warn};
use thiserror::Error;

use crate::node::{BinaryOp, Node, UnaryOp};
use crate::parser::RPNExpr;

/// Structural failures, the converter never produces these.
#[derive(Error, Debug, PartialEq)]
pub enum EvalErr {
    #[error("empty expression")]
    Empty,
    #[error("wrong number of operands")]
    WrongNumberOfArgs,
}

/// An operation whose result is undefined for its real arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{0:?} is undefined for {1}")]
    OutOfDomain(UnaryOp, f64),
    #[error("{base} ^ {exp} is undefined")]
    InvalidPower { base: f64, exp: f64 },
}

/// Named values that variables in an expression resolve to.
#[derive(Clone, Debug)]
pub struct MathContext(pub HashMap<String, f64>);

impl Default for MathContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MathContext {
    pub fn new() -> MathContext {
        use std::f64::consts;
        let mut cx = HashMap::new();
        cx.insert(format!("pi"), consts::PI);
        cx.insert(format!("e"), consts::E);
        MathContext(cx)
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        self.0.insert(var.to_string(), val);
    }

    pub fn getvar(&self, var: &str) -> Option<f64> {
        self.0.get(var).copied()
    }
}

/// Outcome of walking a postfix expression. `value` is only meaningful
/// when `error` is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub error: Option<DomainError>,
}

pub struct PostfixEvaluator;

impl PostfixEvaluator {
    /// Walks the whole expression, a failing operation pushes 0 and the
    /// walk goes on. The last domain error seen is the one reported.
    pub fn eval(rpn: &RPNExpr) -> Result<Evaluation, EvalErr> {
        let mut operands = Vec::new();
        let mut error = None;

        for node in rpn.0.iter() {
            trace!("eval {} (kind {}) with stack {:?}", node, node.kind(), operands);
            let result = match *node {
                Node::Operand(num) => {
                    operands.push(num);
                    continue;
                }
                Node::Unary(op) => {
                    let v = operands.pop().ok_or(EvalErr::WrongNumberOfArgs)?;
                    Self::apply_unary(op, v)
                }
                Node::Binary(op) => {
                    let a = operands.pop().ok_or(EvalErr::WrongNumberOfArgs)?;
                    let b = operands.pop().ok_or(EvalErr::WrongNumberOfArgs)?;
                    Self::apply_binary(op, a, b)
                }
            };
            match result {
                Ok(n) => operands.push(n),
                Err(e) => {
                    warn!("{} failed: {}", node, e);
                    error = Some(e);
                    operands.push(0.0);
                }
            }
        }
        let value = operands.pop().ok_or(EvalErr::Empty)?;
        if !operands.is_empty() {
            return Err(EvalErr::WrongNumberOfArgs);
        }
        Ok(Evaluation { value, error })
    }

    pub fn apply_unary(op: UnaryOp, v: f64) -> Result<f64, DomainError> {
        let out_of_domain = match op {
            UnaryOp::Sqrt => v < 0.0,
            UnaryOp::Ln | UnaryOp::Log10 => v <= 0.0,
            UnaryOp::Acos | UnaryOp::Asin => v < -1.0 || v > 1.0,
            _ => false,
        };
        if out_of_domain {
            return Err(DomainError::OutOfDomain(op, v));
        }
        Ok(match op {
            UnaryOp::Minus => -v,
            UnaryOp::Plus => v,
            UnaryOp::Sqrt => v.sqrt(),
            UnaryOp::Ln => v.ln(),
            UnaryOp::Log10 => v.log10(),
            UnaryOp::Sin => v.sin(),
            UnaryOp::Cos => v.cos(),
            UnaryOp::Tan => v.tan(),
            UnaryOp::Acos => v.acos(),
            UnaryOp::Asin => v.asin(),
            UnaryOp::Atan => v.atan(),
        })
    }

    /// `a` is the right hand operand (popped first), `b` the left one.
    pub fn apply_binary(op: BinaryOp, a: f64, b: f64) -> Result<f64, DomainError> {
        match op {
            BinaryOp::Plus => Ok(a + b),
            BinaryOp::Minus => Ok(b - a),
            BinaryOp::Multiply => Ok(a * b),
            BinaryOp::Divide if a == 0.0 => Err(DomainError::DivisionByZero),
            BinaryOp::Divide => Ok(b / a),
            BinaryOp::Power if (b == 0.0 && a == 0.0) || (b < 0.0 && a.fract() != 0.0) => {
                Err(DomainError::InvalidPower { base: b, exp: a })
            }
            BinaryOp::Power => Ok(b.powf(a)),
            // no zero guard, x % 0 is NaN
            BinaryOp::Modulo => Ok(b % a),
        }
    }
}
