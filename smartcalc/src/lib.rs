pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod node;
pub mod parser;

pub use self::node::{BinaryOp, Node, UnaryOp};
pub use self::rpneval::{DomainError, EvalErr, Evaluation, MathContext, PostfixEvaluator};

mod rpnprint;
mod rpneval;

pub use self::calc::{format_result, CalcOutput, Calculator, ErrorCode};

mod calc;
#[cfg(test)]
mod calc_test;
