use lexers::{MathToken, MathTokenizer};
use log::debug;
use thiserror::Error;

use crate::node::{BinaryOp, Node, UnaryOp};
use crate::rpneval::MathContext;

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Error, PartialEq, Debug)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("bad token: {0}")]
    BadToken(String),
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
    #[error("comma outside of a function call")]
    MisplacedComma,
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("function {0} takes 1 argument, got {1}")]
    WrongArity(String, usize),
    #[error("unknown variable: {0}")]
    UnknownVar(String),
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("operands without an operator")]
    TooManyOperands,
}

// Operator stack entries while converting. Calls carry their arity.
#[derive(PartialEq, Debug)]
enum Pending {
    OParen,
    Call(String, usize),
    Binary(BinaryOp),
    Sign(UnaryOp),
}

fn precedence(p: &Pending) -> (usize, Assoc) {
    // Unary signs share precedence with exponentiation and are right
    // associative: -2^2 groups as -(2^2) while 2^-3 still finds both of
    // its operands.
    match *p {
        Pending::OParen => (1, Assoc::Left), // keep at bottom
        Pending::Binary(BinaryOp::Plus) | Pending::Binary(BinaryOp::Minus) => (2, Assoc::Left),
        Pending::Binary(BinaryOp::Power) => (5, Assoc::Right),
        Pending::Binary(_) => (3, Assoc::Left),
        Pending::Sign(_) => (5, Assoc::Right),
        Pending::Call(_, _) => (7, Assoc::Left),
    }
}

/// An expression in postfix order, ready for evaluation.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<Node>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str, cx: &MathContext) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut MathTokenizer::new(expr.chars()), cx)
    }

    pub fn parse(
        lex: &mut impl Iterator<Item = MathToken>,
        cx: &MathContext,
    ) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                MathToken::Number(num) => out.push(Node::Operand(num)),
                MathToken::Variable(ref var) => match cx.getvar(var) {
                    Some(value) => out.push(Node::Operand(value)),
                    None => return Err(ParseError::UnknownVar(var.to_string())),
                },
                MathToken::OParen => stack.push(Pending::OParen),
                MathToken::Function(fname, _) => {
                    if UnaryOp::from_function(&fname).is_none() {
                        return Err(ParseError::UnknownFunction(fname));
                    }
                    stack.push(Pending::Call(fname, 1));
                }
                MathToken::Comma | MathToken::CParen => {
                    while let Some(top) = stack.pop() {
                        if top == Pending::OParen {
                            stack.push(top);
                            break;
                        }
                        out.push(Self::into_node(top)?);
                    }
                    if stack.is_empty() {
                        return Err(ParseError::MissingOParen);
                    }
                    // end of grouping: check if this is a function call
                    if token == MathToken::CParen {
                        stack.pop(); // peel matching OParen
                        match stack.pop() {
                            Some(call @ Pending::Call(_, _)) => out.push(Self::into_node(call)?),
                            Some(other) => stack.push(other),
                            None => (),
                        }
                    } else {
                        // Comma, only valid right inside a function's parens
                        let below = stack.len().checked_sub(2);
                        match below.and_then(|i| stack.get_mut(i)) {
                            Some(Pending::Call(_, arity)) => *arity += 1,
                            _ => return Err(ParseError::MisplacedComma),
                        }
                    }
                }
                MathToken::UOp(op) => match UnaryOp::from_sign(&op) {
                    Some(sign) => Self::push_operator(Pending::Sign(sign), &mut stack, &mut out)?,
                    None => return Err(ParseError::BadToken(op)),
                },
                MathToken::BOp(op) => match BinaryOp::from_symbol(&op) {
                    Some(bop) => Self::push_operator(Pending::Binary(bop), &mut stack, &mut out)?,
                    None => return Err(ParseError::BadToken(op)),
                },
                MathToken::Unknown(lexeme) => return Err(ParseError::BadToken(lexeme)),
            }
        }
        while let Some(top) = stack.pop() {
            out.push(Self::into_node(top)?);
        }
        Self::check_arity(&out)?;
        debug!("postfix: {:?}", out);
        Ok(RPNExpr(out))
    }

    // pop whatever binds tighter than `op` before stacking it
    fn push_operator(
        op: Pending,
        stack: &mut Vec<Pending>,
        out: &mut Vec<Node>,
    ) -> Result<(), ParseError> {
        let (prec_rhs, assoc_rhs) = precedence(&op);
        while let Some(top) = stack.last() {
            let (prec_lhs, _) = precedence(top);
            if prec_lhs < prec_rhs || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Right) {
                break;
            }
            if let Some(top) = stack.pop() {
                out.push(Self::into_node(top)?);
            }
        }
        stack.push(op);
        Ok(())
    }

    // an OParen only reaches here when it was never closed
    fn into_node(p: Pending) -> Result<Node, ParseError> {
        match p {
            Pending::OParen => Err(ParseError::MissingCParen),
            Pending::Binary(op) => Ok(Node::Binary(op)),
            Pending::Sign(op) => Ok(Node::Unary(op)),
            Pending::Call(fname, 1) => UnaryOp::from_function(&fname)
                .map(Node::Unary)
                .ok_or(ParseError::UnknownFunction(fname)),
            Pending::Call(fname, n) => Err(ParseError::WrongArity(fname, n)),
        }
    }

    // Walk the output like the evaluator would, so that every operator
    // finds its operands and exactly one value is left at the end.
    fn check_arity(out: &[Node]) -> Result<(), ParseError> {
        let mut depth = 0usize;
        for node in out.iter() {
            let needed = node.arity();
            if depth < needed {
                return Err(ParseError::MissingOperand);
            }
            depth = depth - needed + 1;
        }
        match depth {
            0 => Err(ParseError::Empty),
            1 => Ok(()),
            _ => Err(ParseError::TooManyOperands),
        }
    }
}
