use crate::node::{BinaryOp, Node, UnaryOp};
use crate::parser::RPNExpr;
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a Node),
    Node(&'a Node, Vec<AST<'a>>),
}

// binding strength of each node when printed back as infix
fn precedence(node: &Node) -> (usize, bool) {
    match *node {
        Node::Binary(BinaryOp::Plus) | Node::Binary(BinaryOp::Minus) => (2, true),
        Node::Binary(BinaryOp::Power) => (5, false),
        Node::Binary(_) => (3, true),
        Node::Unary(op) if op.is_function() => (7, true),
        Node::Unary(_) => (5, false),
        // a negative literal prints with its sign, so it binds like one
        Node::Operand(x) if x.is_sign_negative() => (5, false),
        Node::Operand(_) => (99, true),
    }
}

impl RPNExpr {
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for node in self.0.iter() {
            let n = ops.len().checked_sub(node.arity())?;
            match node.arity() {
                0 => ops.push(AST::Leaf(node)),
                _ => {
                    let operands = ops.split_off(n);
                    ops.push(AST::Node(node, operands));
                }
            }
        }
        ops.pop()
    }

    /// The nodes in evaluation order, separated by spaces.
    pub fn postfix_string(&self) -> String {
        self.0
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // returns the printed subtree along with its precedence and
        // left-associativity
        fn printer(root: &AST) -> (String, (usize, bool)) {
            match root {
                AST::Leaf(node) => (format!("{}", node), precedence(node)),
                AST::Node(node, args) => match **node {
                    Node::Unary(op) if op.is_function() => {
                        (format!("{}({})", op.symbol(), printer(&args[0]).0), precedence(node))
                    }
                    Node::Unary(op) => {
                        let subtree = printer(&args[0]);
                        let (prec, assoc) = precedence(node);
                        if prec > (subtree.1).0 || (op == UnaryOp::Minus && subtree.0.starts_with('-')) {
                            (format!("{}({})", op.symbol(), subtree.0), (prec, assoc))
                        } else {
                            (format!("{}{}", op.symbol(), subtree.0), (prec, assoc))
                        }
                    }
                    Node::Binary(op) => {
                        let (lhs, rhs) = (printer(&args[0]), printer(&args[1]));
                        let (prec, left_assoc) = precedence(node);

                        let lh = if prec > (lhs.1).0 || (prec == (lhs.1).0 && !left_assoc) {
                            format!("({})", lhs.0)
                        } else {
                            lhs.0
                        };
                        let rh = if prec > (rhs.1).0 || (prec == (rhs.1).0 && left_assoc) {
                            format!("({})", rhs.0)
                        } else {
                            rhs.0
                        };
                        (format!("{} {} {}", lh, op.symbol(), rh), (prec, left_assoc))
                    }
                    Node::Operand(_) => unreachable!(),
                },
            }
        }

        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => write!(f, "{}", self.postfix_string()),
        }
    }
}
