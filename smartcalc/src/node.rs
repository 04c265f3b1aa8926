use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Modulo,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryOp {
    Minus,
    Plus,
    Sqrt,
    Ln,
    Log10,
    Sin,
    Cos,
    Tan,
    Acos,
    Asin,
    Atan,
}

/// One element of an expression in postfix order.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Node {
    Operand(f64),
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl BinaryOp {
    pub fn from_symbol(sym: &str) -> Option<BinaryOp> {
        match sym {
            "+" => Some(BinaryOp::Plus),
            "-" => Some(BinaryOp::Minus),
            "*" => Some(BinaryOp::Multiply),
            "/" => Some(BinaryOp::Divide),
            "^" => Some(BinaryOp::Power),
            "%" | "mod" => Some(BinaryOp::Modulo),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
            BinaryOp::Modulo => "mod",
        }
    }
}

impl UnaryOp {
    /// Prefix sign operators, `-` and `+`.
    pub fn from_sign(sym: &str) -> Option<UnaryOp> {
        match sym {
            "-" => Some(UnaryOp::Minus),
            "+" => Some(UnaryOp::Plus),
            _ => None,
        }
    }

    /// Named single argument functions, eg: `sqrt`.
    pub fn from_function(name: &str) -> Option<UnaryOp> {
        match name {
            "sqrt" => Some(UnaryOp::Sqrt),
            "ln" => Some(UnaryOp::Ln),
            "log" => Some(UnaryOp::Log10),
            "sin" => Some(UnaryOp::Sin),
            "cos" => Some(UnaryOp::Cos),
            "tan" => Some(UnaryOp::Tan),
            "acos" => Some(UnaryOp::Acos),
            "asin" => Some(UnaryOp::Asin),
            "atan" => Some(UnaryOp::Atan),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        !matches!(*self, UnaryOp::Minus | UnaryOp::Plus)
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Ln => "ln",
            UnaryOp::Log10 => "log",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Acos => "acos",
            UnaryOp::Asin => "asin",
            UnaryOp::Atan => "atan",
        }
    }
}

impl Node {
    /// Numeric kind code: 0 for operands, 1..=6 binary, 7..=17 unary.
    pub fn kind(&self) -> u8 {
        match *self {
            Node::Operand(_) => 0,
            Node::Binary(op) => match op {
                BinaryOp::Plus => 1,
                BinaryOp::Minus => 2,
                BinaryOp::Multiply => 3,
                BinaryOp::Divide => 4,
                BinaryOp::Power => 5,
                BinaryOp::Modulo => 6,
            },
            Node::Unary(op) => match op {
                UnaryOp::Minus => 7,
                UnaryOp::Plus => 8,
                UnaryOp::Sqrt => 9,
                UnaryOp::Ln => 10,
                UnaryOp::Log10 => 11,
                UnaryOp::Sin => 12,
                UnaryOp::Cos => 13,
                UnaryOp::Tan => 14,
                UnaryOp::Acos => 15,
                UnaryOp::Asin => 16,
                UnaryOp::Atan => 17,
            },
        }
    }

    /// Operands consumed when this node is evaluated.
    pub fn arity(&self) -> usize {
        match *self {
            Node::Operand(_) => 0,
            Node::Binary(_) => 2,
            Node::Unary(_) => 1,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Node::Operand(x) => write!(f, "{}", x),
            Node::Binary(op) => write!(f, "{}", op.symbol()),
            Node::Unary(op) if op.is_function() => write!(f, "{}", op.symbol()),
            // distinguish unary signs from their binary twins
            Node::Unary(op) => write!(f, "u{}", op.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ranges() {
        assert_eq!(Node::Operand(1.5).kind(), 0);
        let binary = [BinaryOp::Plus, BinaryOp::Minus, BinaryOp::Multiply,
                      BinaryOp::Divide, BinaryOp::Power, BinaryOp::Modulo];
        for op in binary.iter() {
            let k = Node::Binary(*op).kind();
            assert!(k >= 1 && k <= 6);
        }
        for name in ["sqrt", "ln", "log", "sin", "cos", "tan", "acos", "asin", "atan"].iter() {
            let k = Node::Unary(UnaryOp::from_function(name).unwrap()).kind();
            assert!(k > 6 && k <= 17);
        }
        assert_eq!(Node::Unary(UnaryOp::Minus).kind(), 7);
        assert_eq!(Node::Unary(UnaryOp::Atan).kind(), 17);
    }

    #[test]
    fn symbols() {
        assert_eq!(BinaryOp::from_symbol("%"), Some(BinaryOp::Modulo));
        assert_eq!(BinaryOp::from_symbol("mod"), Some(BinaryOp::Modulo));
        assert_eq!(BinaryOp::from_symbol("!"), None);
        assert_eq!(UnaryOp::from_sign("-"), Some(UnaryOp::Minus));
        assert_eq!(UnaryOp::from_function("log"), Some(UnaryOp::Log10));
        assert_eq!(UnaryOp::from_function("gamma"), None);
        assert!(!UnaryOp::Plus.is_function());
        assert_eq!(format!("{}", Node::Unary(UnaryOp::Minus)), "u-");
        assert_eq!(format!("{}", Node::Operand(2.5)), "2.5");
    }
}
