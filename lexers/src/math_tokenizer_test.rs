use crate::math_tokenizer::{MathToken, MathTokenizer};

fn tokenize(input: &str) -> Vec<MathToken> {
    MathTokenizer::new(input.chars()).collect()
}

#[test]
fn basic_ops() {
    let expect = vec![
        MathToken::Number(3.0),
        MathToken::BOp(format!("+")),
        MathToken::Number(4.0),
        MathToken::BOp(format!("*")),
        MathToken::Number(2.0),
        MathToken::BOp(format!("/")),
        MathToken::UOp(format!("-")),
        MathToken::OParen,
        MathToken::Number(1.0),
        MathToken::BOp(format!("-")),
        MathToken::Number(5.0),
        MathToken::CParen,
        MathToken::BOp(format!("^")),
        MathToken::Number(2.0),
        MathToken::BOp(format!("^")),
        MathToken::Number(3.0),
    ];
    assert_eq!(tokenize("3+4*2/-(1-5)^2^3"), expect);
}

#[test]
fn functions_and_modulo() {
    let expect = vec![
        MathToken::Number(3.4e-2),
        MathToken::BOp(format!("*")),
        MathToken::Function(format!("sin"), 0),
        MathToken::OParen,
        MathToken::Variable(format!("x")),
        MathToken::CParen,
        MathToken::BOp(format!("/")),
        MathToken::OParen,
        MathToken::Number(7.0),
        MathToken::BOp(format!("mod")),
        MathToken::UOp(format!("-")),
        MathToken::Number(4.0),
        MathToken::BOp(format!("%")),
        MathToken::Number(3.0),
        MathToken::CParen,
    ];
    assert_eq!(tokenize("3.4e-2 * sin(x)/(7 mod -4 % 3)"), expect);
}

#[test]
fn mod_before_paren_is_operator() {
    let expect = vec![
        MathToken::Number(7.0),
        MathToken::BOp(format!("mod")),
        MathToken::OParen,
        MathToken::Number(2.0),
        MathToken::CParen,
    ];
    assert_eq!(tokenize("7 mod(2)"), expect);
}

#[test]
fn unary_ops() {
    let expect = vec![
        MathToken::Variable(format!("x")),
        MathToken::BOp(format!("-")),
        MathToken::UOp(format!("-")),
        MathToken::UOp(format!("+")),
        MathToken::Variable(format!("y")),
        MathToken::BOp(format!("+")),
        MathToken::Number(1.0),
    ];
    assert_eq!(tokenize("x--+y + 1"), expect);
}

#[test]
fn unknown_tokens() {
    let expect = vec![
        MathToken::Number(2.0),
        MathToken::Unknown(format!("$")),
        MathToken::Number(3.0),
    ];
    assert_eq!(tokenize("2 $ 3"), expect);
    assert_eq!(tokenize("   "), vec![]);
}

#[test]
fn function_name_before_spaced_paren() {
    let expect = vec![
        MathToken::Function(format!("sin"), 0),
        MathToken::OParen,
        MathToken::Number(0.0),
        MathToken::CParen,
        MathToken::BOp(format!("*")),
        MathToken::Variable(format!("x")),
    ];
    assert_eq!(tokenize("sin \t(0) * x"), expect);
    assert_eq!(tokenize("cos   ")[0], MathToken::Variable(format!("cos")));
}
