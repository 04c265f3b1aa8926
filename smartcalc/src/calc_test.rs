use crate::calc::{CalcOutput, Calculator, ErrorCode};

fn calc(input: &str) -> CalcOutput {
    Calculator::new().smart_calc(input)
}

#[test]
fn formats_results() {
    assert_eq!(calc("1"), CalcOutput { result: format!("1.0000000"), code: ErrorCode::Ok });
    assert_eq!(calc("-1/3").result, "-0.3333333");
    assert_eq!(calc("4*atan(1)").result, "3.1415927");
    assert_eq!(calc("2 - 4").result, "-2.0000000");
    assert_eq!(calc("10 mod 4").result, "2.0000000");
    assert_eq!(calc("2^3 + sqrt(16)").result, "12.0000000");
}

#[test]
fn computation_errors() {
    for input in ["10/0", "sqrt(-4)", "0^0", "(-8)^0.5", "ln(0)", "log(-1)",
                  "acos(2)", "asin(-2)", "1 + 1/0 * 3"].iter() {
        assert_eq!(calc(input).code, ErrorCode::Computation, "{}", input);
    }
    assert_eq!(calc("10/0").code.code(), 2);
}

#[test]
fn modulo_by_zero_is_not_an_error() {
    let out = calc("5 mod 0");
    assert_eq!(out.code, ErrorCode::Ok);
    assert_eq!(out.result, "nan");
}

#[test]
fn syntax_errors_skip_evaluation() {
    for input in ["", "2+", "(1+2", "1+2)", "foo(3)", "2 $ 2", "x"].iter() {
        let out = calc(input);
        assert_eq!(out.code, ErrorCode::Syntax, "{}", input);
        assert_eq!(out.result, "0.0000000");
    }
}

#[test]
fn substitutes_x() {
    let calc = Calculator::with_x(2.0);
    assert_eq!(calc.smart_calc("x^2 + 3*x").result, "10.0000000");
    assert_eq!(calc.smart_calc("sin(x)^2 + cos(x)^2").result, "1.0000000");

    let mut calc = Calculator::new();
    calc.set_x(-1.0);
    assert_eq!(calc.smart_calc("sqrt(x)").code, ErrorCode::Computation);
    calc.set_x(0.25);
    assert_eq!(calc.smart_calc("sqrt(x)").result, "0.5000000");
}

#[test]
fn independent_calls() {
    let calc = Calculator::new();
    assert_eq!(calc.smart_calc("1/0").code, ErrorCode::Computation);
    // nothing leaks from the previous failure
    assert_eq!(calc.smart_calc("1/2"), CalcOutput { result: format!("0.5000000"), code: ErrorCode::Ok });
}

#[test]
fn evaluates_converted_expression() {
    let calc = Calculator::with_x(4.0);
    let rpn = calc.to_postfix("sqrt(x) - 1/0").unwrap();
    assert_eq!(calc.evaluate(&rpn).code, ErrorCode::Computation);
    let rpn = calc.to_postfix("sqrt(x) * 3").unwrap();
    assert_eq!(calc.evaluate(&rpn), calc.smart_calc("sqrt(x) * 3"));
    assert_eq!(calc.evaluate(&rpn).result, "6.0000000");
}

#[test]
fn echoes_infix_with_result() {
    let calc = Calculator::with_x(-3.0);
    let rpn = calc.to_postfix("x^2 + sin (0)").unwrap();
    let out = calc.evaluate(&rpn);
    assert_eq!(out.echo(&rpn), "(-3) ^ 2 + sin(0) = 9.0000000");
}

#[test]
fn spaced_function_call() {
    assert_eq!(calc("sin (0)"), CalcOutput { result: format!("0.0000000"), code: ErrorCode::Ok });
    assert_eq!(calc("sqrt\t( 9 )").result, "3.0000000");
}

#[test]
fn postfix_view() {
    let rpn = Calculator::new().to_postfix("2 * (3 + 4)").unwrap();
    assert_eq!(rpn.postfix_string(), "2 3 4 + *");
    assert_eq!(format!("{}", rpn), "2 * (3 + 4)");
}
