use clap::Parser;
use smartcalc::{Calculator, ErrorCode};

/// Evaluate math expressions, eg: `smartcalc 2 * sin(x) -x 0.5`.
/// Without an expression starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Value substituted for the variable `x`.
    #[arg(short, long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Show the postfix form of each expression.
    #[arg(short, long)]
    postfix: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

mod repl {
    use smartcalc::{Calculator, ErrorCode};

    pub fn evalexpr(calc: &Calculator, input: &str, postfix: bool) -> ErrorCode {
        let rpn = match calc.to_postfix(input) {
            Ok(rpn) => rpn,
            Err(e) => {
                println!("Parse error: {}", e);
                return ErrorCode::from(&e);
            }
        };
        if postfix {
            println!("{}", rpn.postfix_string());
        }
        let out = calc.evaluate(&rpn);
        match out.code {
            ErrorCode::Ok => println!("{}", out.echo(&rpn)),
            _ => println!("Eval error: invalid expression"),
        }
        out.code
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let calc = match args.x {
        Some(x) => Calculator::with_x(x),
        None => Calculator::new(),
    };

    if !args.expression.is_empty() {
        let input = args.expression.join(" ");
        let code = repl::evalexpr(&calc, &input, args.postfix);
        if code != ErrorCode::Ok {
            std::process::exit(code.code());
        }
        return Ok(());
    }

    let histpath = dirs::home_dir().map(|h| h.join(".smartcalc_history"));
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    while let Ok(input) = rl.readline(">> ") {
        if input.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(input.as_str())?;
        repl::evalexpr(&calc, &input, args.postfix);
    }
    if let Some(ref path) = histpath {
        rl.save_history(path)?;
    }
    Ok(())
}
