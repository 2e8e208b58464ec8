use std::{collections::HashMap, error::Error};

use clap::Parser;
use env_logger::Env;
use rpnexpr::compiler::{lexer::lex, tokenizer::tokenize};

/// rpnexpr compiles an arithmetic expression into a postfix program and
/// evaluates it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, e.g. `-v x=2.5`. May be given several times.
    #[arg(short = 'v', long = "var", value_parser = parse_binding)]
    bindings: Vec<(String, f64)>,

    /// Prints the compiled postfix program before the result.
    #[arg(short, long)]
    rpn: bool,

    /// Prints the token stream before the result.
    #[arg(short, long)]
    tokens: bool,

    /// Enables debug logging (overrides `RUST_LOG`).
    #[arg(short, long)]
    debug: bool,

    /// The expression to evaluate, e.g. `Atan(y, x) * 180 / pi`.
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

/// Parses a `name=value` binding.
fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected name=value, found '{arg}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.tokens {
        for token in tokenize(&lex(&args.expression)?)? {
            println!("{:>3}:{:<3} {}", token.position.row, token.position.column, token.kind);
        }
    }

    let expr = rpnexpr::compile(&args.expression)?;
    if args.rpn {
        println!("{}", expr.program());
    }

    let bindings: HashMap<String, f64> = args.bindings.into_iter().collect();
    println!("{}", expr.evaluate(&bindings)?);
    Ok(())
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
