use std::{
    fs,
    io::{self, BufRead, Write},
    panic,
    process::ExitCode,
};

use clap::Parser;
use deskcalc::{
    error::CalcResult,
    interpreter::{
        lexer::PRINT,
        session::{Calculator, SessionConfig},
        token_stream::TokenStream,
    },
};

/// deskcalc is an interactive desk calculator. Statements end with `;`,
/// `let [constant] name = expression` declares a variable and `q` quits.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells deskcalc to read a file instead of the given statements.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Number of significant digits in printed results.
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..=17))]
    precision: u16,

    /// Do not print the `> ` prompt. Handy when piping input.
    #[arg(short, long)]
    quiet: bool,

    /// Start without the built-in constant `k = 1000`.
    #[arg(long)]
    no_builtins: bool,

    /// Statements to evaluate. Standard input is read when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match panic::catch_unwind(|| run(&args)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            eprintln!("exception: {e}");
            ExitCode::from(1)
        },
        Err(_) => {
            eprintln!("exception");
            if args.contents.is_none() {
                let _ = TokenStream::new(io::stdin().lock()).ignore(PRINT);
            }
            ExitCode::from(2)
        },
    }
}

fn run(args: &Args) -> CalcResult<()> {
    let config = SessionConfig { precision:   usize::from(args.precision),
                                 show_prompt: !args.quiet,
                                 builtins:    !args.no_builtins, };
    let mut calculator = Calculator::new(config);
    let (mut out, mut err) = (io::stdout().lock(), io::stderr().lock());

    let Some(contents) = &args.contents else {
        let mut tokens = TokenStream::new(io::stdin().lock());
        return run_session(&mut calculator, &mut tokens, &mut out, &mut err);
    };

    let script = if args.file { fs::read(contents)? } else { contents.clone().into_bytes() };
    let mut tokens = TokenStream::new(script.as_slice());
    run_session(&mut calculator, &mut tokens, &mut out, &mut err)
}

/// Runs a session and, if it fails, drains the input up to the next `;` so
/// the terminal is left at a statement boundary.
fn run_session<R, W, E>(calculator: &mut Calculator,
                        tokens: &mut TokenStream<R>,
                        out: &mut W,
                        err: &mut E)
                        -> CalcResult<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let result = calculator.run_session(tokens, out, err);
    if result.is_err() {
        let _ = tokens.ignore(PRINT);
    }
    result
}
