use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use linecalc::{Calculator, LineReport};

/// linecalc evaluates integer arithmetic expressions, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line, instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Prompt shown before each line read from standard input.
    #[arg(short, long, default_value = "calc > ")]
    prompt: String,

    /// Shows the full syntax error, with its line and column, instead of a
    /// generic message.
    #[arg(short, long)]
    verbose: bool,

    /// Evaluates this expression and exits.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let mut calculator = Calculator::new();

    if let Some(expression) = &args.expression {
        let report = calculator.evaluate_line(expression);
        return if print_report(&report, args.verbose) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    if let Some(path) = &args.file {
        let Ok(contents) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        for line in contents.lines() {
            if let Some(report) = calculator.feed(line) {
                print_report(&report, args.verbose);
            }
        }
        return ExitCode::SUCCESS;
    }

    match run_interactive(&mut calculator, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to read from standard input: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Prompts, reads and evaluates lines until standard input is exhausted.
fn run_interactive(calculator: &mut Calculator, args: &Args) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = stdin.lock();
    let mut buffer = String::new();

    loop {
        write!(stdout, "{}", args.prompt)?;
        stdout.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        if let Some(report) = calculator.feed(&buffer) {
            print_report(&report, args.verbose);
        }
    }
}

/// Prints the diagnostics and outcome of one line. Returns `true` if the line
/// produced a value.
fn print_report(report: &LineReport, verbose: bool) -> bool {
    for message in report.messages(verbose) {
        eprintln!("{message}");
    }
    if let Some(output) = report.output() {
        println!("{output}");
    }
    report.succeeded()
}
