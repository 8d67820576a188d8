use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tyscript::{ast::statements::BlockStmt, lexer::tokens::Token, render_error, Session};

#[derive(Parser, Debug)]
#[command(version, about = "Interpreter for a statically typed scripting language")]
struct Args {
    /// Print the tokens and the parsed program before running it
    #[arg(short, long)]
    debug: bool,

    /// Script to run. Starts an interactive prompt when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Arguments passed on to the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Prints whatever the lexer and parser produced, also for a failed run.
fn print_debug(tokens: Option<&[Token]>, ast: Option<&BlockStmt>) {
    for token in tokens.unwrap_or_default() {
        println!("{}", token);
    }
    if let Some(ast) = ast {
        print!("{}", ast);
    }
}

fn run_file(path: &Path, debug: bool) -> anyhow::Result<ExitCode> {
    let source = read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mut session = Session::with_file(file_name);

    let result = session.run(&source, debug);
    print_debug(session.last_tokens(), session.last_ast());

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &path.display().to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn repl(debug: bool) -> anyhow::Result<ExitCode> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!(">>> ");
        stdout.flush().context("failed to flush stdout")?;

        line.clear();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            println!();
            break;
        }

        let source = line.trim_end();
        if source == "exit" || source == "quit" {
            break;
        }

        let result = session.run(source, debug);
        print_debug(session.last_tokens(), session.last_ast());

        match result {
            Ok(output) => {
                if let Some(value) = output.value {
                    println!("{}", value);
                }
            }
            Err(error) => eprint!("{}", render_error(&error, source, "shell")),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    if !args.args.is_empty() {
        debug!(args = ?args.args, "script arguments");
    }

    match &args.file {
        Some(path) => {
            info!(file = %path.display(), "running script");
            run_file(path, args.debug)
        }
        None => repl(args.debug),
    }
}
