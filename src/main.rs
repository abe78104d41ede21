use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use reckon::{evaluate, repl::Session, util::num::format_general};

/// reckon evaluates arithmetic expressions with `+ - * /`, parentheses,
/// decimals and unary minus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of a file instead of reading standard input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Suppresses the banner and prompt of the interactive session.
    #[arg(short, long)]
    quiet: bool,

    /// A single expression to evaluate. Starts a session when omitted.
    expression: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(value) => println!("= {}", format_general(value)),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
        return Ok(());
    }

    let summary = if let Some(path) = args.file {
        let file = File::open(&path).with_context(|| {
            format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                    path.display())
        })?;
        Session::new(BufReader::new(file), io::stdout().lock()).run()?
    } else {
        let stdin = io::stdin();
        let interactive = !args.quiet && stdin.is_terminal();
        Session::new(stdin.lock(), io::stdout().lock()).interactive(interactive)
                                                       .run()?
    };

    info!("reckon exiting after {} expressions", summary.evaluated);
    Ok(())
}
