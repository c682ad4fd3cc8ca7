mod cli;
mod repl;
mod rlpl;

use std::{io::BufReader, path::PathBuf, process::ExitCode, rc::Rc};

use clap::{Parser, Subcommand};
use cli::{print_finished, print_interrupted, print_running, print_warning};
use bitcalc_core::{
    session::prelude::{ErrorStyle, Session},
    utils::prelude::{Error, Warning, WarningEmitter, WarningEmitterIO}
};

/// Calculator for bitwise expressions over unsigned 32-bit integers
#[derive(Parser)]
#[command(version, about, after_help = SESSION_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Report statement errors as annotated diagnostics
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,
}

const SESSION_HELP: &str = "\
Session commands:
  ;    print the last value in decimal
  :    print the last value in binary
  q    quit; only the standalone word, so `quit` or `qmask` are variable names";

#[derive(Subcommand)]
enum Command {
    /// Runs the interactive calculator (default)
    Repl,
    /// Evaluates a script file line by line
    Run {
        /// Path of script file
        path: PathBuf,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = ctrlc::set_handler(|| {
        print_interrupted();
        std::process::exit(0);
    }) {
        print_warning(&format!("interrupt handler is not installed: {err}"));
    }

    ExitCode::from(exit_code(std::panic::catch_unwind(|| execute(cli))))
}

/// 0 on a normal end of session, 1 when the session fails, 2 on a panic.
fn exit_code(outcome: std::thread::Result<Result<(), Error>>) -> u8 {
    match outcome {
        Ok(Ok(())) => 0,
        Ok(Err(err)) => {
            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            err.pretty(&mut buf);
            buf_writer
                .print(&buf)
                .expect("Writing error to stderr");

            1
        },
        Err(_) => {
            eprintln!("Oops: unknown failure!");

            2
        }
    }
}

fn execute(cli: Cli) -> Result<(), Error> {
    let style = if cli.pretty { ErrorStyle::Pretty } else { ErrorStyle::Plain };
    let warnings = WarningEmitter::new(Rc::new(ConsoleWarningEmitter));

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::start(warnings, style),
        Command::Run { path } => {
            print_running(&path.display().to_string());
            let start = std::time::Instant::now();

            let file = std::fs::File::open(&path)?;
            let mut session = Session::new(warnings)
                .with_path(path)
                .with_style(style);

            session.run(BufReader::new(file), std::io::stdout().lock(), None)?;

            print_finished(std::time::Instant::now() - start, session.warning_count());

            Ok(())
        },
        Command::Rlpl => Ok(rlpl::start()?),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        let buffer_writer = crate::cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}
