mod error;

use clap::Parser;
use error::Error;
use rustyline::DefaultEditor;
use std::{io::{self, BufRead, IsTerminal}, time::Instant};
use symbolik_compute::{numerical::Ctxt, symbolic::simplify_with_steps};
use tracing::{debug, Level};

/// Reads arithmetic expressions and prints their simplified form.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Start in debug mode, printing expression trees, simplification steps and timing.
    #[arg(long)]
    debug: bool,

    /// Log the work done by the parser and simplifier to stderr.
    #[arg(long)]
    trace: bool,

    /// Process a single expression and exit.
    expr: Option<String>,
}

/// Parses and simplifies the given input, printing the results.
fn process_line(input: &str, debug: bool) -> Result<(), Error> {
    let start = Instant::now();
    let expr = symbolik_parser::parse(input)?;
    let (simplified, steps) = simplify_with_steps(&expr);
    let elapsed = start.elapsed();

    println!("Input: {}", expr);
    println!("Simplified: {}", simplified);
    if expr.variables().is_empty() {
        if let Some(value) = Ctxt::new().eval(&expr) {
            println!("Value: {}", value);
        }
    }

    if debug {
        println!("Input tree: {:?}", expr);
        println!("Simplified tree: {:?}", simplified);
        for step in &steps {
            println!("Step: {}", step);
        }
        println!("Elapsed: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    }

    Ok(())
}

/// State shared across the lines of a session.
struct Repl {
    debug: bool,
}

impl Repl {
    /// Handles one line of input. Returns false if the session should end.
    fn handle(&mut self, line: &str) -> bool {
        match line.trim() {
            "" => (),
            "exit" => return false,
            "debug" => {
                self.debug = !self.debug;
                debug!(debug = self.debug, "toggled debug mode");
                println!("Debug mode {}", if self.debug { "on" } else { "off" });
            },
            _ => {
                if let Err(err) = process_line(line, self.debug) {
                    err.report_to_stderr(line);
                }
            },
        }
        true
    }

    /// Runs the interactive prompt until `exit`, end of input or an interrupt.
    fn run_interactive(&mut self) -> Result<(), Error> {
        let mut rl = DefaultEditor::new()?;
        loop {
            let line = rl.readline("> ")?;
            if !line.trim().is_empty() {
                rl.add_history_entry(line.as_str())?;
            }
            if !self.handle(&line) {
                return Ok(());
            }
        }
    }

    /// Processes each line of a non-interactive stdin as one query.
    fn run_stdin(&mut self) -> Result<(), Error> {
        for line in io::stdin().lock().lines() {
            if !self.handle(&line?) {
                break;
            }
        }
        Ok(())
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.trace { Level::TRACE } else { Level::WARN })
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut repl = Repl { debug: args.debug };
    let res = if let Some(expr) = args.expr {
        repl.handle(&expr);
        Ok(())
    } else if io::stdin().is_terminal() {
        repl.run_interactive()
    } else {
        repl.run_stdin()
    };

    if let Err(err) = res {
        debug!(fatal = err.is_fatal(), "session ended with an error");
        err.report_to_stderr("");
    }
}
