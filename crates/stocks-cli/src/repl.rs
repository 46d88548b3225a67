use std::io::{BufRead, Write};

use stocks_core::Fetcher;
use stocks_store::Store;

use crate::commands;
use crate::error::CliError;

const PROMPT: &str = "$ ";

/// Read-eval-print loop over a store and a pluggable fetcher.
///
/// Every command runs to completion before the next prompt. Command
/// failures are printed and the loop continues; only an I/O failure on the
/// REPL's own streams ends the session early.
pub struct Repl<F: Fetcher> {
    store: Store,
    fetcher: F,
}

impl<F: Fetcher> Repl<F> {
    pub fn new(store: Store, fetcher: F) -> Self {
        Self { store, fetcher }
    }

    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> Result<(), CliError> {
        writeln!(output, "stocks - track stock valuations")?;
        writeln!(output, "Using {}", self.store.db_path().display())?;
        commands::help::run(&mut output, None)?;

        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // EOF behaves like `exit`.
                break;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some(&first) = tokens.first() else {
                continue;
            };

            let keyword = first.to_lowercase();
            let result = match keyword.as_str() {
                "help" | "?" => commands::help::run(&mut output, tokens.get(1).copied())
                    .map_err(CliError::from),
                "ls" => commands::list::run(&self.store, &mut output),
                "up" => {
                    if tokens.len() == 2 {
                        commands::update::run(&self.store, &self.fetcher, tokens[1])
                    } else {
                        commands::help::run(&mut output, Some("up stock")).map_err(CliError::from)
                    }
                }
                "exit" => break,
                _ => commands::show::run(&self.store, first, &mut output),
            };

            match result {
                Ok(()) => {}
                Err(CliError::Io(error)) => return Err(CliError::Io(error)),
                Err(error) => writeln!(output, "error: {error}")?,
            }
        }

        Ok(())
    }
}
