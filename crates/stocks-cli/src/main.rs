use std::io;

use stocks_cli::repl::Repl;
use stocks_cli::CliError;
use stocks_core::YahooFetcher;
use stocks_store::Store;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let store = Store::open_default()?;
    let repl = Repl::new(store, YahooFetcher::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl.run(stdin.lock(), stdout.lock())
}
