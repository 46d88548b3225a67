use std::io::Write;

use stocks_store::Store;

use crate::error::CliError;

/// Print every known stock symbol; the store returns them sorted.
pub fn run(store: &Store, output: &mut impl Write) -> Result<(), CliError> {
    for stock in store.list_all_stocks()? {
        writeln!(output, "{stock}")?;
    }
    Ok(())
}
