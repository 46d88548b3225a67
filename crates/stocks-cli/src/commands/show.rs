use std::io::Write;

use stocks_core::Symbol;
use stocks_store::Store;

use crate::error::CliError;

/// Display every stored valuation for a symbol, or a hint to run the update
/// command when the stock is unknown.
pub fn run(store: &Store, raw_symbol: &str, output: &mut impl Write) -> Result<(), CliError> {
    let stock = match Symbol::parse(raw_symbol) {
        Ok(symbol) => store.find_stock_by_symbol(&symbol)?,
        // Anything that is not even a symbol is just an unknown stock.
        Err(_) => None,
    };

    match stock {
        Some(stock) => {
            for valuation in store.list_valuations(&stock)? {
                writeln!(output, "  {valuation}")?;
            }
        }
        None => {
            let display = raw_symbol.to_ascii_uppercase();
            writeln!(output, "I don't know about {display}")?;
            writeln!(output, "Run \"up {display}\" to update the stock")?;
        }
    }

    Ok(())
}
