use stocks_core::{fetch_window, Fetcher, Symbol, UtcDateTime};
use stocks_store::Store;

use crate::error::CliError;

/// Extend a stock's valuation history up to the present.
///
/// The stock row is created (and persisted) before any valuation referencing
/// it. The fetch range starts at the latest known valuation plus the grace
/// offset, or at the far-past sentinel for a never-valued stock. Inserts are
/// per-row without a transaction: a mid-batch failure stops the batch and
/// leaves the earlier rows in place.
pub fn run(store: &Store, fetcher: &impl Fetcher, raw_symbol: &str) -> Result<(), CliError> {
    let symbol = Symbol::parse(raw_symbol)?;

    let stock = match store.find_stock_by_symbol(&symbol)? {
        Some(stock) => stock,
        None => store.insert_stock(&symbol)?,
    };

    let latest = store.latest_valuation(&stock)?.map(|valuation| valuation.time);
    let (start, end) = fetch_window(latest, UtcDateTime::now());

    let fetched = fetcher.fetch(&stock, start, end)?;
    for valuation in &fetched {
        store.insert_valuation(valuation)?;
    }

    Ok(())
}
