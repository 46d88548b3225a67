//! DuckDB-backed storage for stocks and their valuations.
//!
//! The store owns a single long-lived connection by composition and exposes
//! only the typed operations the CLI needs; the raw connection never leaves
//! this crate. The tool is single-user and single-process, so there is no
//! pooling and no locking.

pub mod migrations;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use duckdb::{params, Connection, OptionalExt};
use rust_decimal::Decimal;
use thiserror::Error;

use stocks_core::{NewValuation, Stock, Symbol, UtcDateTime, Valuation};

/// Database file name, fixed by convention.
const DB_FILE_NAME: &str = "Stocks.db";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    DuckDb(#[from] duckdb::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("stored {column} value is not valid: '{value}'")]
    Corrupt {
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: resolve_stocks_home().join(DB_FILE_NAME),
        }
    }
}

pub struct Store {
    config: StoreConfig,
    connection: Connection,
}

impl Store {
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(StoreConfig::default())
    }

    /// Open the database file, creating it and its schema on first run.
    /// Re-opening an existing file is not an error.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        if let Some(parent) = config.db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let connection = Connection::open(config.db_path.as_path())?;
        migrations::apply_migrations(&connection)?;
        Ok(Self { config, connection })
    }

    pub fn db_path(&self) -> &Path {
        self.config.db_path.as_path()
    }

    /// Exact-match lookup by normalized symbol.
    pub fn find_stock_by_symbol(&self, symbol: &Symbol) -> Result<Option<Stock>, StoreError> {
        let row: Option<(i64, String)> = self
            .connection
            .query_row(
                "SELECT id, symbol FROM stocks WHERE symbol = ?",
                params![symbol.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        row.map(|(id, symbol)| stock_from_row(id, symbol)).transpose()
    }

    /// All stocks sorted by symbol ascending.
    pub fn list_all_stocks(&self) -> Result<Vec<Stock>, StoreError> {
        let mut statement = self
            .connection
            .prepare("SELECT id, symbol FROM stocks ORDER BY symbol")?;
        let rows = statement
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, symbol)| stock_from_row(id, symbol))
            .collect()
    }

    /// All valuations for a stock in storage order. Only `latest_valuation`
    /// orders by time; this query keeps the original unsorted behavior.
    pub fn list_valuations(&self, stock: &Stock) -> Result<Vec<Valuation>, StoreError> {
        let mut statement = self
            .connection
            .prepare("SELECT id, stock_id, time, price FROM valuations WHERE stock_id = ?")?;
        let rows = statement
            .query_map(params![stock.id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(valuation_from_row).collect()
    }

    /// The valuation with the maximum time for a stock, if any. Stored
    /// times are RFC3339 UTC strings; ordering goes through a TIMESTAMP
    /// cast because text order breaks when fractional-second precision is
    /// mixed within the same second.
    pub fn latest_valuation(&self, stock: &Stock) -> Result<Option<Valuation>, StoreError> {
        let row: Option<(i64, i64, String, String)> = self
            .connection
            .query_row(
                "SELECT id, stock_id, time, price FROM valuations \
                 WHERE stock_id = ? ORDER BY CAST(time AS TIMESTAMP) DESC LIMIT 1",
                params![stock.id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;

        row.map(valuation_from_row).transpose()
    }

    /// Persist a new stock row, assigning a fresh id.
    pub fn insert_stock(&self, symbol: &Symbol) -> Result<Stock, StoreError> {
        let id = self.next_id("stock_ids")?;
        self.connection.execute(
            "INSERT INTO stocks (id, symbol) VALUES (?, ?)",
            params![id, symbol.as_str()],
        )?;

        Ok(Stock {
            id,
            symbol: symbol.clone(),
        })
    }

    /// Persist a new valuation row, assigning a fresh id.
    pub fn insert_valuation(&self, valuation: &NewValuation) -> Result<Valuation, StoreError> {
        let id = self.next_id("valuation_ids")?;
        self.connection.execute(
            "INSERT INTO valuations (id, stock_id, time, price) VALUES (?, ?, ?, ?)",
            params![
                id,
                valuation.stock_id,
                valuation.time.format_rfc3339(),
                valuation.price.to_string(),
            ],
        )?;

        Ok(Valuation {
            id,
            stock_id: valuation.stock_id,
            time: valuation.time,
            price: valuation.price,
        })
    }

    fn next_id(&self, sequence: &str) -> Result<i64, StoreError> {
        let sql = format!("SELECT nextval('{sequence}')");
        let id: i64 = self.connection.query_row(sql.as_str(), [], |row| row.get(0))?;
        Ok(id)
    }
}

fn stock_from_row(id: i64, symbol: String) -> Result<Stock, StoreError> {
    let symbol = Symbol::parse(symbol.as_str()).map_err(|_| StoreError::Corrupt {
        column: "symbol",
        value: symbol,
    })?;
    Ok(Stock { id, symbol })
}

fn valuation_from_row(
    (id, stock_id, time, price): (i64, i64, String, String),
) -> Result<Valuation, StoreError> {
    let time = UtcDateTime::parse(time.as_str()).map_err(|_| StoreError::Corrupt {
        column: "time",
        value: time,
    })?;
    let price = Decimal::from_str(price.as_str()).map_err(|_| StoreError::Corrupt {
        column: "price",
        value: price,
    })?;

    Ok(Valuation {
        id,
        stock_id,
        time,
        price,
    })
}

fn resolve_stocks_home() -> PathBuf {
    if let Some(path) = env::var_os("STOCKS_HOME") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join("Documents");
    }

    PathBuf::from(".")
}
