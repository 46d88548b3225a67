mod symbol;
mod timestamp;

use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use symbol::Symbol;
pub use timestamp::UtcDateTime;

/// A tracked ticker. Created on first update, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: i64,
    pub symbol: Symbol,
}

impl Display for Stock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol.as_str())
    }
}

/// A single timestamped price observation for a stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    pub id: i64,
    pub stock_id: i64,
    pub time: UtcDateTime,
    pub price: Decimal,
}

impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.time, self.price)
    }
}

/// A valuation that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewValuation {
    pub stock_id: i64,
    pub time: UtcDateTime,
    pub price: Decimal,
}

impl NewValuation {
    pub fn new(stock_id: i64, time: UtcDateTime, price: Decimal) -> Self {
        Self {
            stock_id,
            time,
            price,
        }
    }
}
