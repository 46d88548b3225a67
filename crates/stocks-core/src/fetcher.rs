use std::fmt::{Display, Formatter};

use crate::{NewValuation, Stock, UtcDateTime};

/// Hours added to the latest known valuation before re-fetching, so a
/// partially covered day is not requested twice.
pub const GRACE_HOURS: i64 = 23;

/// Fetcher error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Unavailable,
    Malformed,
    Unimplemented,
}

/// Structured fetcher error surfaced to the update command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    retryable: bool,
}

impl FetchError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Malformed,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Unimplemented,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Unavailable => "fetch.unavailable",
            FetchErrorKind::Malformed => "fetch.malformed",
            FetchErrorKind::Unimplemented => "fetch.unimplemented",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// External capability supplying new valuations for a time range.
///
/// Returned valuations carry the given stock's id and times within
/// `[start, end]` inclusive. No ordering is guaranteed.
pub trait Fetcher {
    fn fetch(
        &self,
        stock: &Stock,
        start: UtcDateTime,
        end: UtcDateTime,
    ) -> Result<Vec<NewValuation>, FetchError>;
}

/// Compute the fetch range for an update: the latest known valuation plus
/// the grace offset, or the far-past sentinel when no valuation exists.
pub fn fetch_window(latest: Option<UtcDateTime>, now: UtcDateTime) -> (UtcDateTime, UtcDateTime) {
    let start = match latest {
        Some(time) => time.plus_hours(GRACE_HOURS),
        None => UtcDateTime::far_past(),
    };
    (start, now)
}

/// Production fetch strategy backed by Yahoo's historical quotes.
///
/// The transport is not implemented; every call reports an unimplemented
/// fetch error and the update command surfaces it to the user.
#[derive(Debug, Default)]
pub struct YahooFetcher;

impl YahooFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Fetcher for YahooFetcher {
    fn fetch(
        &self,
        stock: &Stock,
        _start: UtcDateTime,
        _end: UtcDateTime,
    ) -> Result<Vec<NewValuation>, FetchError> {
        Err(FetchError::unimplemented(format!(
            "no fetch transport is wired up for {}",
            stock.symbol
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn window_starts_at_sentinel_when_no_valuation_exists() {
        let now = UtcDateTime::parse("2024-06-03T12:00:00Z").expect("must parse");
        let (start, end) = fetch_window(None, now);
        assert_eq!(start, UtcDateTime::far_past());
        assert_eq!(end, now);
    }

    #[test]
    fn window_starts_twenty_three_hours_after_latest() {
        let latest = UtcDateTime::parse("2024-06-01T16:00:00Z").expect("must parse");
        let now = UtcDateTime::parse("2024-06-03T12:00:00Z").expect("must parse");
        let (start, _) = fetch_window(Some(latest), now);
        assert_eq!(start.format_rfc3339(), "2024-06-02T15:00:00Z");
    }

    #[test]
    fn yahoo_fetcher_reports_unimplemented() {
        let stock = Stock {
            id: 1,
            symbol: Symbol::parse("AAPL").expect("symbol should parse"),
        };
        let err = YahooFetcher::new()
            .fetch(&stock, UtcDateTime::far_past(), UtcDateTime::now())
            .expect_err("must fail");
        assert_eq!(err.kind(), FetchErrorKind::Unimplemented);
        assert!(!err.retryable());
    }
}
