use duckdb::{params, Connection};

struct Migration {
    version: &'static str,
    sql: &'static str,
}

// `symbol` is deliberately not UNIQUE: the update command looks a stock up
// before inserting, and the schema keeps the original single-row-per-symbol
// convention without enforcing it.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "0001_core_tables",
        sql: r#"
CREATE SEQUENCE IF NOT EXISTS stock_ids START 1;
CREATE SEQUENCE IF NOT EXISTS valuation_ids START 1;

CREATE TABLE IF NOT EXISTS stocks (
    id BIGINT PRIMARY KEY,
    symbol VARCHAR NOT NULL
);

CREATE TABLE IF NOT EXISTS valuations (
    id BIGINT PRIMARY KEY,
    stock_id BIGINT NOT NULL,
    time VARCHAR NOT NULL,
    price VARCHAR NOT NULL
);
"#,
    },
    Migration {
        version: "0002_indexes",
        sql: r#"
CREATE INDEX IF NOT EXISTS idx_stocks_symbol ON stocks(symbol);
CREATE INDEX IF NOT EXISTS idx_valuations_stock_id ON valuations(stock_id);
"#,
    },
];

pub fn apply_migrations(connection: &Connection) -> Result<(), duckdb::Error> {
    connection.execute_batch(
        r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version VARCHAR PRIMARY KEY,
    applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#,
    )?;

    for migration in MIGRATIONS {
        let applied_count: i64 = connection.query_row(
            "SELECT COUNT(*) FROM schema_migrations WHERE version = ?",
            params![migration.version],
            |row| row.get(0),
        )?;

        if applied_count == 0 {
            connection.execute_batch(migration.sql)?;
            connection.execute(
                "INSERT INTO schema_migrations (version) VALUES (?)",
                params![migration.version],
            )?;
        }
    }

    Ok(())
}
