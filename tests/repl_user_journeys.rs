//! Scripted end-to-end REPL sessions over a temp store, asserting on the
//! exact text a user would see.

use std::io::Cursor;

use stocks_cli::Repl;
use stocks_core::FetchError;
use stocks_tests::{open_store, price, store_config, ts, ScriptedFetcher};
use stocks_store::Store;
use tempfile::tempdir;

fn run_session(repl: &Repl<ScriptedFetcher>, script: &str) -> String {
    let mut output = Vec::new();
    repl.run(Cursor::new(script), &mut output)
        .expect("session should complete");
    String::from_utf8(output).expect("output must be utf-8")
}

#[test]
fn fresh_store_walkthrough_discovers_and_updates_a_stock() {
    let temp = tempdir().expect("tempdir");
    let store = open_store(&temp);
    let fetcher =
        ScriptedFetcher::new().push_points(vec![(ts("2024-06-03T16:00:00Z"), price("150.00"))]);

    let repl = Repl::new(store, fetcher);
    let output = run_session(&repl, "ls\nAAPL\nup AAPL\nAAPL\nexit\n");

    // `ls` on a fresh store prints nothing: two prompts back to back.
    assert!(output.contains("$ $ I don't know about AAPL"));
    assert!(output.contains("Run \"up AAPL\" to update the stock"));
    assert_eq!(output.matches("  2024-06-03T16:00:00Z  150.00").count(), 1);
}

#[test]
fn bare_up_prints_only_the_up_help_line_and_fetches_nothing() {
    let temp = tempdir().expect("tempdir");
    let store = open_store(&temp);
    let fetcher = ScriptedFetcher::new();
    let calls = fetcher.call_log();

    let repl = Repl::new(store, fetcher);
    let output = run_session(&repl, "up\nexit\n");

    // Once in the banner help, once for the arity error.
    assert_eq!(output.matches("Updates stock").count(), 2);
    assert_eq!(output.matches("List all known stocks").count(), 1);
    assert!(calls.borrow().is_empty(), "no fetch may be attempted");
}

#[test]
fn fetch_failure_is_reported_and_the_loop_continues() {
    let temp = tempdir().expect("tempdir");
    let config = store_config(&temp);
    let store = Store::open(config.clone()).expect("store open");
    let fetcher = ScriptedFetcher::new().push_error(FetchError::unavailable("source offline"));

    let repl = Repl::new(store, fetcher);
    let output = run_session(&repl, "up AAPL\nls\nexit\n");
    drop(repl);

    assert!(output.contains("error: source offline (fetch.unavailable)"));
    // The loop kept going: `ls` shows the stock row created before the fetch.
    assert!(output.contains("$ AAPL\n"));

    let store = Store::open(config).expect("reopen");
    let symbol = stocks_core::Symbol::parse("AAPL").expect("symbol should parse");
    let stock = store
        .find_stock_by_symbol(&symbol)
        .expect("lookup")
        .expect("stock row must exist");
    assert!(store.list_valuations(&stock).expect("list").is_empty());
}

#[test]
fn help_accepts_a_topic_and_question_mark_alias() {
    let temp = tempdir().expect("tempdir");
    let repl = Repl::new(open_store(&temp), ScriptedFetcher::new());

    let output = run_session(&repl, "help ls\n?\nexit\n");

    // Banner help, the `ls` topic line, and the full `?` help.
    assert_eq!(output.matches("List all known stocks").count(), 3);
    assert_eq!(output.matches("Exit stocks").count(), 2);
}

#[test]
fn blank_lines_reprompt_without_output() {
    let temp = tempdir().expect("tempdir");
    let repl = Repl::new(open_store(&temp), ScriptedFetcher::new());

    let output = run_session(&repl, "\n   \nexit\n");
    assert_eq!(output.matches("$ ").count(), 3);
}

#[test]
fn tokens_that_are_not_symbols_display_as_unknown_stocks() {
    let temp = tempdir().expect("tempdir");
    let repl = Repl::new(open_store(&temp), ScriptedFetcher::new());

    let output = run_session(&repl, "foo!\nexit\n");
    assert!(output.contains("I don't know about FOO!"));
    assert!(output.contains("Run \"up FOO!\" to update the stock"));
}

#[test]
fn end_of_input_behaves_like_exit() {
    let temp = tempdir().expect("tempdir");
    let repl = Repl::new(open_store(&temp), ScriptedFetcher::new());

    // No `exit` command; the stream just ends.
    let output = run_session(&repl, "ls\n");
    assert!(output.ends_with("$ "));
}
