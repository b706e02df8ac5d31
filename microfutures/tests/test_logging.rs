//! Log records emitted while chains run.
//!
//! Records are captured per thread, so every chain here completes (or gets
//! stranded) on the test's own thread.

use std::cell::RefCell;
use std::sync::Once;
use std::{error, fmt};

use log::{Level, LevelFilter, Log, Metadata, Record};
use microfutures::prelude::*;

#[derive(Debug, PartialEq, Eq)]
struct LogError;

impl fmt::Display for LogError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "log error")
    }
}

impl error::Error for LogError {}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if record.target().starts_with("microfutures") {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Runs `f` and returns the records it logged on this thread.
fn capture<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.borrow_mut().drain(..).collect())
}

fn at(records: &[(Level, String)], level: Level) -> Vec<String> {
    records
        .iter()
        .filter(|(lvl, _)| *lvl == level)
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[test]
fn test_dropped_leaf_completion_logged_once() {
    let records = capture(|| {
        Future::<u32, LogError>::from_operation(drop)
            .map(|n| n.to_string())
            .map(|s| s.len() as u8)
            .subscribe(|_| panic!("unexpected value"), |_| panic!("unexpected error"));
    });

    assert_eq!(
        at(&records, Level::Debug),
        vec!["Completion for Future<u32> dropped without an outcome".to_owned()]
    );
}

#[test]
fn test_dropped_dependent_completion_names_dependent() {
    let records = capture(|| {
        Future::<u32, LogError>::from_value(1)
            .flat_map(|_| Future::<u16, LogError>::from_operation(drop))
            .map_err(|err| err)
            .try_map(|n| Ok::<_, LogError>(n + 1))
            .subscribe_success(|_| panic!("unexpected value"));
    });

    assert_eq!(
        at(&records, Level::Debug),
        vec!["Completion for Future<u16> dropped without an outcome".to_owned()]
    );
}

#[test]
fn test_completed_chain_logs_no_drop() {
    let records = capture(|| {
        Future::<u32, LogError>::from_operation(|completion| completion.succeed(2))
            .flat_map(|n| Future::from_value(n * 2))
            .map(|n| n + 1)
            .subscribe_success(|n| assert_eq!(n, 5));
    });

    assert!(at(&records, Level::Debug).is_empty());
}

#[test]
fn test_subscribe_logs_trace() {
    let records = capture(|| {
        Future::<u32, LogError>::from_value(3).subscribe_error(|_| panic!("unexpected error"));
    });

    assert_eq!(
        at(&records, Level::Trace),
        vec!["Subscribing to Future<u32>".to_owned()]
    );
}

#[cfg(feature = "into-future")]
#[test]
fn test_await_logs_trace() {
    let records = capture(|| {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let res = rt.block_on(async { Future::<u32, LogError>::from_value(4).await });
        assert_eq!(res, Ok(4));
    });

    assert_eq!(
        at(&records, Level::Trace),
        vec!["Awaiting Future<u32>".to_owned()]
    );
}
