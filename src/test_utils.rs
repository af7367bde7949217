//! Shared helpers for unit and integration tests.
//!
//! Tests call [`init_test_logging`] once at the top, then bracket their body
//! with [`test_phase!`](crate::test_phase) and
//! [`test_complete!`](crate::test_complete). Assertions that are worth a
//! log line go through [`assert_with_log!`](crate::assert_with_log), which
//! records the expected and actual values before asserting.

use std::sync::Once;

#[doc(hidden)]
pub use tracing as __tracing;

static INIT: Once = Once::new();

/// Installs a test-writer `tracing` subscriber at TRACE level.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .with_target(false)
            .try_init();
    });
}

/// Logs the start of a named test.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        $crate::test_utils::__tracing::info!(test = %$name, "test phase: start");
    };
}

/// Logs the successful end of a named test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        $crate::test_utils::__tracing::info!(test = %$name, "test phase: complete");
    };
}

/// Asserts `cond`, logging the expected and actual values first.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr $(,)?) => {{
        let ok = $cond;
        let expected = &$expected;
        let actual = &$actual;
        $crate::test_utils::__tracing::debug!(
            check = %$msg,
            expected = ?expected,
            actual = ?actual,
            ok,
            "assertion"
        );
        assert!(ok, "{}: expected {:?}, got {:?}", $msg, expected, actual);
    }};
}

#[cfg(test)]
mod tests {
    use super::init_test_logging;
    use crate::value::Value;

    #[test]
    fn assert_with_log_accepts_crate_value_expressions() {
        init_test_logging();
        crate::test_phase!("assert_with_log_accepts_crate_value_expressions");
        let actual = Value::Int32(4);
        crate::assert_with_log!(
            actual == Value::Int32(4),
            "value argument",
            Value::Int32(4),
            actual
        );
        crate::test_complete!("assert_with_log_accepts_crate_value_expressions");
    }

    #[test]
    #[should_panic(expected = "mismatch: expected Int32(1), got Int32(2)")]
    fn assert_with_log_reports_both_sides() {
        init_test_logging();
        crate::assert_with_log!(false, "mismatch", Value::Int32(1), Value::Int32(2));
    }
}
