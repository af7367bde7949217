//! Optional tracing integration.
//!
//! With the `tracing-integration` feature enabled these are the `tracing`
//! macros. Without it they expand to nothing, and [`trace_enabled!`] is
//! always `false`, so call sites never need their own `cfg` gates.

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, trace};

/// Returns `true` when events at TRACE level would be recorded.
#[cfg(feature = "tracing-integration")]
#[doc(hidden)]
#[macro_export]
macro_rules! trace_enabled {
    () => {
        ::tracing::enabled!(::tracing::Level::TRACE)
    };
}

/// Returns `true` when events at TRACE level would be recorded.
#[cfg(not(feature = "tracing-integration"))]
#[doc(hidden)]
#[macro_export]
macro_rules! trace_enabled {
    () => {
        false
    };
}

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    pub(crate) use {debug, trace};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop::{debug, trace};

pub use crate::trace_enabled;

#[cfg(test)]
mod tests {
    use super::{debug, trace};

    #[test]
    fn facade_macros_expand_in_the_default_build() {
        let removed = 3_usize;
        trace!(removed, "facade trace");
        debug!(removed, "facade debug");
        let _ = removed;
        if cfg!(not(feature = "tracing-integration")) {
            assert!(!crate::trace_enabled!());
        }
    }
}
