//! Tagdeque: a tagged, optionally thread-safe double-ended queue.
//!
//! # Overview
//!
//! A [`Deque`] is an ordered container of heterogeneous [`Value`]s. Each
//! element may carry an optional string tag used for linear lookup. The
//! container is a sentinel-bounded doubly linked list stored in a slab, so
//! insertion and removal at either end are O(1) and never special-case the
//! first or last element.
//!
//! # Core Guarantees
//!
//! - **FIFO**: [`Deque::add`] followed by [`Deque::poll`] preserves insertion order
//! - **Single ownership**: the deque owns every element; nested [`Object`]s and
//!   deques held as values follow the same rule recursively
//! - **Explicit absence**: reads return `Option`, so "empty" and "present but
//!   zero" are never confused
//! - **Checked borrows**: peeked values are guards that keep the read lock, so a
//!   borrowed tag cannot outlive the next mutation
//! - **Caller-synchronised iteration**: a [`Cursor`] requires exclusive access,
//!   either through `&mut Deque` or a held write lock
//!
//! # Module Structure
//!
//! - [`deque`]: The container, its slab-backed chain, and the cursor
//! - [`value`]: The closed value type and the nested [`Object`] kind
//! - [`render`]: JSON and indented-text renderers
//! - [`config`]: Construction-time configuration
//! - [`error`](mod@error): Error types
//! - [`tracing_compat`]: Optional tracing integration (requires `tracing-integration` feature)
//!
//! # Example
//!
//! ```
//! use tagdeque::{Deque, Format, Value};
//!
//! let deque = Deque::new(true);
//! deque.add(None, 10_i32);
//! deque.add(Some("x"), 20_i32);
//!
//! let first = deque.poll().expect("first element");
//! assert_eq!(first.value, Value::Int32(10));
//! assert!(first.tag.is_none());
//!
//! assert_eq!(deque.get("x").as_deref(), Some(&Value::Int32(20)));
//! assert_eq!(deque.len(), 1);
//! assert_eq!(deque.render(Format::Json, None, 0), "[\n  \"x\": 20\n]");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod deque;
pub mod error;
pub mod render;
pub mod tracing_compat;
pub mod value;

// ── Test-only modules ───────────────────────────────────────────────────
#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use config::DequeConfig;
pub use deque::{Cursor, Deque, Element, IntoIter, Peek, ValueRef};
pub use error::{DequeError, Result};
pub use render::{BULLET_POINT, Format, INDENT_PER_LEVEL};
pub use value::{Object, Value, ValueKind};
