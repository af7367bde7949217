//! Tagged double-ended queue.
//!
//! A [`Deque`] stores [`Element`]s, each an owned [`Value`] with an
//! optional owned tag, in a sentinel-bounded linked list (see `chain`).
//! Elements are appended at the tail by [`Deque::add`] and taken from the
//! head by [`Deque::poll`], which gives FIFO order.
//!
//! # Locking
//!
//! The chain sits behind a [`parking_lot::RwLock`]:
//!
//! | Operation | Lock |
//! |-----------|------|
//! | `add`, `add_front`, `poll`, `poll_last`, `remove`, `clear` | write |
//! | `peek`, `peek_last`, `get`, `exists`, `len`, `render` | read |
//! | `==` | read on both, lower address first |
//! | `cursor` | none (`&mut self`) |
//! | `locked_cursor` | write, held by the cursor |
//!
//! A thread-safe deque blocks on contention. A deque created with
//! `thread_safe = false` never waits: contention on it means it was shared
//! between threads or re-entered while a guard was alive, and the operation
//! panics. No lock is reentrant, so a thread holding a [`Peek`], a
//! [`ValueRef`] or a locked cursor must not mutate the same deque.

mod chain;
mod cursor;

pub use cursor::Cursor;

use crate::config::DequeConfig;
use crate::render::{self, Format};
use crate::tracing_compat::{debug, trace};
use crate::value::Value;
use chain::Chain;
use cursor::ChainAccess;
use core::fmt;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A value together with its optional tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The tag, copied from the caller at insertion time.
    pub tag: Option<String>,
    /// The owned value.
    pub value: Value,
}

impl Element {
    /// Creates an element, copying the tag.
    #[must_use]
    pub fn new(tag: Option<&str>, value: impl Into<Value>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: value.into(),
        }
    }

    /// Returns the tag.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Splits the element into its tag and value.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Value) {
        (self.tag, self.value)
    }
}

/// A borrowed element that keeps the deque read-locked while alive.
pub type Peek<'a> = MappedRwLockReadGuard<'a, Element>;

/// A borrowed value that keeps the deque read-locked while alive.
pub type ValueRef<'a> = MappedRwLockReadGuard<'a, Value>;

/// A tagged, optionally thread-safe double-ended queue.
///
/// # Example
///
/// ```
/// use tagdeque::{Deque, Value};
///
/// let deque = Deque::new(false);
/// deque.add(Some("a"), 1_i64);
/// deque.add(None, "two");
///
/// assert_eq!(deque.peek().map(|e| e.value.clone()), Some(Value::Int64(1)));
/// assert!(deque.exists("a"));
///
/// let first = deque.poll().expect("non-empty");
/// assert_eq!(first.tag.as_deref(), Some("a"));
/// assert_eq!(deque.len(), 1);
/// ```
pub struct Deque {
    thread_safe: bool,
    chain: RwLock<Chain>,
}

impl Deque {
    /// Creates an empty deque.
    #[must_use]
    pub fn new(thread_safe: bool) -> Self {
        trace!(thread_safe, "deque created");
        Self {
            thread_safe,
            chain: RwLock::new(Chain::new()),
        }
    }

    /// Creates an empty deque from a configuration.
    #[must_use]
    pub fn with_config(config: &DequeConfig) -> Self {
        Self::new(config.thread_safe)
    }

    /// Returns `true` if operations block on contention instead of panicking.
    #[must_use]
    pub const fn is_thread_safe(&self) -> bool {
        self.thread_safe
    }

    fn read(&self) -> RwLockReadGuard<'_, Chain> {
        if self.thread_safe {
            return self.chain.read();
        }
        match self.chain.try_read() {
            Some(guard) => guard,
            None => unsynchronized_access(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Chain> {
        if self.thread_safe {
            return self.chain.write();
        }
        match self.chain.try_write() {
            Some(guard) => guard,
            None => unsynchronized_access(),
        }
    }

    /// Appends a value at the tail. The tag is copied.
    pub fn add(&self, tag: Option<&str>, value: impl Into<Value>) {
        let element = Element::new(tag, value);
        self.write().push_back(element);
    }

    /// Prepends a value at the head. The tag is copied.
    pub fn add_front(&self, tag: Option<&str>, value: impl Into<Value>) {
        let element = Element::new(tag, value);
        self.write().push_front(element);
    }

    /// Removes and returns the first element.
    ///
    /// Ownership of both the value and the tag moves to the caller.
    pub fn poll(&self) -> Option<Element> {
        self.write().pop_front()
    }

    /// Removes and returns the last element.
    pub fn poll_last(&self) -> Option<Element> {
        self.write().pop_back()
    }

    /// Borrows the first element without removing it.
    ///
    /// The returned guard holds the read lock; drop it before mutating the
    /// deque from the same thread.
    #[must_use]
    pub fn peek(&self) -> Option<Peek<'_>> {
        RwLockReadGuard::try_map(self.read(), Chain::front).ok()
    }

    /// Borrows the last element without removing it.
    #[must_use]
    pub fn peek_last(&self) -> Option<Peek<'_>> {
        RwLockReadGuard::try_map(self.read(), Chain::back).ok()
    }

    /// Borrows the value of the first element tagged `tag`.
    ///
    /// Returns `None` when no element carries the tag or `tag` is empty.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<ValueRef<'_>> {
        RwLockReadGuard::try_map(self.read(), |chain| {
            let key = chain.find(tag)?;
            chain.element(key).map(|element| &element.value)
        })
        .ok()
    }

    /// Returns `true` if some element is tagged `tag`.
    #[must_use]
    pub fn exists(&self, tag: &str) -> bool {
        self.read().find(tag).is_some()
    }

    /// Removes every element tagged `tag` and returns how many were removed.
    pub fn remove(&self, tag: &str) -> usize {
        let removed = self.write().remove_tagged(tag);
        debug!(tag, removed, "removed tagged elements");
        removed
    }

    /// Drops every element.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the deque has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Renders the deque in `format`.
    ///
    /// `tag` is written verbatim in front of the rendering (in text format a
    /// tag other than [`BULLET_POINT`](crate::BULLET_POINT) becomes a label
    /// line), and `indent` is the base indentation in spaces.
    #[must_use]
    pub fn render(&self, format: Format, tag: Option<&str>, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, format, tag, indent);
        out
    }

    /// Renders the deque for a numeric format code.
    ///
    /// Returns `None` for codes that name no [`Format`].
    #[must_use]
    pub fn render_code(&self, code: i32, tag: Option<&str>, indent: usize) -> Option<String> {
        Format::from_code(code).map(|format| self.render(format, tag, indent))
    }

    pub(crate) fn render_into(
        &self,
        out: &mut String,
        format: Format,
        tag: Option<&str>,
        indent: usize,
    ) {
        let chain = self.read();
        let elements = chain.iter().map(|element| (element.tag(), &element.value));
        match format {
            Format::Json => render::json::list(out, elements, tag, indent),
            Format::Text => render::text::list(out, elements, tag, indent),
        }
    }

    /// Logs the JSON rendering at TRACE level.
    ///
    /// Rendering is skipped entirely when TRACE is not enabled.
    pub fn list(&self) {
        if crate::trace_enabled!() {
            trace!(deque = %self.render(Format::Json, None, 0), "deque contents");
        }
    }

    /// Returns a cursor that walks the deque without locking.
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(ChainAccess::Exclusive(self.chain.get_mut()))
    }

    /// Returns a cursor that holds the write lock until it is dropped.
    #[must_use]
    pub fn locked_cursor(&self) -> Cursor<'_> {
        Cursor::new(ChainAccess::Locked(self.write()))
    }
}

#[cold]
#[inline(never)]
fn unsynchronized_access() -> ! {
    panic!("non-thread-safe deque accessed while another borrow of it is alive")
}

impl Default for Deque {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Clone for Deque {
    fn clone(&self) -> Self {
        let mut chain = Chain::new();
        for element in self.read().iter() {
            chain.push_back(element.clone());
        }
        Self {
            thread_safe: self.thread_safe,
            chain: RwLock::new(chain),
        }
    }
}

impl PartialEq for Deque {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // Lower address first, so `a == b` racing `b == a` cannot deadlock.
        let (left, right) = if std::ptr::from_ref(self) < std::ptr::from_ref(other) {
            let left = self.read();
            (left, other.read())
        } else {
            let right = other.read();
            (self.read(), right)
        };
        left.len() == right.len() && left.iter().eq(right.iter())
    }
}

impl fmt::Debug for Deque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.read();
        f.debug_struct("Deque")
            .field("thread_safe", &self.thread_safe)
            .field("elements", &chain.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Deque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Json, None, 0))
    }
}

impl FromIterator<Value> for Deque {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut deque = Self::new(false);
        deque.extend(iter);
        deque
    }
}

impl Extend<Value> for Deque {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        let chain = self.chain.get_mut();
        for value in iter {
            chain.push_back(Element::new(None, value));
        }
    }
}

impl Extend<Element> for Deque {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        let chain = self.chain.get_mut();
        for element in iter {
            chain.push_back(element);
        }
    }
}

/// Draining iterator returned by [`Deque::into_iter`].
#[derive(Debug)]
pub struct IntoIter {
    chain: Chain,
}

impl Iterator for IntoIter {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.chain.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Element> {
        self.chain.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Deque {
    type Item = Element;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            chain: self.chain.into_inner(),
        }
    }
}
