//! Cursor for walking a deque with removal.
//!
//! A [`Cursor`] never locks. It is created from either `&mut Deque`, where
//! the borrow already proves exclusive access, or from a write guard taken
//! once by [`Deque::locked_cursor`](super::Deque::locked_cursor) and held
//! for the cursor's whole lifetime.

use super::Element;
use super::chain::{Chain, HEAD};
use crate::value::Value;
use parking_lot::RwLockWriteGuard;
use std::ops::{Deref, DerefMut};

pub(crate) enum ChainAccess<'a> {
    Exclusive(&'a mut Chain),
    Locked(RwLockWriteGuard<'a, Chain>),
}

impl Deref for ChainAccess<'_> {
    type Target = Chain;

    fn deref(&self) -> &Chain {
        match self {
            Self::Exclusive(chain) => chain,
            Self::Locked(guard) => guard,
        }
    }
}

impl DerefMut for ChainAccess<'_> {
    fn deref_mut(&mut self) -> &mut Chain {
        match self {
            Self::Exclusive(chain) => chain,
            Self::Locked(guard) => guard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Before the first element, on the head sentinel.
    Fresh,
    /// On a real node.
    At(usize),
    /// Past the last element.
    Exhausted,
}

/// A cursor over a deque that can remove the element it is positioned on.
///
/// The cursor starts *fresh*, before the first element. Each successful
/// [`advance`](Self::advance) positions it on the next element; once it
/// runs off the end it is *exhausted* and stays so.
///
/// # Example
///
/// ```
/// use tagdeque::{Deque, Value};
///
/// let mut deque: Deque = (1..=4_i32).map(Value::from).collect();
/// let mut cursor = deque.cursor();
/// while cursor.advance() {
///     if cursor.value().and_then(Value::as_i64).is_some_and(|v| v % 2 == 0) {
///         cursor.remove();
///     }
/// }
/// drop(cursor);
/// assert_eq!(deque.len(), 2);
/// ```
pub struct Cursor<'a> {
    chain: ChainAccess<'a>,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(chain: ChainAccess<'a>) -> Self {
        Self {
            chain,
            position: Position::Fresh,
        }
    }

    /// Moves to the next element.
    ///
    /// Returns `false`, and leaves the cursor exhausted, when there is no
    /// next element.
    pub fn advance(&mut self) -> bool {
        let from = match self.position {
            Position::Fresh => HEAD,
            Position::At(key) => key,
            Position::Exhausted => return false,
        };
        match self.chain.next(from) {
            Some(next) => {
                self.position = Position::At(next);
                true
            }
            None => {
                self.position = Position::Exhausted;
                false
            }
        }
    }

    /// Returns `true` while the cursor is positioned on an element.
    #[must_use]
    pub const fn is_positioned(&self) -> bool {
        matches!(self.position, Position::At(_))
    }

    /// Returns `true` once the cursor has run past the last element.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.position, Position::Exhausted)
    }

    /// Returns the current element.
    #[must_use]
    pub fn element(&self) -> Option<&Element> {
        match self.position {
            Position::At(key) => self.chain.element(key),
            Position::Fresh | Position::Exhausted => None,
        }
    }

    /// Returns the tag of the current element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.element().and_then(Element::tag)
    }

    /// Returns the value of the current element.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.element().map(|element| &element.value)
    }

    /// Returns the value of the current element for in-place modification.
    pub fn value_mut(&mut self) -> Option<&mut Value> {
        match self.position {
            Position::At(key) => self.chain.element_mut(key).map(|element| &mut element.value),
            Position::Fresh | Position::Exhausted => None,
        }
    }

    /// Removes the current element and hands it back.
    ///
    /// The cursor moves to the element before the removed one, so the next
    /// [`advance`](Self::advance) lands on the element that followed it. If
    /// the removed element was the first, the cursor becomes fresh again.
    /// Returns `None`, without changing anything, when the cursor is not
    /// positioned on an element.
    pub fn remove(&mut self) -> Option<Element> {
        let Position::At(key) = self.position else {
            return None;
        };
        let (element, prev) = self.chain.unlink(key)?;
        self.position = if prev == HEAD {
            Position::Fresh
        } else {
            Position::At(prev)
        };
        Some(element)
    }

    /// Returns the number of elements left in the deque.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the deque is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.chain.len())
            .finish()
    }
}
