//! Sentinel-bounded doubly linked list stored in a slab.
//!
//! Nodes live in a [`Slab`] and link to each other by slab key. Keys
//! [`HEAD`] and [`TAIL`] are the two sentinels; they are inserted first and
//! never removed, so every real node always has both neighbours and
//! insertion or removal never special-cases the ends of the list.

use super::Element;
use slab::Slab;

/// Slab key of the head sentinel.
pub(crate) const HEAD: usize = 0;
/// Slab key of the tail sentinel.
pub(crate) const TAIL: usize = 1;

#[derive(Debug)]
pub(crate) struct Node {
    /// `None` only for the sentinels.
    element: Option<Element>,
    prev: usize,
    next: usize,
}

impl Node {
    const fn sentinel(prev: usize, next: usize) -> Self {
        Self {
            element: None,
            prev,
            next,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Chain {
    nodes: Slab<Node>,
}

impl Chain {
    pub(crate) fn new() -> Self {
        let mut nodes = Slab::with_capacity(2);
        let head = nodes.insert(Node::sentinel(HEAD, TAIL));
        let tail = nodes.insert(Node::sentinel(HEAD, TAIL));
        debug_assert_eq!((head, tail), (HEAD, TAIL));
        Self { nodes }
    }

    /// Number of nodes strictly between the sentinels.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len() - 2
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes[HEAD].next == TAIL
    }

    pub(crate) const fn is_sentinel(key: usize) -> bool {
        key == HEAD || key == TAIL
    }

    /// Links `element` immediately before `at` and returns the new key.
    fn link_before(&mut self, at: usize, element: Element) -> usize {
        let prev = self.nodes[at].prev;
        let key = self.nodes.insert(Node {
            element: Some(element),
            prev,
            next: at,
        });
        self.nodes[prev].next = key;
        self.nodes[at].prev = key;
        key
    }

    pub(crate) fn push_back(&mut self, element: Element) -> usize {
        self.link_before(TAIL, element)
    }

    pub(crate) fn push_front(&mut self, element: Element) -> usize {
        let first = self.nodes[HEAD].next;
        self.link_before(first, element)
    }

    /// Unlinks a real node, returning its element and its predecessor key.
    ///
    /// Returns `None` for sentinels and keys that are not in the chain.
    pub(crate) fn unlink(&mut self, key: usize) -> Option<(Element, usize)> {
        if Self::is_sentinel(key) || !self.nodes.contains(key) {
            return None;
        }
        let node = self.nodes.remove(key);
        self.nodes[node.prev].next = node.next;
        self.nodes[node.next].prev = node.prev;
        node.element.map(|element| (element, node.prev))
    }

    pub(crate) fn pop_front(&mut self) -> Option<Element> {
        let first = self.first()?;
        self.unlink(first).map(|(element, _)| element)
    }

    pub(crate) fn pop_back(&mut self) -> Option<Element> {
        let last = self.last()?;
        self.unlink(last).map(|(element, _)| element)
    }

    /// Key of the first real node.
    pub(crate) fn first(&self) -> Option<usize> {
        self.next(HEAD)
    }

    /// Key of the last real node.
    pub(crate) fn last(&self) -> Option<usize> {
        let last = self.nodes[TAIL].prev;
        (last != HEAD).then_some(last)
    }

    /// Key of the node after `key`, or `None` when that is the tail sentinel.
    pub(crate) fn next(&self, key: usize) -> Option<usize> {
        let next = self.nodes.get(key)?.next;
        (next != TAIL && key != TAIL).then_some(next)
    }

    pub(crate) fn element(&self, key: usize) -> Option<&Element> {
        self.nodes.get(key)?.element.as_ref()
    }

    pub(crate) fn element_mut(&mut self, key: usize) -> Option<&mut Element> {
        self.nodes.get_mut(key)?.element.as_mut()
    }

    pub(crate) fn front(&self) -> Option<&Element> {
        self.element(self.first()?)
    }

    pub(crate) fn back(&self) -> Option<&Element> {
        self.element(self.last()?)
    }

    /// Key of the first node whose tag equals `tag`.
    pub(crate) fn find(&self, tag: &str) -> Option<usize> {
        if tag.is_empty() {
            return None;
        }
        let mut cursor = self.first();
        while let Some(key) = cursor {
            if self.element(key).and_then(Element::tag) == Some(tag) {
                return Some(key);
            }
            cursor = self.next(key);
        }
        None
    }

    /// Unlinks every node whose tag equals `tag` and returns how many.
    pub(crate) fn remove_tagged(&mut self, tag: &str) -> usize {
        let mut removed = 0;
        while let Some(key) = self.find(tag) {
            if self.unlink(key).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Drops every real node and relinks the sentinels.
    pub(crate) fn clear(&mut self) {
        self.nodes.retain(|key, _| Self::is_sentinel(key));
        self.nodes[HEAD].next = TAIL;
        self.nodes[TAIL].prev = HEAD;
    }

    /// Iterates over the elements from head to tail.
    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.first(),
        }
    }
}

/// Read-only walk from head to tail.
pub(crate) struct Iter<'a> {
    chain: &'a Chain,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self.chain.next(key);
        self.chain.element(key)
    }
}
