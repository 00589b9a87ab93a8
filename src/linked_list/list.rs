use core::fmt;

use slab::Slab;

use crate::error::{ListError, Result};

use super::{
    cursor::CursorMut,
    iter::Iter,
    node::ListNode,
    traits::{Link, LinkWithPrev, Position},
};

/// A linked list whose nodes live in an arena owned by the list.
///
/// `head` is a sentinel link that never carries data, `tail` caches the
/// position of the last real node (or [`Position::Head`] when empty), and
/// `len` counts real nodes. Walking `next` from the sentinel `len` times
/// reaches the tail, and one more step reaches `None`.
///
/// Use the aliases [`SinglyLinkedList`](super::SinglyLinkedList) and
/// [`DoublyLinkedList`](super::DoublyLinkedList) rather than naming the link
/// type directly.
pub struct LinkedList<L, T> {
    head: L,
    tail: Position,
    nodes: Slab<ListNode<L, T>>,
    len: usize,
}

impl<L: Link + Default, T> LinkedList<L, T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes before the arena
    /// has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: L::default(),
            tail: Position::Head,
            nodes: Slab::with_capacity(capacity),
            len: 0,
        }
    }
}

impl<L: Link + Default, T> Default for LinkedList<L, T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Link plumbing shared by the list, its cursor and `unzip`
// =============================================================================

impl<L: Link, T> LinkedList<L, T> {
    #[inline]
    pub(crate) fn link(&self, at: Position) -> &L {
        match at {
            Position::Head => &self.head,
            Position::Node(key) => self.nodes[key].link(),
        }
    }

    #[inline]
    pub(crate) fn link_mut(&mut self, at: Position) -> &mut L {
        match at {
            Position::Head => &mut self.head,
            Position::Node(key) => self.nodes[key].link_mut(),
        }
    }

    #[inline]
    pub(crate) fn node(&self, key: usize) -> &ListNode<L, T> {
        &self.nodes[key]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, key: usize) -> &mut ListNode<L, T> {
        &mut self.nodes[key]
    }

    #[inline]
    pub(crate) fn head_key(&self) -> Option<usize> {
        self.head.next()
    }

    #[inline]
    pub(crate) fn tail(&self) -> Position {
        self.tail
    }

    #[inline]
    pub(crate) fn set_tail(&mut self, tail: Position) {
        self.tail = tail;
    }

    /// Position reached after `steps` hops from the sentinel.
    ///
    /// Callers keep `steps <= len`.
    fn walk(&self, steps: usize) -> Position {
        let mut at = Position::Head;
        for _ in 0..steps {
            match self.link(at).next() {
                Some(key) => at = Position::Node(key),
                None => break,
            }
        }
        at
    }

    /// Links a fresh node right after `at` and returns its key.
    pub(crate) fn link_after(&mut self, at: Position, value: T) -> usize
    where
        L: Default,
    {
        let next = self.link(at).next();
        let key = self.nodes.insert(ListNode::new(value));

        let node = &mut self.nodes[key];
        node.set_next(next);
        node.attach_prev(at);

        self.link_mut(at).set_next(Some(key));
        match next {
            Some(next) => self.nodes[next].attach_prev(Position::Node(key)),
            None => self.tail = Position::Node(key),
        }
        self.len += 1;
        key
    }

    /// Unlinks the node right after `at`, frees its slot and returns its value.
    pub(crate) fn unlink_after(&mut self, at: Position) -> Option<T> {
        let key = self.link(at).next()?;
        let next = self.nodes[key].next();

        self.link_mut(at).set_next(next);
        match next {
            Some(next) => self.nodes[next].attach_prev(at),
            None => self.tail = at,
        }
        self.len -= 1;
        self.nodes.try_remove(key).map(ListNode::into_data)
    }

    /// Rewrites every `prev` so it mirrors the current `next` chain.
    pub(crate) fn rethread_prev(&mut self) {
        let mut at = Position::Head;
        while let Some(key) = self.link(at).next() {
            self.nodes[key].attach_prev(at);
            at = Position::Node(key);
        }
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }
}

// =============================================================================
// Public operations
// =============================================================================

impl<L: Link, T> LinkedList<L, T> {
    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.next().map(|key| self.nodes[key].data())
    }

    /// Returns the last element in O(1) through the cached tail.
    pub fn back(&self) -> Option<&T> {
        self.tail.key().map(|key| self.nodes[key].data())
    }

    /// Returns the element at `index`.
    ///
    /// Fails with [`ListError::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, self.len)?;
        match self.walk(index + 1) {
            Position::Node(key) => Ok(self.nodes[key].data()),
            Position::Head => Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index, self.len)?;
        match self.walk(index + 1) {
            Position::Node(key) => Ok(self.nodes[key].data_mut()),
            Position::Head => Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Replaces the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Inserts `value` so that it becomes the element at `index`.
    ///
    /// `index == len` appends. Fails with [`ListError::IndexOutOfRange`] when
    /// `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()>
    where
        L: Default,
    {
        self.check_index(index, self.len + 1)?;
        let before = self.walk(index);
        self.link_after(before, value);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index, self.len)?;
        let before = self.walk(index);
        self.unlink_after(before).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Inserts `value` in front of every other element.
    pub fn add_first(&mut self, value: T)
    where
        L: Default,
    {
        self.link_after(Position::Head, value);
    }

    /// Removes and returns the first element.
    ///
    /// Fails with [`ListError::EmptyCollection`] on an empty list.
    pub fn remove_first(&mut self) -> Result<T> {
        self.unlink_after(Position::Head)
            .ok_or(ListError::EmptyCollection)
    }

    /// Appends `value` after the cached tail in O(1).
    pub fn add(&mut self, value: T)
    where
        L: Default,
    {
        self.link_after(self.tail, value);
    }

    /// Removes the first element equal to `value` and returns its index.
    ///
    /// Fails with [`ListError::NotFound`] when no element matches.
    pub fn remove_value(&mut self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        let mut before = Position::Head;
        let mut index = 0;
        while let Some(key) = self.link(before).next() {
            if self.nodes[key].data() == value {
                self.unlink_after(before);
                return Ok(index);
            }
            before = Position::Node(key);
            index += 1;
        }
        Err(ListError::NotFound)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Drops every element, leaving the sentinel alone.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head.set_next(None);
        self.tail = Position::Head;
        self.len = 0;
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_, L, T> {
        Iter::new(self)
    }

    /// Opens a mutating cursor parked on the sentinel, before the first
    /// element.
    ///
    /// The cursor borrows the list mutably, so at most one can exist.
    pub fn cursor(&mut self) -> CursorMut<'_, L, T> {
        CursorMut::new(self)
    }
}

impl<L: LinkWithPrev, T> LinkedList<L, T> {
    #[inline]
    pub(crate) fn prev_of(&self, at: Position) -> Option<Position> {
        self.link(at).prev()
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<L: Link + Default, T> FromIterator<T> for LinkedList<L, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<L: Link + Default, T> Extend<T> for LinkedList<L, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, L: Link, T> IntoIterator for &'a LinkedList<L, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, L, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Link, T: fmt::Debug> fmt::Debug for LinkedList<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `"<len>:"` followed by `" <element>"` for each element.
impl<L: Link, T: fmt::Display> fmt::Display for LinkedList<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.len)?;
        for item in self {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}
