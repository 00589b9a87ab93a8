use log::trace;

use crate::error::{ListError, Result};

use super::{
    list::LinkedList,
    traits::{Link, LinkWithPrev, Position},
};

/// A cursor over a linked list that may unlink or insert nodes while it
/// walks.
///
/// The cursor is an explicit state machine:
///
/// - `cursor`: the node most recently returned, or the sentinel before the
///   first step;
/// - `before`: the node in front of `cursor`, which removal splices onto;
/// - `ready`: set by a successful step, cleared by `remove` and `insert`.
///   Exactly one removal is allowed per step.
///
/// The cursor holds the list by `&mut`, so no second cursor (or any other
/// access) can observe the list while it is being reshaped.
///
/// # Example
///
/// Dropping every even element in a single pass:
///
/// ```
/// use linear_collections::linked_list::SinglyLinkedList;
///
/// let mut list: SinglyLinkedList<u32> = (1..=6).collect();
/// let mut cursor = list.cursor();
/// while cursor.has_next() {
///     if *cursor.move_next().unwrap() % 2 == 0 {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
/// assert_eq!(list.back(), Some(&5));
/// ```
pub struct CursorMut<'a, L, T> {
    list: &'a mut LinkedList<L, T>,
    cursor: Position,
    before: Option<Position>,
    ready: bool,
}

impl<'a, L: Link, T> CursorMut<'a, L, T> {
    pub(crate) fn new(list: &'a mut LinkedList<L, T>) -> Self {
        Self {
            list,
            cursor: Position::Head,
            before: None,
            ready: false,
        }
    }

    /// Returns `true` if a node follows the cursor.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.list.link(self.cursor).next().is_some()
    }

    /// Steps onto the next node and returns its element.
    ///
    /// Fails with [`ListError::NoSuchElement`] past the last node.
    pub fn move_next(&mut self) -> Result<&mut T> {
        let key = self
            .list
            .link(self.cursor)
            .next()
            .ok_or(ListError::NoSuchElement)?;
        self.before = Some(self.cursor);
        self.cursor = Position::Node(key);
        self.ready = true;
        Ok(self.list.node_mut(key).data_mut())
    }

    /// The element under the cursor; `None` while parked on the sentinel.
    pub fn current(&self) -> Option<&T> {
        self.cursor.key().map(|key| self.list.node(key).data())
    }

    /// Mutable access to the element under the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.cursor {
            Position::Node(key) => Some(self.list.node_mut(key).data_mut()),
            Position::Head => None,
        }
    }

    /// Removes the element returned by the most recent step.
    ///
    /// The cursor falls back onto the removed node's predecessor, so the
    /// following `move_next` yields the removed node's successor. Fails with
    /// [`ListError::IllegalState`] unless a step happened since the last
    /// `remove` or `insert`.
    pub fn remove(&mut self) -> Result<T> {
        if !self.ready {
            return Err(ListError::IllegalState);
        }
        let before = self.before.ok_or(ListError::IllegalState)?;
        let value = self
            .list
            .unlink_after(before)
            .ok_or(ListError::IllegalState)?;
        trace!("cursor removed node, {} left", self.list.len());

        self.cursor = before;
        self.before = None;
        self.ready = false;
        Ok(value)
    }

    /// Read-only view of the underlying list.
    #[inline]
    pub fn list(&self) -> &LinkedList<L, T> {
        self.list
    }

    /// Number of elements in the underlying list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the underlying list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<'a, L: LinkWithPrev + Default, T> CursorMut<'a, L, T> {
    /// Returns `true` if a real node precedes the cursor.
    ///
    /// False on the sentinel and on the first node.
    #[inline]
    pub fn has_prev(&self) -> bool {
        matches!(self.list.prev_of(self.cursor), Some(Position::Node(_)))
    }

    /// Steps back onto the predecessor and returns its element.
    ///
    /// Stepping from the first node lands on the sentinel: the result is
    /// `Ok(None)` and removal stays disarmed until the next step. Fails with
    /// [`ListError::NoSuchElement`] when already on the sentinel.
    pub fn move_prev(&mut self) -> Result<Option<&mut T>> {
        let target = self
            .list
            .prev_of(self.cursor)
            .ok_or(ListError::NoSuchElement)?;
        self.cursor = target;
        self.before = self.list.prev_of(target);
        self.ready = target != Position::Head;
        Ok(self.current_mut())
    }

    /// Inserts `value` right after the cursor and moves onto it.
    ///
    /// Both neighbours are re-threaded in each direction. The new element is
    /// not armed for removal.
    pub fn insert(&mut self, value: T) {
        let at = self.cursor;
        let key = self.list.link_after(at, value);
        trace!("cursor inserted node, {} total", self.list.len());

        self.before = Some(at);
        self.cursor = Position::Node(key);
        self.ready = false;
    }
}
