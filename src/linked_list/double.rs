use super::{
    cursor::CursorMut,
    list::LinkedList,
    traits::{Link, LinkWithPrev, Position},
};

/// A linked list whose nodes also point back at their predecessor.
pub type DoublyLinkedList<T> = LinkedList<DoubleLink, T>;

/// The bidirectional mutating cursor of a [`DoublyLinkedList`].
pub type BidirectionalCursor<'a, T> = CursorMut<'a, DoubleLink, T>;

/// A link in a doubly linked list.
///
/// `prev` is a lookup-only back-reference. The first real node points back
/// at [`Position::Head`]; the sentinel itself never has a predecessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleLink {
    next: Option<usize>,
    prev: Option<Position>,
}

impl Link for DoubleLink {
    const TRACKS_PREV: bool = true;

    #[inline]
    fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    #[inline]
    fn attach_prev(&mut self, prev: Position) {
        self.set_prev(Some(prev));
    }
}

impl LinkWithPrev for DoubleLink {
    #[inline]
    fn prev(&self) -> Option<Position> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<Position>) {
        self.prev = prev;
    }
}
