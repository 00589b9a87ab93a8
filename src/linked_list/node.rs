use super::traits::{Link, LinkWithPrev, Position};

/// A node in an arena-backed linked list: the link plus the stored value.
#[derive(Debug, Clone)]
pub struct ListNode<L, T> {
    link: L,
    data: T,
}

impl<L: Default, T> ListNode<L, T> {
    /// Creates an unlinked node holding `data`.
    #[inline]
    pub(crate) fn new(data: T) -> Self {
        Self {
            link: L::default(),
            data,
        }
    }
}

impl<L, T> ListNode<L, T> {
    /// Get the data associated with the node
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the data associated with the node
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    #[inline]
    pub(crate) fn link(&self) -> &L {
        &self.link
    }

    #[inline]
    pub(crate) fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    #[inline]
    pub(crate) fn into_data(self) -> T {
        self.data
    }
}

impl<L: Link, T> Link for ListNode<L, T> {
    const TRACKS_PREV: bool = L::TRACKS_PREV;

    #[inline]
    fn next(&self) -> Option<usize> {
        self.link.next()
    }

    #[inline]
    fn set_next(&mut self, next: Option<usize>) {
        self.link.set_next(next);
    }

    #[inline]
    fn attach_prev(&mut self, prev: Position) {
        self.link.attach_prev(prev);
    }
}

impl<L: LinkWithPrev, T> LinkWithPrev for ListNode<L, T> {
    #[inline]
    fn prev(&self) -> Option<Position> {
        self.link.prev()
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<Position>) {
        self.link.set_prev(prev);
    }
}
