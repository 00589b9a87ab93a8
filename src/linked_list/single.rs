use super::{cursor::CursorMut, list::LinkedList, traits::Link};

/// A linked list with forward links only.
pub type SinglyLinkedList<T> = LinkedList<SingleLink, T>;

/// The forward-only mutating cursor of a [`SinglyLinkedList`].
pub type ForwardCursor<'a, T> = CursorMut<'a, SingleLink, T>;

/// A link in a singly linked list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleLink {
    next: Option<usize>,
}

impl Link for SingleLink {
    #[inline]
    fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }
}
