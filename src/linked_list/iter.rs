use core::iter::FusedIterator;

use super::{
    list::LinkedList,
    traits::{Link, LinkWithPrev, Position},
};

/// Iterator over references to list elements.
///
/// Walks `next` links from the front. For lists whose links track their
/// predecessor it is also double-ended, walking `prev` links from the tail.
pub struct Iter<'a, L, T> {
    list: &'a LinkedList<L, T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, L: Link, T> Iter<'a, L, T> {
    pub(crate) fn new(list: &'a LinkedList<L, T>) -> Self {
        Self {
            list,
            front: list.head_key(),
            back: list.tail().key(),
            remaining: list.len(),
        }
    }
}

impl<'a, L: Link, T> Iterator for Iter<'a, L, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.front?);
        self.front = node.next();
        self.remaining -= 1;
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, L: LinkWithPrev, T> DoubleEndedIterator for Iter<'a, L, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.back?);
        self.back = node.prev().and_then(Position::key);
        self.remaining -= 1;
        Some(node.data())
    }
}

impl<L: Link, T> ExactSizeIterator for Iter<'_, L, T> {}

impl<L: Link, T> FusedIterator for Iter<'_, L, T> {}
