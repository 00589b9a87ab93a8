extern crate std;

use std::vec::Vec;

use super::{Link, LinkWithPrev, LinkedList, Position};

mod double;

fn values<L: Link, T: Clone>(list: &LinkedList<L, T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Walks the `next` chain from the sentinel and checks `len` and `tail`
/// agree with it.
fn assert_forward_links<L: Link, T>(list: &LinkedList<L, T>) {
    let mut at = Position::Head;
    let mut steps = 0;
    while let Some(key) = list.link(at).next() {
        at = Position::Node(key);
        steps += 1;
        assert!(steps <= list.len(), "chain runs past len {}", list.len());
    }
    assert_eq!(steps, list.len());
    assert_eq!(at, list.tail());
}

/// Forward checks plus `n.prev.next == n` for every real node.
fn assert_back_links<L: LinkWithPrev, T>(list: &LinkedList<L, T>) {
    assert_forward_links(list);
    assert_eq!(list.link(Position::Head).prev(), None);

    let mut at = Position::Head;
    while let Some(key) = list.link(at).next() {
        let node = Position::Node(key);
        assert_eq!(list.link(node).prev(), Some(at));
        assert_eq!(list.link(at).next(), Some(key));
        at = node;
    }
}
