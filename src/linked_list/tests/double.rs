extern crate std;

use std::{vec, vec::Vec};

use crate::error::ListError;
use crate::linked_list::{DoubleLink, DoublyLinkedList, Link, LinkWithPrev, Position};

use super::{assert_back_links, values};

fn backwards<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    list.iter().rev().cloned().collect()
}

#[test]
fn test_double_list_add_threads_prev() {
    let list: DoublyLinkedList<i32> = (1..=4).collect();

    assert_eq!(values(&list), vec![1, 2, 3, 4]);
    assert_eq!(backwards(&list), vec![4, 3, 2, 1]);
    assert_back_links(&list);
}

#[test]
fn test_double_list_positional_ops_keep_prev() {
    let mut list: DoublyLinkedList<i32> = (1..=4).collect();

    list.add_first(0);
    list.insert(3, 9).unwrap();
    assert_back_links(&list);
    assert_eq!(values(&list), vec![0, 1, 2, 9, 3, 4]);

    assert_eq!(list.remove(5), Ok(4));
    assert_eq!(list.remove_first(), Ok(0));
    assert_eq!(list.remove_value(&9), Ok(2));
    assert_back_links(&list);
    assert_eq!(backwards(&list), vec![3, 2, 1]);
}

#[test]
fn test_double_iter_meets_in_the_middle() {
    let list: DoublyLinkedList<i32> = (1..=5).collect();
    let mut iter = list.iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_double_cursor_prev() {
    let mut list: DoublyLinkedList<i32> = (1..=3).collect();
    let mut cursor = list.cursor();

    assert!(!cursor.has_prev());
    assert_eq!(cursor.move_prev(), Err(ListError::NoSuchElement));

    cursor.move_next().unwrap();
    assert!(!cursor.has_prev());
    cursor.move_next().unwrap();
    cursor.move_next().unwrap();
    assert!(cursor.has_prev());

    assert_eq!(cursor.move_prev().unwrap().copied(), Some(2));
    assert_eq!(cursor.move_prev().unwrap().copied(), Some(1));
    assert!(!cursor.has_prev());

    // Stepping off the first node lands on the sentinel.
    assert_eq!(cursor.move_prev().unwrap().copied(), None);
    assert_eq!(cursor.remove(), Err(ListError::IllegalState));
    assert_eq!(*cursor.move_next().unwrap(), 1);
}

#[test]
fn test_double_cursor_remove_after_prev() {
    let mut list: DoublyLinkedList<i32> = (1..=4).collect();
    {
        let mut cursor = list.cursor();
        while cursor.has_next() {
            cursor.move_next().unwrap();
        }
        cursor.move_prev().unwrap();
        assert_eq!(cursor.remove(), Ok(3));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(*cursor.move_next().unwrap(), 4);
    }
    assert_eq!(values(&list), vec![1, 2, 4]);
    assert_eq!(backwards(&list), vec![4, 2, 1]);
    assert_back_links(&list);
}

#[test]
fn test_double_cursor_remove_tail_and_head() {
    let mut list: DoublyLinkedList<i32> = (1..=3).collect();
    {
        let mut cursor = list.cursor();
        cursor.move_next().unwrap();
        assert_eq!(cursor.remove(), Ok(1));
        while cursor.has_next() {
            cursor.move_next().unwrap();
        }
        assert_eq!(cursor.remove(), Ok(3));
    }
    assert_eq!(list.back(), Some(&2));
    assert_back_links(&list);

    list.add(5);
    assert_eq!(backwards(&list), vec![5, 2]);
    assert_back_links(&list);
}

#[test]
fn test_double_cursor_insert() {
    let mut list: DoublyLinkedList<i32> = [1, 3].into_iter().collect();
    {
        let mut cursor = list.cursor();
        cursor.insert(0);
        assert_eq!(cursor.current(), Some(&0));
        // An inserted element is not armed for removal.
        assert_eq!(cursor.remove(), Err(ListError::IllegalState));

        cursor.move_next().unwrap();
        cursor.insert(2);
        assert_eq!(*cursor.move_next().unwrap(), 3);
        cursor.insert(4);
        assert!(!cursor.has_next());
        assert_eq!(cursor.len(), 5);
    }
    assert_eq!(values(&list), vec![0, 1, 2, 3, 4]);
    assert_eq!(backwards(&list), vec![4, 3, 2, 1, 0]);
    assert_eq!(list.back(), Some(&4));
    assert_back_links(&list);
}

#[test]
fn test_double_cursor_insert_into_empty() {
    let mut list: DoublyLinkedList<&str> = DoublyLinkedList::new();
    list.cursor().insert("only");

    assert_eq!(list.front(), Some(&"only"));
    assert_eq!(list.back(), Some(&"only"));
    assert_back_links(&list);
}

#[test]
fn test_double_cursor_insert_then_remove_previous() {
    let mut list: DoublyLinkedList<i32> = (1..=3).collect();
    {
        let mut cursor = list.cursor();
        cursor.move_next().unwrap();
        cursor.insert(10);
        assert_eq!(cursor.move_prev().unwrap().copied(), Some(1));
        assert_eq!(cursor.remove(), Ok(1));
        assert_eq!(*cursor.move_next().unwrap(), 10);
        assert_eq!(cursor.remove(), Ok(10));
    }
    assert_eq!(values(&list), vec![2, 3]);
    assert_back_links(&list);
}

#[test]
fn test_double_list_unzip_rethreads_prev() {
    let mut list: DoublyLinkedList<i32> = (0..6).collect();
    list.unzip();

    assert_eq!(values(&list), vec![0, 2, 4, 1, 3, 5]);
    assert_eq!(backwards(&list), vec![5, 3, 1, 4, 2, 0]);
    assert_eq!(list.back(), Some(&5));
    assert_back_links(&list);

    let mut cursor = list.cursor();
    while cursor.has_next() {
        cursor.move_next().unwrap();
    }
    assert_eq!(cursor.move_prev().unwrap().copied(), Some(3));
}

#[test]
fn test_double_link_attach_prev_sets_prev() {
    let mut link = DoubleLink::default();
    assert_eq!(link.prev(), None);

    link.attach_prev(Position::Head);
    assert_eq!(link.prev(), Some(Position::Head));
    link.attach_prev(Position::Node(7));
    assert_eq!(link.prev(), Some(Position::Node(7)));

    link.set_prev(None);
    assert_eq!(link.prev(), None);
    assert_eq!(link.next(), None);
}
