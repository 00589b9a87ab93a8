//! Linear containers: a singly linked list with a mutating cursor, a doubly
//! linked list that adds backward traversal and in-place insertion, and a
//! fixed-capacity ring-buffer queue.
//!
//! ```
//! use linear_collections::linked_list::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<u32> = (0..6).collect();
//! list.unzip();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 1, 3, 5]);
//! ```
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;
pub mod queue;

pub use error::{Full, ListError, Result};
pub use linked_list::{DoublyLinkedList, SinglyLinkedList};
pub use queue::BoundedQueue;
