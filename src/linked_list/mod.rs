//! Arena-backed linked lists.
//!
//! Nodes live in a slab owned by the list and are addressed by `usize` keys.
//! The forward `next` links are the only ownership chain; the doubly linked
//! variant adds a `prev` back-reference that is looked up, never owned, and
//! is re-threaded whenever neighbours change.
//!
//! Both variants share one generic [`list::LinkedList`], parameterised by the
//! link stored in each node:
//!
//! - [`single::SingleLink`]: `next` only, see [`SinglyLinkedList`].
//! - [`double::DoubleLink`]: `next` and `prev`, see [`DoublyLinkedList`].
//!
//! The head of every list is a sentinel link that belongs to the list itself
//! ([`traits::Position::Head`]), so inserting at the front never special-cases
//! an empty list, and the cached tail points back at the sentinel when the
//! list is empty.
//!
//! # Examples
//!
//! ```
//! use linear_collections::linked_list::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<i32> = [1, 2, 4].into_iter().collect();
//! {
//!     let mut cursor = list.cursor();
//!     cursor.move_next().unwrap();
//!     cursor.move_next().unwrap();
//!     cursor.insert(3);
//! }
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
//! ```

pub mod cursor;
pub mod double;
pub mod iter;
pub mod list;
mod node;
pub mod single;
pub mod traits;
mod unzip;

pub use cursor::CursorMut;
pub use double::{BidirectionalCursor, DoubleLink, DoublyLinkedList};
pub use iter::Iter;
pub use list::LinkedList;
pub use single::{ForwardCursor, SingleLink, SinglyLinkedList};
pub use traits::{Link, LinkWithPrev, Position};

#[cfg(test)]
mod tests;
