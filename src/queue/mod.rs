//! Fixed-capacity queues.

pub mod bounded;

pub use bounded::BoundedQueue;
