use thiserror::Error;

/// Errors raised by the linked lists and their cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The list holds no element to take.
    #[error("collection is empty")]
    EmptyCollection,

    /// No element compared equal to the requested value.
    #[error("element not found")]
    NotFound,

    /// The index lies outside the range accepted by the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A cursor removal without a fresh step, or a second removal in a row.
    #[error("no element is ready to be removed")]
    IllegalState,

    /// The cursor cannot step any further in the requested direction.
    #[error("no more elements")]
    NoSuchElement,
}

/// Error returned when a bounded container is at capacity.
///
/// Carries the rejected value so the caller keeps ownership of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("container is at capacity")]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type Result<T, E = ListError> = core::result::Result<T, E>;
