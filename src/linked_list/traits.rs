/// Where a link lives inside a list: the list's own sentinel head, or the
/// arena slot of a real node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The sentinel in front of the first real node.
    Head,
    /// A real node, by arena key.
    Node(usize),
}

impl Position {
    /// Arena key of a real node, `None` for the sentinel.
    #[inline]
    pub fn key(self) -> Option<usize> {
        match self {
            Position::Head => None,
            Position::Node(key) => Some(key),
        }
    }
}

/// A forward link in a linked list.
pub trait Link {
    /// Whether this link keeps a back-reference that relinking must restore.
    const TRACKS_PREV: bool = false;

    /// Get the key of the next node in the list
    fn next(&self) -> Option<usize>;

    /// Set the key of the next node in the list
    fn set_next(&mut self, next: Option<usize>);

    /// Point this link back at its new predecessor.
    ///
    /// Forward-only links have nowhere to record it.
    #[inline]
    fn attach_prev(&mut self, _prev: Position) {}
}

/// A link that also knows its predecessor.
pub trait LinkWithPrev: Link {
    /// Get the predecessor; `None` only for the sentinel head
    fn prev(&self) -> Option<Position>;

    /// Set the predecessor
    fn set_prev(&mut self, prev: Option<Position>);
}
