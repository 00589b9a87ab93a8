use log::trace;

use super::{
    list::LinkedList,
    traits::{Link, Position},
};

/// Which chain the next visited node joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    Even,
    Odd,
}

impl Chain {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Chain::Even => Chain::Odd,
            Chain::Odd => Chain::Even,
        }
    }
}

impl<L: Link, T> LinkedList<L, T> {
    /// Relinks the list so the elements at even positions come first, followed
    /// by the elements at odd positions, each group in its original order.
    ///
    /// Only links change: no node is allocated, moved or copied. Lists with
    /// fewer than three elements are left as they are.
    ///
    /// ```
    /// use linear_collections::linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<u32> = (0..7).collect();
    /// list.unzip();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6, 1, 3, 5]);
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    pub fn unzip(&mut self) {
        if self.len() < 3 {
            return;
        }
        let Some(first) = self.head_key() else {
            return;
        };
        let Some(second) = self.node(first).next() else {
            return;
        };

        // tail0 ends the even chain, head1..tail1 is the odd chain.
        let mut tail0 = first;
        let head1 = second;
        let mut tail1 = second;
        let mut current = self.node(second).next();
        let mut chain = Chain::Even;

        while let Some(key) = current {
            current = self.node(key).next();
            match chain {
                Chain::Even => {
                    self.node_mut(tail0).set_next(Some(key));
                    tail0 = key;
                }
                Chain::Odd => {
                    self.node_mut(tail1).set_next(Some(key));
                    tail1 = key;
                }
            }
            chain = chain.flip();
        }

        self.node_mut(tail0).set_next(Some(head1));
        self.node_mut(tail1).set_next(None);
        self.set_tail(Position::Node(tail1));

        if L::TRACKS_PREV {
            self.rethread_prev();
        }
        trace!("unzipped {} nodes", self.len());
    }
}
