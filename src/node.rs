use crate::digit::Digit;

/// Index of a [`Node`] inside the arena of the number that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One link of the chain. The node owns its digit; `prev` and `next` only
/// name neighbours inside the same arena and never own them.
#[derive(Debug, Clone)]
pub struct Node {
    digit: Digit,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(digit: Digit) -> Self {
        Node { digit, prev: None, next: None }
    }

    #[inline]
    pub fn digit(&self) -> &Digit {
        &self.digit
    }

    /// Neighbour toward the front (more significant).
    #[inline]
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    /// Neighbour toward the rear (less significant).
    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    pub(crate) fn into_digit(self) -> Digit {
        self.digit
    }
}

#[test]
fn test_new_node_is_unlinked() {
    let mut node = Node::new(Digit::new('5').unwrap());
    assert_eq!(node.prev(), None);
    assert_eq!(node.next(), None);
    node.set_next(Some(NodeId(3)));
    node.set_prev(Some(NodeId(1)));
    assert_eq!(node.next(), Some(NodeId(3)));
    assert_eq!(node.prev(), Some(NodeId(1)));
    assert_eq!(node.into_digit().value(), 5);
}
