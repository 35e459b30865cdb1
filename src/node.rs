use std::fmt;

/// A child slot. Every `Node` exclusively owns its children so the tree can never share or cycle.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single key in a [`Tree`][crate::Tree] and the two subtrees hanging off of it. All keys in
/// the left subtree are smaller than `key` and all keys in the right subtree are larger. That
/// ordering is maintained by the `Tree`; a `Node` is only a container.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of `0`.
    ///
    /// This walks the subtree one level at a time rather than recursing so it is safe to call on
    /// very tall, unbalanced subtrees.
    pub fn height(&self) -> usize {
        let mut level = vec![self];
        let mut height = 0;
        loop {
            let next: Vec<&Self> = level
                .iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
            if next.is_empty() {
                return height;
            }
            height += 1;
            level = next;
        }
    }

    /// The leftmost node of this subtree, i.e. the one holding the smallest key.
    pub(crate) fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    pub(crate) fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

impl<K> Clone for Node<K>
where
    K: Clone,
{
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
