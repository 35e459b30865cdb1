//! Walking a [`Tree`][crate::Tree].
//!
//! Every order is served by the same [`Traversal`] iterator which lazily yields `&Node`s. Callers
//! that want the keys collect them with [`Traversal::keys`]; callers that want to run something on
//! every node hand a closure to [`Traversal::visit`] (or use any other iterator adaptor).
//!
//! None of the orders recurse - each keeps an explicit stack or queue - so walking a very tall
//! tree can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let tree = Tree::build(vec![3, 1, 2]);
//!
//! assert_eq!(tree.traverse(Order::Level).keys(), vec![&2, &1, &3]);
//! assert_eq!(tree.in_order().keys(), vec![&1, &2, &3]);
//! assert_eq!(tree.pre_order().keys(), vec![&2, &1, &3]);
//! assert_eq!(tree.post_order().keys(), vec![&1, &3, &2]);
//!
//! let mut sum = 0;
//! tree.level_order().visit(|node| sum += *node.key());
//! assert_eq!(sum, 6);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};
use crate::util;

/// The order in which a [`Traversal`] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth first: the root, then its children left to right, then their children, etc.
    Level,
    /// Left subtree, node, right subtree. Visits keys in ascending order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

/// A lazy walk over the nodes of a tree in some [`Order`]. Every node is yielded exactly once.
pub struct Traversal<'a, K> {
    state: State<'a, K>,
}

enum State<'a, K> {
    Level(VecDeque<&'a Node<K>>),
    In {
        stack: Vec<&'a Node<K>>,
        cursor: Option<&'a Node<K>>,
    },
    Pre(Vec<&'a Node<K>>),
    /// The flag records whether the node's children have already been pushed.
    Post(Vec<(&'a Node<K>, bool)>),
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        let state = match order {
            Order::Level => State::Level(root.into_iter().collect()),
            Order::In => State::In {
                stack: Vec::new(),
                cursor: root,
            },
            Order::Pre => State::Pre(root.into_iter().collect()),
            Order::Post => State::Post(root.into_iter().map(|n| (n, false)).collect()),
        };
        Self { state }
    }

    /// Collects the key of every remaining node in visiting order.
    pub fn keys(self) -> Vec<&'a K> {
        self.map(Node::key).collect()
    }

    /// Calls `visitor` on every remaining node in visiting order.
    pub fn visit<F>(self, visitor: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.for_each(visitor)
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Level(queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                Some(node)
            }
            State::In { stack, cursor } => {
                while let Some(node) = cursor.take() {
                    stack.push(node);
                    *cursor = node.left();
                }
                let node = stack.pop()?;
                *cursor = node.right();
                Some(node)
            }
            State::Pre(stack) => {
                let node = stack.pop()?;
                // Right first so the left subtree comes off the stack first.
                stack.extend(node.right());
                stack.extend(node.left());
                Some(node)
            }
            State::Post(stack) => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    return Some(node);
                }
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
            },
        }
    }
}

impl<K> FusedIterator for Traversal<'_, K> {}

/// An iterator that moves the keys out of a tree in ascending order. Created by
/// [`Tree::into_iter`][crate::Tree].
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    cursor: Link<K>,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>) -> Self {
        Self {
            stack: Vec::new(),
            cursor: root,
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some(mut node) = self.cursor.take() {
            self.cursor = node.left.take();
            self.stack.push(node);
        }
        let node = self.stack.pop()?;
        let Node { key, right, .. } = *node;
        self.cursor = right;
        Some(key)
    }
}

impl<K> FusedIterator for IntoIter<K> {}

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        util::dismantle(self.cursor.take());
        for node in self.stack.drain(..) {
            util::dismantle(Some(node));
        }
    }
}
