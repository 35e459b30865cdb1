//! A Binary Search Tree that is built balanced and stays that way until it's mutated. Inserts and
//! deletes never restructure the tree - repeatedly inserting ascending keys will produce a tree
//! shaped like a linked list - but [`Tree::rebalance`] restores the balanced shape on request.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//!
//! // Duplicates are dropped and the middle key becomes the root.
//! assert_eq!(tree.len(), 11);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(8));
//! assert!(tree.is_balanced());
//!
//! // Inserting doesn't rebalance...
//! for key in [10, 6, 6346, 6344] {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until asked to.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//!
//! // Deleting a key returns it.
//! assert_eq!(tree.delete(&23), Some(23));
//! assert_eq!(tree.delete(&23), None);
//! assert!(tree.find(&23).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::Result;
use crate::node::{Link, Node};
use crate::number::Number;
use crate::traversal::{IntoIter, Order, Traversal};
use crate::util;

/// A Binary Search Tree of distinct keys. This can be used for building, inserting, finding, and
/// deleting keys as well as walking them in several orders.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        util::dismantle(self.root.take());
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        util::dismantle(self.root.take());
        self.len = 0;
    }

    /// The root node, for inspecting the shape of the tree. `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|n| n.min().key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|n| n.max().key())
    }

    /// Walks the tree in the given order. See the [`traversal`][crate::traversal] module.
    pub fn traverse(&self, order: Order) -> Traversal<'_, K> {
        Traversal::new(self.root(), order)
    }

    /// Walks the tree breadth first, left to right within each level.
    pub fn level_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::Level)
    }

    /// Walks the tree in ascending key order.
    pub fn in_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::In)
    }

    /// Walks each node before its left and then right subtrees.
    pub fn pre_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::Pre)
    }

    /// Walks each node after its left and then right subtrees.
    pub fn post_order(&self) -> Traversal<'_, K> {
        self.traverse(Order::Post)
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.in_order().map(Node::key)
    }

    /// The number of edges on the longest path from the root down to a leaf, or `None` for an
    /// empty tree. A tree with a single node has a height of `0`.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// Whether, for every node, the heights of its left and right subtrees differ by at most one.
    ///
    /// This is a single bottom-up pass: subtree heights are computed in post-order and the walk
    /// stops at the first node that is out of balance.
    pub fn is_balanced(&self) -> bool {
        // Heights of finished subtrees that haven't been claimed by their parent yet. Here an
        // empty subtree has height 0 and a leaf has height 1.
        let mut heights: Vec<usize> = Vec::new();
        for node in self.post_order() {
            // Post-order finishes the left subtree, then the right, so the right is on top.
            let right = if node.right.is_some() {
                heights.pop().expect("post-order visits children first")
            } else {
                0
            };
            let left = if node.left.is_some() {
                heights.pop().expect("post-order visits children first")
            } else {
                0
            };

            if left.abs_diff(right) > 1 {
                return false;
            }
            heights.push(left.max(right) + 1);
        }

        true
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Builds a balanced tree out of the distinct keys in `values`. The keys are sorted and the
    /// middle one (rounding down) becomes the root; the smaller keys build the left subtree the
    /// same way and the larger keys the right. The two subtrees of any node therefore differ in
    /// size by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![5, 5, 3, 3, 1]);
    ///
    /// assert_eq!(tree.in_order().keys(), vec![&1, &3, &5]);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut keys: Vec<K> = values.into_iter().collect();
        let given = keys.len();
        keys.sort();
        keys.dedup();
        log::debug!(
            "building tree from {} keys ({} duplicates dropped)",
            keys.len(),
            given - keys.len()
        );

        let len = keys.len();
        let tree = Self {
            root: util::build_balanced(&mut keys.into_iter(), len),
            len,
        };
        tree.check_invariants();
        tree
    }

    /// Inserts `key` into the tree. Returns `false`, leaving the tree untouched, if the key was
    /// already present. The new key always becomes a leaf; nothing is rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let slot = self.slot_mut(&key);
        if slot.is_some() {
            log::trace!("insert: key already present, ignoring");
            return false;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Deletes `key` from the tree and returns it. If the tree does not contain the key, nothing
    /// happens and `None` is returned.
    ///
    /// A node with at most one child is replaced by that child. A node with two children instead
    /// takes over the key of its successor (the smallest key in its right subtree) and the
    /// successor, which has no left child, is spliced out. Note that this means the node that
    /// held `key` now holds a different key rather than being removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K> {
        let slot = self.slot_mut(key);
        let node = match slot.as_mut() {
            Some(node) => node,
            None => {
                log::trace!("delete: key not found");
                return None;
            }
        };

        let deleted = if node.left.is_some() && node.right.is_some() {
            let successor =
                Self::take_min(&mut node.right).expect("Two children => right subtree has a min");
            mem::replace(&mut node.key, successor)
        } else {
            let node = slot.take().expect("Found key => node");
            let Node { key, left, right } = *node;
            *slot = left.or(right);
            key
        };

        self.len -= 1;
        Some(deleted)
    }

    /// Potentially finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![4, 2, 6]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.key()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut node = self.root()?;
        loop {
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Whether the tree contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The number of edges from the root down to `node`, or `None` if `node` is not part of this
    /// tree. `node` is matched by identity, not just by key, so a node from another tree holding
    /// an equal key is not found.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    /// let other = Tree::build(vec![3]);
    ///
    /// let three = tree.find(&3).unwrap();
    /// assert_eq!(tree.depth(three), Some(1));
    /// assert_eq!(tree.depth(other.root().unwrap()), None);
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Option<usize> {
        let mut current = self.root()?;
        let mut depth = 0;
        // The BST ordering means `node`, if it's here at all, is on the search path for its key.
        loop {
            current = match node.key.cmp(&current.key) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return std::ptr::eq(current, node).then(|| depth),
                Ordering::Greater => current.right()?,
            };
            depth += 1;
        }
    }

    /// The number of edges from the root down to the node holding `key`, or `None` if there is no
    /// such node.
    pub fn depth_of(&self, key: &K) -> Option<usize> {
        self.find(key).and_then(|node| self.depth(node))
    }

    /// Restores the balanced shape [`Tree::build`] produces. The keys are drained in ascending
    /// order and the tree is rebuilt from them.
    pub fn rebalance(&mut self) {
        let before = self.height();
        let len = self.len;
        let mut keys = IntoIter::new(self.root.take());
        self.root = util::build_balanced(&mut keys, len);
        log::debug!(
            "rebalanced {} keys, height {:?} -> {:?}",
            len,
            before,
            self.height()
        );
        self.check_invariants();
    }

    /// Finds the slot where `key` lives: the link to the node holding it if there is one,
    /// otherwise the empty link where it would be inserted.
    fn slot_mut(&mut self, key: &K) -> &mut Link<K> {
        let mut slot = &mut self.root;
        loop {
            match slot.as_ref().map(|n| key.cmp(&n.key)) {
                None | Some(Ordering::Equal) => return slot,
                Some(Ordering::Less) => slot = &mut slot.as_mut().expect("Less => node").left,
                Some(Ordering::Greater) => {
                    slot = &mut slot.as_mut().expect("Greater => node").right
                }
            }
        }
    }

    /// Splices the leftmost node out of the subtree at `link` and returns its key. The leftmost
    /// node has no left child so its right child (if any) takes its place.
    fn take_min(link: &mut Link<K>) -> Option<K> {
        let mut slot = link;
        while slot.as_ref()?.left.is_some() {
            slot = &mut slot.as_mut()?.left;
        }

        let min = slot.take()?;
        let Node { key, right, .. } = *min;
        *slot = right;
        Some(key)
    }

    /// In debug builds, asserts the tree is ordered, balanced and counted correctly. Only called
    /// right after the tree has been (re)built, when it's guaranteed to be balanced.
    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            let keys: Vec<&K> = self.iter().collect();
            assert!(
                keys.windows(2).all(|w| w[0] < w[1]),
                "keys must be strictly ascending"
            );
            assert_eq!(keys.len(), self.len);
            assert!(self.is_balanced());
        }
    }
}

impl Tree<Number> {
    /// Builds a balanced tree out of the distinct values in `values`. See [`Tree::build`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`][crate::Error::InvalidInput] if any value is `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let tree = Tree::try_from_floats(vec![2.5, -1.0, 2.5]).unwrap();
    /// let keys: Vec<f64> = tree.iter().map(|n| n.get()).collect();
    /// assert_eq!(keys, vec![-1.0, 2.5]);
    ///
    /// assert!(matches!(
    ///     Tree::try_from_floats(vec![1.0, f64::NAN]),
    ///     Err(Error::InvalidInput(_))
    /// ));
    /// ```
    pub fn try_from_floats<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let keys = values
            .into_iter()
            .map(Number::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(keys))
    }

    /// Inserts `value` into the tree. See [`Tree::insert`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`][crate::Error::InvalidInput] if `value` is `NaN`. The tree is left
    /// untouched.
    pub fn try_insert(&mut self, value: f64) -> Result<bool> {
        Ok(self.insert(Number::new(value)?))
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Moves the keys out of the tree in ascending order.
    fn into_iter(mut self) -> IntoIter<K> {
        IntoIter::new(self.root.take())
    }
}
