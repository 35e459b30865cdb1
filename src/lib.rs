//! This crate exposes a Binary Search Tree (BST) that is built balanced from
//! an unsorted collection of keys and can be rebalanced on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path from
//! the root `Node` to a leaf `Node`). A [`Tree`] built with [`Tree::build`] or
//! restored with [`Tree::rebalance`] is _balanced_: for every `Node` the heights
//! of its two subtrees differ by at most one, so its height is `O(lg N)`.
//! [`Tree::insert`] and [`Tree::delete`] don't restructure the tree so a long run of
//! them can leave it arbitrarily tall; checking [`Tree::is_balanced`] and calling
//! [`Tree::rebalance`] is up to the caller.
//!
//! ## Limits
//!
//! Searching, inserting, deleting, walking, measuring, rebalancing and dropping
//! a tree never recurse so they work on trees of any height. Cloning a tree and
//! formatting it with `Debug` do recurse once per level and can overflow the
//! stack on very tall (i.e. long unbalanced) trees; rebalance first.
//!
//! ## Numeric keys
//!
//! Any `Ord` type can be a key. Floating point input goes through [`Number`],
//! which rejects `NaN` with [`Error::InvalidInput`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod number;
pub mod traversal;
pub mod tree;
mod util;


pub use error::{Error, Result};
pub use node::Node;
pub use number::Number;
pub use traversal::{IntoIter, Order, Traversal};
pub use tree::Tree;
