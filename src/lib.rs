//! This crate exposes an ordered, set-like Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and sometimes has child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! This tree is deliberately *unbalanced*: insertion order dictates the
//! shape, and inserting already-sorted values degrades the height to
//! `O(N)`. Duplicate values are rejected rather than overwritten, so the
//! tree models an ordered set.
//!
//! The tree hands out mutable references to stored values ([`Tree::find_mut`],
//! [`Tree::iter_mut`]) without re-checking the ordering invariants above.
//! Overwriting a value through one of those references can silently break
//! them; [`Tree::check_sorting_invariant`] exists to detect exactly that
//! after the fact.
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(tree.insert(3));
//!
//! // A second 2 is rejected, not overwritten.
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
//! assert!(tree.check_sorting_invariant());
//!
//! // Mutable access can break the ordering. That's on the caller.
//! *tree.find_mut(&3).unwrap() = 0;
//! assert!(!tree.check_sorting_invariant());
//! ```
//!
//! There is no internal synchronization: a `Tree` is a plain value and
//! sharing one across threads follows the usual `&`/`&mut` rules.

#![deny(missing_docs)]

mod iter;
mod tree;

#[cfg(test)]
mod test;

pub use iter::{Iter, IterMut};
pub use tree::Tree;
