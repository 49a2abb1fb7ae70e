//! This crate exposes a Binary Search Tree (BST) over ordered values with
//! on-demand rebalancing, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
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
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## This tree
//!
//! The [`Tree`] in this crate stores a set of unique, ordered values. Unlike
//! an AVL or red-black tree it does **not** rotate on every mutation.
//! Instead it offers a shallow balance check ([`Tree::is_balanced`]) and an
//! explicit full rebuild ([`Tree::rebalance`]) that restores minimal height
//! whenever the caller decides the tree has degenerated. Building a tree
//! from a collection (via [`FromIterator`](std::iter::FromIterator))
//! deduplicates and sorts the input and produces a minimal-height tree
//! directly.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod tree;


pub use error::{TreeError, TreeResult};
pub use tree::Tree;
