//! A BST storing a set of unique, ordered values. Mutations never
//! rebalance; callers check [`Tree::is_balanced`] and invoke
//! [`Tree::rebalance`] when the shape has degenerated.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1).unwrap();
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting the same value again reports a duplicate and changes nothing.
//! assert!(tree.insert(1).is_err());
//!
//! // Deleting a node returns its value.
//! let deleted_value = tree.delete(&1);
//!
//! assert_eq!(deleted_value, Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::{TreeError, TreeResult};
use crate::iter::{Inorder, LevelOrder, Postorder, Preorder};

/// A single tree vertex. Each child link is either absent or an
/// exclusively-owned subtree, so a link can never hold anything that is not
/// a valid `Node` - the invariant is carried by the type.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A Binary Search Tree storing a set of ordered values. This can be used
/// for inserting, finding, and deleting values, for traversing them in four
/// orders, and for measuring and restoring the balance of the tree.
///
/// Mutations do not rebalance. Repeatedly inserting ascending values
/// produces a degenerate chain; [`rebalance`][Tree::rebalance] rebuilds it
/// to minimal height on demand.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visits values node-first: each node before both of its subtrees,
    /// left subtree before right.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<i32> = (1..=3).collect();
    /// let order: Vec<i32> = tree.preorder().copied().collect();
    ///
    /// assert_eq!(order, [2, 1, 3]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Visits each node between its left and right subtrees. For any valid
    /// BST this yields the values in strictly ascending order, which is the
    /// property [`rebalance`][Tree::rebalance] relies on.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<i32> = [3, 1, 2].iter().copied().collect();
    /// let order: Vec<i32> = tree.inorder().copied().collect();
    ///
    /// assert_eq!(order, [1, 2, 3]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// Visits each node after both of its subtrees, left subtree before
    /// right.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }

    /// Visits values breadth-first, level by level, children
    /// left-then-right. An empty tree yields an empty sequence.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }

    /// The number of edges on the longest path from the root to a leaf.
    ///
    /// An empty tree has height `-1` by convention, so a single node has
    /// height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        Self::height_below(self.root.as_deref())
    }

    /// Reports whether the tree is balanced at the root: the heights of the
    /// root's two subtrees differ by at most one.
    ///
    /// This is deliberately a shallow check. Subtrees below the root are
    /// not inspected, so a tree can report balanced while an inner node is
    /// lopsided. An empty or single-node tree is balanced.
    pub fn is_balanced(&self) -> bool {
        match self.root.as_deref() {
            None => true,
            Some(root) => {
                let left_height = Self::height_below(root.left.as_deref());
                let right_height = Self::height_below(root.right.as_deref());
                (left_height - right_height).abs() <= 1
            }
        }
    }

    fn height_below(link: Option<&Node<T>>) -> isize {
        match link {
            None => -1,
            Some(node) => {
                let left_height = Self::height_below(node.left.as_deref());
                let right_height = Self::height_below(node.right.as_deref());
                1 + left_height.max(right_height)
            }
        }
    }

    /// Renders the tree as indented lines for diagnostics, one node per
    /// line, children connected with box-drawing branches. Display-only;
    /// the shape of the output is not a stable contract.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        match self.root.as_deref() {
            None => out.push_str("(empty)"),
            Some(root) => Self::render_node(root, "", &mut out),
        }
        out
    }

    fn render_node(node: &Node<T>, tab: &str, out: &mut String)
    where
        T: fmt::Display,
    {
        out.push_str(&node.value.to_string());
        out.push('\n');

        let children = [node.left.as_deref(), node.right.as_deref()];
        let Some(last) = children.iter().rposition(|child| child.is_some()) else {
            return;
        };
        for (i, child) in children.iter().enumerate().take(last + 1) {
            let Some(child) = *child else {
                continue;
            };
            let is_last = i == last;
            out.push_str(tab);
            out.push_str(if is_last { "└─ " } else { "├─ " });
            let child_tab = format!("{}{}", tab, if is_last { "   " } else { "│  " });
            Self::render_node(child, &child_tab, out);
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the given value into the tree. Inserting a value that is
    /// already present reports [`TreeError::DuplicateValue`] and leaves the
    /// tree unchanged.
    ///
    /// The tree is *not* rebalanced; see [`rebalance`][Tree::rebalance].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1).is_ok());
    /// assert_eq!(tree.insert(1), Err(TreeError::DuplicateValue));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> TreeResult<()> {
        Self::insert_into(&mut self.root, value)?;
        self.len += 1;
        Ok(())
    }

    /// Deletes the node containing the given value from the tree and
    /// returns its value. If the tree does not contain the value, nothing
    /// happens and `None` is returned.
    ///
    /// The tree is *not* rebalanced; see [`rebalance`][Tree::rebalance].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let removed = Self::delete_from(&mut self.root, value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Potentially finds the given value in this tree. If no node holds the
    /// value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match value.cmp(&node.value) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => cursor = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns `true` if the value is present in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The number of edges from the root to the node holding the given
    /// value, found by re-descending from the root and comparing values.
    /// The root itself has depth `0`. If the descent never matches the
    /// value, [`TreeError::NotFound`] is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let tree: Tree<i32> = (1..=3).collect();
    ///
    /// assert_eq!(tree.depth(&2), Ok(0));
    /// assert_eq!(tree.depth(&3), Ok(1));
    /// assert_eq!(tree.depth(&42), Err(TreeError::NotFound));
    /// ```
    pub fn depth(&self, value: &T) -> TreeResult<usize> {
        let mut cursor = self.root.as_deref();
        let mut edges = 0;
        while let Some(node) = cursor {
            match value.cmp(&node.value) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Equal => return Ok(edges),
                Ordering::Greater => cursor = node.right.as_deref(),
            }
            edges += 1;
        }
        Err(TreeError::NotFound)
    }

    /// Rebuilds the tree to minimal height if [`is_balanced`][Tree::is_balanced]
    /// reports it is not. Returns `true` if a rebuild happened.
    ///
    /// The in-order sequence of a valid BST is already sorted and unique,
    /// so the rebuild drains the tree in-order and reconstructs it the same
    /// way [`FromIterator`] does. Calling this twice in a row never
    /// rebuilds twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in 1..=7 {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// // Ascending inserts degenerate into a chain.
    /// assert_eq!(tree.height(), 6);
    /// assert!(!tree.is_balanced());
    ///
    /// assert!(tree.rebalance());
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), 2);
    ///
    /// // Already balanced, so the second call is a no-op.
    /// assert!(!tree.rebalance());
    /// ```
    pub fn rebalance(&mut self) -> bool {
        if self.is_balanced() {
            return false;
        }
        let mut values = Vec::with_capacity(self.len);
        Self::drain_inorder(self.root.take(), &mut values);
        let len = values.len();
        self.root = Self::from_sorted(&mut values.into_iter(), len);
        true
    }

    fn insert_into(link: &mut Option<Box<Node<T>>>, value: T) -> TreeResult<()> {
        match link {
            None => {
                *link = Some(Box::new(Node::new(value)));
                Ok(())
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value),
                Ordering::Equal => Err(TreeError::DuplicateValue),
                Ordering::Greater => Self::insert_into(&mut node.right, value),
            },
        }
    }

    fn delete_from(link: &mut Option<Box<Node<T>>>, value: &T) -> Option<T> {
        match link {
            None => None,
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::delete_from(&mut node.left, value),
                Ordering::Greater => Self::delete_from(&mut node.right, value),
                Ordering::Equal => Some(Self::remove_node(link)),
            },
        }
    }

    /// Removes the node the link points at, reattaching whatever replaces
    /// it through the same link, and returns the displaced value. The link
    /// must not be empty.
    fn remove_node(link: &mut Option<Box<Node<T>>>) -> T {
        let node = link.as_deref_mut().expect("removing a node requires one");
        if node.left.is_some() && node.right.is_some() {
            // Two children: the in-order successor (leftmost of the right
            // subtree) takes this node's place by value. At most one node
            // is structurally detached.
            let successor = Self::detach_min(&mut node.right)
                .expect("a node with two children has a right subtree");
            mem::replace(&mut node.value, successor)
        } else {
            let mut node = *link.take().expect("removing a node requires one");
            *link = node.left.take().or_else(|| node.right.take());
            node.value
        }
    }

    /// Detaches the minimum node below the link and returns its value,
    /// splicing the detached node's right subtree into its place.
    fn detach_min(link: &mut Option<Box<Node<T>>>) -> Option<T> {
        let node = link.as_deref_mut()?;
        if node.left.is_some() {
            Self::detach_min(&mut node.left)
        } else {
            let mut node = link.take()?;
            *link = node.right.take();
            Some(node.value)
        }
    }

    /// Builds a minimal-height subtree from the next `len` values of an
    /// ascending, duplicate-free stream. The root of each range is the
    /// lower middle, so an even-length range leaves the extra node on the
    /// right.
    fn from_sorted(values: &mut std::vec::IntoIter<T>, len: usize) -> Option<Box<Node<T>>> {
        if len == 0 {
            return None;
        }
        let left_len = (len - 1) / 2;
        let left = Self::from_sorted(values, left_len);
        let value = values.next().expect("stream holds `len` more values");
        let right = Self::from_sorted(values, len - left_len - 1);
        Some(Box::new(Node { value, left, right }))
    }

    fn drain_inorder(link: Option<Box<Node<T>>>, out: &mut Vec<T>) {
        if let Some(node) = link {
            let Node { value, left, right } = *node;
            Self::drain_inorder(left, out);
            out.push(value);
            Self::drain_inorder(right, out);
        }
    }
}

/// Builds a minimal-height tree from any collection of values.
///
/// The input is deduplicated with set semantics and sorted before the
/// build, so the order of the input never affects the result.
///
/// # Examples
///
/// ```
/// use balanced_bst::Tree;
///
/// let tree: Tree<i32> = [3, 1, 2, 3, 1].iter().copied().collect();
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.is_balanced());
/// ```
impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let len = values.len();
        let root = Self::from_sorted(&mut values.into_iter(), len);
        Self { root, len }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts,
    /// deletes, and rebalances we hold the same set of values as the model.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    assert_eq!(tree.insert(*v).is_ok(), set.insert(*v));
                }
                Op::Delete(v) => {
                    assert_eq!(tree.delete(v), set.take(v));
                }
                Op::Rebalance => {
                    tree.rebalance();
                    assert!(tree.is_balanced());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_matches_btree_set(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.len() == set.len() && tree.inorder().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                let _ = tree.insert(*x);
            }

            xs.iter().all(|x| tree.find(x) == Some(x))
        }
    }
}
