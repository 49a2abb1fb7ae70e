//! Lazy traversal iterators over a [`Tree`][crate::Tree].
//!
//! All four iterators borrow the tree and yield `&T`. Each visits every
//! node exactly once; only the order differs. None of them recurse - the
//! depth-first orders keep an explicit stack and the breadth-first order
//! keeps a FIFO queue, so iteration never risks the call stack on a
//! degenerate tree.

use std::collections::VecDeque;

use crate::tree::Node;

/// Depth-first, node-first: each node is yielded before both of its
/// subtrees, left subtree before right.
///
/// Created by [`Tree::preorder`][crate::Tree::preorder].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right below left so the left subtree is popped first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

/// Depth-first, ascending: each node is yielded between its left and right
/// subtrees, which for a valid BST is sorted order.
///
/// Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    descending: Option<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            descending: root,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.descending {
            self.stack.push(node);
            self.descending = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.descending = node.right.as_deref();
        Some(&node.value)
    }
}

/// Depth-first, node-last: each node is yielded after both of its subtrees,
/// left subtree before right.
///
/// Created by [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, T> {
    /// Nodes paired with whether their subtrees have been expanded yet.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                (node, true) => return Some(&node.value),
                (node, false) => {
                    self.stack.push((node, true));
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push((right, false));
                    }
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push((left, false));
                    }
                }
            }
        }
    }
}

/// Breadth-first: nodes are yielded level by level from the root down,
/// children enqueued left-then-right.
///
/// Created by [`Tree::level_order`][crate::Tree::level_order].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some(&node.value)
    }
}
