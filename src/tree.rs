use std::cmp::Ordering;
use std::fmt;

use crate::iter::{Iter, IterMut};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single tree cell. Each node is solely owned by its parent (the root
/// by the `Tree`), so there is no sharing and no cycles to worry about
/// when cloning or dropping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Equal => false,
            Ordering::Less => match &mut self.left {
                Some(left) => left.insert(value),
                None => {
                    self.left = Some(Box::new(Node::new(value)));
                    true
                }
            },
            Ordering::Greater => match &mut self.right {
                Some(right) => right.insert(value),
                None => {
                    self.right = Some(Box::new(Node::new(value)));
                    true
                }
            },
        }
    }

    fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_ref().and_then(|n| n.find(value)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_ref().and_then(|n| n.find(value)),
        }
    }

    fn find_mut(&mut self, value: &T) -> Option<&mut T>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left.as_mut().and_then(|n| n.find_mut(value)),
            Ordering::Equal => Some(&mut self.value),
            Ordering::Greater => self.right.as_mut().and_then(|n| n.find_mut(value)),
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    /// A node with no children has a height of 1.
    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        left.max(right) + 1
    }

    fn leftmost(&self) -> &T {
        self.left.as_ref().map_or(&self.value, |n| n.leftmost())
    }

    fn rightmost(&self) -> &T {
        self.right.as_ref().map_or(&self.value, |n| n.rightmost())
    }

    fn write_inorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        if let Some(left) = &self.left {
            left.write_inorder(sink)?;
        }
        write!(sink, "{} ", self.value)?;
        if let Some(right) = &self.right {
            right.write_inorder(sink)?;
        }
        Ok(())
    }

    fn write_preorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        write!(sink, "{} ", self.value)?;
        if let Some(left) = &self.left {
            left.write_preorder(sink)?;
        }
        if let Some(right) = &self.right {
            right.write_preorder(sink)?;
        }
        Ok(())
    }
}

/// An unbalanced Binary Search Tree holding a set of distinct, ordered
/// values. This can be used for inserting and finding values, ordered
/// iteration, and upper-bound queries.
///
/// The tree never rebalances, so its shape (and [`height`][Tree::height])
/// is determined entirely by insertion order. Two trees compare equal only
/// if they have the same shape *and* the same values, not merely the same
/// element set.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// let mut tree = Tree::new();
///
/// // Nothing in here yet.
/// assert!(tree.is_empty());
/// assert_eq!(tree.find(&1), None);
///
/// assert!(tree.insert(1));
/// assert_eq!(tree.find(&1), Some(&1));
///
/// // Inserting the same value again is rejected.
/// assert!(!tree.insert(1));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

/// Structural equality: both trees must have the same node topology with
/// equal values at every corresponding position. Trees built from the same
/// values in different insertion orders usually differ in shape and so
/// compare unequal.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> FromIterator<T> for Tree<T> {
    /// Builds a tree by inserting each value in iteration order.
    /// Duplicates are dropped, exactly as repeated [`insert`][Tree::insert]
    /// calls would drop them.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of values in the tree.
    ///
    /// This is tracked on insert, not recomputed by traversal, so it is
    /// `O(1)`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root down
    /// to a leaf: 0 for an empty tree, 1 for a tree holding only a root.
    ///
    /// Because the tree never rebalances, inserting `n` values in sorted
    /// order produces a height of `n`.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Inserts the given value into the tree. Returns `true` if the value
    /// was inserted and `false` if an equal value was already present, in
    /// which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = match &mut self.root {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Potentially finds the given value in this tree. If no node holds an
    /// equal value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_ref().and_then(|n| n.find(value))
    }

    /// Like [`find`][Tree::find] but returns a mutable reference to the
    /// stored value.
    ///
    /// Overwriting the value through that reference is permitted and is
    /// *not* checked against the tree's ordering invariants - writing a
    /// value that sorts differently from the old one silently corrupts the
    /// tree. Use [`check_sorting_invariant`][Tree::check_sorting_invariant]
    /// to detect that afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 3, 7].into_iter().collect();
    ///
    /// *tree.find_mut(&7).unwrap() = 1;
    /// assert!(!tree.check_sorting_invariant());
    /// ```
    pub fn find_mut(&mut self, value: &T) -> Option<&mut T>
    where
        T: Ord,
    {
        self.root.as_mut().and_then(|n| n.find_mut(value))
    }

    /// Returns the smallest value in the tree, or `None` if the tree is
    /// empty.
    pub fn min_element(&self) -> Option<&T> {
        self.root.as_ref().map(|n| n.leftmost())
    }

    /// Returns the largest value in the tree, or `None` if the tree is
    /// empty.
    pub fn max_element(&self) -> Option<&T> {
        self.root.as_ref().map(|n| n.rightmost())
    }

    /// Returns the smallest value strictly greater than `value`, or `None`
    /// if no stored value exceeds it. `value` itself does not need to be
    /// in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = [22, 11, 33].into_iter().collect();
    ///
    /// assert_eq!(tree.min_greater_than(&11), Some(&22));
    /// assert_eq!(tree.min_greater_than(&21), Some(&22));
    /// assert_eq!(tree.min_greater_than(&33), None);
    /// ```
    pub fn min_greater_than(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut best = None;
        let mut subtree = self.root.as_deref();
        // Descend, keeping the smallest candidate seen so far. Anything in
        // a skipped right subtree is larger than the candidate and anything
        // in a skipped left subtree is too small.
        while let Some(node) = subtree {
            match value.cmp(&node.value) {
                Ordering::Less => {
                    best = Some(&node.value);
                    subtree = node.left.as_deref();
                }
                _ => subtree = node.right.as_deref(),
            }
        }
        best
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Returns an iterator over the values in ascending order that yields
    /// mutable references.
    ///
    /// As with [`find_mut`][Tree::find_mut], writes through the yielded
    /// references are not validated against the ordering invariants.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.root.as_deref_mut())
    }

    /// Checks that the binary-search-tree ordering property currently
    /// holds: every node's value is greater than everything in its left
    /// subtree, less than everything in its right subtree, and no two
    /// nodes hold equal values. Equivalently, the in-order sequence is
    /// strictly increasing - which is how it is checked.
    ///
    /// `insert` can never break this property; mutation through
    /// [`find_mut`][Tree::find_mut] or [`iter_mut`][Tree::iter_mut] can.
    pub fn check_sorting_invariant(&self) -> bool
    where
        T: Ord,
    {
        let mut values = self.iter();
        let Some(mut prev) = values.next() else {
            return true;
        };
        for value in values {
            if value <= prev {
                return false;
            }
            prev = value;
        }
        true
    }

    /// Writes every value to `sink` in ascending (in-order) order, each
    /// followed by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = [22, 11, 33].into_iter().collect();
    ///
    /// let mut out = String::new();
    /// tree.traverse_inorder(&mut out).unwrap();
    /// assert_eq!(out, "11 22 33 ");
    /// ```
    pub fn traverse_inorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        match &self.root {
            Some(root) => root.write_inorder(sink),
            None => Ok(()),
        }
    }

    /// Writes every value to `sink` in pre-order (node, then left subtree,
    /// then right subtree), each followed by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<i32> = [22, 11, 33].into_iter().collect();
    ///
    /// let mut out = String::new();
    /// tree.traverse_preorder(&mut out).unwrap();
    /// assert_eq!(out, "22 11 33 ");
    /// ```
    pub fn traverse_preorder<W>(&self, sink: &mut W) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        match &self.root {
            Some(root) => root.write_preorder(sink),
            None => Ok(()),
        }
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub(crate) fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and an ordered set.
    /// This way we can ensure that after a random smattering of inserts
    /// and lookups we hold the same values the model does.
    fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    assert_eq!(tree.insert(v.clone()), set.insert(v.clone()));
                }
                Op::Find(v) => {
                    assert_eq!(tree.find(v), set.get(v));
                }
                Op::CheckInvariant => {
                    assert!(tree.check_sorting_invariant());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.len() == set.len() && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.find(x) == Some(x))
        }
    }
}
