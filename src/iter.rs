//! In-order iterators over a [`Tree`].
//!
//! `Node`s carry no parent pointers, so both iterators keep an explicit
//! ancestor stack instead: seeding an iterator descends the left spine of
//! the tree in `O(height)`, and each step pops one node and pushes the left
//! spine of its right subtree. Every node is pushed and popped exactly
//! once, so a full traversal is `O(N)` and each step amortized `O(1)`.

use crate::tree::{Node, Tree};

/// An iterator over the values of a [`Tree`] in ascending order.
///
/// Created by [`Tree::iter`]. Yields `&T`.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut subtree: Option<&'a Node<T>>) {
        while let Some(node) = subtree {
            self.stack.push(node);
            subtree = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// An iterator over the values of a [`Tree`] in ascending order that
/// yields mutable references.
///
/// Created by [`Tree::iter_mut`]. Yields `&mut T`. Writing a value that
/// sorts differently from the one it replaces breaks the tree's ordering
/// invariant without any diagnostic; see
/// [`Tree::check_sorting_invariant`].
pub struct IterMut<'a, T> {
    /// Each entry is a node split into its value and its not-yet-visited
    /// right subtree. Splitting at push time is what lets us hand out
    /// `&mut T` while still holding the rest of the tree.
    stack: Vec<(&'a mut T, Option<&'a mut Node<T>>)>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(root: Option<&'a mut Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut subtree: Option<&'a mut Node<T>>) {
        while let Some(node) = subtree {
            let Node { value, left, right } = node;
            self.stack.push((value, right.as_deref_mut()));
            subtree = left.as_deref_mut();
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (value, right) = self.stack.pop()?;
        self.push_left_spine(right);
        Some(value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter::new(self.root())
    }
}

impl<'a, T> IntoIterator for &'a mut Tree<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        IterMut::new(self.root_mut())
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn iterates_in_ascending_order() {
        let tree: Tree<i32> = [54, 63, 45, 72, 36, 81, 27, 90, 18]
            .into_iter()
            .collect();

        let values: Vec<_> = tree.iter().copied().collect();
        assert_eq!(values, [18, 27, 36, 45, 54, 63, 72, 81, 90]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let tree: Tree<i32> = [1].into_iter().collect();

        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_mut_visits_every_value_in_order() {
        let mut tree: Tree<i32> = [20, 10, 15, 30].into_iter().collect();

        assert!(tree.iter_mut().eq([10, 15, 20, 30].iter_mut()));

        // Scaling every value preserves the relative order.
        tree.iter_mut().for_each(|value| *value *= 2);
        assert!(tree.iter().eq([20, 30, 40, 60].iter()));
        assert!(tree.check_sorting_invariant());
    }

    #[test]
    fn iter_mut_corruption_is_detected_afterwards() {
        let mut tree: Tree<i32> = [5, 3, 7].into_iter().collect();

        // Clobber the minimum with a value larger than the root.
        if let Some(first) = tree.iter_mut().next() {
            *first = 6;
        }

        assert!(!tree.check_sorting_invariant());
    }

    #[test]
    fn into_iterator_for_references() {
        let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();

        let mut seen = Vec::new();
        for value in &tree {
            seen.push(*value);
        }
        assert_eq!(seen, [1, 2, 3]);

        for value in &mut tree {
            *value += 10;
        }
        assert!(tree.iter().eq([11, 12, 13].iter()));
    }
}
