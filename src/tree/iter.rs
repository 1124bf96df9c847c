//! Wrapper module for [`RbTree`](crate::RbTree)'s in-order iterator, [`Iter`]

use std::iter::FusedIterator;

use super::node::Node;

/// An iterator over the keys of an [`RbTree`], in ascending order
///
/// This iterator is double-ended and knows its exact length. It never allocates more than two
/// stacks, each bounded by the height of the tree.
///
/// This type is produced by the [`iter`] method on [`RbTree`] (or by iterating over `&RbTree`).
///
/// [`RbTree`]: crate::RbTree
/// [`iter`]: crate::RbTree::iter
pub struct Iter<'t, K> {
    /// Nodes whose key (and right subtree) are still to be yielded from the front. The top of the
    /// stack is always the next key.
    fwd: Vec<&'t Node<K>>,
    /// Mirror of `fwd`, for yielding from the back
    bkwd: Vec<&'t Node<K>>,
    /// Number of keys not yet yielded from either end
    ///
    /// The two stacks walk the tree independently, so this is the only thing that stops them from
    /// crossing.
    remaining: usize,
}

impl<'t, K> Iter<'t, K> {
    pub(super) fn new(root: Option<&'t Node<K>>, len: usize) -> Self {
        let mut iter = Iter {
            fwd: Vec::new(),
            bkwd: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'t Node<K>>) {
        while let Some(n) = node {
            self.fwd.push(n);
            node = n.left();
        }
    }

    fn push_right_spine(&mut self, mut node: Option<&'t Node<K>>) {
        while let Some(n) = node {
            self.bkwd.push(n);
            node = n.right();
        }
    }
}

impl<'t, K> Iterator for Iter<'t, K> {
    type Item = &'t K;

    fn next(&mut self) -> Option<&'t K> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.fwd.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'t, K> DoubleEndedIterator for Iter<'t, K> {
    fn next_back(&mut self) -> Option<&'t K> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.bkwd.pop()?;
        self.push_right_spine(node.left());
        self.remaining -= 1;
        Some(node.key())
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

// Manual impl so that cloning doesn't require `K: Clone`
impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            fwd: self.fwd.clone(),
            bkwd: self.bkwd.clone(),
            remaining: self.remaining,
        }
    }
}
