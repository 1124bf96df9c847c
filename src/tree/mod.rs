//! Wrapper module containing the tree itself

use std::fmt::{self, Debug, Formatter};

mod insert;
mod iter;
mod node;
#[cfg(test)]
mod tests;

pub use iter::Iter;
pub use node::Color;

use node::{Link, Node};

/// An ordered set of keys, kept balanced with red-black coloring
///
/// Keys are stored at most once; inserting a key that's already present does nothing. All of the
/// balancing happens in [`insert`] -- there's no removal, so the tree only ever grows.
///
/// The tree is guaranteed to satisfy the usual red-black properties after every call to
/// [`insert`]:
///
/// 1. No red node has a red child
/// 2. Every path from the root to an empty position passes through the same number of black nodes
/// 3. The root is black
///
/// Together, these bound the [`height`] of a tree with `n` keys by `2 * log2(n + 1)`.
///
/// ## Examples
///
/// ```
/// use hyperion::{Color, RbTree};
///
/// let mut tree = RbTree::new_empty();
/// for key in [10, 20, 30] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.to_vec(), [10, 20, 30]);
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.root_color(), Some(Color::Black));
/// assert!(tree.contains(&20));
/// assert!(!tree.contains(&25));
/// ```
///
/// [`insert`]: Self::insert
/// [`height`]: Self::height
#[derive(Clone)]
pub struct RbTree<K> {
    root: Link<K>,
    len: usize,
}

/// (*Internal*) Helper type for naming a child of a node
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
enum Side {
    Left = 0,
    Right = 1,
}

impl<K> RbTree<K> {
    /// Creates a new, empty `RbTree`
    pub const fn new_empty() -> Self {
        RbTree { root: None, len: 0 }
    }

    /// Returns true iff the tree contains no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of distinct keys in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of nodes on the longest path from the root to a leaf
    ///
    /// An empty tree has height zero, and a tree with a single key has height one.
    pub fn height(&self) -> usize {
        fn subtree_height<K>(node: Option<&Node<K>>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + subtree_height(n.left()).max(subtree_height(n.right())),
            }
        }

        subtree_height(self.root.as_deref())
    }

    /// Returns the color of the root node, or `None` if the tree is empty
    ///
    /// Once any insertion has completed, this is always `Some(Color::Black)` for a non-empty tree.
    pub fn root_color(&self) -> Option<Color> {
        self.root.as_deref().map(Node::color)
    }

    /// Returns an iterator over all the keys in the tree, in ascending order
    ///
    /// ```
    /// use hyperion::RbTree;
    ///
    /// let tree: RbTree<i32> = [5, 3, 8, 1].into_iter().collect();
    /// let keys: Vec<_> = tree.iter().rev().copied().collect();
    /// assert_eq!(keys, [8, 5, 3, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }
}

impl<K: Ord> RbTree<K> {
    /// Adds `key` to the tree, returning whether it was newly added
    ///
    /// If the key is already present, the tree is left exactly as it was and this returns `false`.
    ///
    /// ```
    /// use hyperion::RbTree;
    ///
    /// let mut tree = RbTree::new_empty();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.to_vec(), [1]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let (mut root, added) = insert::insert_into(self.root.take(), key);
        root.set_color(Color::Black);
        self.root = Some(root);

        if added {
            self.len += 1;
        }
        added
    }

    /// Returns true iff `key` is present in the tree
    ///
    /// This is a plain iterative descent and never modifies the tree.
    pub fn contains(&self, key: &K) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(node.key()) {
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Greater => node.right(),
                std::cmp::Ordering::Equal => return true,
            };
        }

        false
    }
}

impl<K: Clone> RbTree<K> {
    /// Returns all of the keys in the tree in ascending order, as a freshly allocated `Vec`
    pub fn to_vec(&self) -> Vec<K> {
        self.iter().cloned().collect()
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl<K: Debug> Debug for RbTree<K> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Two trees with the same keys may have different shapes, depending on insertion order. We only
// compare the contents.
impl<K: PartialEq> PartialEq for RbTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for RbTree<K> {}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = RbTree::new_empty();
        tree.extend(iter);
        tree
    }
}

impl<'t, K> IntoIterator for &'t RbTree<K> {
    type Item = &'t K;
    type IntoIter = Iter<'t, K>;

    fn into_iter(self) -> Iter<'t, K> {
        self.iter()
    }
}

#[cfg(feature = "fuzz")]
impl<'d, K: Ord + arbitrary::Arbitrary<'d>> arbitrary::Arbitrary<'d> for RbTree<K> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'d>) -> arbitrary::Result<Self> {
        u.arbitrary_iter()?.collect()
    }
}

#[cfg(any(test, feature = "fuzz"))]
macro_rules! valid_assert {
    ($path:ident: $cond:expr) => {
        if !$cond {
            panic!(
                concat!("assertion failed: `", stringify!($cond), "` for path {:?}"),
                $path
            );
        }
    };
}

#[cfg(any(test, feature = "fuzz"))]
macro_rules! valid_assert_eq {
    ($path:ident: $lhs:expr, $rhs:expr) => {
        let left = $lhs;
        let right = $rhs;
        if left != right {
            panic!(
                concat!(
                    "assertion failed: `",
                    stringify!($lhs == $rhs),
                    "` for path {:?}:\n",
                    " left: {:?}\n",
                    "right: {:?}",
                ),
                $path, left, right,
            );
        }
    };
}

#[cfg(any(test, feature = "fuzz"))]
impl<K: Ord> RbTree<K> {
    /// (*Test-only*) Validates the tree, panicking if any of the red-black or search-tree
    /// properties don't hold
    ///
    /// This method basically exists for tests so that we can quickly narrow down exactly when a
    /// failure is introduced in a particular test case. The panic message includes the path from
    /// the root to the offending node.
    pub fn validate(&self) {
        let root = match self.root.as_deref() {
            Some(r) => r,
            None => {
                assert_eq!(self.len, 0, "empty tree with non-zero length");
                return;
            }
        };

        let path: Vec<Side> = Vec::new();
        valid_assert_eq!(path: root.color(), Color::Black);

        let mut count = 0;
        Self::validate_node(root, &mut Vec::new(), None, None, &mut count);
        assert_eq!(self.len, count, "stored length doesn't match number of nodes");
    }

    /// Called by `validate` to check a single subtree, returning its black-height
    ///
    /// `lower` and `upper` are the exclusive bounds every key in the subtree must fall between.
    fn validate_node<'t>(
        node: &'t Node<K>,
        path: &mut Vec<Side>,
        lower: Option<&'t K>,
        upper: Option<&'t K>,
        count: &mut usize,
    ) -> usize {
        *count += 1;

        if let Some(lo) = lower {
            valid_assert!(path: lo < node.key());
        }
        if let Some(hi) = upper {
            valid_assert!(path: node.key() < hi);
        }

        if node.color().is_red() {
            valid_assert!(path: !node::is_red(node.left()));
            valid_assert!(path: !node::is_red(node.right()));
        }

        let left_height = match node.left() {
            None => 0,
            Some(left) => {
                path.push(Side::Left);
                let h = Self::validate_node(left, path, lower, Some(node.key()), count);
                path.pop();
                h
            }
        };

        let right_height = match node.right() {
            None => 0,
            Some(right) => {
                path.push(Side::Right);
                let h = Self::validate_node(right, path, Some(node.key()), upper, count);
                path.pop();
                h
            }
        };

        valid_assert_eq!(path: left_height, right_height);

        match node.color() {
            Color::Black => left_height + 1,
            Color::Red => left_height,
        }
    }
}
