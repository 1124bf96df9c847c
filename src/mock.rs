//! Mock implementation with essentially the same API as [`RbTree`], but backed by a sorted vector
//!
//! [`RbTree`]: crate::RbTree

/// A mock, inefficient implementation of the [`RbTree`](crate::RbTree) interface
///
/// Everything here is done by binary search and `Vec::insert`, so it's easy to convince yourself
/// it's correct. It doesn't have a height, because it isn't a tree; [`max_height`] gives the bound
/// a valid red-black tree with the same number of keys must respect.
///
/// [`max_height`]: Self::max_height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mock<K> {
    keys: Vec<K>,
}

impl<K: Ord> Mock<K> {
    pub fn new_empty() -> Self {
        Mock { keys: Vec::new() }
    }

    pub fn insert(&mut self, key: K) -> bool {
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(idx) => {
                self.keys.insert(idx, key);
                true
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.binary_search(key).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Returns the largest height a red-black tree containing the same keys is allowed to have
    ///
    /// This is `floor(2 * log2(n + 1))`, computed without floating point.
    pub fn max_height(&self) -> usize {
        max_red_black_height(self.keys.len())
    }
}

impl<K: Ord + Clone> Mock<K> {
    pub fn to_vec(&self) -> Vec<K> {
        self.keys.clone()
    }
}

impl<K: Ord> Default for Mock<K> {
    fn default() -> Self {
        Self::new_empty()
    }
}

/// Returns `floor(2 * log2(n + 1))`
///
/// `2 * log2(m) >= h` iff `m * m >= 2^h`, so we just find the largest such `h`.
pub fn max_red_black_height(n: usize) -> usize {
    let m = (n as u128) + 1;
    let squared = m * m;
    let mut h = 0;
    while h < 127 && (1_u128 << (h + 1)) <= squared {
        h += 1;
    }
    h
}
