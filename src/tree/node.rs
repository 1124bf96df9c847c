//! Wrapper module for [`Node`] and [`Color`], the building blocks of [`RbTree`]
//!
//! Nodes here are deliberately dumb: they hold a key, a color, and exclusive ownership of up to two
//! children. Nothing in this module checks any of the red-black invariants -- that's entirely the
//! job of the insertion routine in `super::insert`.
//!
//! [`RbTree`]: crate::RbTree

/// The balancing tag carried by every node in an [`RbTree`](crate::RbTree)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the opposite color
    ///
    /// ```
    /// use hyperion::Color;
    ///
    /// assert_eq!(Color::Red.invert(), Color::Black);
    /// assert_eq!(Color::Black.invert(), Color::Red);
    /// ```
    pub const fn invert(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Returns true if the color is [`Red`](Self::Red)
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }
}

/// Owned link from a node to one of its children
pub(super) type Link<K> = Option<Box<Node<K>>>;

/// (*Internal*) A single vertex in the tree
///
/// There's no parent pointer. Every restructuring happens while the recursive insertion unwinds,
/// so the caller always holds the owning link to whichever node it's looking at.
#[derive(Clone)]
pub(super) struct Node<K> {
    key: K,
    color: Color,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    /// Creates a fresh leaf, which always starts out red
    pub fn new_red(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node<K>> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node<K>> {
        self.right.as_deref_mut()
    }

    /// Removes and returns the left child, leaving an empty slot
    pub fn take_left(&mut self) -> Link<K> {
        self.left.take()
    }

    /// Removes and returns the right child, leaving an empty slot
    pub fn take_right(&mut self) -> Link<K> {
        self.right.take()
    }

    pub fn set_left(&mut self, child: Link<K>) {
        self.left = child;
    }

    pub fn set_right(&mut self, child: Link<K>) {
        self.right = child;
    }

    /// Produces the child on the given side
    pub fn child(&self, side: super::Side) -> Option<&Node<K>> {
        match side {
            super::Side::Left => self.left(),
            super::Side::Right => self.right(),
        }
    }
}

/// Returns true iff `node` is present and red. Empty positions count as black.
pub(super) fn is_red<K>(node: Option<&Node<K>>) -> bool {
    node.map(|n| n.color().is_red()).unwrap_or(false)
}
