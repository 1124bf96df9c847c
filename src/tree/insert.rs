//! Internal-only implementation of [`RbTree::insert`] and the rotations / color flips it relies on
//!
//! The general shape of the algorithm is a plain recursive BST insertion that *takes* ownership of
//! each subtree on the way down and hands back a (possibly different) subtree root on the way up.
//! The caller relinks whatever it gets back. Between those two steps, each ancestor of the new
//! leaf gets a chance to repair any red-red conflict sitting below it, which is all done here with
//! local rotations and color flips -- there's no parent pointer anywhere.
//!
//! The repairs applied at a node `h`, in order, are:
//!
//! 1. **Red uncle**: both of `h`'s children are red, and one of them has a red child. All three
//!    colors are flipped, pushing the conflict up towards `h`'s parent.
//! 2. **Triangle**: exactly one child is red and the red grandchild beneath it points back
//!    towards the middle. Rotating the child turns the triangle into a line.
//! 3. **Line**: a red child with a red grandchild on the same side. Rotating `h` itself lifts the
//!    child into `h`'s place, which is then colored black (and `h`, now beneath it, red).
//!
//! [`RbTree::insert`]: crate::RbTree::insert

use super::node::{is_red, Link, Node};
use super::{Color, Side};
use std::cmp::Ordering;

/// Recursively inserts `key` into the subtree at `link`, returning the new root of that subtree
/// and whether anything was actually added
///
/// Duplicate keys are left alone, in which case the subtree is handed back untouched (the tree was
/// valid going in, so there's nothing to repair on the way out).
pub(super) fn insert_into<K: Ord>(link: Link<K>, key: K) -> (Box<Node<K>>, bool) {
    let mut node = match link {
        Some(n) => n,
        None => {
            debug_println!("insert: placing new red leaf");
            return (Node::new_red(key), true);
        }
    };

    match key.cmp(node.key()) {
        Ordering::Less => {
            let (child, added) = insert_into(node.take_left(), key);
            node.set_left(Some(child));
            if !added {
                return (node, false);
            }
        }
        Ordering::Greater => {
            let (child, added) = insert_into(node.take_right(), key);
            node.set_right(Some(child));
            if !added {
                return (node, false);
            }
        }
        Ordering::Equal => return (node, false),
    }

    (fix_up(node), true)
}

/// Applies the local repairs described in the module docs to `node`, returning the new root of
/// the subtree
fn fix_up<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let left_red = is_red(node.left());
    let right_red = is_red(node.right());

    // Red uncle. Once this flips, both children are black and none of the conditions below can
    // apply at this level.
    if left_red
        && right_red
        && (red_grandchild(&node, Side::Left, Side::Left)
            || red_grandchild(&node, Side::Left, Side::Right)
            || red_grandchild(&node, Side::Right, Side::Left)
            || red_grandchild(&node, Side::Right, Side::Right))
    {
        debug_println!("insert: red uncle, flipping colors");
        flip_colors(&mut node);
    }

    // Right triangle: (h) -> red right -> red left
    if is_red(node.right()) && !is_red(node.left()) && red_grandchild(&node, Side::Right, Side::Left)
    {
        debug_println!("insert: right triangle, rotating right child");
        if let Some(right) = node.take_right() {
            node.set_right(Some(rotate_right(right)));
        }
    }

    // Left triangle: (h) -> red left -> red right
    if is_red(node.left()) && !is_red(node.right()) && red_grandchild(&node, Side::Left, Side::Right)
    {
        debug_println!("insert: left triangle, rotating left child");
        if let Some(left) = node.take_left() {
            node.set_left(Some(rotate_left(left)));
        }
    }

    // Left line
    if is_red(node.left()) && red_grandchild(&node, Side::Left, Side::Left) {
        debug_println!("insert: left line, rotating right");
        node = rotate_right(node);
        node.set_color(Color::Black);
        if let Some(right) = node.right_mut() {
            right.set_color(Color::Red);
        }
    }

    // Right line
    if is_red(node.right()) && red_grandchild(&node, Side::Right, Side::Right) {
        debug_println!("insert: right line, rotating left");
        node = rotate_left(node);
        node.set_color(Color::Black);
        if let Some(left) = node.left_mut() {
            left.set_color(Color::Red);
        }
    }

    node
}

/// Returns true if the grandchild of `node` reached by going `first`, then `second`, is red
fn red_grandchild<K>(node: &Node<K>, first: Side, second: Side) -> bool {
    is_red(node.child(first).and_then(|c| c.child(second)))
}

/// Rotates the subtree rooted at `h` to the right, returning the new root (`h`'s old left child)
///
/// ```text
///        h               x
///       / \             / \
///      x   c    -->    a   h
///     / \                 / \
///    a   b               b   c
/// ```
///
/// Colors are left untouched; the caller is responsible for any recoloring.
fn rotate_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let mut x = match h.take_left() {
        Some(x) => x,
        None => unreachable!("internal error: rotate_right on a node without a left child"),
    };
    h.set_left(x.take_right());
    x.set_right(Some(h));
    x
}

/// Mirror image of [`rotate_right`]: the new root is `h`'s old right child
fn rotate_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    let mut x = match h.take_right() {
        Some(x) => x,
        None => unreachable!("internal error: rotate_left on a node without a right child"),
    };
    h.set_right(x.take_left());
    x.set_left(Some(h));
    x
}

/// Inverts the color of `h` and both of its children
///
/// Both children must be present. A missing child here means the conditions that led to the flip
/// are broken, so it's treated as a fatal internal error rather than something to recover from.
fn flip_colors<K>(h: &mut Node<K>) {
    if h.left().is_none() || h.right().is_none() {
        unreachable!("internal error: color flip on a node with a missing child");
    }

    h.set_color(h.color().invert());
    if let Some(left) = h.left_mut() {
        left.set_color(left.color().invert());
    }
    if let Some(right) = h.right_mut() {
        right.set_color(right.color().invert());
    }
}
