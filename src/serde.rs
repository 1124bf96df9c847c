//! `serde` support for [`RbTree`]s

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::RbTree;

impl<K: Serialize> Serialize for RbTree<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K> Deserialize<'de> for RbTree<K>
where
    K: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RbTreeVisitor { marker: PhantomData })
    }
}

struct RbTreeVisitor<K> {
    marker: PhantomData<RbTree<K>>,
}

impl<'de, K> Visitor<'de> for RbTreeVisitor<K>
where
    K: Deserialize<'de> + Ord,
{
    type Value = RbTree<K>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of keys")
    }

    // Keys don't have to arrive sorted or unique; duplicates collapse just like with `insert`
    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut this = RbTree::new_empty();
        while let Some(key) = seq.next_element()? {
            this.insert(key);
        }

        Ok(this)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, RbTree};

    #[test]
    fn serializes_in_ascending_order() {
        let tree: RbTree<i32> = [30, 10, 20].into_iter().collect();
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[10,20,30]");
    }

    #[test]
    fn empty_tree_is_empty_seq() {
        let tree: RbTree<i32> = RbTree::new_empty();
        assert_eq!(serde_json::to_string(&tree).unwrap(), "[]");

        let back: RbTree<i32> = serde_json::from_str("[]").unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn deserialize_collapses_duplicates_and_rebalances() {
        let tree: RbTree<i32> = serde_json::from_str("[5, 3, 5, 8, 1, 1]").unwrap();
        tree.validate();
        assert_eq!(tree.to_vec(), [1, 3, 5, 8]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root_color(), Some(Color::Black));
    }

    #[test]
    fn deserialize_rejects_non_sequence() {
        assert!(serde_json::from_str::<RbTree<i32>>("{\"a\": 1}").is_err());
    }
}
