use crate::RbTree;

type BasicFuzzTree = RbTree<u8>;

#[test]
fn auto_fuzz_1_empty_queries() {
    let tree_0: BasicFuzzTree = RbTree::new_empty();
    assert!(tree_0.is_empty());
    assert_eq!(tree_0.len(), 0);
    assert_eq!(tree_0.height(), 0);
    assert!(!tree_0.contains(&0));
    assert!(tree_0.to_vec().is_empty());
    {
        let mut iter = tree_0.iter();
        assert!(iter.next_back().is_none());
        assert!(iter.next().is_none());
    }
}

#[test]
fn auto_fuzz_2_duplicate_then_iter_bkwd_fwd_none() {
    let mut tree_0: BasicFuzzTree = RbTree::new_empty();
    assert!(tree_0.insert(0));
    tree_0.validate();
    assert!(!tree_0.insert(0));
    tree_0.validate();
    {
        let mut iter = tree_0.iter();
        assert_eq!(iter.next_back(), Some(&0));
        assert!(iter.next().is_none());
    }
}

#[test]
fn auto_fuzz_3_zigzag_inserts() {
    let mut tree_0: BasicFuzzTree = RbTree::new_empty();
    assert!(tree_0.insert(50));
    tree_0.validate();
    assert!(tree_0.insert(10));
    tree_0.validate();
    assert!(tree_0.insert(40));
    tree_0.validate();
    assert!(tree_0.insert(20));
    tree_0.validate();
    assert!(tree_0.insert(30));
    tree_0.validate();
    assert!(tree_0.insert(25));
    tree_0.validate();
    assert!(!tree_0.insert(40));
    tree_0.validate();
    assert_eq!(tree_0.to_vec(), [10, 20, 25, 30, 40, 50]);
    assert_eq!(tree_0.len(), 6);
    assert!(tree_0.height() <= 5);
    assert!(tree_0.contains(&25));
    assert!(!tree_0.contains(&35));
}

#[test]
fn auto_fuzz_4_descending_run() {
    let mut tree_0: BasicFuzzTree = RbTree::new_empty();
    for key in (240..=255).rev() {
        assert!(tree_0.insert(key));
        tree_0.validate();
    }
    assert_eq!(tree_0.len(), 16);
    assert!(tree_0.height() <= 8);
    assert!(tree_0.contains(&247));
    assert!(!tree_0.contains(&239));
    {
        let mut iter = tree_0.iter();
        assert_eq!(iter.next(), Some(&240));
        assert_eq!(iter.next_back(), Some(&255));
        assert_eq!(iter.next(), Some(&241));
    }
}

#[test]
fn auto_fuzz_5_clone_diverge() {
    let mut tree_0: BasicFuzzTree = RbTree::new_empty();
    assert!(tree_0.insert(3));
    tree_0.validate();
    assert!(tree_0.insert(1));
    tree_0.validate();
    assert!(tree_0.insert(2));
    tree_0.validate();
    let mut tree_1 = tree_0.clone();
    assert!(tree_0.insert(4));
    tree_0.validate();
    assert!(tree_1.insert(4));
    tree_1.validate();
    assert!(tree_1.insert(0));
    tree_1.validate();
    assert!(!tree_0.contains(&0));
    assert_eq!(tree_1.to_vec(), [0, 1, 2, 3, 4]);
    drop(tree_1);
    assert_eq!(tree_0.len(), 4);
    assert!(!tree_0.is_empty());
}
