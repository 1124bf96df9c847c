#![no_main]

use hyperion::RbTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|tree: RbTree<i16>| {
    tree.validate();

    let keys = tree.to_vec();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(keys.len(), tree.len());
    assert!(tree.height() <= hyperion::mock::max_red_black_height(tree.len()));
    for k in &keys {
        assert!(tree.contains(k));
    }
});
