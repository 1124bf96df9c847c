use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::mock::{max_red_black_height, Mock};
use crate::{Color, RbTree};

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::from_seed([
        0x3B, 0x91, 0x0E, 0xC4, 0x27, 0x68, 0xDA, 0x15, 0x8F, 0x42, 0xB0, 0x7C, 0x5E, 0xE3, 0x09,
        0xA6, 0x1D, 0x74, 0xC8, 0x33, 0x9A, 0x60, 0xF2, 0x4B, 0x87, 0x2E, 0xD5, 0x16, 0x6F, 0xB9,
        0x03, 0xCA,
    ])
}

fn rand_seq<T, I, R>(iter: I, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut res: Vec<_> = iter.into_iter().collect();
    res.shuffle(rng);
    res
}

/// Checks everything we can say about a tree built from `keys`, which must be distinct
fn check_permutation(keys: &[i32]) {
    let mut tree = RbTree::new_empty();
    for &k in keys {
        assert!(tree.insert(k));
        assert_eq!(tree.root_color(), Some(Color::Black));
    }
    tree.validate();

    let mut sorted = keys.to_vec();
    sorted.sort_unstable();
    assert_eq!(tree.to_vec(), sorted);
    assert_eq!(tree.len(), keys.len());

    let bound = max_red_black_height(keys.len());
    assert!(
        tree.height() <= bound,
        "height {} above bound {bound} for {} keys",
        tree.height(),
        keys.len(),
    );

    for k in keys {
        assert!(tree.contains(k));
    }
}

#[test]
fn random_permutations_respect_height_bound() {
    let mut rng = rng();
    for n in [1, 2, 3, 7, 8, 15, 16, 100, 255, 1000, 2048, 4096] {
        let keys = rand_seq(1..=n, &mut rng);
        check_permutation(&keys);

        let tree: RbTree<i32> = keys.iter().copied().collect();
        assert!(!tree.contains(&0));
        assert!(!tree.contains(&(n + 1)));
    }
}

#[test]
fn sorted_inputs_stay_balanced() {
    let ascending: Vec<i32> = (0..4096).collect();
    check_permutation(&ascending);

    let descending: Vec<i32> = (0..4096).rev().collect();
    check_permutation(&descending);
}

#[test]
fn alternating_ends() {
    // 0, 999, 1, 998, ... tends to build triangles on both sides
    let keys: Vec<i32> = (0..500).flat_map(|i| [i, 999 - i]).collect();
    check_permutation(&keys);
}

#[test]
fn valid_after_every_insert() {
    let mut rng = rng();
    let keys = rand_seq(0..300, &mut rng);

    let mut tree = RbTree::new_empty();
    for k in keys {
        tree.insert(k);
        tree.validate();
    }
}

#[test]
fn matches_mock_with_duplicates() {
    let mut rng = rng();

    for _ in 0..20 {
        let mut tree = RbTree::new_empty();
        let mut mock = Mock::new_empty();

        for _ in 0..500 {
            let key: i16 = rng.gen_range(-100..100);
            assert_eq!(tree.insert(key), mock.insert(key));

            let probe: i16 = rng.gen_range(-110..110);
            assert_eq!(tree.contains(&probe), mock.contains(&probe));
        }

        tree.validate();
        assert_eq!(tree.to_vec(), mock.to_vec());
        assert_eq!(tree.len(), mock.len());
        assert!(tree.height() <= mock.max_height());
        assert!(tree.iter().rev().eq(mock.iter().rev()));
    }
}

#[test]
fn reinserting_everything_is_a_noop() {
    let mut rng = rng();
    let keys = rand_seq(0..1000, &mut rng);

    let mut tree: RbTree<i32> = keys.iter().copied().collect();
    let before = tree.clone();
    let height = tree.height();

    for &k in rand_seq(keys, &mut rng).iter() {
        assert!(!tree.insert(k));
    }

    assert_eq!(tree.height(), height);
    assert_eq!(tree, before);
    tree.validate();
}
