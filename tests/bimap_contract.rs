//! Behavioral contract of the bimap.
//!
//! Covers ordering from both sides, flip, duplicate rejection, the
//! not-found error, default eviction, range erase, copy semantics and
//! custom comparators.

use dual_tree_bimap::tree::{Compare, FnOrder, Natural, Reversed};
use dual_tree_bimap::{Bimap, BimapError, LeftPos, RightPos};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// HELPER TYPES
// ============================================================================

/// Not `Clone`: moves only.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Token {
    value: i32,
}

/// Has no default value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Label(String);

type PointLess = fn(&(i32, i32), &(i32, i32)) -> bool;

fn euclidean() -> FnOrder<PointLess> {
    fn less(a: &(i32, i32), b: &(i32, i32)) -> bool {
        let len = |v: &(i32, i32)| ((v.0 * v.0 + v.1 * v.1) as f64).sqrt();
        len(a) < len(b)
    }
    FnOrder(less as PointLess)
}

fn manhattan() -> FnOrder<PointLess> {
    fn less(a: &(i32, i32), b: &(i32, i32)) -> bool {
        a.0.abs() + a.1.abs() < b.0.abs() + b.1.abs()
    }
    FnOrder(less as PointLess)
}

// ============================================================================
// ORDERING AND FLIP
// ============================================================================

#[test]
fn ordered_iteration_from_left_flips_to_right() {
    init_logging();
    let mut map = Bimap::new();
    map.insert(3, "c");
    map.insert(1, "a");
    map.insert(2, "b");

    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    let mut pos = map.begin_left();
    while pos != map.end_left() {
        lefts.push(*map.left(pos).unwrap());
        rights.push(*map.right(pos.flip()).unwrap());
        pos = map.next_left(pos);
    }

    assert_eq!(lefts, vec![1, 2, 3]);
    assert_eq!(rights, vec!["a", "b", "c"]);
}

#[test]
fn both_sides_are_strictly_increasing() {
    let map: Bimap<i32, i32> = [(5, 50), (1, 90), (9, 10), (3, 30), (7, 70)]
        .into_iter()
        .collect();

    let lefts: Vec<_> = map.iter_left().map(|(l, _)| *l).collect();
    let rights: Vec<_> = map.iter_right().map(|(r, _)| *r).collect();
    assert!(lefts.windows(2).all(|w| w[0] < w[1]));
    assert!(rights.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn decrement_from_end_walks_backwards() {
    let map: Bimap<i32, i32> = (1..=4).map(|i| (i, i * 10)).collect();

    let mut pos = map.end_right();
    let mut rights = Vec::new();
    for _ in 0..4 {
        pos = map.prev_right(pos);
        rights.push(*map.right(pos).unwrap());
    }
    assert_eq!(rights, vec![40, 30, 20, 10]);
}

#[test]
fn flip_pairs_positions_of_every_pair() {
    let map: Bimap<i32, char> = [(1, 'q'), (2, 'w'), (3, 'e'), (4, 'r')]
        .into_iter()
        .collect();

    for (left, right) in map.iter_left() {
        assert_eq!(map.find_left(left).flip(), map.find_right(right));
        assert_eq!(map.find_right(right).flip(), map.find_left(left));
    }
    assert_eq!(map.left_index().len(), map.len());
    assert_eq!(map.right_index().len(), map.len());
}

#[test]
fn flip_is_an_involution_including_ends() {
    let map: Bimap<i32, i32> = (0..10).map(|i| (i, 9 - i)).collect();

    let mut pos = map.begin_left();
    loop {
        assert_eq!(pos.flip().flip(), pos);
        if pos.is_end() {
            break;
        }
        pos = map.next_left(pos);
    }
    assert_eq!(map.end_left().flip(), map.end_right());
    assert_eq!(map.end_right().flip(), map.end_left());
    assert_eq!(LeftPos::end().flip(), RightPos::end());
}

// ============================================================================
// INSERT AND LOOKUP
// ============================================================================

#[test]
fn duplicate_insert_is_rejected_silently() {
    let mut map = Bimap::new();
    assert!(!map.insert(1, 100).is_end());

    assert_eq!(map.insert(1, 200), map.end_left());
    assert_eq!(map.len(), 1);
    assert_eq!(map.at_left(&1), Ok(&100));

    assert_eq!(map.insert(2, 100), map.end_left());
    assert_eq!(map.len(), 1);
    assert!(map.find_left(&2).is_end());
}

#[test]
fn missing_key_is_a_loud_error() {
    let map: Bimap<i32, i32> = [(1, 2)].into_iter().collect();

    assert_eq!(map.at_left(&3), Err(BimapError::NotFound { side: "left" }));
    assert_eq!(map.at_right(&3), Err(BimapError::NotFound { side: "right" }));
    assert_eq!(
        map.at_left(&3).unwrap_err().to_string(),
        "no such value in bimap (left side)"
    );
}

#[test]
fn find_misses_return_end() {
    let map: Bimap<i32, i32> = [(1, 2)].into_iter().collect();

    assert_eq!(map.find_left(&2), map.end_left());
    assert_eq!(map.find_right(&1), map.end_right());
    assert_eq!(map.left(map.end_left()), None);
}

#[test]
fn bounds_follow_half_open_semantics() {
    let map: Bimap<i32, i32> = [(10, 1), (20, 2), (30, 3), (40, 4)].into_iter().collect();

    let from = map.lower_bound_left(&15);
    let to = map.upper_bound_left(&30);
    let mut pos = from;
    let mut inside = Vec::new();
    while pos != to {
        inside.push(*map.left(pos).unwrap());
        pos = map.next_left(pos);
    }
    assert_eq!(inside, vec![20, 30]);

    assert_eq!(map.lower_bound_right(&5), map.end_right());
    assert_eq!(map.right(map.upper_bound_right(&0)), Some(&1));
}

#[test]
fn move_only_keys_work() {
    let mut map = Bimap::new();
    map.insert(Token { value: 2 }, Token { value: 20 });
    map.insert(Token { value: 1 }, Token { value: 10 });

    assert_eq!(map.at_left(&Token { value: 1 }), Ok(&Token { value: 10 }));
    assert_eq!(
        map.remove_right(&Token { value: 20 }),
        Some((Token { value: 2 }, Token { value: 20 }))
    );
    assert_eq!(map.len(), 1);
}

#[test]
fn keys_without_default_work_outside_or_default() {
    let mut map = Bimap::new();
    map.insert(Label("a".into()), 1);
    map.insert(Label("b".into()), 2);

    assert_eq!(map.at_right(&2), Ok(&Label("b".into())));
    // left has no default, so only the right-keyed upsert is unavailable
    assert_eq!(*map.at_left_or_default(Label("c".into())), 0);
}

// ============================================================================
// DEFAULT EVICTION
// ============================================================================

#[test]
fn at_left_or_default_evicts_stale_default() {
    init_logging();
    let mut map = Bimap::new();
    map.insert(5, 0);
    map.insert(3, 7);

    assert_eq!(*map.at_left_or_default(3), 7);
    assert_eq!(map.len(), 2);

    assert_eq!(*map.at_left_or_default(9), 0);
    assert_eq!(map.find_left(&5), map.end_left());
    assert_eq!(map.at_left(&9), Ok(&0));
    assert_eq!(map.len(), 2);
}

#[test]
fn at_right_or_default_evicts_stale_default() {
    let mut map = Bimap::new();
    map.insert(String::new(), 4);
    map.insert("x".to_string(), 5);

    assert_eq!(map.at_right_or_default(5), "x");
    assert_eq!(map.at_right_or_default(6), "");
    assert!(map.find_right(&4).is_end());
    assert_eq!(map.at_left(&String::new()), Ok(&6));
}

#[test]
fn repeated_default_upserts_keep_one_default() {
    let mut map: Bimap<i32, i32> = Bimap::new();
    for key in 0..5 {
        assert_eq!(*map.at_left_or_default(key), 0);
        assert_eq!(map.len(), 1);
    }
    assert_eq!(map.at_right(&0), Ok(&4));
}

// ============================================================================
// ERASE
// ============================================================================

#[test]
fn range_erase_empties_fully() {
    let mut map: Bimap<i32, i32> = (0..50).map(|i| ((i * 13) % 50, i)).collect();

    let end = map.end_left();
    let last = map.erase_left_range(map.begin_left(), end);

    assert_eq!(last, map.end_left());
    assert_eq!(map.len(), 0);
    assert_eq!(map.begin_left(), map.end_left());
    assert_eq!(map.begin_right(), map.end_right());
}

#[test]
fn erase_keeps_other_positions_valid() {
    let mut map: Bimap<i32, i32> = [50, 30, 70, 20, 40, 60, 80]
        .into_iter()
        .map(|k| (k, k / 10))
        .collect();
    let held: Vec<_> = [20, 40, 60, 80]
        .iter()
        .map(|k| (*k, map.find_left(k)))
        .collect();
    let end = map.end_left();

    // the root has two children on both sides
    map.erase_left_key(&50);
    map.erase_right(map.find_right(&3));

    for (key, pos) in held {
        assert_eq!(map.left(pos), Some(&key));
        assert_eq!(map.right(pos.flip()), Some(&(key / 10)));
    }
    assert_eq!(end, map.end_left());
}

#[test]
fn erase_by_position_returns_successor() {
    let mut map: Bimap<i32, i32> = (1..=5).map(|i| (i, -i)).collect();

    let mut pos = map.find_left(&2);
    pos = map.erase_left(pos);
    assert_eq!(map.left(pos), Some(&3));

    let pos = map.erase_right(map.find_right(&-1));
    assert_eq!(pos, map.end_right());
    assert_eq!(map.len(), 3);
}

#[test]
fn remove_reports_the_removed_pair() {
    let mut map: Bimap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();

    assert_eq!(map.remove_left(&"a"), Some(("a", 1)));
    assert_eq!(map.remove_left(&"a"), None);
    assert!(map.erase_right_key(&2));
    assert!(map.is_empty());
}

// ============================================================================
// COPY, EQUALITY, SWAP
// ============================================================================

#[test]
fn copy_is_equal_and_independent() {
    let map: Bimap<i32, String> = (0..30)
        .map(|i| ((i * 11) % 30, format!("s{i}")))
        .collect();
    let mut copy = map.clone();

    assert_eq!(copy, map);
    copy.erase_left(copy.begin_left());
    assert_eq!(map.len(), 30);
    assert_eq!(copy.len(), 29);
    assert!(copy != map);
}

#[test]
fn equality_ignores_insertion_order() {
    let a: Bimap<i32, i32> = [(1, 1), (2, 2), (3, 3)].into_iter().collect();
    let b: Bimap<i32, i32> = [(3, 3), (1, 1), (2, 2)].into_iter().collect();
    let c: Bimap<i32, i32> = [(1, 1), (2, 3), (3, 2)].into_iter().collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn swap_exchanges_contents_and_order() {
    let mut a = Bimap::with_comparators(Reversed(Natural), Natural);
    let mut b = Bimap::with_comparators(Reversed(Natural), Natural);
    a.insert(1, 'a');
    a.insert(2, 'b');
    b.insert(9, 'z');

    a.swap(&mut b);
    assert_eq!(a.len(), 1);
    assert_eq!(b.left(b.begin_left()), Some(&2));
    assert_eq!(a.at_left(&9), Ok(&'z'));
}

// ============================================================================
// CUSTOM COMPARATORS
// ============================================================================

#[test]
fn comparator_equivalence_drives_uniqueness() {
    let mut map = Bimap::with_comparators(euclidean(), manhattan());

    assert!(!map.insert((3, 4), (0, 1)).is_end());
    // same Euclidean length as (3, 4)
    assert!(map.insert((4, 3), (0, 2)).is_end());
    // same Manhattan length as (0, 1)
    assert!(map.insert((0, 1), (1, 0)).is_end());
    assert!(!map.insert((0, 1), (1, 1)).is_end());

    assert_eq!(map.at_left(&(0, -5)), Ok(&(0, 1)));
    assert_eq!(map.at_right(&(2, 0)), Ok(&(0, 1)));
    assert!(map.left_index().comparator().equivalent(&(5, 0), &(3, 4)));
}

#[test]
fn reversed_comparator_reverses_iteration() {
    let map: Bimap<i32, i32, Reversed<Natural>, Natural> =
        (1..=3).map(|i| (i, i)).collect();

    let lefts: Vec<_> = map.iter_left().map(|(l, _)| *l).collect();
    let rights: Vec<_> = map.iter_right().map(|(r, _)| *r).collect();
    assert_eq!(lefts, vec![3, 2, 1]);
    assert_eq!(rights, vec![1, 2, 3]);
}

#[test]
fn copy_keeps_comparators() {
    let mut map = Bimap::with_comparators(manhattan(), euclidean());
    map.insert((1, 0), (5, 5));
    map.insert((2, 0), (1, 1));

    let copy = map.clone();
    assert_eq!(copy, map);
    assert_eq!(copy.at_left(&(0, -2)), Ok(&(1, 1)));
}
