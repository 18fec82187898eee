//! Primitive lists and multimaps used together

use seqkit::{
    BooleanList, ByteList, Error, FloatList, IntList, ListMultimap, LongList, ShortList,
    SortedSetMultimap,
};

#[test]
fn every_alias_supports_set_algebra() {
    let bools = BooleanList::from(vec![true, true, false]);
    assert_eq!(bools.difference(&[true]).as_slice(), [true, false]);

    let bytes = ByteList::from(vec![-1, 0, 1]);
    assert_eq!(bytes.symmetric_difference(&[0, 2]).as_slice(), [-1, 1, 2]);

    let shorts = ShortList::from(vec![7, 7, 7]);
    assert_eq!(shorts.intersection(&[7, 7]).len(), 2);

    let longs = LongList::from(vec![i64::MIN, i64::MAX]);
    assert_eq!(longs.min(), Some(i64::MIN));
    assert_eq!(longs.max(), Some(i64::MAX));

    let floats = FloatList::from(vec![0.0, -0.0, f32::NAN]);
    assert_eq!(floats.intersection(&[-0.0]).len(), 1);
    assert_eq!(floats.difference(&[f32::NAN]).len(), 2);
}

#[test]
fn errors_report_position() {
    let mut list = IntList::from(vec![1, 2]);
    let err = list.set(5, 0).unwrap_err();
    assert_eq!(err, Error::IndexOutOfBounds { index: 5, len: 2 });
    assert_eq!(err.to_string(), "index 5 out of bounds for length 2");

    let err = list.copy_of_range(1..4).unwrap_err();
    assert_eq!(err.to_string(), "invalid range 1..4 for length 2");
}

#[test]
fn group_scores_by_player() {
    let scores = [("ann", 3), ("bob", 5), ("ann", 3), ("ann", 9)];

    let all: ListMultimap<&str, i32> = scores.iter().copied().collect();
    assert_eq!(all.len(), 4);
    let ann = IntList::from(all.get("ann").cloned().unwrap_or_default());
    assert_eq!(ann.sum(), 15);
    assert_eq!(ann.distinct().as_slice(), [3, 9]);

    let unique: SortedSetMultimap<&str, i32> = scores.iter().copied().collect();
    assert_eq!(unique.len(), 3);
    assert_eq!(unique.key_count(), 2);
    let ann: Vec<i32> = unique.get("ann").into_iter().flatten().copied().collect();
    assert_eq!(ann, [3, 9]);
}
