#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used)]
#![deny(clippy::mod_module_files)]

mod algebra;
mod err;
mod multimap;
mod multiset;
mod primitive;
mod seq;

pub use algebra::{
    difference, difference_by_key, intersection, intersection_by_key, symmetric_difference,
    symmetric_difference_by_key,
};
pub use err::Error;
pub use multimap::{Bucket, ListMultimap, Multimap, SetMultimap, SortedSetMultimap};
pub use multiset::Multiset;
pub use primitive::{
    BooleanList, ByteList, CharList, DoubleList, FloatList, IntList, LongList, Numeric, Primitive,
    PrimitiveList, ShortList,
};
pub use seq::Seq;
