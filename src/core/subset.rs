// src/core/subset.rs

/// Strict-subset test over ordered sequences: `subset` is contained in
/// `superset` iff `superset` has strictly more elements and every element of
/// `subset` occurs somewhere in `superset`.
///
/// Lengths are compared as sequence lengths, so duplicates count. This is not
/// a general set relation: two equal-length sequences never relate, even when
/// one holds a repeated element the other lacks.
pub fn is_strict_subset<T: PartialEq>(subset: &[T], superset: &[T]) -> bool {
    if superset.len() <= subset.len() {
        return false;
    }
    subset.iter().all(|item| superset.contains(item))
}
