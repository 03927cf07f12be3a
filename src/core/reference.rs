// src/core/reference.rs
use crate::core::corpus::Corpus;
use crate::core::subset::is_strict_subset;
use crate::core::types::{CharacterRecord, Literal};
use tracing::debug;

/// Fills `super_set` for every record of an already classified corpus.
///
/// `B` generalizes `A` when `A`'s component-only set is a strict subset of
/// `B`'s, and for every phonetic series of `A` the group extended by `A`
/// itself is a strict subset of `B`'s group for the same reading. A reading
/// `B` has no group for cannot be generalized. Returns the number of
/// relations recorded.
pub fn build_references(corpus: &mut Corpus) -> usize {
    let view: &Corpus = corpus;
    let supersets: Vec<Vec<Literal>> = view
        .iter()
        .map(|left| {
            view.iter()
                .filter(|right| generalizes(right, left))
                .map(|right| right.literal.clone())
                .collect()
        })
        .collect();

    let mut relations = 0;
    for (record, super_set) in corpus.records_mut().iter_mut().zip(supersets) {
        relations += super_set.len();
        record.super_set = super_set;
    }
    debug!(relations, "reference pass finished");
    relations
}

/// Whether `right`'s relation profile strictly contains `left`'s.
pub fn generalizes(right: &CharacterRecord, left: &CharacterRecord) -> bool {
    if right.literal == left.literal {
        return false;
    }
    if !is_strict_subset(&left.component_only_set, &right.component_only_set) {
        return false;
    }
    left.phonetic_series.iter().all(|series| {
        let Some(target) = right.phonetic_series.iter().find(|s| s.reading == series.reading) else {
            return false;
        };
        let mut extended: Vec<&str> = series.members.iter().map(String::as_str).collect();
        extended.push(&left.literal);
        let target: Vec<&str> = target.members.iter().map(String::as_str).collect();
        is_strict_subset(&extended, &target)
    })
}
