// src/core/engine.rs
use crate::core::corpus::Corpus;
use crate::core::index::ContainmentIndex;
use crate::core::series::{build_sorted_series, SortedSeries};
use crate::core::types::{CharacterRecord, Literal};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// How the classifier finds the characters containing a given literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Look containers up in a pre-built [`ContainmentIndex`].
    #[default]
    Indexed,
    /// Compare every ordered pair of records.
    Naive,
}

/// Counts describing one classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub characters: usize,
    /// Characters with at least one phonetic match.
    pub phonetic_characters: usize,
    pub component_only_relations: usize,
    pub phonetic_relations: usize,
}

/// The derived state for one character, computed from a read-only corpus and
/// written back afterwards.
#[derive(Debug, Default)]
struct Classification {
    component_only: Vec<Literal>,
    phonetic_matches: usize,
    sorted: Option<SortedSeries>,
}

/// Splits every structural relation of the corpus into component-only and
/// phonetic matches.
pub struct ClassificationEngine {
    strategy: ScanStrategy,
}

impl ClassificationEngine {
    pub fn new(strategy: ScanStrategy) -> Self {
        Self { strategy }
    }

    /// Recomputes the derived fields of every record.
    ///
    /// Previous derived state (including `super_set`) is cleared first, so
    /// running this twice on the same inputs gives identical records.
    /// Complexity: O(n²) with [`ScanStrategy::Naive`], O(n + relations) with
    /// [`ScanStrategy::Indexed`].
    pub fn classify(&self, corpus: &mut Corpus) -> ClassificationSummary {
        corpus.reset_derived();

        let view: &Corpus = corpus;
        let results: Vec<Classification> = match self.strategy {
            ScanStrategy::Naive => {
                let all: Vec<usize> = (0..view.len()).collect();
                (0..view.len())
                    .map(|left| classify_character(view, left, &all))
                    .collect()
            }
            ScanStrategy::Indexed => {
                let index = ContainmentIndex::build(view);
                view.iter()
                    .enumerate()
                    .map(|(left, record)| {
                        classify_character(view, left, index.containers_of(&record.literal))
                    })
                    .collect()
            }
        };

        let mut summary = ClassificationSummary {
            characters: corpus.len(),
            ..ClassificationSummary::default()
        };
        for (record, result) in corpus.records_mut().iter_mut().zip(results) {
            summary.component_only_relations += result.component_only.len();
            summary.phonetic_relations += result.phonetic_matches;
            if result.sorted.is_some() {
                summary.phonetic_characters += 1;
            }
            apply(record, result);
        }

        debug!(
            strategy = ?self.strategy,
            characters = summary.characters,
            phonetic_characters = summary.phonetic_characters,
            component_only_relations = summary.component_only_relations,
            phonetic_relations = summary.phonetic_relations,
            "classification pass finished"
        );
        summary
    }
}

/// Classifies the relations of the record at `left` against the records at
/// `candidates`. Candidates that do not contain the left literal, and the left
/// record itself, are skipped, so `candidates` may be the whole corpus.
fn classify_character(corpus: &Corpus, left: usize, candidates: &[usize]) -> Classification {
    let records = corpus.records();
    let left_record = &records[left];
    let left_readings = left_record.unique_onyomi();

    let mut result = Classification::default();
    // Reading → members, kept in first-encountered order.
    let mut provisional: Vec<(String, Vec<Literal>)> = Vec::new();

    for &right in candidates {
        let right_record = &records[right];
        if right == left {
            continue;
        }
        if !right_record.has_component(&left_record.literal) {
            continue;
        }

        let right_readings: HashSet<&str> = right_record.onyomi.iter().map(String::as_str).collect();
        let shared: Vec<&str> = left_readings
            .iter()
            .copied()
            .filter(|reading| right_readings.contains(reading))
            .collect();

        if shared.is_empty() {
            result.component_only.push(right_record.literal.clone());
            continue;
        }

        result.phonetic_matches += 1;
        for reading in shared {
            if let Some((_, members)) = provisional.iter_mut().find(|(r, _)| r == reading) {
                members.push(right_record.literal.clone());
            } else {
                provisional.push((reading.to_string(), vec![right_record.literal.clone()]));
            }
        }
    }

    if result.phonetic_matches > 0 {
        result.sorted = Some(build_sorted_series(&left_readings, provisional));
    }
    result
}

fn apply(record: &mut CharacterRecord, result: Classification) {
    let component_only = result.component_only.len();
    record.component_only_set = result.component_only;
    if let Some(sorted) = result.sorted {
        record.largest_phonetic_set_size = sorted.largest_size();
        record.phonetic_series = sorted.series;
        record.unmatched_readings = sorted.unmatched;
        record.reliability_rating = reliability_rating(result.phonetic_matches, component_only);
    }
}

/// Share of a character's structural relations that are also phonetic,
/// rounded to three decimals. `None` when there are no phonetic matches.
pub fn reliability_rating(phonetic_matches: usize, component_only: usize) -> Option<f64> {
    if phonetic_matches == 0 {
        return None;
    }
    let ratio = phonetic_matches as f64 / (phonetic_matches + component_only) as f64;
    Some((ratio * 1000.0).round() / 1000.0)
}
