//! Property-based tests for the classification invariants.
//!
//! Random corpora draw literals, components, and readings from small
//! alphabets so that structural and phonetic overlaps are frequent:
//!
//! 1. **Partition**: every containing character is either a component-only
//!    match or a phonetic match, never both, never neither
//! 2. **Ordering**: phonetic groups never grow along the series; their total
//!    equals the match count exactly when each match shares one reading
//! 3. **Rating**: matches the ratio formula and stays in [0, 1]
//! 4. **Equivalence**: indexed and naive scans produce identical records
//! 5. **Strict subset**: length plus containment, nothing more

use kpcs_core::core::subset::is_strict_subset;
use kpcs_core::{CharacterRecord, ClassificationEngine, Corpus, ScanStrategy};
use proptest::prelude::*;

const LITERALS: &[&str] = &["日", "月", "木", "寸", "口", "青", "工", "生", "白", "水"];
const READINGS: &[&str] = &["ニチ", "ゲツ", "モク", "スン", "コウ", "セイ", "ハク", "スイ"];

fn arb_record(literal: &'static str) -> impl Strategy<Value = CharacterRecord> {
    (
        prop::sample::subsequence(LITERALS.to_vec(), 0..4),
        prop::sample::subsequence(READINGS.to_vec(), 0..3),
    )
        .prop_map(move |(components, onyomi)| {
            CharacterRecord::new(literal, components.into_iter().map(String::from))
                .with_onyomi(onyomi.into_iter().map(String::from))
        })
}

fn arb_corpus() -> impl Strategy<Value = Corpus> {
    prop::sample::subsequence(LITERALS.to_vec(), 1..=LITERALS.len())
        .prop_flat_map(|literals| literals.into_iter().map(arb_record).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|records| records.into_iter().collect())
}

fn classified(mut corpus: Corpus, strategy: ScanStrategy) -> Corpus {
    ClassificationEngine::new(strategy).classify(&mut corpus);
    corpus
}

fn shares_reading(a: &CharacterRecord, b: &CharacterRecord) -> bool {
    a.onyomi.iter().any(|r| b.onyomi.contains(r))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn containing_characters_are_partitioned(corpus in arb_corpus()) {
        let corpus = classified(corpus, ScanStrategy::Indexed);
        for a in corpus.iter() {
            let phonetic = a.phonetic_matches();
            for b in corpus.iter() {
                let in_component_only = a.component_only_set.contains(&b.literal);
                let in_phonetic = phonetic.contains(&b.literal.as_str());
                if b.literal == a.literal || !b.has_component(&a.literal) {
                    prop_assert!(!in_component_only && !in_phonetic);
                    continue;
                }
                prop_assert!(in_component_only != in_phonetic, "{} / {}", a.literal, b.literal);
                prop_assert_eq!(in_phonetic, shares_reading(a, b));
            }
        }
    }

    #[test]
    fn group_sizes_never_increase(corpus in arb_corpus()) {
        let corpus = classified(corpus, ScanStrategy::Indexed);
        for record in corpus.iter() {
            let sizes: Vec<usize> = record.phonetic_series.iter().map(|s| s.len()).collect();
            prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "{:?}", sizes);
            prop_assert!(sizes.iter().all(|&s| s > 0));
            prop_assert_eq!(record.largest_phonetic_set_size, sizes.first().copied().unwrap_or(0));
        }
    }

    #[test]
    fn group_total_bounded_by_containing_characters(corpus in arb_corpus()) {
        let corpus = classified(corpus, ScanStrategy::Indexed);
        for a in corpus.iter() {
            let containing = corpus
                .iter()
                .filter(|b| b.literal != a.literal && b.has_component(&a.literal))
                .count();
            let total: usize = a.phonetic_series.iter().map(|s| s.len()).sum();
            prop_assert!(total <= containing);
        }
    }

    #[test]
    fn group_total_counts_single_reading_matches_once(corpus in arb_corpus()) {
        let corpus = classified(corpus, ScanStrategy::Indexed);
        for a in corpus.iter() {
            let readings = a.unique_onyomi();
            let matches = a.phonetic_matches();
            let single_shared = matches.iter().all(|literal| {
                let b = corpus.get(literal).unwrap();
                readings.iter().filter(|r| b.onyomi.iter().any(|o| o == *r)).count() == 1
            });
            let total: usize = a.phonetic_series.iter().map(|s| s.len()).sum();
            if single_shared {
                prop_assert_eq!(total, matches.len());
            } else {
                prop_assert!(total > matches.len());
            }
        }
    }

    #[test]
    fn rating_matches_formula(corpus in arb_corpus()) {
        let corpus = classified(corpus, ScanStrategy::Indexed);
        for record in corpus.iter() {
            let matches = record.phonetic_matches().len();
            match record.reliability_rating {
                None => prop_assert_eq!(matches, 0),
                Some(rating) => {
                    prop_assert!((0.0..=1.0).contains(&rating));
                    let expected = matches as f64 / (matches + record.component_only_set.len()) as f64;
                    prop_assert!((rating - expected).abs() <= 0.0005 + f64::EPSILON);
                }
            }
        }
    }

    #[test]
    fn sorted_readings_are_a_permutation_of_unique_readings(corpus in arb_corpus()) {
        let corpus = classified(corpus, ScanStrategy::Indexed);
        for record in corpus.iter() {
            let mut sorted = record.sorted_onyomi();
            let mut unique = record.unique_onyomi();
            sorted.sort_unstable();
            unique.sort_unstable();
            prop_assert_eq!(sorted, unique);
        }
    }

    #[test]
    fn indexed_scan_matches_naive_scan(corpus in arb_corpus()) {
        let naive = classified(corpus.clone(), ScanStrategy::Naive);
        let indexed = classified(corpus, ScanStrategy::Indexed);
        prop_assert_eq!(naive.records(), indexed.records());
    }

    #[test]
    fn strict_subset_is_length_plus_containment(
        a in prop::collection::vec(0u8..5, 0..6),
        b in prop::collection::vec(0u8..5, 0..6),
    ) {
        let expected = b.len() > a.len() && a.iter().all(|x| b.contains(x));
        prop_assert_eq!(is_strict_subset(&a, &b), expected);
        prop_assert!(!is_strict_subset(&a, &a));
    }
}
