// src/core/series.rs
use crate::core::types::{Literal, PhoneticSeries};

/// The ranked phonetic relations of one character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedSeries {
    /// Non-empty groups, largest first; ties keep discovery order.
    pub series: Vec<PhoneticSeries>,
    /// Readings of the character with no matching group, in loaded order.
    pub unmatched: Vec<String>,
}

impl SortedSeries {
    pub fn largest_size(&self) -> usize {
        self.series.first().map(PhoneticSeries::len).unwrap_or(0)
    }
}

/// Ranks the provisional `reading → members` groups discovered during a scan.
///
/// `provisional` must be in first-encountered order; the sort is stable, so
/// equally sized groups keep that order. Every reading in `readings` without a
/// group is appended to `unmatched`.
pub fn build_sorted_series(
    readings: &[&str],
    provisional: Vec<(String, Vec<Literal>)>,
) -> SortedSeries {
    let mut series: Vec<PhoneticSeries> = provisional
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(reading, members)| PhoneticSeries::new(reading, members))
        .collect();
    series.sort_by_key(|s| std::cmp::Reverse(s.len()));

    let mut unmatched: Vec<String> = Vec::new();
    for &reading in readings {
        let matched = series.iter().any(|s| s.reading == reading);
        if !matched && !unmatched.iter().any(|r| r == reading) {
            unmatched.push(reading.to_string());
        }
    }

    SortedSeries { series, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(reading: &str, members: &[&str]) -> (String, Vec<Literal>) {
        (reading.to_string(), members.iter().map(|m| m.to_string()).collect())
    }

    #[test]
    fn sorts_descending_by_group_size() {
        let sorted = build_sorted_series(
            &["A", "B"],
            vec![group("A", &["x"]), group("B", &["y", "z"])],
        );
        let readings: Vec<&str> = sorted.series.iter().map(|s| s.reading.as_str()).collect();
        assert_eq!(readings, vec!["B", "A"]);
        assert_eq!(sorted.largest_size(), 2);
        assert!(sorted.unmatched.is_empty());
    }

    #[test]
    fn ties_keep_discovery_order() {
        let sorted = build_sorted_series(
            &["A", "B", "C"],
            vec![group("C", &["x"]), group("A", &["y"]), group("B", &["z", "w"])],
        );
        let readings: Vec<&str> = sorted.series.iter().map(|s| s.reading.as_str()).collect();
        assert_eq!(readings, vec!["B", "C", "A"]);
    }

    #[test]
    fn unmatched_readings_follow_loaded_order() {
        let sorted = build_sorted_series(&["C", "A", "B", "A"], vec![group("A", &["x"])]);
        assert_eq!(sorted.unmatched, vec!["C".to_string(), "B".to_string()]);
    }

    #[test]
    fn empty_input_has_no_largest_group() {
        let sorted = build_sorted_series(&["A"], Vec::new());
        assert_eq!(sorted.largest_size(), 0);
        assert_eq!(sorted.unmatched, vec!["A".to_string()]);
    }
}
