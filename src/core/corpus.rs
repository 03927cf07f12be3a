// --- File: src/core/corpus.rs
use crate::core::types::CharacterRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The insertion-ordered set of character records.
///
/// Records live in a flat store; a literal → position map gives O(1) lookup.
/// Insertion order is the iteration order of every pass over the corpus, which
/// is what makes derived orderings reproducible between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    records: Vec<CharacterRecord>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a literal in insertion order.
    pub fn position(&self, literal: &str) -> Option<usize> {
        self.positions.get(literal).copied()
    }

    pub fn contains(&self, literal: &str) -> bool {
        self.positions.contains_key(literal)
    }

    pub fn get(&self, literal: &str) -> Option<&CharacterRecord> {
        self.position(literal).map(|idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, literal: &str) -> Option<&mut CharacterRecord> {
        match self.position(literal) {
            Some(idx) => Some(&mut self.records[idx]),
            None => None,
        }
    }

    /// Inserts a record, or replaces the existing one with the same literal
    /// while keeping its original position. Returns the record's position.
    pub fn insert(&mut self, record: CharacterRecord) -> usize {
        if let Some(idx) = self.position(&record.literal) {
            self.records[idx] = record;
            idx
        } else {
            let idx = self.records.len();
            self.positions.insert(record.literal.clone(), idx);
            self.records.push(record);
            idx
        }
    }

    /// Replaces the readings of a known literal. Unknown literals are ignored
    /// and reported with `false`.
    pub fn set_onyomi(&mut self, literal: &str, onyomi: Vec<String>) -> bool {
        match self.get_mut(literal) {
            Some(record) => {
                record.onyomi = onyomi;
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [CharacterRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.records.iter()
    }

    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.literal.as_str())
    }

    pub fn reset_derived(&mut self) {
        for record in &mut self.records {
            record.reset_derived();
        }
    }
}

impl FromIterator<CharacterRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = CharacterRecord>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for record in iter {
            corpus.insert(record);
        }
        corpus
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position_on_replace() {
        let mut corpus = Corpus::new();
        corpus.insert(CharacterRecord::new("日", Vec::new()));
        corpus.insert(CharacterRecord::new("月", Vec::new()));
        let idx = corpus.insert(CharacterRecord::new("日", vec!["口".into()]));

        assert_eq!(idx, 0);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.literals().collect::<Vec<_>>(), vec!["日", "月"]);
        assert!(corpus.get("日").unwrap().has_component("口"));
    }

    #[test]
    fn set_onyomi_ignores_unknown_literals() {
        let mut corpus: Corpus = vec![CharacterRecord::new("日", Vec::new())].into_iter().collect();
        assert!(corpus.set_onyomi("日", vec!["ニチ".into()]));
        assert!(!corpus.set_onyomi("月", vec!["ゲツ".into()]));
        assert_eq!(corpus.get("日").unwrap().onyomi, vec!["ニチ".to_string()]);
        assert!(!corpus.contains("月"));
    }
}
