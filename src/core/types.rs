// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A single character literal, the key of every corpus record.
pub type Literal = String;

/// One reading of a character together with every other character that
/// contains it as a component and shares that reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticSeries {
    pub reading: String,
    pub members: Vec<Literal>,
}

impl PhoneticSeries {
    pub fn new(reading: impl Into<String>, members: Vec<Literal>) -> Self {
        Self { reading: reading.into(), members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Everything known about one character: the loaded inputs (`components`,
/// `onyomi`) and the relation sets derived from them by classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub literal: Literal,
    /// Structural sub-elements, de-duplicated, first-seen order.
    pub components: Vec<Literal>,
    /// Readings as loaded. Classification never reorders this list; see
    /// [`CharacterRecord::sorted_onyomi`] for the ranked order.
    pub onyomi: Vec<String>,

    /// Characters containing this one that share no reading with it.
    pub component_only_set: Vec<Literal>,
    /// Matched readings, largest group first.
    pub phonetic_series: Vec<PhoneticSeries>,
    /// Readings no containing character shares, in loaded order.
    pub unmatched_readings: Vec<String>,
    pub largest_phonetic_set_size: usize,
    /// `None` until at least one phonetic match exists.
    pub reliability_rating: Option<f64>,
    /// Characters whose relation profile strictly contains this one's.
    pub super_set: Vec<Literal>,
}

impl CharacterRecord {
    pub fn new(literal: impl Into<Literal>, components: impl IntoIterator<Item = Literal>) -> Self {
        let mut unique: Vec<Literal> = Vec::new();
        for component in components {
            if !unique.contains(&component) {
                unique.push(component);
            }
        }
        Self {
            literal: literal.into(),
            components: unique,
            ..Self::default()
        }
    }

    pub fn with_onyomi(mut self, onyomi: impl IntoIterator<Item = String>) -> Self {
        self.onyomi = onyomi.into_iter().collect();
        self
    }

    pub fn has_component(&self, literal: &str) -> bool {
        self.components.iter().any(|c| c == literal)
    }

    /// Readings with duplicates removed, loaded order kept.
    pub fn unique_onyomi(&self) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::with_capacity(self.onyomi.len());
        for reading in &self.onyomi {
            if !unique.contains(&reading.as_str()) {
                unique.push(reading);
            }
        }
        unique
    }

    /// The reading list ranked by phonetic group size, followed by the readings
    /// that matched nothing. Without any phonetic match this is the loaded list.
    pub fn sorted_onyomi(&self) -> Vec<&str> {
        if self.phonetic_series.is_empty() {
            return self.onyomi.iter().map(String::as_str).collect();
        }
        self.phonetic_series
            .iter()
            .map(|series| series.reading.as_str())
            .chain(self.unmatched_readings.iter().map(String::as_str))
            .collect()
    }

    /// The member groups of `phonetic_series`, positionally aligned with the
    /// head of [`CharacterRecord::sorted_onyomi`].
    pub fn phono_component_sets(&self) -> Vec<&[Literal]> {
        self.phonetic_series.iter().map(|s| s.members.as_slice()).collect()
    }

    /// Every distinct character that appears in at least one phonetic group.
    pub fn phonetic_matches(&self) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::new();
        for member in self.phonetic_series.iter().flat_map(|s| s.members.iter()) {
            if !unique.contains(&member.as_str()) {
                unique.push(member);
            }
        }
        unique
    }

    /// Clears everything classification and reference building produce.
    pub fn reset_derived(&mut self) {
        self.component_only_set.clear();
        self.phonetic_series.clear();
        self.unmatched_readings.clear();
        self.largest_phonetic_set_size = 0;
        self.reliability_rating = None;
        self.super_set.clear();
    }
}
