// File: src/core/index.rs
use crate::core::corpus::Corpus;
use std::collections::HashMap;

/// An inverted component index: for every literal, the corpus positions of the
/// characters that list it as a component. Pre-computing this once turns the
/// classifier's full-corpus scan per character into a direct lookup.
#[derive(Debug, Clone, Default)]
pub struct ContainmentIndex {
    /// Maps a component literal (e.g. "日") to the positions of every record
    /// containing it (e.g. the positions of "晶" and "明"), in corpus order.
    containers: HashMap<String, Vec<usize>>,
}

impl ContainmentIndex {
    /// Builds the index in one pass over the corpus.
    /// Complexity: O(n · c) where c is the average component count.
    pub fn build(corpus: &Corpus) -> Self {
        let mut containers: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in corpus.iter().enumerate() {
            for component in &record.components {
                let positions = containers.entry(component.clone()).or_default();
                if positions.last() != Some(&idx) {
                    positions.push(idx);
                }
            }
        }
        Self { containers }
    }

    /// Positions of the characters containing `literal`, ascending.
    pub fn containers_of(&self, literal: &str) -> &[usize] {
        self.containers.get(literal).map(Vec::as_slice).unwrap_or(&[])
    }
}
