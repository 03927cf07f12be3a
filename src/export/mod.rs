// src/export/mod.rs
//! Projections of a classified corpus into the three output artifacts.

pub mod json;
pub mod tsv;
pub mod xml;

use crate::core::corpus::Corpus;
use crate::core::types::CharacterRecord;
use crate::error::Result;
use crate::persistence::atomic_write;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// The flat, output-facing shape of one record. `onyomi` is the ranked
/// reading order and `phono_component_sets` is aligned with its head.
#[derive(Debug, Serialize)]
pub struct RecordView<'a> {
    pub literal: &'a str,
    pub components: &'a [String],
    pub onyomi: Vec<&'a str>,
    pub component_only_set: &'a [String],
    pub phono_component_sets: Vec<&'a [String]>,
    pub largest_phonetic_set_size: usize,
    pub reliability_rating: Option<f64>,
    pub super_set: &'a [String],
}

/// Column order shared by the JSON objects and the TSV header.
pub const FIELDS: [&str; 8] = [
    "literal",
    "components",
    "onyomi",
    "component_only_set",
    "phono_component_sets",
    "largest_phonetic_set_size",
    "reliability_rating",
    "super_set",
];

impl<'a> From<&'a CharacterRecord> for RecordView<'a> {
    fn from(record: &'a CharacterRecord) -> Self {
        Self {
            literal: &record.literal,
            components: &record.components,
            onyomi: record.sorted_onyomi(),
            component_only_set: &record.component_only_set,
            phono_component_sets: record.phono_component_sets(),
            largest_phonetic_set_size: record.largest_phonetic_set_size,
            reliability_rating: record.reliability_rating,
            super_set: &record.super_set,
        }
    }
}

/// A computed rating as text; whole numbers keep their `.0` (`1.0`, not `1`).
pub fn format_rating(rating: f64) -> String {
    format!("{rating:?}")
}

pub fn views(corpus: &Corpus) -> Vec<RecordView<'_>> {
    corpus.iter().map(RecordView::from).collect()
}

/// Writes the JSON, XML, and TSV artifacts, each atomically.
pub fn write_all(corpus: &Corpus, json: &Path, xml: &Path, tsv: &Path) -> Result<Vec<PathBuf>> {
    atomic_write(json, |w| json::write_json(corpus, w))?;
    info!(path = %json.display(), "wrote JSON records");
    atomic_write(xml, |w| xml::write_xml(corpus, w))?;
    info!(path = %xml.display(), "wrote XML records");
    atomic_write(tsv, |w| tsv::write_tsv(corpus, w))?;
    info!(path = %tsv.display(), "wrote TSV records");
    Ok(vec![json.to_path_buf(), xml.to_path_buf(), tsv.to_path_buf()])
}
