// File: src/load/kanjivg.rs
use crate::core::corpus::Corpus;
use crate::core::types::CharacterRecord;
use crate::error::{KpcsError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

/// `<g kvg:element="K">`, capturing K.
static ELEMENT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"kvg:element="(.*?)""#).expect("valid element regex"));

/// Single-character literals that are not kanji.
static IGNORED_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9!,.:;?]$").expect("valid filter regex"));

/// Outcome of scanning a stroke-diagram directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentReport {
    pub files_scanned: usize,
    pub characters_loaded: usize,
    pub characters_ignored: usize,
}

/// Extracts the literal and its de-duplicated components from one diagram.
/// The first `kvg:element` in the document is the character itself.
pub fn parse_stroke_diagram(source: &str) -> Option<CharacterRecord> {
    let mut elements = ELEMENT_ATTR
        .captures_iter(source)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()));
    let literal = elements.next()?;
    Some(CharacterRecord::new(literal, elements))
}

pub fn is_ignored_literal(literal: &str) -> bool {
    IGNORED_LITERAL.is_match(literal)
}

/// Base diagrams are named `xxxxx.svg`; stroke-order variants carry a suffix.
pub fn is_base_diagram(file_name: &str) -> bool {
    file_name.len() == 9 && file_name.ends_with(".svg")
}

/// Loads every base diagram of `dir` into `corpus`, in file-name order.
pub fn load_components(dir: &Path, corpus: &mut Corpus) -> Result<ComponentReport> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| KpcsError::io(dir, e))? {
        let entry = entry.map_err(|e| KpcsError::io(dir, e))?;
        let name = entry.file_name();
        if name.to_str().is_some_and(is_base_diagram) {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut report = ComponentReport::default();
    for path in paths {
        report.files_scanned += 1;
        let source = fs::read_to_string(&path).map_err(|e| KpcsError::io(&path, e))?;
        let record = parse_stroke_diagram(&source)
            .ok_or_else(|| KpcsError::MissingRoot { path: path.clone() })?;

        if is_ignored_literal(&record.literal) {
            debug!(literal = %record.literal, "skipping non-kanji diagram");
            report.characters_ignored += 1;
            continue;
        }
        corpus.insert(record);
        report.characters_loaded += 1;
    }

    info!(
        files = report.files_scanned,
        loaded = report.characters_loaded,
        ignored = report.characters_ignored,
        "scanned stroke diagrams"
    );
    Ok(report)
}
