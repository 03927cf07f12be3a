// File: src/load/kanjidic.rs
use crate::core::corpus::Corpus;
use crate::error::{KpcsError, Result};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

// Entries are matched in the raw text, so the document is assumed to hold
// plain `<character>` blocks: one inside a comment or CDATA section would be
// read as a real entry. kanjidic2 releases have neither.
static CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<character>(.*?)</character>").expect("valid character regex")
});

static LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<literal>([^<]*)</literal>").expect("valid literal regex"));

static ONYOMI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<reading\s+r_type="ja_on"[^>]*>([^<]*)</reading>"#).expect("valid reading regex")
});

/// One `<character>` entry of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub literal: String,
    /// On'yomi readings in document order, empty strings dropped.
    pub onyomi: Vec<String>,
}

/// Outcome of attaching readings to a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingReport {
    pub entries: usize,
    pub matched: usize,
}

/// Extracts every character entry and its on'yomi readings.
pub fn parse_entries(source: &str) -> Vec<DictionaryEntry> {
    CHARACTER
        .captures_iter(source)
        .filter_map(|caps| {
            let body = caps.get(1)?.as_str();
            let literal = LITERAL.captures(body)?.get(1)?.as_str();
            let onyomi = ONYOMI
                .captures_iter(body)
                .filter_map(|r| r.get(1))
                .map(|m| decode_entities(m.as_str().trim()).into_owned())
                .filter(|reading| !reading.is_empty())
                .collect();
            Some(DictionaryEntry {
                literal: decode_entities(literal.trim()).into_owned(),
                onyomi,
            })
        })
        .collect()
}

/// Replaces the readings of every corpus character the dictionary knows.
/// Entries for characters outside the corpus are ignored.
pub fn load_readings(path: &Path, corpus: &mut Corpus) -> Result<ReadingReport> {
    let source = fs::read_to_string(path).map_err(|e| KpcsError::io(path, e))?;
    let report = attach_readings(&source, corpus);
    info!(entries = report.entries, matched = report.matched, "attached dictionary readings");
    Ok(report)
}

pub fn attach_readings(source: &str, corpus: &mut Corpus) -> ReadingReport {
    let mut report = ReadingReport::default();
    for entry in parse_entries(source) {
        report.entries += 1;
        if corpus.set_onyomi(&entry.literal, entry.onyomi) {
            report.matched += 1;
        }
    }
    report
}

/// Decodes the predefined XML entities and numeric character references
/// (`&#12473;`, `&#x30B9;`). Anything unrecognized is kept verbatim.
fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        let tail = &rest[start..];
        let resolved = tail
            .find(';')
            .and_then(|end| resolve_entity(&tail[1..end]).map(|c| (c, end)));
        match resolved {
            Some((c, end)) => {
                decoded.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &tail[1..];
            }
        }
    }
    decoded.push_str(rest);
    Cow::Owned(decoded)
}

fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "amp" => Some('&'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
