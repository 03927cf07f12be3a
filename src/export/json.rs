// src/export/json.rs
use crate::core::corpus::Corpus;
use crate::error::Result;
use crate::export::views;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

/// Writes the corpus as a JSON array of records, four-space indented.
/// An unset reliability rating is written as `null`.
pub fn write_json(corpus: &Corpus, writer: &mut dyn Write) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(writer, formatter);
    views(corpus).serialize(&mut serializer)?;
    Ok(())
}
