// src/export/xml.rs
use crate::core::corpus::Corpus;
use crate::core::types::CharacterRecord;
use crate::error::{KpcsError, Result};
use crate::export::format_rating;
use std::borrow::Cow;
use std::io::{self, Write};

/// Writes the corpus as a `<kpcs>` tag tree, one `<character>` per record.
/// An unset reliability rating becomes an empty `<reliabilityRating/>`.
pub fn write_xml(corpus: &Corpus, writer: &mut dyn Write) -> Result<()> {
    write_document(corpus, writer).map_err(|e| KpcsError::io("<xml output>", e))
}

fn write_document(corpus: &Corpus, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "<?xml version='1.0' encoding='UTF-8'?>")?;
    writeln!(w, "<kpcs>")?;
    for record in corpus {
        write_character(record, w)?;
    }
    writeln!(w, "</kpcs>")
}

fn write_character(record: &CharacterRecord, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "  <character>")?;
    writeln!(w, "    <literal>{}</literal>", escape(&record.literal))?;

    write_list(w, "components", "component", record.components.iter().map(String::as_str))?;
    write_list(w, "onyomi", "onyomi", record.sorted_onyomi().into_iter())?;
    write_list(w, "componentSet", "c_match", record.component_only_set.iter().map(String::as_str))?;

    if record.phonetic_series.is_empty() {
        writeln!(w, "    <phonoComponentSets/>")?;
    } else {
        writeln!(w, "    <phonoComponentSets>")?;
        for (group, series) in record.phonetic_series.iter().enumerate() {
            for member in &series.members {
                writeln!(w, "      <pc_match g=\"{group}\">{}</pc_match>", escape(member))?;
            }
        }
        writeln!(w, "    </phonoComponentSets>")?;
    }

    writeln!(
        w,
        "    <largestPhoneticSetSize>{}</largestPhoneticSetSize>",
        record.largest_phonetic_set_size
    )?;
    match record.reliability_rating {
        Some(rating) => writeln!(
            w,
            "    <reliabilityRating>{}</reliabilityRating>",
            format_rating(rating)
        )?,
        None => writeln!(w, "    <reliabilityRating/>")?,
    }
    writeln!(w, "  </character>")
}

fn write_list<'a>(
    w: &mut dyn Write,
    outer: &str,
    inner: &str,
    items: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return writeln!(w, "    <{outer}/>");
    }
    writeln!(w, "    <{outer}>")?;
    for item in items {
        writeln!(w, "      <{inner}>{}</{inner}>", escape(item))?;
    }
    writeln!(w, "    </{outer}>")
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
