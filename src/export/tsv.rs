// src/export/tsv.rs
use crate::core::corpus::Corpus;
use crate::error::{KpcsError, Result};
use crate::export::{format_rating, views, RecordView, FIELDS};
use std::io::Write;

/// Writes one header row and one row per record. List columns hold JSON
/// arrays; an unset reliability rating is an empty cell.
pub fn write_tsv(corpus: &Corpus, writer: &mut dyn Write) -> Result<()> {
    let io_err = |e| KpcsError::io("<tsv output>", e);
    writeln!(writer, "{}", FIELDS.join("\t")).map_err(io_err)?;
    for view in views(corpus) {
        writeln!(writer, "{}", row(&view)?.join("\t")).map_err(io_err)?;
    }
    Ok(())
}

fn row(view: &RecordView<'_>) -> Result<Vec<String>> {
    Ok(vec![
        cell(view.literal),
        cell(&serde_json::to_string(view.components)?),
        cell(&serde_json::to_string(&view.onyomi)?),
        cell(&serde_json::to_string(view.component_only_set)?),
        cell(&serde_json::to_string(&view.phono_component_sets)?),
        view.largest_phonetic_set_size.to_string(),
        view.reliability_rating.map(format_rating).unwrap_or_default(),
        cell(&serde_json::to_string(view.super_set)?),
    ])
}

/// Tabs and line breaks would split the row.
fn cell(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{ClassificationEngine, ScanStrategy};
    use crate::core::types::CharacterRecord;

    #[test]
    fn header_and_rows_line_up() {
        let mut corpus: Corpus = vec![
            CharacterRecord::new("寸", Vec::new()).with_onyomi(vec!["スン".into()]),
            CharacterRecord::new("村", vec!["木".into(), "寸".into()]).with_onyomi(vec!["ソン".into()]),
            CharacterRecord::new("対", vec!["寸".into()]).with_onyomi(vec!["スン".into(), "タイ".into()]),
        ]
        .into_iter()
        .collect();
        ClassificationEngine::new(ScanStrategy::Indexed).classify(&mut corpus);

        let mut out = Vec::new();
        write_tsv(&corpus, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<Vec<&str>> = text.lines().map(|l| l.split('\t').collect()).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], FIELDS.to_vec());
        assert_eq!(lines[1][0], "寸");
        assert_eq!(lines[1][3], r#"["村"]"#);
        assert_eq!(lines[1][4], r#"[["対"]]"#);
        assert_eq!(lines[1][6], "0.5");
        assert_eq!(lines[2][6], "");
        // 対 is contained by nothing, 村 likewise; only 寸 is rated.
        assert_eq!(lines[3][6], "");
    }

    #[test]
    fn whole_number_rating_keeps_its_decimal_point() {
        let mut corpus: Corpus = vec![
            CharacterRecord::new("寸", Vec::new()).with_onyomi(vec!["スン".into()]),
            CharacterRecord::new("対", vec!["寸".into()]).with_onyomi(vec!["スン".into()]),
        ]
        .into_iter()
        .collect();
        ClassificationEngine::new(ScanStrategy::Indexed).classify(&mut corpus);

        let mut out = Vec::new();
        write_tsv(&corpus, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let first_row: Vec<&str> = text.lines().nth(1).unwrap().split('\t').collect();
        assert_eq!(first_row[6], "1.0");
    }
}
