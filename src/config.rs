// src/config.rs
use crate::core::engine::ScanStrategy;
use crate::error::{KpcsError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const DEFAULT_KANJIVG_DIR: &str = "./kanjivg/";
pub const DEFAULT_KANJIDIC_PATH: &str = "./kanjidic2.xml";
pub const DEFAULT_JSON_FILE: &str = "phonetic-component-kanji.json";
pub const DEFAULT_XML_FILE: &str = "phonetic-component-kanji.xml";
pub const DEFAULT_TSV_FILE: &str = "phonetic-component-kanji.tsv";

/// Settings for one pipeline run. Missing keys in a config file take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory of per-character stroke-diagram SVGs.
    pub kanjivg_dir: PathBuf,
    /// Character dictionary document with the on'yomi readings.
    pub kanjidic_path: PathBuf,
    pub output_dir: PathBuf,
    pub json_file: String,
    pub xml_file: String,
    pub tsv_file: String,
    /// Optional binary snapshot of the classified corpus.
    pub snapshot_file: Option<PathBuf>,
    pub strategy: ScanStrategy,
    /// Runs the super-set reference pass after classification.
    pub build_references: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            kanjivg_dir: PathBuf::from(DEFAULT_KANJIVG_DIR),
            kanjidic_path: PathBuf::from(DEFAULT_KANJIDIC_PATH),
            output_dir: PathBuf::from("."),
            json_file: DEFAULT_JSON_FILE.to_string(),
            xml_file: DEFAULT_XML_FILE.to_string(),
            tsv_file: DEFAULT_TSV_FILE.to_string(),
            snapshot_file: None,
            strategy: ScanStrategy::default(),
            build_references: false,
        }
    }
}

impl PipelineConfig {
    /// Reads a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| KpcsError::io(path, e))?;
        let config: PipelineConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("json_file", &self.json_file),
            ("xml_file", &self.xml_file),
            ("tsv_file", &self.tsv_file),
        ] {
            if name.trim().is_empty() {
                return Err(KpcsError::InvalidConfig(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn xml_path(&self) -> PathBuf {
        self.output_dir.join(&self.xml_file)
    }

    pub fn tsv_path(&self) -> PathBuf {
        self.output_dir.join(&self.tsv_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "output_dir": "out", "strategy": "naive" }}"#).unwrap();

        let config = PipelineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.strategy, ScanStrategy::Naive);
        assert_eq!(config.json_path(), PathBuf::from("out").join(DEFAULT_JSON_FILE));
        assert_eq!(config.kanjidic_path, PathBuf::from(DEFAULT_KANJIDIC_PATH));
        assert!(!config.build_references);
    }

    #[test]
    fn empty_file_name_is_rejected() {
        let config = PipelineConfig {
            tsv_file: " ".into(),
            ..PipelineConfig::default()
        };
        assert!(matches!(config.validate(), Err(KpcsError::InvalidConfig(_))));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = PipelineConfig::from_file(Path::new("/nonexistent/kpcs.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kpcs.json"));
    }
}
