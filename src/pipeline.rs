// src/pipeline.rs
use crate::config::PipelineConfig;
use crate::core::corpus::Corpus;
use crate::core::engine::{ClassificationEngine, ClassificationSummary};
use crate::core::reference::build_references;
use crate::error::Result;
use crate::export;
use crate::load::{self, ComponentReport, ReadingReport};
use crate::persistence::save_snapshot;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// What one end-to-end run did.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub components: ComponentReport,
    pub readings: ReadingReport,
    pub classification: ClassificationSummary,
    /// `None` when the reference pass is disabled.
    pub references: Option<usize>,
    pub written: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Load components → load readings → classify → references → write.
pub struct Pipeline {
    config: PipelineConfig,
    engine: ClassificationEngine,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let engine = ClassificationEngine::new(config.strategy);
        Self { config, engine }
    }

    /// Builds the corpus from the configured inputs without writing anything.
    pub fn build_corpus(&self) -> Result<(Corpus, ComponentReport, ReadingReport)> {
        let mut corpus = Corpus::new();
        info!(dir = %self.config.kanjivg_dir.display(), "scanning stroke diagrams for components");
        let components = load::load_components(&self.config.kanjivg_dir, &mut corpus)?;
        info!(path = %self.config.kanjidic_path.display(), "parsing dictionary for on'yomi");
        let readings = load::load_readings(&self.config.kanjidic_path, &mut corpus)?;
        Ok((corpus, components, readings))
    }

    /// Runs the relation passes over an already loaded corpus.
    pub fn classify(&self, corpus: &mut Corpus) -> (ClassificationSummary, Option<usize>) {
        info!("searching for component / phono-component matches");
        let summary = self.engine.classify(corpus);
        let references = self.config.build_references.then(|| {
            info!("building super sets");
            build_references(corpus)
        });
        (summary, references)
    }

    pub fn run(&self) -> Result<(Corpus, PipelineReport)> {
        self.config.validate()?;
        let started = Instant::now();

        let (mut corpus, components, readings) = self.build_corpus()?;
        let (classification, references) = self.classify(&mut corpus);

        let mut written = export::write_all(
            &corpus,
            &self.config.json_path(),
            &self.config.xml_path(),
            &self.config.tsv_path(),
        )?;
        if let Some(snapshot) = &self.config.snapshot_file {
            save_snapshot(&corpus, snapshot)?;
            info!(path = %snapshot.display(), "wrote corpus snapshot");
            written.push(snapshot.clone());
        }

        let elapsed = started.elapsed();
        info!(?elapsed, characters = corpus.len(), "done");
        let report = PipelineReport {
            components,
            readings,
            classification,
            references,
            written,
            elapsed,
        };
        Ok((corpus, report))
    }
}
