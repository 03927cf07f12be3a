//! kpcs CLI
//!
//! Builds the kanji phonetic-component sets and inspects saved snapshots.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use kpcs_core::persistence::load_snapshot;
use kpcs_core::{CharacterRecord, Corpus, KpcsError, Pipeline, PipelineConfig, ScanStrategy};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kpcs")]
#[command(about = "Kanji component / phonetic-component set builder")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the JSON, XML, and TSV outputs
    Build {
        /// JSON config file; flags below override its values
        #[arg(long, env = "KPCS_CONFIG")]
        config: Option<PathBuf>,
        /// Directory of KanjiVG stroke diagrams
        #[arg(long)]
        kanjivg: Option<PathBuf>,
        /// kanjidic2 dictionary file
        #[arg(long)]
        kanjidic: Option<PathBuf>,
        /// Directory the output files are written to
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Also save a binary snapshot of the classified corpus
        #[arg(long)]
        snapshot: Option<PathBuf>,
        /// How containing characters are looked up
        #[arg(long, value_enum)]
        strategy: Option<ScanStrategy>,
        /// Run the super-set reference pass
        #[arg(long)]
        references: bool,
        /// Number of characters shown in the summary
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Print the derived record of characters from a snapshot
    Inspect {
        snapshot: PathBuf,
        #[arg(required = true)]
        literals: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            config,
            kanjivg,
            kanjidic,
            out_dir,
            snapshot,
            strategy,
            references,
            top,
        } => {
            let mut settings = match config {
                Some(path) => PipelineConfig::from_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => PipelineConfig::default(),
            };
            if let Some(dir) = kanjivg {
                settings.kanjivg_dir = dir;
            }
            if let Some(path) = kanjidic {
                settings.kanjidic_path = path;
            }
            if let Some(dir) = out_dir {
                settings.output_dir = dir;
            }
            if snapshot.is_some() {
                settings.snapshot_file = snapshot;
            }
            if let Some(strategy) = strategy {
                settings.strategy = strategy;
            }
            settings.build_references |= references;

            let (corpus, report) = Pipeline::new(settings)
                .run()
                .context("Pipeline run failed")?;

            for path in &report.written {
                println!("{}", path.display());
            }
            print_summary(&corpus, top);
            println!(
                "{} {} characters in {:.2?}",
                "Done!".bold().green(),
                report.classification.characters,
                report.elapsed
            );
        }
        Commands::Inspect { snapshot, literals } => {
            let corpus = load_snapshot(&snapshot)
                .with_context(|| format!("Failed to load snapshot {}", snapshot.display()))?;
            for literal in &literals {
                let record = corpus
                    .get(literal)
                    .ok_or_else(|| KpcsError::UnknownCharacter(literal.clone()))?;
                print_record(record);
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_target(false)
        .init();
}

/// RUST_LOG directives win; without any, log at info (debug with `--verbose`).
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let default = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(env.unwrap_or_default())
}

fn print_summary(corpus: &Corpus, top: usize) {
    let mut ranked: Vec<&CharacterRecord> = corpus
        .iter()
        .filter(|r| r.largest_phonetic_set_size > 0)
        .collect();
    ranked.sort_by_key(|r| std::cmp::Reverse(r.largest_phonetic_set_size));

    println!("\n{}", "Largest phonetic series:".bold());
    for record in ranked.into_iter().take(top) {
        let reading = record.sorted_onyomi().first().copied().unwrap_or_default();
        println!(
            "  {} {:<6} size {:>3}  rating {}",
            record.literal.as_str().cyan(),
            reading,
            record.largest_phonetic_set_size,
            format_rating(record.reliability_rating)
        );
    }
}

fn print_record(record: &CharacterRecord) {
    println!("{}", record.literal.as_str().bold().cyan());
    println!("  components:        {}", record.components.join(" "));
    println!("  onyomi:            {}", record.sorted_onyomi().join(" "));
    println!("  component only:    {}", record.component_only_set.join(" "));
    for series in &record.phonetic_series {
        println!("  {:<18} {}", format!("[{}]", series.reading), series.members.join(" "));
    }
    println!("  largest set:       {}", record.largest_phonetic_set_size);
    println!("  reliability:       {}", format_rating(record.reliability_rating));
    if !record.super_set.is_empty() {
        println!("  super set:         {}", record.super_set.join(" "));
    }
}

fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.3}"),
        None => "-".dark_grey().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_the_default_level() {
        assert_eq!(log_filter(false, Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(false, Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(true, Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn default_level_applies_without_rust_log() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(false, Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }
}
