// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod load;
pub mod persistence;
pub mod pipeline;

pub use crate::config::PipelineConfig;
pub use crate::core::corpus::Corpus;
pub use crate::core::engine::{ClassificationEngine, ClassificationSummary, ScanStrategy};
pub use crate::core::types::{CharacterRecord, PhoneticSeries};
pub use crate::error::{KpcsError, Result};
pub use crate::pipeline::{Pipeline, PipelineReport};
