// src/load/mod.rs
//! Populates a [`Corpus`](crate::core::corpus::Corpus) from the two input
//! resources: stroke diagrams give the components, the dictionary gives the
//! readings. Components must be loaded first; readings only attach to
//! characters that already exist.

pub mod kanjidic;
pub mod kanjivg;

pub use kanjidic::{load_readings, ReadingReport};
pub use kanjivg::{load_components, ComponentReport};
