// src/core/mod.rs

pub mod corpus;
pub mod engine;
pub mod index;
pub mod reference;
pub mod series;
pub mod subset;
pub mod types;
