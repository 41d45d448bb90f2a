//! # Analysis Crate
//!
//! Estimators over aestivo genotype buffers: per-locus allele frequencies,
//! per-pair linkage disequilibrium, and generation summaries.

pub mod analysis;

pub use analysis::{
    allele_frequencies, linkage_r, r_squared, BufferSummary, GenerationSummary,
};
