//! Population genetics analysis tools for aestivo
//!
//! This module provides:
//! - Allele frequency per locus column
//! - Linkage disequilibrium (r, r²) per locus pair
//! - Per-compartment generation summaries

pub mod frequency;
pub mod linkage;
pub mod summary;
pub mod utils;

// Re-export commonly used functions
pub use frequency::allele_frequencies;
pub use linkage::{linkage_r, r_squared};
pub use summary::{BufferSummary, GenerationSummary};
