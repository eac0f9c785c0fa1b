//! Seed detection between two sequences
//!
//! K-mer extraction, anchor matching against the first sequence's k-mer
//! table, and online construction of merged diagonal seeds. The output
//! feeds the chaining stage.

pub mod kmer;
pub mod set;

pub use kmer::{common_locations, sequence_kmers, Kmer};
pub use set::SeedSet;

use serde::{Deserialize, Serialize};

/// Parameters for seed detection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedParams {
    /// K-mer size used to find alignment anchors
    pub kmer_size: usize,
    /// Also emit the window starting at the final valid position.
    /// Off by default: the historical extraction stops one window short.
    pub include_final_kmer: bool,
    /// Diagonal/gap tolerance when merging seeds into diagonal runs
    pub merge_distance: usize,
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            kmer_size: 10,
            include_final_kmer: false,
            merge_distance: 1,
        }
    }
}
