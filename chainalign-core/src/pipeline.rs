//! Alignment pipeline
//!
//! Wires the stages together: k-mer indexing of both sequences, anchor
//! matching, seed merging, sparse chaining, a span-ratio sanity filter,
//! banded alignment and edit-script construction. Each call is
//! self-contained: every intermediate structure is built, used and
//! dropped inside the call, so independent calls may run concurrently.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::align::{banded_alignment, Scoring};
use crate::chain::{chain_seeds, ChainParams};
use crate::cigar::build_report;
use crate::seed::{common_locations, sequence_kmers, SeedParams, SeedSet};
use crate::types::{AlignmentReport, Seed};

/// Parameters for one alignment call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignParams {
    pub seed: SeedParams,
    pub chain: ChainParams,
    pub scoring: Scoring,
    /// Margin around the seed chain searched by the banded alignment.
    /// Larger values are more likely to find the best alignment, at a
    /// performance cost.
    pub band_width: usize,
    /// How much the sequences may differ in length as judged by the seed
    /// chain: 0.1 accepts span ratios between 0.9 and 1.1.
    pub allowed_length_discrepancy: f64,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            seed: SeedParams::default(),
            chain: ChainParams::default(),
            scoring: Scoring::default(),
            band_width: 50,
            allowed_length_discrepancy: 0.1,
        }
    }
}

/// Semi-global alignment of `seq1` against `seq2`.
///
/// Returns `None` for every expected "no usable alignment" outcome: no
/// shared k-mers, an empty seed chain, a degenerate or
/// length-incompatible chain, or an alignment that never pairs a base
/// with a base. Callers that need the flat record format serialize the
/// report with [`AlignmentReport::to_record`].
pub fn semi_global_align(
    seq1: &[u8],
    seq2: &[u8],
    params: &AlignParams,
) -> Option<AlignmentReport> {
    let started = Instant::now();

    let s1_kmers = sequence_kmers(seq1, &params.seed);
    let s2_kmers = sequence_kmers(seq2, &params.seed);
    let locations = common_locations(&s1_kmers, &s2_kmers);
    log::debug!(
        "semi_global_align: {} x {} k-mers, {} common locations",
        s1_kmers.len(),
        s2_kmers.len(),
        locations.len()
    );

    let mut seed_set = SeedSet::new(params.seed.merge_distance);
    for location in locations {
        seed_set.insert(Seed::from(location));
    }
    let seeds = seed_set.into_seeds();

    let chain = chain_seeds(&seeds, &params.chain);
    let Some((first, last)) = chain.first().zip(chain.last()) else {
        log::debug!("semi_global_align: empty seed chain");
        return None;
    };

    // Quit before the alignment if the chain spans say the sequences
    // disagree on length.
    let seq1_span = last.end_h - first.begin_h;
    let seq2_span = last.end_v - first.begin_v;
    if seq2_span == 0 {
        log::debug!("semi_global_align: degenerate chain with zero V span");
        return None;
    }
    let ratio = seq1_span as f64 / seq2_span as f64;
    let min_ratio = 1.0 - params.allowed_length_discrepancy;
    let max_ratio = 1.0 + params.allowed_length_discrepancy;
    if ratio < min_ratio || ratio > max_ratio {
        log::debug!(
            "semi_global_align: span ratio {ratio:.4} outside [{min_ratio:.4}, {max_ratio:.4}]"
        );
        return None;
    }

    let (aligned1, aligned2) =
        banded_alignment(seq1, seq2, &chain, params.band_width, &params.scoring)?;
    let mut report = build_report(&aligned1, &aligned2)?;
    report.elapsed_ms = started.elapsed().as_millis() as u64;
    Some(report)
}
