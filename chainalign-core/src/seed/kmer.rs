//! K-mer indexing and anchor matching
//!
//! Extracts every fixed-length window of a sequence with its coordinates,
//! then joins the two windows lists through a hash table to find the
//! locations common to both sequences.

use std::collections::HashMap;

use super::SeedParams;
use crate::types::CommonLocation;

/// A fixed-length window of a sequence with half-open coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kmer<'a> {
    pub bytes: &'a [u8],
    pub start: usize,
    pub end: usize,
}

/// Every k-mer of `seq` in left-to-right order.
///
/// By default the window starting at `len - k` is omitted, reproducing the
/// historical exclusive upper bound; `include_final_kmer` restores it.
/// A k of zero or a sequence shorter than k yields no windows.
pub fn sequence_kmers<'a>(seq: &'a [u8], params: &SeedParams) -> Vec<Kmer<'a>> {
    let k = params.kmer_size;
    if k == 0 || seq.len() < k {
        return Vec::new();
    }
    let count = if params.include_final_kmer {
        seq.len() - k + 1
    } else {
        seq.len() - k
    };
    (0..count)
        .map(|start| Kmer {
            bytes: &seq[start..start + k],
            start,
            end: start + k,
        })
        .collect()
}

/// Locations of k-mers occurring in both sequences, in sequence2 order.
///
/// Sequence1 windows are loaded into a table keyed by their bytes; a
/// repeated subsequence keeps only its last occurrence. Each sequence2
/// window found in the table emits one location pairing the retained
/// sequence1 coordinates with the current sequence2 coordinates.
pub fn common_locations(s1_kmers: &[Kmer<'_>], s2_kmers: &[Kmer<'_>]) -> Vec<CommonLocation> {
    let mut s1_positions: HashMap<&[u8], (usize, usize)> =
        HashMap::with_capacity(s1_kmers.len());
    for kmer in s1_kmers {
        s1_positions.insert(kmer.bytes, (kmer.start, kmer.end));
    }

    let mut locations = Vec::new();
    for kmer in s2_kmers {
        if let Some(&(s1_start, s1_end)) = s1_positions.get(kmer.bytes) {
            locations.push(CommonLocation {
                s1_start,
                s1_end,
                s2_start: kmer.start,
                s2_end: kmer.end,
            });
        }
    }
    locations
}
