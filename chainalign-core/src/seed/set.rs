//! Online seed set construction
//!
//! Inserts candidate seeds one at a time, merging each into the first
//! compatible seed already present so the set holds maximal diagonal runs.
//! Merge decisions depend on what has been inserted before, so callers
//! must feed seeds in a fixed order (the pipeline uses sequence2 k-mer
//! order) to keep results reproducible.

use std::collections::HashMap;

use crate::types::Seed;

/// Set of non-redundant diagonal seeds under a fixed merge tolerance.
#[derive(Debug)]
pub struct SeedSet {
    merge_distance: usize,
    seeds: Vec<Seed>,
    // seed indices bucketed by start diagonal
    by_diagonal: HashMap<i64, Vec<usize>>,
}

impl SeedSet {
    pub fn new(merge_distance: usize) -> Self {
        Self {
            merge_distance,
            seeds: Vec::new(),
            by_diagonal: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Merge `seed` into the first compatible seed, or keep it as a new
    /// singleton when nothing within tolerance accepts it.
    pub fn insert(&mut self, seed: Seed) {
        if self.try_merge(&seed) {
            return;
        }
        let idx = self.seeds.len();
        self.by_diagonal
            .entry(seed.start_diagonal())
            .or_default()
            .push(idx);
        self.seeds.push(seed);
    }

    pub fn into_seeds(self) -> Vec<Seed> {
        self.seeds
    }

    fn try_merge(&mut self, seed: &Seed) -> bool {
        let tolerance = self.merge_distance as i64;
        let diagonal = seed.start_diagonal();

        // First-fit in insertion order across the tolerated diagonals.
        let mut target: Option<usize> = None;
        for candidate_diagonal in (diagonal - tolerance)..=(diagonal + tolerance) {
            if let Some(bucket) = self.by_diagonal.get(&candidate_diagonal) {
                for &idx in bucket {
                    if compatible(&self.seeds[idx], seed, self.merge_distance) {
                        target = Some(target.map_or(idx, |t| t.min(idx)));
                    }
                }
            }
        }
        let Some(idx) = target else {
            return false;
        };

        let old_diagonal = self.seeds[idx].start_diagonal();
        let merged = &mut self.seeds[idx];
        merged.begin_h = merged.begin_h.min(seed.begin_h);
        merged.begin_v = merged.begin_v.min(seed.begin_v);
        merged.end_h = merged.end_h.max(seed.end_h);
        merged.end_v = merged.end_v.max(seed.end_v);

        let new_diagonal = self.seeds[idx].start_diagonal();
        if new_diagonal != old_diagonal {
            if let Some(bucket) = self.by_diagonal.get_mut(&old_diagonal) {
                bucket.retain(|&i| i != idx);
            }
            self.by_diagonal.entry(new_diagonal).or_default().push(idx);
        }
        true
    }
}

/// Two seeds are compatible when they sit within one diagonal of each
/// other and overlap or abut within the tolerance on both axes.
fn compatible(existing: &Seed, seed: &Seed, merge_distance: usize) -> bool {
    let d = merge_distance;
    (existing.start_diagonal() - seed.start_diagonal()).abs() <= d as i64
        && seed.begin_h <= existing.end_h + d
        && seed.begin_v <= existing.end_v + d
        && seed.end_h + d >= existing.begin_h
        && seed.end_v + d >= existing.begin_v
}
