//! Sparse seed chaining
//!
//! Selects the highest-scoring ordered, non-overlapping subset of seeds:
//! a chain must move strictly left-to-right and top-to-bottom, each seed
//! beginning no earlier than the previous one ends on both axes. Scores
//! accumulate covered length and pay a Manhattan gap penalty per link.
//!
//! Runs in O(n log n): seeds are processed in begin-H order while a sweep
//! pointer activates finished seeds (by end-H) into a B-tree keyed by
//! end-V. The tree is kept as a Pareto frontier - candidates strictly
//! improve with end-V - so `range(..=v).next_back()` answers "best chain
//! ending at or above this row" in logarithmic time. The Manhattan gap
//! cost separates into per-seed terms, which keeps the frontier exact.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use serde::{Deserialize, Serialize};

use crate::types::Seed;

/// Parameters for the chaining score
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChainParams {
    /// Reward per covered base; keeps the score dominated by coverage
    pub cover_weight: i64,
    /// Penalty per base of Manhattan gap between linked seeds
    pub gap_weight: i64,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            cover_weight: 4,
            gap_weight: 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    // gap-adjusted score while stored in the frontier, raw chain score
    // everywhere else
    score: i64,
    covered: i64,
    count: u32,
    idx: usize,
}

/// Tie-breaks: larger covered span, then fewer seeds, then the earlier
/// seed.
fn beats(a: &Candidate, b: &Candidate) -> bool {
    (a.score, a.covered, b.count, b.idx) > (b.score, b.covered, a.count, a.idx)
}

/// Compute the best chain through `seeds`. Returns the chained seeds in
/// pipeline order; an empty input gives an empty chain.
pub fn chain_seeds(seeds: &[Seed], params: &ChainParams) -> Vec<Seed> {
    let n = seeds.len();
    if n == 0 {
        return Vec::new();
    }

    let mut by_begin: Vec<usize> = (0..n).collect();
    by_begin.sort_by_key(|&i| (seeds[i].begin_h, seeds[i].begin_v, seeds[i].end_h, seeds[i].end_v, i));
    let mut by_end: Vec<usize> = (0..n).collect();
    by_end.sort_by_key(|&i| (seeds[i].end_h, seeds[i].end_v, i));

    let mut score = vec![0i64; n];
    let mut covered = vec![0i64; n];
    let mut count = vec![0u32; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    let mut frontier: BTreeMap<usize, Candidate> = BTreeMap::new();
    let mut activated = 0usize;

    for &i in &by_begin {
        // Activate every seed whose end-H the sweep has passed. A seed is
        // always scored before it activates because its span is nonzero.
        while activated < n {
            let j = by_end[activated];
            if seeds[j].end_h > seeds[i].begin_h {
                break;
            }
            let adjusted = score[j] + params.gap_weight * (seeds[j].end_h + seeds[j].end_v) as i64;
            let candidate = Candidate {
                score: adjusted,
                covered: covered[j],
                count: count[j],
                idx: j,
            };
            insert_frontier(&mut frontier, seeds[j].end_v, candidate);
            activated += 1;
        }

        let span = seeds[i].h_span() as i64;
        let value = params.cover_weight * span;
        score[i] = value;
        covered[i] = span;
        count[i] = 1;

        if let Some((_, prev)) = frontier.range(..=seeds[i].begin_v).next_back() {
            let linked = prev.score + value
                - params.gap_weight * (seeds[i].begin_h + seeds[i].begin_v) as i64;
            let with_link = Candidate {
                score: linked,
                covered: prev.covered + span,
                count: prev.count + 1,
                idx: i,
            };
            let solo = Candidate {
                score: value,
                covered: span,
                count: 1,
                idx: i,
            };
            if beats(&with_link, &solo) {
                score[i] = with_link.score;
                covered[i] = with_link.covered;
                count[i] = with_link.count;
                parent[i] = Some(prev.idx);
            }
        }
    }

    let mut best = 0usize;
    for i in 1..n {
        let a = Candidate {
            score: score[i],
            covered: covered[i],
            count: count[i],
            idx: i,
        };
        let b = Candidate {
            score: score[best],
            covered: covered[best],
            count: count[best],
            idx: best,
        };
        if beats(&a, &b) {
            best = i;
        }
    }

    let mut order = Vec::new();
    let mut cursor = Some(best);
    while let Some(i) = cursor {
        order.push(i);
        cursor = parent[i];
    }
    order.reverse();

    log::debug!(
        "chain_seeds: {} seeds -> chain of {} (covered {})",
        n,
        order.len(),
        covered[best]
    );

    order.into_iter().map(|i| seeds[i]).collect()
}

fn insert_frontier(frontier: &mut BTreeMap<usize, Candidate>, end_v: usize, candidate: Candidate) {
    if let Some((_, prev)) = frontier.range(..=end_v).next_back() {
        if !beats(&candidate, prev) {
            return;
        }
    }
    frontier.insert(end_v, candidate);
    // Drop dominated successors so scores stay strictly increasing with
    // the key.
    let stale: Vec<usize> = frontier
        .range((Excluded(end_v), Unbounded))
        .take_while(|&(_, successor)| !beats(successor, &candidate))
        .map(|(&key, _)| key)
        .collect();
    for key in stale {
        frontier.remove(&key);
    }
}
