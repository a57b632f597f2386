use ahash::AHashSet as HashSet;
use log::trace;

use crate::core::PermutationEngine;
use crate::instrumentation;

/// Distinct candidates of one word found inside one target.
pub type MatchSet = HashSet<String>;

/// Per-word contribution: slot `i` is the number of distinct candidates of
/// the word that occur in target `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialResult {
    counts: Vec<u64>,
}

impl PartialResult {
    pub fn from_counts(counts: Vec<u64>) -> PartialResult {
        PartialResult { counts }
    }

    /// Count for `target_idx`, or 0 if the index is out of range.
    pub fn get(&self, target_idx: usize) -> u64 {
        self.counts.get(target_idx).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

/// Check every candidate in `batch` against every target and record the hits
/// in the matching `found` set. Set union makes this idempotent. Targets
/// without a corresponding set in `found` are skipped.
pub fn flush(batch: &HashSet<String>, targets: &[String], found: &mut [MatchSet]) {
    let mut recorded = 0u64;
    for cand in batch {
        for (target, set) in targets.iter().zip(found.iter_mut()) {
            if target.contains(cand.as_str()) && set.insert(cand.clone()) {
                recorded += 1;
            }
        }
    }
    instrumentation::add_flush(batch.len() as u64, targets.len() as u64);
    instrumentation::add_matches(recorded);
    trace!("flushed batch of {} candidates, {} new matches", batch.len(), recorded);
}

/// Pulls candidates from a `PermutationEngine` into a bounded batch and
/// checks full batches against the targets.
#[derive(Debug, Clone)]
pub struct BufferedMatcher<E> {
    engine: E,
    capacity: usize,
}

impl<E: PermutationEngine> BufferedMatcher<E> {
    /// A `capacity` of 0 is treated as 1.
    pub fn new(engine: E, capacity: usize) -> BufferedMatcher<E> {
        BufferedMatcher {
            engine,
            capacity: capacity.max(1),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn match_word(&self, word: &str, targets: &[String]) -> PartialResult {
        self.match_word_observed(word, targets, |_| {})
    }

    /// Same as `match_word`, calling `on_flush` with the size of every batch
    /// just before it is checked against the targets.
    pub(crate) fn match_word_observed<F>(&self, word: &str, targets: &[String], mut on_flush: F) -> PartialResult
    where
        F: FnMut(usize),
    {
        let mut found: Vec<MatchSet> = vec![MatchSet::default(); targets.len()];
        let mut batch: HashSet<String> = HashSet::with_capacity(self.capacity.min(4096));
        let mut generated = 0u64;

        for cand in self.engine.generate(word) {
            generated += 1;
            batch.insert(cand);
            if batch.len() >= self.capacity {
                on_flush(batch.len());
                flush(&batch, targets, &mut found);
                batch.clear();
            }
        }
        if !batch.is_empty() {
            on_flush(batch.len());
            flush(&batch, targets, &mut found);
        }

        instrumentation::add_word();
        instrumentation::add_candidates(generated);

        PartialResult::from_counts(found.iter().map(|set| set.len() as u64).collect())
    }
}
