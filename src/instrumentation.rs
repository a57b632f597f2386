// Lightweight process-wide counters for profiling the matching hot path.
// Workers run on a rayon pool, so these are relaxed atomics rather than
// thread-locals: a snapshot taken after a run sees every worker's updates.
// Counters are diagnostic only and are updated once per flush, not per
// candidate comparison.
use std::sync::atomic::{AtomicU64, Ordering};

static WORDS_PROCESSED: AtomicU64 = AtomicU64::new(0);
static CANDIDATES_GENERATED: AtomicU64 = AtomicU64::new(0);
static BATCHES_FLUSHED: AtomicU64 = AtomicU64::new(0);
static CONTAINMENT_CHECKS: AtomicU64 = AtomicU64::new(0);
static MATCHES_RECORDED: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub words: u64,
    pub candidates: u64,
    pub flushes: u64,
    pub checks: u64,
    pub matches: u64,
}

pub fn reset_counters() {
    WORDS_PROCESSED.store(0, Ordering::Relaxed);
    CANDIDATES_GENERATED.store(0, Ordering::Relaxed);
    BATCHES_FLUSHED.store(0, Ordering::Relaxed);
    CONTAINMENT_CHECKS.store(0, Ordering::Relaxed);
    MATCHES_RECORDED.store(0, Ordering::Relaxed);
}

pub fn counters_snapshot() -> Counters {
    Counters {
        words: WORDS_PROCESSED.load(Ordering::Relaxed),
        candidates: CANDIDATES_GENERATED.load(Ordering::Relaxed),
        flushes: BATCHES_FLUSHED.load(Ordering::Relaxed),
        checks: CONTAINMENT_CHECKS.load(Ordering::Relaxed),
        matches: MATCHES_RECORDED.load(Ordering::Relaxed),
    }
}

pub fn add_word() {
    WORDS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

pub fn add_candidates(n: u64) {
    CANDIDATES_GENERATED.fetch_add(n, Ordering::Relaxed);
}

/// Record one flush of `batch_len` candidates against `targets` targets.
pub fn add_flush(batch_len: u64, targets: u64) {
    BATCHES_FLUSHED.fetch_add(1, Ordering::Relaxed);
    CONTAINMENT_CHECKS.fetch_add(batch_len.saturating_mul(targets), Ordering::Relaxed);
}

pub fn add_matches(n: u64) {
    MATCHES_RECORDED.fetch_add(n, Ordering::Relaxed);
}
