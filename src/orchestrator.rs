use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::aggregate::GlobalTotals;
use crate::core::{MatchConfig, PermutationEngine};
use crate::error::Result;
use crate::matcher::BufferedMatcher;
use crate::permutations::MultisetPermutations;

/// Runs every word through the matcher on a fixed-size worker pool and folds
/// the per-word results into global totals.
pub struct Orchestrator<E> {
    matcher: BufferedMatcher<E>,
    pool: rayon::ThreadPool,
    config: MatchConfig,
}

impl Orchestrator<MultisetPermutations> {
    pub fn new(config: MatchConfig) -> Result<Self> {
        Orchestrator::with_engine(MultisetPermutations, config)
    }
}

impl<E: PermutationEngine> Orchestrator<E> {
    pub fn with_engine(engine: E, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_count)
            .thread_name(|i| format!("scramble-worker-{i}"))
            .build()?;
        Ok(Orchestrator {
            matcher: BufferedMatcher::new(engine, config.batch_capacity),
            pool,
            config,
        })
    }

    /// The configuration the pool and matcher were built from.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Totals per target index, in target order. Words are independent, so
    /// the pool is free to schedule them in any order.
    pub fn run(&self, words: &[String], targets: &[String]) -> Result<Vec<u64>> {
        let t0 = Instant::now();
        info!(
            "matching {} words against {} targets ({} engine, {} workers, batch capacity {})",
            words.len(),
            targets.len(),
            self.matcher.engine().name(),
            self.pool.current_num_threads(),
            self.matcher.capacity()
        );

        let totals = GlobalTotals::new(targets.len());
        self.pool.install(|| {
            words.par_iter().try_for_each(|word| {
                let partial = self.matcher.match_word(word, targets);
                debug!("word '{}' contributes {:?}", word, partial.counts());
                totals.accumulate(&partial)
            })
        })?;

        let counts = totals.into_counts()?;
        info!("finished in {:?}", t0.elapsed());
        Ok(counts)
    }
}
