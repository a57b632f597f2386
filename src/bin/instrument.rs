use std::time::Instant;

use scrambled_strings::fixture::{generate_dictionary, generate_targets};
use scrambled_strings::instrumentation::{counters_snapshot, reset_counters};
use scrambled_strings::{DistinctPermutations, MatchConfig, MultisetPermutations, Orchestrator, PermutationEngine};

fn run_case<E: PermutationEngine>(engine: E, words: &[String], targets: &[String]) {
    let name = engine.name();
    let orch = Orchestrator::with_engine(engine, MatchConfig::default()).unwrap();

    reset_counters();
    let t0 = Instant::now();
    let totals = orch.run(words, targets).unwrap();
    let dur = t0.elapsed();
    let c = counters_snapshot();

    println!(
        "{}: time={:?} words={} candidates={} flushes={} checks={} matches={} total_hits={}",
        name,
        dur,
        c.words,
        c.candidates,
        c.flushes,
        c.checks,
        c.matches,
        totals.iter().sum::<u64>()
    );
}

fn main() {
    let words = generate_dictionary(42, 100, 4, 9);
    let targets = generate_targets(43, &words, 100, 500);

    run_case(MultisetPermutations, &words, &targets);
    run_case(DistinctPermutations, &words, &targets);
}
