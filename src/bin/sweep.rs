use std::time::Instant;

use scrambled_strings::fixture::{generate_dictionary, generate_targets};
use scrambled_strings::{MatchConfig, Orchestrator};

fn run_case(words: &[String], targets: &[String], worker_count: usize, batch_capacity: usize) -> Vec<u64> {
    let orch = Orchestrator::new(MatchConfig {
        worker_count,
        batch_capacity,
    })
    .unwrap();

    let t0 = Instant::now();
    let totals = orch.run(words, targets).unwrap();
    println!(
        "WORKERS={} CAPACITY={} time={:?}",
        worker_count,
        batch_capacity,
        t0.elapsed()
    );
    totals
}

fn main() {
    let words = generate_dictionary(42, 100, 4, 9);
    let targets = generate_targets(43, &words, 50, 500);

    let workers = [1usize, 2, 4, 8];
    let capacities = [1usize, 64, 1024, 10_000];
    let mut reference: Option<Vec<u64>> = None;
    for &w in &workers {
        for &cap in &capacities {
            let totals = run_case(&words, &targets, w, cap);
            match &reference {
                Some(r) => assert_eq!(r, &totals, "totals changed at workers={w} capacity={cap}"),
                None => reference = Some(totals),
            }
        }
    }
}
