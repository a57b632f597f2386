use ahash::AHashSet as HashSet;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scrambled_strings::fixture::{generate_dictionary, generate_targets};
use scrambled_strings::{
    BufferedMatcher, DistinctPermutations, GlobalTotals, MatchConfig, MultisetPermutations,
    Orchestrator, PermutationEngine,
};

fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

// Generic helpers: accept any concrete implementation of PermutationEngine.
fn run_known_scenarios<E: PermutationEngine>(engine: E) {
    let m = BufferedMatcher::new(engine, 4);
    assert_eq!(m.match_word("", &strings(&["abcdefg"])).counts(), &[0]);
    assert_eq!(m.match_word("aa", &strings(&["abcdefg"])).counts(), &[0]);
    assert_eq!(m.match_word("abc", &strings(&["abcdefg"])).counts(), &[1]);
    assert_eq!(m.match_word("abcd", &strings(&["abcdefgacbd"])).counts(), &[2]);
    assert_eq!(
        m.match_word("axpaj", &strings(&["a", "axpajasfe", "afasdfapxajikaaxpjke"]))
            .counts(),
        &[0, 1, 2]
    );
}

#[test]
fn known_scenarios() {
    run_known_scenarios(MultisetPermutations);
    run_known_scenarios(DistinctPermutations);
}

fn run_degenerate_words_yield_only_themselves<E: PermutationEngine>(engine: E) {
    for w in ["x", "xy", "xyz", "abbbbba", "qrrrrs", "éè"] {
        let cands: Vec<String> = engine.generate(w).collect();
        assert_eq!(cands, vec![w.to_string()], "word {w}");
    }
    assert_eq!(engine.generate("").count(), 0);
}

#[test]
fn degenerate_words_yield_only_themselves() {
    run_degenerate_words_yield_only_themselves(MultisetPermutations);
    run_degenerate_words_yield_only_themselves(DistinctPermutations);
}

fn run_batch_capacity_does_not_change_results<E: PermutationEngine + Clone>(engine: E) {
    let words = generate_dictionary(11, 30, 3, 7);
    let targets = generate_targets(12, &words, 8, 200);
    let tiny = BufferedMatcher::new(engine.clone(), 1);
    let odd = BufferedMatcher::new(engine.clone(), 7);
    let huge = BufferedMatcher::new(engine, 10_000);
    for w in &words {
        let expected = huge.match_word(w, &targets);
        assert_eq!(tiny.match_word(w, &targets), expected, "word {w}");
        assert_eq!(odd.match_word(w, &targets), expected, "word {w}");
    }
}

#[test]
fn batch_capacity_does_not_change_results() {
    run_batch_capacity_does_not_change_results(MultisetPermutations);
    run_batch_capacity_does_not_change_results(DistinctPermutations);
}

fn run_worker_count_does_not_change_totals<E: PermutationEngine + Clone>(engine: E) {
    let words = generate_dictionary(21, 40, 3, 7);
    let targets = generate_targets(22, &words, 10, 300);
    let single = Orchestrator::with_engine(
        engine.clone(),
        MatchConfig {
            worker_count: 1,
            batch_capacity: 16,
        },
    )
    .unwrap()
    .run(&words, &targets)
    .unwrap();
    let many = Orchestrator::with_engine(
        engine,
        MatchConfig {
            worker_count: 6,
            batch_capacity: 5_000,
        },
    )
    .unwrap()
    .run(&words, &targets)
    .unwrap();
    assert_eq!(single, many);
    assert!(single.iter().any(|&t| t > 0), "fixture planted no matches");
}

#[test]
fn worker_count_does_not_change_totals() {
    run_worker_count_does_not_change_totals(MultisetPermutations);
    run_worker_count_does_not_change_totals(DistinctPermutations);
}

#[test]
fn engines_agree_on_candidate_sets() {
    let words = generate_dictionary(5, 60, 1, 7);
    for w in &words {
        let multiset: HashSet<String> = MultisetPermutations.generate(w).collect();
        let distinct: Vec<String> = DistinctPermutations.generate(w).collect();
        let distinct_set: HashSet<String> = distinct.iter().cloned().collect();
        assert_eq!(distinct.len(), distinct_set.len(), "distinct engine repeated for {w}");
        assert_eq!(multiset, distinct_set, "word {w}");
    }
}

#[test]
fn engines_agree_on_totals() {
    let words = generate_dictionary(31, 50, 3, 8);
    let targets = generate_targets(32, &words, 12, 400);
    let cfg = MatchConfig {
        worker_count: 4,
        batch_capacity: 100,
    };
    let multiset = Orchestrator::new(cfg.clone()).unwrap().run(&words, &targets).unwrap();
    let distinct = Orchestrator::with_engine(DistinctPermutations, cfg)
        .unwrap()
        .run(&words, &targets)
        .unwrap();
    assert_eq!(multiset, distinct);
}

#[test]
fn totals_ignore_word_order() {
    let mut words = generate_dictionary(41, 40, 3, 7);
    let targets = generate_targets(42, &words, 6, 250);
    let orch = Orchestrator::new(MatchConfig {
        worker_count: 3,
        batch_capacity: 32,
    })
    .unwrap();
    let expected = orch.run(&words, &targets).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..3 {
        words.shuffle(&mut rng);
        assert_eq!(orch.run(&words, &targets).unwrap(), expected);
    }
}

#[test]
fn totals_equal_sum_of_partials_in_any_order() {
    let words = generate_dictionary(51, 25, 3, 7);
    let targets = generate_targets(52, &words, 5, 200);
    let matcher = BufferedMatcher::new(MultisetPermutations, 50);
    let mut partials: Vec<_> = words.iter().map(|w| matcher.match_word(w, &targets)).collect();

    let mut expected = vec![0u64; targets.len()];
    for p in &partials {
        for (i, e) in expected.iter_mut().enumerate() {
            *e += p.get(i);
        }
    }

    partials.reverse();
    let totals = GlobalTotals::new(targets.len());
    for p in &partials {
        totals.accumulate(p).unwrap();
    }
    assert_eq!(totals.into_counts().unwrap(), expected);

    let orch = Orchestrator::new(MatchConfig {
        worker_count: 2,
        batch_capacity: 50,
    })
    .unwrap();
    assert_eq!(orch.run(&words, &targets).unwrap(), expected);
}

#[test]
fn end_to_end_small_dictionary() {
    let orch = Orchestrator::new(MatchConfig {
        worker_count: 2,
        batch_capacity: 10_000,
    })
    .unwrap();
    let totals = orch
        .run(&strings(&["abc", "abcd"]), &strings(&["abcdefgacbd"]))
        .unwrap();
    assert_eq!(totals, vec![3]);
}
