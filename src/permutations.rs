use itertools::Itertools;

use crate::core::{assemble, Candidates, Interior, PermutationEngine, WordShape};

/// Every positional ordering of the interior, including orderings that only
/// swap equal characters. An interior of length `n` with at least two
/// distinct characters yields exactly `n!` candidates, some of which may be
/// identical strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultisetPermutations;

impl PermutationEngine for MultisetPermutations {
    fn generate<'w>(&self, word: &'w str) -> Candidates<'w> {
        match WordShape::of(word) {
            WordShape::Empty => Box::new(std::iter::empty()),
            WordShape::Fixed => Box::new(std::iter::once(word.to_string())),
            WordShape::Scrambled {
                first,
                interior,
                last,
            } => {
                let n = interior.len();
                let hint = word.len();
                Box::new(
                    interior
                        .into_iter()
                        .permutations(n)
                        .map(move |perm| assemble(first, perm, last, hint)),
                )
            }
        }
    }

    fn name(&self) -> &'static str {
        "multiset"
    }
}

/// Each distinct ordering of the interior exactly once, in lexicographic
/// order of the interior.
#[derive(Debug, Default, Clone, Copy)]
pub struct DistinctPermutations;

impl PermutationEngine for DistinctPermutations {
    fn generate<'w>(&self, word: &'w str) -> Candidates<'w> {
        match WordShape::of(word) {
            WordShape::Empty => Box::new(std::iter::empty()),
            WordShape::Fixed => Box::new(std::iter::once(word.to_string())),
            WordShape::Scrambled {
                first,
                mut interior,
                last,
            } => {
                interior.sort_unstable();
                Box::new(LexicographicCandidates {
                    first,
                    last,
                    hint: word.len(),
                    pending: Some(interior),
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "distinct"
    }
}

struct LexicographicCandidates {
    first: char,
    last: char,
    hint: usize,
    // ordering to emit next; None once the last ordering has been emitted
    pending: Option<Interior>,
}

impl Iterator for LexicographicCandidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut current = self.pending.take()?;
        let out = assemble(self.first, current.iter().copied(), self.last, self.hint);
        if next_permutation(&mut current) {
            self.pending = Some(current);
        }
        Some(out)
    }
}

/// Advance `xs` to its lexicographic successor in place. Returns false (and
/// leaves `xs` untouched) when `xs` is already the last ordering.
fn next_permutation(xs: &mut [char]) -> bool {
    if xs.len() < 2 {
        return false;
    }
    // longest non-increasing suffix starts at `i`
    let mut i = xs.len() - 1;
    while i > 0 && xs[i - 1] >= xs[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = xs.len() - 1;
    while xs[j] <= xs[i - 1] {
        j -= 1;
    }
    xs.swap(i - 1, j);
    xs[i..].reverse();
    true
}
