// Seeded synthetic workloads for tests, benchmarks and the dev binaries.
// A small alphabet keeps accidental matches in the random filler frequent
// enough to exercise the matcher, not just the planted words.
use ahash::AHashSet as HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ALPHABET: &[u8] = b"abcdefgh";

fn random_char(rng: &mut impl Rng) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}

/// Shuffle the interior of `word`, keeping its first and last char.
pub fn scramble(rng: &mut impl Rng, word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() > 3 {
        let end = chars.len() - 1;
        chars[1..end].shuffle(rng);
    }
    chars.into_iter().collect()
}

/// Up to `n` distinct words with lengths in `min_len..=max_len`. Fewer are
/// returned only if the alphabet cannot supply that many distinct words.
pub fn generate_dictionary(seed: u64, n: usize, min_len: usize, max_len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(n);
    let mut words = Vec::with_capacity(n);
    let mut attempts = 0usize;
    while words.len() < n && attempts < n.saturating_mul(100) {
        attempts += 1;
        let len = rng.gen_range(min_len..=max_len);
        let word: String = (0..len).map(|_| random_char(&mut rng)).collect();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

/// `n` targets of roughly `len` chars: random filler with scrambled
/// dictionary words planted along the way.
pub fn generate_targets(seed: u64, dictionary: &[String], n: usize, len: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut s = String::with_capacity(len + 32);
            while s.len() < len {
                match dictionary.choose(&mut rng) {
                    Some(word) if rng.gen_bool(0.3) => s.push_str(&scramble(&mut rng, word)),
                    _ => s.push(random_char(&mut rng)),
                }
            }
            s
        })
        .collect()
}
