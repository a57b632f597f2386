use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Boxed, lazily evaluated stream of candidate strings for one word.
pub type Candidates<'w> = Box<dyn Iterator<Item = String> + Send + 'w>;

/// Interior characters of a word. Dictionary words are short, so this
/// almost never spills to the heap.
pub type Interior = SmallVec<[char; 24]>;

/// Trait describing a candidate generator for a single word.
///
/// A candidate keeps the first and last character of the word and reorders
/// everything in between. Implementations may yield the same string more than
/// once; consumers treat the output as a set.
pub trait PermutationEngine: Send + Sync {
    /// Produce every candidate for `word`.
    fn generate<'w>(&self, word: &'w str) -> Candidates<'w>;

    /// Short name used in logs and benchmark labels.
    fn name(&self) -> &'static str;
}

/// How a word is treated by the permutation engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordShape {
    /// The empty word has no candidates at all.
    Empty,
    /// Every reordering of the interior reproduces the word itself, either
    /// because the interior is empty or because it repeats a single char.
    Fixed,
    /// At least two distinct interior characters.
    Scrambled {
        first: char,
        interior: Interior,
        last: char,
    },
}

impl WordShape {
    pub fn of(word: &str) -> WordShape {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return WordShape::Empty;
        };
        let Some(last) = chars.next_back() else {
            return WordShape::Fixed;
        };
        let interior: Interior = chars.collect();
        if interior.iter().all(|&c| c == interior[0]) {
            return WordShape::Fixed;
        }
        WordShape::Scrambled {
            first,
            interior,
            last,
        }
    }
}

/// Rebuild a candidate from its fixed endpoints and an interior ordering.
pub(crate) fn assemble<I>(first: char, interior: I, last: char, hint: usize) -> String
where
    I: IntoIterator<Item = char>,
{
    let mut s = String::with_capacity(hint);
    s.push(first);
    s.extend(interior);
    s.push(last);
    s
}

/// Tuning knobs for a run. Neither value changes the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Size of the worker pool.
    pub worker_count: usize,
    /// Number of distinct candidates buffered before they are checked
    /// against the targets.
    pub batch_capacity: usize,
}

impl MatchConfig {
    pub const DEFAULT_BATCH_CAPACITY: usize = 10_000;

    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(Error::Config("worker_count must be at least 1".to_string()));
        }
        if self.batch_capacity == 0 {
            return Err(Error::Config("batch_capacity must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            worker_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            batch_capacity: Self::DEFAULT_BATCH_CAPACITY,
        }
    }
}
