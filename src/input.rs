//! Readers for the dictionary and target files.
//!
//! Both formats are plain UTF-8 text with one entry per line. Surrounding
//! whitespace is trimmed and lengths are measured in chars. Each rejection is
//! logged at `error` level before it is returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ahash::AHashSet as HashSet;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("The file does not exist: '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Input file is empty")]
    EmptyFile,
    #[error("Input string length not between {min} and {max} characters: {value}")]
    TargetLength { min: usize, max: usize, value: String },
    #[error("File contains more than {limit} strings")]
    TooManyTargets { limit: usize },
    #[error("Word length not between {min} and {max} characters: {word}")]
    WordLength { min: usize, max: usize, word: String },
    #[error("Duplicate word found: {0}")]
    DuplicateWord(String),
    #[error("File contains more than {limit} words")]
    TooManyWords { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryLimits {
    pub max_words: usize,
    pub min_word_len: usize,
    pub max_word_len: usize,
}

impl Default for DictionaryLimits {
    fn default() -> Self {
        DictionaryLimits {
            max_words: 100,
            min_word_len: 2,
            max_word_len: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetLimits {
    pub max_targets: usize,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for TargetLimits {
    fn default() -> Self {
        TargetLimits {
            max_targets: 100,
            min_len: 2,
            max_len: 500,
        }
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            error!("file '{}' does not exist", path.display());
            InputError::NotFound(path.to_path_buf())
        } else {
            error!("could not read '{}': {}", path.display(), source);
            InputError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Split on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// start an extra empty line.
fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

fn reject<T>(err: InputError) -> Result<T, InputError> {
    error!("{}", err);
    Err(err)
}

pub fn parse_dictionary(path: &Path, limits: &DictionaryLimits) -> Result<Vec<String>, InputError> {
    let text = read(path)?;
    let words = dictionary_from_str(&text, limits)?;
    debug!("dictionary '{}': {} words", path.display(), words.len());
    Ok(words)
}

/// Validate dictionary text: every word within the length limits, no word
/// repeated, and at most `max_words` words. Empty text is an empty
/// dictionary.
pub fn dictionary_from_str(text: &str, limits: &DictionaryLimits) -> Result<Vec<String>, InputError> {
    let mut words = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for line in text_lines(text) {
        let word = line.trim();
        let len = word.chars().count();
        if len < limits.min_word_len || len > limits.max_word_len {
            return reject(InputError::WordLength {
                min: limits.min_word_len,
                max: limits.max_word_len,
                word: word.to_string(),
            });
        }
        if !seen.insert(word) {
            return reject(InputError::DuplicateWord(word.to_string()));
        }
        words.push(word.to_string());
    }
    if words.len() > limits.max_words {
        return reject(InputError::TooManyWords {
            limit: limits.max_words,
        });
    }
    Ok(words)
}

pub fn parse_targets(path: &Path, limits: &TargetLimits) -> Result<Vec<String>, InputError> {
    let text = read(path)?;
    let targets = targets_from_str(&text, limits)?;
    debug!("targets '{}': {} strings", path.display(), targets.len());
    Ok(targets)
}

/// Validate target text. Unlike a dictionary, a target file must not be
/// empty. Index `i` of the result is line `i` of the text.
pub fn targets_from_str(text: &str, limits: &TargetLimits) -> Result<Vec<String>, InputError> {
    if text.is_empty() {
        return reject(InputError::EmptyFile);
    }
    let mut targets = Vec::new();
    for line in text_lines(text) {
        let value = line.trim();
        let len = value.chars().count();
        if len < limits.min_len || len > limits.max_len {
            return reject(InputError::TargetLength {
                min: limits.min_len,
                max: limits.max_len,
                value: value.to_string(),
            });
        }
        targets.push(value.to_string());
    }
    if targets.len() > limits.max_targets {
        return reject(InputError::TooManyTargets {
            limit: limits.max_targets,
        });
    }
    Ok(targets)
}
