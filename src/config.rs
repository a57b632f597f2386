use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::MatchConfig;
use crate::error::{Error, Result};
use crate::input::{DictionaryLimits, TargetLimits};

/// Everything a run can be configured with. Built once at startup and passed
/// down by value; missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub matching: MatchConfig,
    pub dictionary: DictionaryLimits,
    pub targets: TargetLimits,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Settings> {
        serde_json::from_str(text).map_err(Error::ConfigJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = Settings::from_json_str(r#"{ "matching": { "batch_capacity": 7 } }"#).unwrap();
        assert_eq!(s.matching.batch_capacity, 7);
        assert_eq!(s.matching.worker_count, MatchConfig::default().worker_count);
        assert_eq!(s.dictionary, DictionaryLimits::default());
        assert_eq!(s.targets.max_len, 500);
    }

    #[test]
    fn full_file_sets_every_section() {
        let text = r#"{
            "matching":   { "worker_count": 3, "batch_capacity": 64 },
            "dictionary": { "max_words": 10, "min_word_len": 3, "max_word_len": 8 },
            "targets":    { "max_targets": 5, "min_len": 4, "max_len": 40 }
        }"#;
        let s = Settings::from_json_str(text).unwrap();
        assert_eq!(s.matching, MatchConfig { worker_count: 3, batch_capacity: 64 });
        assert_eq!(s.dictionary.min_word_len, 3);
        assert_eq!(s.targets.max_targets, 5);
    }

    #[test]
    fn malformed_text_is_a_crate_error() {
        let err = Settings::from_json_str(r#"{ "matching": { "worker_count": "many" } }"#).unwrap_err();
        assert!(matches!(err, Error::ConfigJson(_)));
        assert!(err.to_string().starts_with("could not parse configuration"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigIo { .. }));
    }
}
