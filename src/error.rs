use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputError;

/// Error type for everything a run can fail with.
#[derive(Error, Debug)]
pub enum Error {
    /// Dictionary or target file rejected. The parser's message is kept as is.
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("could not read configuration file '{}': {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse configuration file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not parse configuration: {0}")]
    ConfigJson(#[source] serde_json::Error),
    #[error("worker pool could not be started: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("global totals are unusable: a worker panicked while updating them")]
    TotalsPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
