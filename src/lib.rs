pub mod aggregate;
pub mod config;
pub mod core;
pub mod error;
pub mod fixture;
pub mod input;
pub mod instrumentation;
pub mod matcher;
pub mod orchestrator;
pub mod permutations;

pub use crate::aggregate::{case_lines, GlobalTotals};
pub use crate::config::Settings;
pub use crate::core::{MatchConfig, PermutationEngine};
pub use crate::error::{Error, Result};
pub use crate::matcher::{BufferedMatcher, PartialResult};
pub use crate::orchestrator::Orchestrator;
pub use crate::permutations::{DistinctPermutations, MultisetPermutations};
