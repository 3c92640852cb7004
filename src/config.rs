use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::agent::Algorithm;
use crate::error::ConfigError;
use crate::search::{EvalParams, SearchParams, Searcher};

/// Everything an AI player needs, loadable from JSON. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub search: SearchParams,
    pub eval: EvalParams,
    /// Per-move budget for [`Algorithm::Iterative`], in milliseconds.
    pub movetime_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            search: SearchParams::default(),
            eval: EvalParams::default(),
            movetime_ms: 1_000,
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&text)
    }

    pub fn movetime(&self) -> Duration {
        Duration::from_millis(self.movetime_ms)
    }

    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.search, self.eval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json(r#"{ "algorithm": "minimax", "search": { "depth": 2 }, "eval": { "check_penalty": 50 } }"#)
            .unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Minimax);
        assert_eq!(cfg.search.depth, 2);
        assert!(cfg.search.use_tt);
        assert_eq!(cfg.eval.check_penalty, 50);
        assert_eq!(cfg.eval.mobility_weight, EvalParams::default().mobility_weight);
        assert_eq!(cfg.movetime_ms, 1_000);
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = EngineConfig { algorithm: Algorithm::Iterative, movetime_ms: 250, ..Default::default() };
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(EngineConfig::from_json(&text).unwrap(), cfg);
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(matches!(EngineConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
        assert!(matches!(EngineConfig::load("/definitely/not/here.json"), Err(ConfigError::Io { .. })));
    }
}
