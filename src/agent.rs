use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::{Move, Position};
use crate::config::EngineConfig;
use crate::error::{ConfigError, SearchError};
use crate::search::{random_move_with, search_within, Evaluator, Minimax};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Random,
    Minimax,
    #[default]
    AlphaBeta,
    Iterative,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>().to_ascii_lowercase();
        match norm.as_str() {
            "random" => Ok(Algorithm::Random),
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "ab" => Ok(Algorithm::AlphaBeta),
            "iterative" | "id" | "ids" => Ok(Algorithm::Iterative),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Random => "Random",
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "AlphaBeta",
            Algorithm::Iterative => "Iterative",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMove {
    pub algorithm: Algorithm,
    pub best_move: Option<Move>,
    // deepest completed depth for iterative deepening
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl fmt::Display for AiMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AI {} d={} time={:.1}ms nodes={}",
            self.algorithm,
            self.depth,
            self.elapsed.as_secs_f64() * 1000.0,
            self.nodes
        )
    }
}

pub struct Agent {
    config: EngineConfig,
    rng: SmallRng,
}

impl Agent {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, rng: SmallRng::from_entropy() }
    }

    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self { config, rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn choose<P: Position>(&mut self, pos: &P) -> Result<AiMove, SearchError> {
        let start = Instant::now();
        let algorithm = self.config.algorithm;
        let depth = self.config.search.depth;
        let (best_move, depth, nodes) = match algorithm {
            Algorithm::Random => (random_move_with(pos, &mut self.rng), 0, 0),
            Algorithm::Minimax => {
                let res = Minimax::new(Evaluator::new(self.config.eval))
                    .with_quiescence(self.config.search.quiescence)
                    .search(pos, depth)?;
                (res.best_move, depth, res.nodes)
            }
            Algorithm::AlphaBeta => {
                let res = self.config.searcher().search_depth(pos, depth)?;
                (res.best_move, depth, res.nodes)
            }
            Algorithm::Iterative => {
                let timed = search_within(pos, self.config.movetime(), self.config.searcher());
                let (depth, nodes) = timed.last.as_ref().map_or((0, 0), |r| (r.depth, r.nodes));
                (timed.best_move, depth, nodes)
            }
        };
        Ok(AiMove { algorithm, best_move, depth, nodes, elapsed: start.elapsed() })
    }

    // `None` when there was nothing to play.
    pub fn play_one<P: Position>(&mut self, pos: &mut P) -> Result<Option<AiMove>, SearchError> {
        let decision = self.choose(pos)?;
        let Some(mv) = decision.best_move else {
            return Ok(None);
        };
        pos.play(mv)?;
        info!("{mv}: {decision}");
        Ok(Some(decision))
    }
}

pub fn choose_move<P: Position>(pos: &P, algorithm: Algorithm, depth: u32) -> Result<Option<Move>, SearchError> {
    let mut config = EngineConfig { algorithm, ..Default::default() };
    config.search.depth = depth;
    Ok(Agent::new(config).choose(pos)?.best_move)
}

pub fn one_ai_move<P: Position>(pos: &mut P, algorithm: Algorithm, depth: u32) -> Result<bool, SearchError> {
    let mut config = EngineConfig { algorithm, ..Default::default() };
    config.search.depth = depth;
    Ok(Agent::new(config).play_one(pos)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cozy::CozyBoard;
    use crate::board::Color;

    #[test]
    fn parses_labels_and_short_forms() {
        assert_eq!("AlphaBeta".parse::<Algorithm>().unwrap(), Algorithm::AlphaBeta);
        assert_eq!("alpha-beta".parse::<Algorithm>().unwrap(), Algorithm::AlphaBeta);
        assert_eq!("Minimax".parse::<Algorithm>().unwrap(), Algorithm::Minimax);
        assert_eq!("random".parse::<Algorithm>().unwrap(), Algorithm::Random);
        assert_eq!("IDS".parse::<Algorithm>().unwrap(), Algorithm::Iterative);
        assert!(matches!("greedy".parse::<Algorithm>(), Err(ConfigError::UnknownAlgorithm(_))));
    }

    #[test]
    fn one_ai_move_plays_once() {
        let mut b = CozyBoard::startpos();
        assert!(one_ai_move(&mut b, Algorithm::AlphaBeta, 2).unwrap());
        assert_eq!(b.side_to_move(), Color::Black);
        assert!(one_ai_move(&mut b, Algorithm::Random, 1).unwrap());
        assert_eq!(b.side_to_move(), Color::White);
    }

    #[test]
    fn no_move_when_game_is_over() {
        let mut mated = CozyBoard::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        for algo in [Algorithm::Random, Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Iterative] {
            assert!(!one_ai_move(&mut mated, algo, 2).unwrap(), "{algo} should not move");
        }
    }

    #[test]
    fn summary_line_has_metrics() {
        let mut config = EngineConfig { algorithm: Algorithm::Minimax, ..Default::default() };
        config.search.depth = 1;
        let mut agent = Agent::with_seed(config, 1);
        let decision = agent.choose(&CozyBoard::startpos()).unwrap();
        let line = decision.to_string();
        assert!(line.starts_with("AI Minimax d=1 time="), "{line}");
        assert!(line.ends_with(&format!("nodes={}", decision.nodes)));
        // root, 20 replies, and a quiescence probe under each
        assert_eq!(decision.nodes, 41);
    }
}
