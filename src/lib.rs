// Move selection for chess: evaluation, minimax, alpha-beta and iterative deepening
pub mod agent;
pub mod arena;
pub mod board;
pub mod config;
pub mod error;
pub mod mode;
pub mod search;

pub use agent::{choose_move, one_ai_move, Agent, AiMove, Algorithm};
pub use board::cozy::CozyBoard;
pub use board::{Color, Move, Outcome, PieceKind, Position, Square};
pub use config::EngineConfig;
pub use error::{BoardError, ConfigError, SearchError};
pub use mode::Mode;
