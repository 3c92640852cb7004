pub mod alphabeta;
pub mod budget;
pub mod eval;
pub mod iterative;
pub mod minimax;
pub mod ordering;
pub mod pst;
mod qsearch;
pub mod random;
pub mod score;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{alphabeta_move, SearchParams, SearchResult, SearchStats, Searcher};
pub use budget::{best_move_within, search_within, TimedSearch};
pub use eval::{evaluate, EvalParams, Evaluator};
pub use iterative::{iterative_deepening, IterativeDeepening, MAX_DEPTH};
pub use minimax::{minimax_move, Minimax};
pub use random::{random_move, random_move_with};
pub use score::Score;
