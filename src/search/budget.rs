use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Move, Position};
use crate::search::alphabeta::{SearchResult, Searcher};
use crate::search::iterative::IterativeDeepening;

#[derive(Debug, Clone, Default)]
pub struct TimedSearch {
    pub best_move: Option<Move>,
    pub last: Option<SearchResult>,
    pub elapsed: Duration,
}

pub fn search_within<P: Position>(pos: &P, budget: Duration, mut searcher: Searcher) -> TimedSearch {
    let start = Instant::now();
    let deadline = start + budget;
    searcher.set_deadline(Some(deadline));

    let mut driver = IterativeDeepening::with_searcher(pos.clone(), searcher);
    let mut best_move = None;
    for mv in driver.by_ref() {
        best_move = Some(mv);
        if Instant::now() >= deadline {
            break;
        }
    }
    let elapsed = start.elapsed();
    let last = driver.last_result().cloned();
    debug!(
        "budget {}ms used {}ms reached depth {}",
        budget.as_millis(),
        elapsed.as_millis(),
        last.as_ref().map_or(0, |r| r.depth)
    );
    TimedSearch { best_move, last, elapsed }
}

pub fn best_move_within<P: Position>(pos: &P, budget: Duration) -> Option<Move> {
    search_within(pos, budget, Searcher::default()).best_move
}
