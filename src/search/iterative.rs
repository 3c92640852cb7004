use std::iter::FusedIterator;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, info, warn};

use crate::board::{Move, Position};
use crate::error::SearchError;
use crate::search::alphabeta::{SearchResult, Searcher};

pub const MAX_DEPTH: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Deepening,
    Done,
}

pub struct IterativeDeepening<P: Position> {
    root: P,
    searcher: Searcher,
    next_depth: u32,
    max_depth: u32,
    phase: Phase,
    last: Option<SearchResult>,
}

impl<P: Position> IterativeDeepening<P> {
    pub fn new(root: P) -> Self {
        Self::with_searcher(root, Searcher::default())
    }

    // Table cleared once here, then shared by every depth of the run.
    pub fn with_searcher(root: P, mut searcher: Searcher) -> Self {
        searcher.clear_tt();
        let max_depth = searcher.params().max_depth.min(MAX_DEPTH);
        Self { root, searcher, next_depth: 1, max_depth, phase: Phase::Start, last: None }
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last.as_ref()
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    fn deepen(&mut self) -> Option<Move> {
        while self.next_depth <= self.max_depth {
            let depth = self.next_depth;
            self.next_depth += 1;

            let searcher = &mut self.searcher;
            let root = &self.root;
            match panic::catch_unwind(AssertUnwindSafe(|| searcher.search_depth(root, depth))) {
                Ok(Ok(result)) => {
                    let best = result.best_move;
                    info!(
                        "depth {depth} best {} score {} nodes {}",
                        best.map_or_else(|| "none".to_string(), |m| m.to_string()),
                        result.score,
                        result.nodes
                    );
                    self.last = Some(result);
                    if best.is_some() {
                        return best;
                    }
                }
                Ok(Err(SearchError::Aborted)) => {
                    debug!("deadline reached during depth {depth}");
                    break;
                }
                Ok(Err(e)) => {
                    warn!("search failed at depth {depth}: {e}");
                    break;
                }
                Err(_) => {
                    warn!("search panicked at depth {depth}; keeping the last candidate");
                    break;
                }
            }
        }
        self.phase = Phase::Done;
        None
    }
}

impl<P: Position> Iterator for IterativeDeepening<P> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        match self.phase {
            Phase::Start => {
                // Something to play before any search has run.
                let first = self.root.legal_moves().first().copied();
                self.phase = if first.is_some() { Phase::Deepening } else { Phase::Done };
                first
            }
            Phase::Deepening => self.deepen(),
            Phase::Done => None,
        }
    }
}

impl<P: Position> FusedIterator for IterativeDeepening<P> {}

pub fn iterative_deepening<P: Position>(pos: &P) -> IterativeDeepening<P> {
    IterativeDeepening::new(pos.clone())
}
