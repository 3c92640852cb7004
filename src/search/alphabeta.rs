use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, Position};
use crate::error::SearchError;
use crate::search::eval::{EvalParams, Evaluator};
use crate::search::ordering::{hint_first, order_moves};
use crate::search::score::{self, Score, INFINITY};
use crate::search::tt::{Bound, Entry, Tt};
use crate::search::zobrist;

const DEADLINE_POLL: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    pub max_depth: u32,
    pub use_tt: bool,
    // the table move is tried first either way
    pub order_moves: bool,
    pub quiescence: bool,
    pub hash_mb: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 3,
            max_depth: 50,
            use_tt: true,
            order_moves: true,
            quiescence: true,
            hash_mb: 8,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub depth: u32,
    pub nodes: u64,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub tt_cutoffs: u64,
}

impl SearchStats {
    pub fn total(&self) -> u64 {
        self.nodes + self.qnodes
    }
}

pub struct Searcher {
    tt: Tt,
    evaluator: Evaluator,
    params: SearchParams,
    pub(crate) stats: SearchStats,
    deadline: Option<Instant>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchParams::default(), EvalParams::default())
    }
}

impl Searcher {
    pub fn new(params: SearchParams, eval: EvalParams) -> Self {
        let mut tt = Tt::new();
        tt.set_capacity_mb(params.hash_mb);
        Self { tt, evaluator: Evaluator::new(eval), params, stats: SearchStats::default(), deadline: None }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn tt(&self) -> &Tt {
        &self.tt
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    pub fn set_deadline(&mut self, deadline: Option<Instant>) {
        self.deadline = deadline;
    }

    pub fn tt_probe<P: Position>(&self, pos: &P) -> Option<(u32, Bound)> {
        self.tt.get(zobrist::compute(pos)).map(|e| (e.depth, e.bound))
    }

    pub(crate) fn poll_deadline(&self) -> Result<(), SearchError> {
        match self.deadline {
            Some(dl) if self.stats.total() % DEADLINE_POLL == 0 && Instant::now() >= dl => Err(SearchError::Aborted),
            _ => Ok(()),
        }
    }

    pub fn search_depth<P: Position>(&mut self, pos: &P, depth: u32) -> Result<SearchResult, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if matches!(self.deadline, Some(dl) if Instant::now() >= dl) {
            return Err(SearchError::Aborted);
        }
        self.stats = SearchStats::default();
        let maximizing = pos.side_to_move() == Color::White;
        let (score, best_move) = self.alphabeta(pos, depth, -INFINITY, INFINITY, maximizing)?;
        debug!(
            "alphabeta depth {depth} score {score} best {} nodes {} qnodes {} tt hits {} cutoffs {}",
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            self.stats.nodes,
            self.stats.qnodes,
            self.stats.tt_hits,
            self.stats.tt_cutoffs,
        );
        Ok(SearchResult { best_move, score, depth, nodes: self.stats.total() })
    }

    pub fn alphabeta<P: Position>(
        &mut self,
        pos: &P,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<(Score, Option<Move>), SearchError> {
        self.stats.nodes += 1;
        self.poll_deadline()?;
        let (alpha0, beta0) = (alpha, beta);

        let key = if self.params.use_tt { Some(zobrist::compute(pos)) } else { None };
        let mut hint = None;
        if let Some(en) = key.and_then(|k| self.tt.get(k)) {
            self.stats.tt_hits += 1;
            hint = en.best;
            if en.depth >= depth {
                let stored = score::from_table(en.score, depth);
                match en.bound {
                    Bound::Exact => {
                        self.stats.tt_cutoffs += 1;
                        return Ok((stored, en.best));
                    }
                    Bound::Lower => alpha = alpha.max(stored),
                    Bound::Upper => beta = beta.min(stored),
                }
                if alpha >= beta {
                    self.stats.tt_cutoffs += 1;
                    return Ok((stored, en.best));
                }
            }
        }

        if let Some(outcome) = pos.outcome() {
            return Ok((score::adjust_for_depth(Evaluator::terminal(outcome), depth), None));
        }

        if depth == 0 {
            let leaf = if self.params.quiescence {
                self.quiescence(pos, alpha, beta, maximizing)?
            } else {
                self.evaluator.evaluate(pos)
            };
            return Ok((leaf, None));
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Ok((self.evaluator.evaluate(pos), None));
        }
        let moves = if self.params.order_moves { order_moves(pos, moves, hint) } else { hint_first(moves, hint) };

        let mut best: Option<(Score, Move)> = None;
        for mv in moves {
            let mut child = pos.clone();
            child.play(mv)?;
            let (score, _) = self.alphabeta(&child, depth - 1, alpha, beta, !maximizing)?;
            if maximizing {
                if best.map_or(true, |(b, _)| score > b) {
                    best = Some((score, mv));
                }
                alpha = alpha.max(score);
            } else {
                if best.map_or(true, |(b, _)| score < b) {
                    best = Some((score, mv));
                }
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }
        let Some((value, best_move)) = best else {
            return Ok((self.evaluator.evaluate(pos), None));
        };

        if let Some(key) = key {
            let bound = if value <= alpha0 {
                Bound::Upper
            } else if value >= beta0 {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.tt.put(Entry { key, depth, score: score::to_table(value, depth), best: Some(best_move), bound });
        }
        Ok((value, Some(best_move)))
    }
}

pub fn alphabeta_move<P: Position>(pos: &P, depth: u32) -> Result<(Option<Move>, u64), SearchError> {
    let mut searcher = Searcher::default();
    let res = searcher.search_depth(pos, depth)?;
    Ok((res.best_move, res.nodes))
}
