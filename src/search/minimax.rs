use log::debug;

use crate::board::{Color, Move, Position};
use crate::error::SearchError;
use crate::search::alphabeta::SearchResult;
use crate::search::eval::Evaluator;
use crate::search::ordering::is_loud;
use crate::search::score::{self, Score};

// No window, no table, no ordering. Node counts include quiescence nodes.
#[derive(Debug, Clone)]
pub struct Minimax {
    evaluator: Evaluator,
    quiescence: bool,
    nodes: u64,
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}

impl Minimax {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator, quiescence: true, nodes: 0 }
    }

    pub fn with_quiescence(mut self, on: bool) -> Self {
        self.quiescence = on;
        self
    }

    pub fn search<P: Position>(&mut self, pos: &P, depth: u32) -> Result<SearchResult, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        self.nodes = 0;
        let maximizing = pos.side_to_move() == Color::White;
        let (score, best_move) = self.minimax(pos, depth, maximizing)?;
        debug!(
            "minimax depth {depth} score {score} best {} nodes {}",
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            self.nodes
        );
        Ok(SearchResult { best_move, score, depth, nodes: self.nodes })
    }

    fn minimax<P: Position>(&mut self, pos: &P, depth: u32, maximizing: bool) -> Result<(Score, Option<Move>), SearchError> {
        self.nodes += 1;
        if let Some(outcome) = pos.outcome() {
            return Ok((score::adjust_for_depth(Evaluator::terminal(outcome), depth), None));
        }
        if depth == 0 {
            let leaf = if self.quiescence { self.quiescence(pos, maximizing)? } else { self.evaluator.evaluate(pos) };
            return Ok((leaf, None));
        }

        let mut best: Option<(Score, Move)> = None;
        for mv in pos.legal_moves() {
            let mut child = pos.clone();
            child.play(mv)?;
            let (score, _) = self.minimax(&child, depth - 1, !maximizing)?;
            let improves = match best {
                None => true,
                Some((b, _)) if maximizing => score > b,
                Some((b, _)) => score < b,
            };
            if improves {
                best = Some((score, mv));
            }
        }
        match best {
            Some((score, mv)) => Ok((score, Some(mv))),
            None => Ok((self.evaluator.evaluate(pos), None)),
        }
    }

    // Full-width capture search: stand pat or the best loud reply.
    fn quiescence<P: Position>(&mut self, pos: &P, maximizing: bool) -> Result<Score, SearchError> {
        self.nodes += 1;
        let mut best = self.evaluator.evaluate(pos);
        for mv in pos.legal_moves().into_iter().filter(|&m| is_loud(pos, m)) {
            let mut child = pos.clone();
            child.play(mv)?;
            let score = self.quiescence(&child, !maximizing)?;
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        Ok(best)
    }
}

pub fn minimax_move<P: Position>(pos: &P, depth: u32) -> Result<(Option<Move>, u64), SearchError> {
    let mut mm = Minimax::default();
    let res = mm.search(pos, depth)?;
    Ok((res.best_move, res.nodes))
}
