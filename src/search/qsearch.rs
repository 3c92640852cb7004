use crate::board::{Color, Move, Position};
use crate::error::SearchError;
use crate::search::alphabeta::Searcher;
use crate::search::ordering::{is_loud, order_moves};
use crate::search::score::{Score, INFINITY};

impl Searcher {
    pub fn qsearch_eval<P: Position>(&mut self, pos: &P) -> Result<Score, SearchError> {
        let maximizing = pos.side_to_move() == Color::White;
        self.quiescence(pos, -INFINITY, INFINITY, maximizing)
    }

    // Captures and promotions only. Fail-hard.
    pub fn quiescence<P: Position>(
        &mut self,
        pos: &P,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, SearchError> {
        self.stats.qnodes += 1;
        self.poll_deadline()?;

        // Stand pat
        let stand = self.evaluator().evaluate(pos);
        if maximizing {
            if stand >= beta {
                return Ok(beta);
            }
            alpha = alpha.max(stand);
        } else {
            if stand <= alpha {
                return Ok(alpha);
            }
            beta = beta.min(stand);
        }

        let loud: Vec<Move> = pos.legal_moves().into_iter().filter(|&m| is_loud(pos, m)).collect();
        if loud.is_empty() {
            return Ok(stand);
        }

        for mv in order_moves(pos, loud, None) {
            let mut child = pos.clone();
            child.play(mv)?;
            let score = self.quiescence(&child, alpha, beta, !maximizing)?;
            if maximizing {
                if score >= beta {
                    return Ok(beta);
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    return Ok(alpha);
                }
                beta = beta.min(score);
            }
        }
        Ok(if maximizing { alpha } else { beta })
    }
}
