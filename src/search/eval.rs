use serde::{Deserialize, Serialize};

use crate::board::{Color, Outcome, PieceKind, Position, Square};
use crate::search::pst;
use crate::search::score::{Score, DRAW, MATE};

const PAWN: i32 = 100;
const KNIGHT: i32 = 320;
const BISHOP: i32 = 330;
const ROOK: i32 = 500;
const QUEEN: i32 = 900;
const KING: i32 = 20_000;

pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN,
        PieceKind::Knight => KNIGHT,
        PieceKind::Bishop => BISHOP,
        PieceKind::Rook => ROOK,
        PieceKind::Queen => QUEEN,
        PieceKind::King => KING,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    pub mobility_weight: i32,
    pub check_penalty: i32,
    pub endgame_threshold: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self { mobility_weight: 10, check_penalty: 0, endgame_threshold: 2_000 }
    }
}

// Always from White's point of view.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    params: EvalParams,
}

impl Evaluator {
    pub fn new(params: EvalParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    pub fn terminal(outcome: Outcome) -> Score {
        match outcome {
            Outcome::Checkmate { winner } => winner.sign() * MATE,
            Outcome::Stalemate | Outcome::Draw => DRAW,
        }
    }

    pub fn evaluate<P: Position>(&self, pos: &P) -> Score {
        if let Some(outcome) = pos.outcome() {
            return Self::terminal(outcome);
        }

        let pieces: Vec<(Square, Color, PieceKind)> = Square::all()
            .filter_map(|sq| pos.piece_at(sq).map(|(color, kind)| (sq, color, kind)))
            .collect();

        let non_king: i32 = pieces
            .iter()
            .filter(|(_, _, kind)| *kind != PieceKind::King)
            .map(|&(_, _, kind)| piece_value(kind))
            .sum();
        let endgame = non_king < self.params.endgame_threshold;

        let mut score = 0;
        for &(sq, color, kind) in &pieces {
            score += color.sign() * (piece_value(kind) + pst::value(kind, color, sq, endgame));
        }

        let stm = pos.side_to_move();
        if self.params.mobility_weight != 0 {
            let mobility = pos.legal_moves().len() as i32;
            score += stm.sign() * mobility * self.params.mobility_weight;
        }
        if self.params.check_penalty != 0 && pos.is_in_check(stm) {
            score -= stm.sign() * self.params.check_penalty;
        }
        score
    }

}

pub fn evaluate<P: Position>(pos: &P) -> Score {
    Evaluator::default().evaluate(pos)
}
