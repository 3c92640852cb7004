use std::cmp::Reverse;

use crate::board::{Move, PieceKind, Position};
use crate::search::eval::piece_value;

const CAPTURE_BASE: i32 = 100_000;
const PROMOTION_BONUS: i32 = 100_000;
const HINT: i32 = i32::MAX;

// En passant is not counted.
pub fn captured<P: Position>(pos: &P, mv: Move) -> Option<PieceKind> {
    match pos.piece_at(mv.to) {
        Some((color, kind)) if color != pos.side_to_move() => Some(kind),
        _ => None,
    }
}

pub fn is_capture<P: Position>(pos: &P, mv: Move) -> bool {
    captured(pos, mv).is_some()
}

pub fn is_loud<P: Position>(pos: &P, mv: Move) -> bool {
    mv.promotion.is_some() || is_capture(pos, mv)
}

pub fn move_score<P: Position>(pos: &P, mv: Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = captured(pos, mv) {
        let attacker = pos.piece_at(mv.from).map_or(0, |(_, kind)| piece_value(kind));
        score += CAPTURE_BASE + 10 * piece_value(victim) - attacker;
    }
    if mv.promotion == Some(PieceKind::Queen) {
        score += PROMOTION_BONUS;
    }
    score
}

pub fn order_moves<P: Position>(pos: &P, mut moves: Vec<Move>, hint: Option<Move>) -> Vec<Move> {
    moves.sort_by_key(|&m| {
        if Some(m) == hint {
            Reverse(HINT)
        } else {
            Reverse(move_score(pos, m))
        }
    });
    moves
}

pub fn hint_first(mut moves: Vec<Move>, hint: Option<Move>) -> Vec<Move> {
    if let Some(h) = hint {
        if let Some(idx) = moves.iter().position(|&m| m == h) {
            let mv = moves.remove(idx);
            moves.insert(0, mv);
        }
    }
    moves
}
