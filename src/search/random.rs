use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Move, Position};

pub fn random_move<P: Position>(pos: &P) -> Option<Move> {
    random_move_with(pos, &mut rand::thread_rng())
}

pub fn random_move_with<P: Position, R: Rng + ?Sized>(pos: &P, rng: &mut R) -> Option<Move> {
    pos.legal_moves().choose(rng).copied()
}
