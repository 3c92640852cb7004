use std::sync::OnceLock;

use crate::board::{Color, PieceKind, Position, Square};

fn piece_index(color: Color, kind: PieceKind) -> usize {
    color.index() * 6 + kind.index()
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

static TABLE: OnceLock<[u64; 12 * 64]> = OnceLock::new();
static SIDE_KEY: OnceLock<u64> = OnceLock::new();

fn init_table() -> &'static [u64; 12 * 64] {
    TABLE.get_or_init(|| {
        let mut t = [0u64; 12 * 64];
        let mut seed = 0xF00D_F00D_DEAD_BEEF;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

fn init_side() -> u64 {
    *SIDE_KEY.get_or_init(|| splitmix64(0xABCDEF1234567890))
}

// Castling rights, en passant and counters are not hashed.
pub fn compute<P: Position>(pos: &P) -> u64 {
    let table = init_table();
    let mut key = 0u64;
    for sq in Square::all() {
        if let Some((color, kind)) = pos.piece_at(sq) {
            key ^= table[piece_index(color, kind) * 64 + sq.index()];
        }
    }
    if pos.side_to_move() == Color::Black {
        key ^= init_side();
    }
    key
}
