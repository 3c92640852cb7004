use std::fmt;
use std::str::FromStr;

use cozy_chess::{Board, Color as CozyColor, GameStatus, Piece, Square as CozySquare};

use super::{Color, Move, Outcome, PieceKind, Position, Square};
use crate::error::BoardError;

/// [`Position`] over a `cozy_chess::Board`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CozyBoard {
    board: Board,
}

impl Default for CozyBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl CozyBoard {
    pub fn startpos() -> Self {
        Self { board: Board::default() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        Board::from_fen(fen.trim(), false)
            .map(|board| Self { board })
            .map_err(|e| BoardError::InvalidFen(format!("{fen}: {e:?}")))
    }

    /// Finds the legal move matching `mv_uci`, without playing it.
    pub fn parse_move(&self, mv_uci: &str) -> Result<Move, BoardError> {
        let mv: Move = mv_uci.trim().parse()?;
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(BoardError::IllegalMove(mv_uci.to_string()))
        }
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<(), BoardError> {
        let mv = self.parse_move(mv_uci)?;
        self.play(mv)
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, BoardError> {
        let mut pos = Self::startpos();
        for m in moves {
            pos.make_move_uci(m)?;
        }
        Ok(pos)
    }

    fn to_cozy_square(sq: Square) -> CozySquare {
        CozySquare::index((7 - sq.row()) * 8 + sq.col())
    }

    fn from_cozy_square(sq: CozySquare) -> Square {
        let idx = sq as usize;
        Square::new(7 - (idx / 8) as u8, (idx % 8) as u8)
    }

    // cozy-chess encodes castling as "king takes own rook"; the rest of the
    // crate sees the king moving two files.
    fn from_cozy_move(&self, mv: cozy_chess::Move) -> Move {
        let from = Self::from_cozy_square(mv.from);
        let mut to = Self::from_cozy_square(mv.to);
        let castles = self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.color_on(mv.to) == Some(self.board.side_to_move());
        if castles {
            let col = if to.col() > from.col() { 6 } else { 2 };
            to = Square::new(from.row() as u8, col);
        }
        Move { from, to, promotion: mv.promotion.map(from_cozy_piece) }
    }

    fn to_cozy_move(&self, mv: Move) -> cozy_chess::Move {
        let from = Self::to_cozy_square(mv.from);
        let mut to = Self::to_cozy_square(mv.to);
        let king = self.board.piece_on(from) == Some(Piece::King);
        if king && mv.from.row() == mv.to.row() && mv.from.col().abs_diff(mv.to.col()) == 2 {
            let rook_col = if mv.to.col() > mv.from.col() { 7 } else { 0 };
            to = Self::to_cozy_square(Square::new(mv.from.row() as u8, rook_col));
        }
        cozy_chess::Move { from, to, promotion: mv.promotion.map(to_cozy_piece) }
    }
}

fn from_cozy_piece(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn to_cozy_piece(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

fn from_cozy_color(color: CozyColor) -> Color {
    match color {
        CozyColor::White => Color::White,
        CozyColor::Black => Color::Black,
    }
}

impl Position for CozyBoard {
    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|ml| {
            for m in ml {
                moves.push(self.from_cozy_move(m));
            }
            false
        });
        moves
    }

    fn piece_at(&self, sq: Square) -> Option<(Color, PieceKind)> {
        let csq = Self::to_cozy_square(sq);
        let piece = self.board.piece_on(csq)?;
        let color = self.board.color_on(csq)?;
        Some((from_cozy_color(color), from_cozy_piece(piece)))
    }

    fn play(&mut self, mv: Move) -> Result<(), BoardError> {
        let cmv = self.to_cozy_move(mv);
        self.board.try_play(cmv).map_err(|_| BoardError::IllegalMove(mv.to_string()))
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.board.status() {
            GameStatus::Ongoing => None,
            GameStatus::Won => Some(Outcome::Checkmate { winner: !self.side_to_move() }),
            GameStatus::Drawn if self.board.halfmove_clock() >= 100 => Some(Outcome::Draw),
            GameStatus::Drawn => Some(Outcome::Stalemate),
        }
    }

    fn side_to_move(&self) -> Color {
        from_cozy_color(self.board.side_to_move())
    }

    fn is_in_check(&self, color: Color) -> bool {
        // The side that just moved can never be left in check.
        color == self.side_to_move() && !self.board.checkers().is_empty()
    }
}

impl FromStr for CozyBoard {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "startpos" {
            return Ok(Self::startpos());
        }
        Self::from_fen(s)
    }
}

impl fmt::Display for CozyBoard {
    /// Text diagram from White's side, uppercase for White.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = match self.piece_at(Square::new(row, col)) {
                    Some((Color::White, kind)) => kind.to_char().to_ascii_uppercase(),
                    Some((Color::Black, kind)) => kind.to_char(),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_has_twenty_moves() {
        let b = CozyBoard::startpos();
        assert_eq!(b.legal_moves().len(), 20);
        assert_eq!(b.side_to_move(), Color::White);
        assert!(b.outcome().is_none());
    }

    #[test]
    fn squares_map_to_board_rows() {
        let b = CozyBoard::startpos();
        // row 0 is the eighth rank
        assert_eq!(b.piece_at("e8".parse().unwrap()), Some((Color::Black, PieceKind::King)));
        assert_eq!(b.piece_at(Square::new(7, 4)), Some((Color::White, PieceKind::King)));
        assert_eq!(b.piece_at(Square::new(4, 4)), None);
    }

    #[test]
    fn castling_is_a_two_file_king_move() {
        let mut b = CozyBoard::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = b.legal_moves();
        let short: Move = "e1g1".parse().unwrap();
        let long: Move = "e1c1".parse().unwrap();
        assert!(moves.contains(&short));
        assert!(moves.contains(&long));
        b.play(short).unwrap();
        assert_eq!(b.piece_at("g1".parse().unwrap()), Some((Color::White, PieceKind::King)));
        assert_eq!(b.piece_at("f1".parse().unwrap()), Some((Color::White, PieceKind::Rook)));
    }

    #[test]
    fn detects_checkmate_and_stalemate() {
        // Fool's mate
        let mate = CozyBoard::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert_eq!(mate.outcome(), Some(Outcome::Checkmate { winner: Color::Black }));
        assert!(mate.is_in_check(Color::White));
        assert!(!mate.is_in_check(Color::Black));

        let stale = CozyBoard::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(stale.outcome(), Some(Outcome::Stalemate));
    }

    #[test]
    fn illegal_uci_move_is_rejected() {
        let mut b = CozyBoard::startpos();
        assert!(matches!(b.make_move_uci("e2e5"), Err(BoardError::IllegalMove(_))));
        assert!(matches!(b.make_move_uci("zz"), Err(BoardError::InvalidMove(_))));
        b.make_move_uci("e2e4").unwrap();
        assert_eq!(b.side_to_move(), Color::Black);
    }
}
