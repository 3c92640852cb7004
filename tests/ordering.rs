use chesslab::search::ordering::{is_capture, order_moves};
use chesslab::{CozyBoard, Move, Position};

#[test]
fn captures_first_mvv_lva() {
    // Pawn can take a queen or a pawn, queen can take a pawn.
    let b = CozyBoard::from_fen("7k/8/8/1p1q4/Q1P5/8/8/K7 w - - 0 1").unwrap();
    let ordered = order_moves(&b, b.legal_moves(), None);
    let names: Vec<String> = ordered.iter().take(3).map(|m| m.to_string()).collect();
    assert_eq!(names, ["c4d5", "c4b5", "a4b5"]);
    assert!(ordered[3..].iter().all(|&m| !is_capture(&b, m)), "quiet moves must follow captures");
}

#[test]
fn ordering_keeps_the_same_moves() {
    let b = CozyBoard::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4").unwrap();
    let moves = b.legal_moves();
    let mut ordered = order_moves(&b, moves.clone(), None);
    let mut original = moves;
    let key = |m: &Move| m.to_string();
    ordered.sort_by_key(key);
    original.sort_by_key(key);
    assert_eq!(ordered, original);
}

#[test]
fn hint_goes_first_even_if_quiet() {
    let b = CozyBoard::from_fen("7k/8/8/1p1q4/Q1P5/8/8/K7 w - - 0 1").unwrap();
    let hint = b.parse_move("a1b1").unwrap();
    let ordered = order_moves(&b, b.legal_moves(), Some(hint));
    assert_eq!(ordered[0], hint);
    assert_eq!(ordered[1].to_string(), "c4d5");
}
