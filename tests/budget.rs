use std::time::Duration;

use chesslab::search::{best_move_within, search_within, Searcher};
use chesslab::{CozyBoard, Position};

#[test]
fn short_budget_still_returns_a_move() {
    let b = CozyBoard::startpos();
    let mv = best_move_within(&b, Duration::from_millis(50)).expect("a move");
    assert!(b.legal_moves().contains(&mv));
}

#[test]
fn budget_is_roughly_respected() {
    let b = CozyBoard::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4").unwrap();
    let budget = Duration::from_millis(200);
    let timed = search_within(&b, budget, Searcher::default());
    assert!(timed.best_move.is_some());
    assert!(timed.elapsed < budget + Duration::from_secs(2), "took {:?}", timed.elapsed);
}

#[test]
fn mated_position_has_nothing_to_play() {
    let mated = CozyBoard::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    let timed = search_within(&mated, Duration::from_millis(50), Searcher::default());
    assert_eq!(timed.best_move, None);
    assert!(timed.last.is_none());
}
