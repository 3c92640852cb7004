use chesslab::search::score::MATE;
use chesslab::search::{iterative_deepening, Minimax, Searcher};
use chesslab::CozyBoard;

#[test]
fn back_rank_mate_for_white() {
    let b = CozyBoard::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let r = Searcher::default().search_depth(&b, 3).unwrap();
    assert_eq!(r.best_move.unwrap().to_string(), "a1a8");
    // Mate found with two plies of depth still unused.
    assert_eq!(r.score, MATE + 2);
}

#[test]
fn back_rank_mate_for_black() {
    let b = CozyBoard::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let r = Searcher::default().search_depth(&b, 3).unwrap();
    assert_eq!(r.best_move.unwrap().to_string(), "a8a1");
    assert_eq!(r.score, -(MATE + 2));
}

#[test]
fn minimax_agrees_on_mate_score() {
    let b = CozyBoard::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    for depth in 1..=3 {
        let mm = Minimax::default().search(&b, depth).unwrap();
        assert_eq!(mm.score, MATE + depth as i32 - 1, "depth {depth}");
        assert_eq!(mm.best_move.unwrap().to_string(), "a1a8");
    }
}

#[test]
fn shorter_mate_scores_higher() {
    // Rh8 mates at once; with the king on c6 it takes Kb6 Kb8 Rh8.
    let in_one = CozyBoard::from_fen("k7/8/1K6/8/8/8/8/7R w - - 0 1").unwrap();
    let in_two = CozyBoard::from_fen("k7/8/2K5/8/8/8/8/7R w - - 0 1").unwrap();
    let one = Searcher::default().search_depth(&in_one, 3).unwrap().score;
    let two = Searcher::default().search_depth(&in_two, 3).unwrap().score;
    assert_eq!(one, MATE + 2);
    assert_eq!(two, MATE);
    assert!(one.abs() > two.abs());
    assert_eq!(Minimax::default().search(&in_two, 3).unwrap().score, MATE);
}

#[test]
fn driver_prefers_the_shorter_mate() {
    // Rh7 and friends also mate, only later.
    let b = CozyBoard::from_fen("k7/8/1K6/8/8/8/8/7R w - - 0 1").unwrap();
    let candidates: Vec<String> = iterative_deepening(&b).take(4).map(|m| m.to_string()).collect();
    assert_eq!(candidates.len(), 4);
    assert_eq!(candidates[3], "h1h8");
    assert_eq!(candidates[1], "h1h8");
}
