use chesslab::search::{evaluate, Searcher};
use chesslab::CozyBoard;

#[test]
fn qsearch_sees_hanging_queen() {
    let fen = "4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1"; // hanging queen vs bishop
    let b = CozyBoard::from_fen(fen).unwrap();
    let mut s = Searcher::default();
    let stand = evaluate(&b);
    let qs = s.qsearch_eval(&b).unwrap();
    // Scores are from White's side, so Black winning the queen lowers it.
    assert!(qs < stand, "qsearch should see Bxf4: qs {qs} vs stand {stand}");
    assert!(stand - qs > 500, "gain should be about a queen, got {}", stand - qs);
}

#[test]
fn qsearch_equals_standpat_without_captures() {
    let fen = "k7/8/8/8/8/8/8/7K w - - 0 1"; // bare kings, no captures
    let b = CozyBoard::from_fen(fen).unwrap();
    let mut s = Searcher::default();
    let stand = evaluate(&b);
    let qs = s.qsearch_eval(&b).unwrap();
    assert_eq!(qs, stand, "qsearch should equal stand pat without captures");
    assert_eq!(s.stats().qnodes, 1);
}

#[test]
fn quiet_startpos_is_stand_pat() {
    let b = CozyBoard::startpos();
    let mut s = Searcher::default();
    assert_eq!(s.qsearch_eval(&b).unwrap(), evaluate(&b));
}
