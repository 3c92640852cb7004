use chesslab::search::evaluate;
use chesslab::CozyBoard;

/// Colour-flipped copy of `fen`: ranks reversed, case swapped, other side to move.
fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let swap = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
            .collect()
    };
    let board = fields[0].split('/').rev().map(swap).collect::<Vec<_>>().join("/");
    let side = if fields[1] == "w" { "b" } else { "w" };
    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let s = swap(fields[2]);
        // Keep the conventional KQkq order.
        let mut out: String = s.chars().filter(|c| c.is_ascii_uppercase()).collect();
        out.extend(s.chars().filter(|c| c.is_ascii_lowercase()));
        out
    };
    let ep = match fields[3] {
        "-" => "-".to_string(),
        sq => {
            let (file, rank) = sq.split_at(1);
            format!("{file}{}", if rank == "3" { "6" } else { "3" })
        }
    };
    format!("{board} {side} {castling} {ep} {} {}", fields[4], fields[5])
}

#[test]
fn evaluation_is_color_symmetric() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 1 5",
        "8/5k2/3p4/1p1Pp3/pP2P3/P4K2/8/8 w - - 0 40",
        "k7/8/8/8/3N4/8/8/7K w - - 0 1",
    ];
    for fen in fens {
        let pos = CozyBoard::from_fen(fen).unwrap();
        let mirrored = CozyBoard::from_fen(&mirror_fen(fen)).unwrap();
        assert_eq!(evaluate(&pos), -evaluate(&mirrored), "asymmetric eval for {fen}");
    }
}

#[test]
fn mirror_helper_is_an_involution() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    assert_eq!(mirror_fen(&mirror_fen(fen)), fen);
}
