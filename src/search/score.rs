// Centipawns from White's side. Mates carry the remaining depth at which
// they were found, so shorter mates sit further from zero.

pub type Score = i32;

pub const MATE: Score = 1_000_000;
pub const DRAW: Score = 0;
pub const INFINITY: Score = 10_000_000;
// table-relative mates sit just below MATE
const MATE_BOUND: Score = MATE - 1_000;

pub fn is_mate(score: Score) -> bool {
    score.abs() >= MATE_BOUND && score.abs() < INFINITY
}

pub fn adjust_for_depth(score: Score, depth: u32) -> Score {
    let d = depth as Score;
    if score >= MATE {
        score + d
    } else if score <= -MATE {
        score - d
    } else {
        score
    }
}

pub fn raw_from_adjusted(score: Score, depth: u32) -> Score {
    let d = depth as Score;
    if score >= MATE {
        (score - d).max(MATE)
    } else if score <= -MATE {
        (score + d).min(-MATE)
    } else {
        score
    }
}

// Stored mates count plies from the storing node, not from the root.
pub fn to_table(score: Score, depth: u32) -> Score {
    if !is_mate(score) {
        return score;
    }
    score - score.signum() * depth as Score
}

pub fn from_table(score: Score, depth: u32) -> Score {
    if !is_mate(score) {
        return score;
    }
    score + score.signum() * depth as Score
}
