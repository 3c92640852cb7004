use log::debug;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::board::cozy::CozyBoard;
use crate::board::{Color, Outcome, Position};
use crate::config::EngineConfig;
use crate::error::SearchError;

#[derive(Clone, Debug)]
pub struct MatchParams {
    pub games: usize,
    // unfinished games count as draws
    pub max_plies: usize,
    pub seed: u64,
    pub start: CozyBoard,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self { games: 10, max_plies: 200, seed: 0, start: CozyBoard::startpos() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: i8, // 1 white win, 0 draw, -1 black win
    pub first_played_white: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub first: String,
    pub second: String,
    // wins/draws/losses of the first engine
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    fn record(&mut self, game: GameRecord) {
        let first_sign = if game.first_played_white { 1 } else { -1 };
        match game.result * first_sign {
            1 => self.wins += 1,
            -1 => self.losses += 1,
            _ => self.draws += 1,
        }
        self.games.push(game);
    }
}

fn result_of(outcome: Option<Outcome>) -> i8 {
    match outcome {
        Some(Outcome::Checkmate { winner: Color::White }) => 1,
        Some(Outcome::Checkmate { winner: Color::Black }) => -1,
        _ => 0,
    }
}

pub fn play_game(
    start: &CozyBoard,
    white: &mut Agent,
    black: &mut Agent,
    max_plies: usize,
) -> Result<GameRecord, SearchError> {
    let mut board = start.clone();
    let mut record = GameRecord { moves: Vec::new(), result: 0, first_played_white: true };
    for _ in 0..max_plies {
        if board.outcome().is_some() {
            break;
        }
        let agent = if board.side_to_move() == Color::White { &mut *white } else { &mut *black };
        match agent.play_one(&mut board)? {
            Some(decision) => {
                if let Some(mv) = decision.best_move {
                    record.moves.push(mv.to_string());
                }
            }
            None => break,
        }
    }
    // the last ply played may have ended the game
    record.result = result_of(board.outcome());
    debug!("game ended after {} plies, result {}", record.moves.len(), record.result);
    Ok(record)
}

// Colors swap every game.
pub fn run_match(
    first: &EngineConfig,
    second: &EngineConfig,
    params: &MatchParams,
    mut on_game: impl FnMut(&GameRecord),
) -> Result<MatchSummary, SearchError> {
    let mut summary = MatchSummary {
        first: first.algorithm.to_string(),
        second: second.algorithm.to_string(),
        ..Default::default()
    };
    let mut a = Agent::with_seed(first.clone(), params.seed);
    let mut b = Agent::with_seed(second.clone(), params.seed.wrapping_add(1));
    for gi in 0..params.games {
        let first_white = gi % 2 == 0;
        let mut game = if first_white {
            play_game(&params.start, &mut a, &mut b, params.max_plies)?
        } else {
            play_game(&params.start, &mut b, &mut a, params.max_plies)?
        };
        game.first_played_white = first_white;
        on_game(&game);
        summary.record(game);
    }
    Ok(summary)
}
