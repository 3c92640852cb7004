use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chesslab::arena::{run_match, MatchParams};
use chesslab::{Agent, Algorithm, Color, CozyBoard, EngineConfig, Mode, Position};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser, Debug)]
#[command(name = "chesslab", version, about = "Chess move selection: minimax, alpha-beta and iterative deepening")]
struct Cli {
    /// JSON engine config; command-line flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chosen move for one position
    Bestmove {
        /// FEN string or 'startpos'
        #[arg(long, default_value = "startpos")]
        fen: String,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Play a game on the terminal
    Play {
        /// humanvsai, humanvshuman or aivsai
        #[arg(long, default_value = "humanvsai")]
        mode: String,
        /// Your color: 'w' for white, 'b' for black
        #[arg(long, default_value = "w")]
        color: String,
        /// Starting FEN position
        #[arg(long)]
        fen: Option<String>,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Pit two algorithms against each other
    Match {
        #[arg(long)]
        first: String,
        #[arg(long)]
        second: String,
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// random, minimax, alphabeta or iterative
    #[arg(long)]
    algo: Option<String>,
    /// Fixed search depth
    #[arg(long)]
    depth: Option<u32>,
    /// Movetime in milliseconds for iterative deepening
    #[arg(long)]
    movetime: Option<u64>,
    /// Transposition table size in MB (approximate)
    #[arg(long)]
    hash_mb: Option<usize>,
}

impl EngineArgs {
    fn apply(&self, mut config: EngineConfig) -> Result<EngineConfig> {
        if let Some(algo) = &self.algo {
            config.algorithm = algo.parse()?;
        }
        if let Some(d) = self.depth {
            config.search.depth = d;
        }
        if let Some(ms) = self.movetime {
            config.movetime_ms = ms;
        }
        if let Some(mb) = self.hash_mb {
            config.search.hash_mb = mb;
        }
        Ok(config)
    }
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn read_human_move(board: &CozyBoard) -> Result<Option<chesslab::Move>> {
    let stdin = io::stdin();
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;
        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        match board.parse_move(input.trim()) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => println!("{e}"),
        }
    }
}

fn play(config: EngineConfig, mode: Mode, human: Color, fen: Option<String>) -> Result<()> {
    let mut board = match fen {
        Some(f) => CozyBoard::from_fen(&f)?,
        None => CozyBoard::startpos(),
    };
    let mut agent = Agent::new(config);
    println!("{mode}");
    loop {
        println!("\n{board}");
        if let Some(outcome) = board.outcome() {
            println!("{outcome}");
            break;
        }
        let turn = board.side_to_move();
        println!("{turn}'s turn");
        if mode.is_human_turn(turn, human) {
            let Some(mv) = read_human_move(&board)? else {
                break;
            };
            board.play(mv)?;
        } else {
            match agent.play_one(&mut board)? {
                Some(decision) => {
                    if let Some(mv) = decision.best_move {
                        println!("Computer plays: {mv}");
                    }
                    println!("{decision}");
                }
                None => break,
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => EngineConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Bestmove { fen, engine } => {
            let config = engine.apply(base)?;
            let board: CozyBoard = fen.parse()?;
            let t0 = Instant::now();
            let decision = Agent::new(config).choose(&board)?;
            match decision.best_move {
                Some(mv) => println!("bestmove {mv}"),
                None => println!("bestmove (none)"),
            }
            eprintln!("{decision} wall={}ms", t0.elapsed().as_millis());
        }
        Command::Play { mode, color, fen, engine } => {
            let config = engine.apply(base)?;
            play(config, mode.parse()?, parse_color(&color)?, fen)?;
        }
        Command::Match { first, second, games, max_plies, seed, json, engine } => {
            let base = engine.apply(base)?;
            let first_cfg = EngineConfig { algorithm: first.parse::<Algorithm>()?, ..base.clone() };
            let second_cfg = EngineConfig { algorithm: second.parse::<Algorithm>()?, ..base };
            let params = MatchParams { games, max_plies, seed, ..Default::default() };

            let pb = ProgressBar::new(games as u64);
            pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {msg}")?);
            let summary = run_match(&first_cfg, &second_cfg, &params, |g| {
                pb.set_message(format!("last: {} plies, result {}", g.moves.len(), g.result));
                pb.inc(1);
            })?;
            pb.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} vs {}: +{} ={} -{}",
                    summary.first, summary.second, summary.wins, summary.draws, summary.losses
                );
            }
        }
    }
    Ok(())
}
