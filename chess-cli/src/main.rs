//! chess-cli - play a move list against the rules engine and inspect positions.
//!
//! Subcommands:
//! - `play`: apply moves in coordinate notation (`e2e4`, `e7e8q`) and report
//!   the resulting position and status.
//! - `moves`: list the legal moves of the piece on a square.
//! - `status`: report side to move and check / checkmate / stalemate.
//!
//! Every subcommand starts from the standard position unless `--fen` (or the
//! `CHESS_CLI_START_FEN` variable, see [`config`]) says otherwise.

use anyhow::Context;
use chess::{Game, GameStatus, HistoryEntry, Move, Position};
use clap::{Parser, Subcommand};

mod config;

#[derive(Parser)]
#[command(name = "chess-cli", about = "Play and inspect chess positions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a sequence of moves and print the resulting position.
    Play {
        /// Starting position as FEN (placement and side to move).
        #[arg(long)]
        fen: Option<String>,

        /// Print the final game as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Moves in coordinate notation, e.g. `e2e4 e7e5 g1f3`.
        moves: Vec<String>,
    },
    /// List the legal moves of the piece on a square.
    Moves {
        #[arg(long)]
        fen: Option<String>,

        /// Comma-separated moves to play first, e.g. `e2e4,e7e5`.
        #[arg(long, value_delimiter = ',')]
        after: Vec<String>,

        /// Square in algebraic notation, e.g. `g1`.
        square: String,
    },
    /// Show whose turn it is and whether the game is over.
    Status {
        #[arg(long)]
        fen: Option<String>,
    },
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not parse move {index} ({text}): {source}")]
    BadMove {
        index: usize,
        text: String,
        source: chess::MoveParseError,
    },

    #[error("move {index} ({mv}) rejected: {source}")]
    Rejected {
        index: usize,
        mv: Move,
        source: chess::GameError,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play { fen, json, moves } => {
            let mut game = load_game(fen)?;
            let moves = parse_moves(&moves)?;
            let entries = apply_moves(&mut game, &moves)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&game)?);
            } else {
                for entry in &entries {
                    println!("{}", describe_entry(entry));
                }
                println!("{}", game.to_fen());
                println!("{}", describe_status(game.status()));
            }
        }
        Commands::Moves { fen, after, square } => {
            let mut game = load_game(fen)?;
            apply_moves(&mut game, &parse_moves(&after)?)?;
            let square: Position = square
                .parse()
                .with_context(|| format!("invalid square {square:?}"))?;
            for mv in game.valid_moves(square) {
                println!("{mv}");
            }
        }
        Commands::Status { fen } => {
            let game = load_game(fen)?;
            println!("{} to move", game.team_turn());
            println!("{}", describe_status(game.status()));
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable. `RUST_LOG` wins over the configured default.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config::get_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_game(fen: Option<String>) -> anyhow::Result<Game> {
    match fen.or_else(config::get_start_fen) {
        Some(fen) => {
            tracing::debug!(%fen, "loading position");
            Game::from_fen(&fen).with_context(|| format!("invalid FEN {fen:?}"))
        }
        None => Ok(Game::new()),
    }
}

/// Parse coordinate-notation moves, reporting the 1-based index of the first bad one.
fn parse_moves(texts: &[String]) -> Result<Vec<Move>, CliError> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            text.parse().map_err(|source| CliError::BadMove {
                index: i + 1,
                text: text.clone(),
                source,
            })
        })
        .collect()
}

/// Apply moves in order, stopping at the first one the engine refuses.
fn apply_moves(game: &mut Game, moves: &[Move]) -> Result<Vec<HistoryEntry>, CliError> {
    let mut entries = Vec::with_capacity(moves.len());
    for (i, &mv) in moves.iter().enumerate() {
        let entry = game.make_move(mv).map_err(|source| CliError::Rejected {
            index: i + 1,
            mv,
            source,
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

fn describe_entry(entry: &HistoryEntry) -> String {
    let mut line = format!("{} {}", entry.piece.team, entry.mv);
    if let Some(captured) = entry.captured {
        line.push_str(&format!(" captures {}", captured.kind));
    }
    if let Some(kind) = entry.promoted_to {
        line.push_str(&format!(" promotes to {}", kind));
    }
    line
}

fn describe_status(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => "in progress".to_string(),
        GameStatus::Check(team) => format!("{team} is in check"),
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Stalemate => "stalemate".to_string(),
    }
}
