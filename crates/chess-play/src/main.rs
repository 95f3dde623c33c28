//! Terminal front end for the chess rules engine.
//!
//! Moves are typed as four numbers, `fromRow fromCol toRow toCol`, with row 0
//! at the top (Black's back rank). Other commands:
//! - `moves <row> <col>` lists legal destinations for a piece
//! - `free on|off` toggles unrestricted placement mode
//! - `quit` leaves the game

use anyhow::Context;
use chess_core::{Color, PieceKind, Square};
use chess_rules::{Game, GameConfig, MoveReport};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Play a two-player game in the terminal.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Two-player chess in the terminal")]
struct Args {
    /// Path to a TOML game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in unrestricted (free placement) mode
    #[arg(long)]
    unrestricted: bool,

    /// Seconds on each side's clock
    #[arg(long)]
    seconds: Option<u64>,

    /// Play without a clock
    #[arg(long)]
    no_clock: bool,
}

enum Command {
    Move([i32; 4]),
    Moves(i32, i32),
    Free(bool),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["exit"] => Some(Command::Quit),
        ["free", "on"] => Some(Command::Free(true)),
        ["free", "off"] => Some(Command::Free(false)),
        ["moves", row, col] => Some(Command::Moves(row.parse().ok()?, col.parse().ok()?)),
        [a, b, c, d] => Some(Command::Move([
            a.parse().ok()?,
            b.parse().ok()?,
            c.parse().ok()?,
            d.parse().ok()?,
        ])),
        _ => None,
    }
}

/// Asks on stdin which piece a pawn becomes.
fn prompt_promotion(color: Color, square: Square) -> Option<PieceKind> {
    print!("{} pawn promotes on {}. Choose q/r/b/n: ", color, square);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    line.trim().chars().next().and_then(PieceKind::from_char)
}

fn print_status(game: &Game) {
    print!("{}", game.board());
    if let Some(clock) = game.clock() {
        println!(
            "White {}s | Black {}s",
            clock.remaining(Color::White).as_secs(),
            clock.remaining(Color::Black).as_secs()
        );
    }
}

fn print_report(game: &Game, report: &MoveReport) {
    if !report.accepted {
        println!("Illegal move.");
        return;
    }
    if report.promotion.is_some_and(|p| p.defaulted) {
        println!("Invalid promotion piece. Promoting to queen by default.");
    }
    if report.check && !report.checkmate {
        println!("{} is in check!", game.turn());
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.unrestricted {
        config.unrestricted = true;
    }
    if let Some(seconds) = args.seconds {
        config.clock.seconds_per_side = seconds;
    }
    if args.no_clock {
        config.clock.enabled = false;
    }
    tracing::info!(?config, "starting game");

    let mut game = Game::with_config(&config, prompt_promotion);
    game.on_game_end(|winner| println!("{} wins!", winner));

    let stdin = io::stdin();
    let mut last_tick = Instant::now();
    print_status(&game);

    while !game.is_game_over() {
        print!("{} to move> ", game.turn());
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let now = Instant::now();
        game.tick_clock(now.duration_since(last_tick));
        last_tick = now;
        if game.is_game_over() {
            break;
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Free(enabled)) => {
                game.set_unrestricted_mode(enabled);
                println!("Unrestricted mode {}.", if enabled { "on" } else { "off" });
            }
            Some(Command::Moves(row, col)) => match Square::from_coords(row, col) {
                Some(from) => {
                    let targets: Vec<String> = game
                        .legal_destinations(from)
                        .iter()
                        .map(Square::to_string)
                        .collect();
                    println!("{}", targets.join(" "));
                }
                None => println!("No such square."),
            },
            Some(Command::Move([fr, fc, tr, tc])) => match game.propose_move(fr, fc, tr, tc) {
                Ok(report) => {
                    print_report(&game, &report);
                    if report.accepted {
                        print_status(&game);
                    }
                }
                Err(err @ chess_rules::EngineError::InvalidCoordinate { .. }) => {
                    println!("{}", err)
                }
                Err(err) => return Err(err).context("engine state is corrupted"),
            },
            None => println!("Enter a move as: fromRow fromCol toRow toCol"),
        }
    }
    Ok(())
}
