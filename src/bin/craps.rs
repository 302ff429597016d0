use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rust_craps::session::format_rolls;
use rust_craps::{DiceSource, GameEngine, ScriptedDice, Session, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play pass-line craps from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dice seed; random when omitted.
    #[arg(short, long, conflicts_with = "dice")]
    seed: Option<u64>,

    /// Number of games to play.
    #[arg(short, long, default_value_t = 1)]
    games: u64,

    /// Print every roll of every game.
    #[arg(long)]
    show_rolls: bool,

    /// Replay fixed dice instead of rolling, e.g. `--dice 2,3 --dice 3,2`.
    #[arg(long = "dice", value_parser = parse_pair)]
    dice: Vec<[u8; 2]>,
}

fn parse_pair(s: &str) -> Result<[u8; 2], String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two faces like 3,4 but got {s:?}"))?;
    let face = |v: &str| v.trim().parse::<u8>().map_err(|e| format!("{v:?}: {e}"));
    Ok([face(a)?, face(b)?])
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if args.dice.is_empty() {
        let mut config = SessionConfig::new().with_games(args.games);
        config.engine.seed = args.seed;
        let mut session = Session::from_config(&config);
        info!(seed = ?session.engine().seed(), "rolling seeded dice");
        run(&mut session, config.games, args.show_rolls);
    } else {
        let dice = ScriptedDice::new(args.dice.iter().copied()).context("invalid --dice script")?;
        let mut session = Session::new(Arc::new(GameEngine::new(dice)));
        run(&mut session, args.games, args.show_rolls);
    }

    Ok(())
}

fn run<D: DiceSource>(session: &mut Session<D>, games: u64, show_rolls: bool) {
    let stats = session.play_games_with(games, |index, game| {
        if show_rolls {
            print!("game {}:\n{}", index + 1, format_rolls(&game.rolls));
        }
        println!("game {}: {}", index + 1, game.state);
    });

    println!(
        "wins: {}  losses: {}  win rate: {:.3}  avg rolls: {:.2}",
        stats.wins,
        stats.losses,
        stats.win_rate(),
        stats.average_rolls()
    );

    session.engine().stop();
}
