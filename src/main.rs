use anyhow::Context;
use clap::Parser;
use montepoker::cards::{Board, Hole};
use montepoker::daemon::{Daemon, Response};
use montepoker::lookup::Lookup;
use montepoker::simulation::{Engine, Odds};

/// Monte Carlo equity engine for Texas Hold-Em.
///
/// Runs either as a persistent daemon speaking the line-oriented CALC
/// protocol on stdin/stdout, or as a one-shot calculation over positional
/// arguments.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// serve the persistent command protocol
    #[arg(long)]
    daemon: bool,

    /// path to the perfect-hash table artifact
    #[arg(long, default_value = montepoker::DEFAULT_TABLE)]
    table: std::path::PathBuf,

    /// comma-separated board cards, '' for preflop
    board: Option<String>,

    /// known hands as |-separated card pairs, e.g. 'Ad,Kh|2c,7d'
    hands: Option<String>,

    /// number of random opponents (0-8)
    opponents: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    montepoker::log();
    let args = Args::parse();
    let lookup = Lookup::load(&args.table)
        .with_context(|| format!("loading lookup table {}", args.table.display()))?;
    match args.daemon {
        true => Ok(Daemon::from(lookup).run()?),
        false => oneshot(&lookup, args),
    }
}

fn oneshot(lookup: &Lookup, args: Args) -> anyhow::Result<()> {
    let (Some(board), Some(hands), Some(opponents)) = (args.board, args.hands, args.opponents)
    else {
        anyhow::bail!(
            "usage: montepoker <board> <known_hands> <opponents>\n\
             example: montepoker '9c,Th,Jd' 'Ad,Kh|2c,7d' 2\n\
             board can be empty: '' for preflop"
        );
    };
    let board = Board::try_from(board.as_str())?;
    let known = hands
        .split('|')
        .map(Hole::try_from)
        .collect::<Result<Vec<Hole>, _>>()?;
    anyhow::ensure!(!known.is_empty(), "at least one known hand is required");
    anyhow::ensure!(
        opponents <= montepoker::MAX_OPPONENTS,
        "opponents must be 0-{}",
        montepoker::MAX_OPPONENTS
    );

    println!(
        "Board: {}{}",
        board,
        if board.size() == 0 { "(preflop)" } else { "" }
    );
    println!(
        "Known hands: {}",
        known
            .iter()
            .map(Hole::to_string)
            .collect::<Vec<String>>()
            .join(" vs ")
    );
    println!("Opponents: {}", opponents);
    println!("Simulating...");

    let trials = montepoker::ONESHOT_TRIALS;
    let tallies = Engine::from(lookup).calculate(trials, &board, &known, opponents)?;
    for (hole, tally) in known.iter().zip(tallies.iter()) {
        let odds = Odds::from_tally(tally, trials);
        println!("{}  {:6.3}  {:6.3}", hole, odds.win_rate, odds.tie_rate);
    }
    if opponents > 0 {
        let odds = Odds::from_average(&tallies[known.len()..], trials);
        println!(
            "?? ??  {:6.3}  {:6.3} (x{} random hands)",
            odds.win_rate, odds.tie_rate, opponents
        );
    }
    let summary = Response::from((Odds::from_tally(&tallies[0], trials), trials));
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
