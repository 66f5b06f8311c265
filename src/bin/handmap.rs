//! Heat Map Binary
//!
//! Deals rounds, tallies per-starting-hand outcomes, and plots them.
//!
//! Options: --seed, --suits, --ranks, --players, --rounds, --metric, --title, --output, --progress, --verbose

use clap::Parser;
use clap::ValueEnum;
use handmap::cards::Alphabet;
use handmap::plotting::PlotOptions;
use handmap::plotting::plot;
use handmap::simulation::Simulator;
use handmap::tally::Tally;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Metric {
    /// Share of deals won outright
    Win,
    /// Share of deals that split the pot
    Tie,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = handmap::SEED)]
    seed: u64,
    #[arg(long, default_value = handmap::SUITS)]
    suits: String,
    #[arg(long, default_value = handmap::RANKS)]
    ranks: String,
    #[arg(short, long, default_value_t = handmap::PLAYERS)]
    players: usize,
    #[arg(short = 'n', long, default_value_t = handmap::ROUNDS)]
    rounds: usize,
    #[arg(long, value_enum, default_value_t = Metric::Win)]
    metric: Metric,
    #[arg(long)]
    title: Option<String>,
    #[arg(short, long, default_value = "handmap.svg")]
    output: PathBuf,
    /// Show a progress bar while simulating
    #[arg(long)]
    progress: bool,
    /// Log every round as it is dealt
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    handmap::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let alphabet = Alphabet::new(&args.suits, &args.ranks)?;
    let rounds = Simulator::from_alphabet(args.seed, &alphabet, args.players)?
        .run_with(args.rounds, args.verbose, args.progress)?;
    let tally = Tally::from_rounds(&alphabet, &rounds);
    let matrix = match args.metric {
        Metric::Win => tally.wins(),
        Metric::Tie => tally.ties(),
    };
    let labels = tally.labels();
    let options = PlotOptions {
        title: args.title,
        rows: labels.clone(),
        cols: labels,
        output: Some(args.output),
    };
    let figure = plot(&matrix, &options)?;
    if figure.title_dropped {
        log::warn!("heat map saved without its title");
    }
    Ok(())
}
