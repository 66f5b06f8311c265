//! Monte Carlo Texas Hold'em deals rendered as starting-hand heat maps.
//!
//! - [`simulation`] deals boards and hole cards from a seeded deck and scores
//!   every hand through an external evaluator.
//! - [`tally`] folds round records into 13×13 win and tie rate matrices.
//! - [`plotting`] renders any such matrix as an annotated heat map.
//!
//! The matrix convention shared by all three: rows and columns run from the
//! strongest rank to the weakest, the diagonal holds pocket pairs, the upper
//! triangle offsuit combos and the lower triangle suited combos.
pub mod cards;
pub mod error;
pub mod plotting;
pub mod simulation;
pub mod tally;

pub use error::Error;
pub use error::Result;

/// Win and tie rates, cell intensities.
pub type Probability = f64;

// ============================================================================
// SIMULATION DEFAULTS
// ============================================================================
/// Seed used when none is given.
pub const SEED: u64 = 0;
/// Suit alphabet: spades, hearts, diamonds, clubs.
pub const SUITS: &str = "shdc";
/// Rank alphabet, weakest first.
pub const RANKS: &str = "23456789TJQKA";
/// Players dealt in per round.
pub const PLAYERS: usize = 2;
/// Rounds simulated by the CLI when none is given.
pub const ROUNDS: usize = 100;
/// Community cards dealt per round.
pub const BOARD_SIZE: usize = 5;
/// Private cards dealt per player.
pub const HOLE_SIZE: usize = 2;

// ============================================================================
// PLOTTING DEFAULTS
// ============================================================================
/// Font family for titles and labels in the basic Latin range.
pub const DEFAULT_FONT: &str = "Arial";
/// Fonts tried, in order, for titles outside the basic Latin range.
pub const FONT_FALLBACKS: [&str; 4] = ["Hei", "SimHei", "Microsoft YaHei", "Noto Sans CJK SC"];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let init = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    if init.is_err() {
        log::debug!("logger already initialized");
    }
}

/// Progress bar over `n` rounds.
#[cfg(feature = "progress")]
pub fn progress(n: usize) -> indicatif::ProgressBar {
    let style = indicatif::ProgressStyle::with_template(
        "{spinner:.cyan} {elapsed_precise} [{bar:40.cyan/blue}] {pos:>8}/{len:8} {per_sec}",
    )
    .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
    .progress_chars("=> ");
    let progress = indicatif::ProgressBar::new(n as u64);
    progress.set_style(style);
    progress
}
