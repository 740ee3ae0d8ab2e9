//! Monte Carlo equity engine for Texas Hold-Em.
//!
//! A perfect-hash 7-card evaluator over offline-computed lookup tables, a
//! without-replacement sampler over the remaining deck, and the simulation
//! loop that drives both. The daemon module wraps the engine in the
//! line-oriented command protocol the host process speaks.

pub mod cards;
pub mod daemon;
pub mod error;
pub mod evaluation;
pub mod lookup;
pub mod simulation;

pub use error::{EquityError, EquityResult};

// ============================================================================
// PROTOCOL BOUNDS
// ============================================================================
/// Fewest trials a CALC request may ask for.
pub const MIN_TRIALS: usize = 100;
/// Most trials a CALC request may ask for.
pub const MAX_TRIALS: usize = 1_000_000;
/// Fewest sampled opponents a CALC request may ask for.
pub const MIN_OPPONENTS: usize = 1;
/// Most sampled opponents any request may ask for.
pub const MAX_OPPONENTS: usize = 8;
/// Fixed trial count of one-shot mode.
pub const ONESHOT_TRIALS: usize = 100_000;
/// Default table artifact path, resolved against the working directory as
/// the original deployment did.
pub const DEFAULT_TABLE: &str = "lookup_tablev3.bin";

/// Initialize terminal logging on stderr. The daemon protocol owns stdout,
/// so diagnostics must never land there.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
