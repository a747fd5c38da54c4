pub mod advice;
pub mod cards;
pub mod equity;
pub mod error;

#[cfg(feature = "server")]
pub mod api;

pub use error::Error;
pub use error::Result;

/// Probabilities, equities, and pot fractions.
pub type Probability = f64;
/// Stack sizes and bet amounts in big blinds.
pub type Chips = f64;

/// Trials per equity request unless the caller says otherwise.
pub const DEFAULT_TRIALS: usize = 10_000;
/// Trials behind a postflop recommendation. Lower than the equity
/// endpoint default since the advisor sits on the interactive path.
pub const ADVICE_TRIALS: usize = 4_000;
/// Trials per worker batch. Batches are the unit of parallelism and
/// each carries its own independently seeded generator.
pub const BATCH_SIZE: usize = 1_024;
/// Ceiling on caller-requested trials. One request should never pin
/// the worker pool.
pub const MAX_TRIALS: usize = 200_000;

/// Standard preflop open size in big blinds.
pub const OPEN_SIZE: Chips = 2.5;
/// Default bet sizing as a fraction of pot.
pub const BET_FRACTION: Probability = 0.67;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
