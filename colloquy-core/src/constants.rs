/// Colloquy system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score a comparator returns for two identical statements.
pub const MAX_COMPARISON_SCORE: f64 = 100.0;

/// Score a comparator returns for two statements with nothing in common.
pub const MIN_COMPARISON_SCORE: f64 = 0.0;
