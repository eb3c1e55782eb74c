// Analyzer module: aggregates submodules for the producer interval computation.

pub mod interval_analysis;
pub mod intervals;
pub mod win_history;

// Re-export the main Analyzer implementation for ease of use.
pub use interval_analysis::{Analyzer, IntervalAnalyzer};
