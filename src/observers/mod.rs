//! Ready-made handlers built on the public registration API.

pub mod logging;
pub mod stats;

pub use logging::{TRACING_HANDLER, install_tracing, uninstall_tracing};
pub use stats::{CallStats, OpStats, OpStatsSnapshot, STATS_HANDLER, StatsMap};
