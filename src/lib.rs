pub mod chart;
pub mod config;
pub mod results;
pub mod units;

pub use config::PlotConfig;
pub use units::TimeUnit;
