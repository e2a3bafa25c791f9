pub mod aggregator;
pub mod runner;
