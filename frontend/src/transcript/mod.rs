pub mod aggregator;
pub mod components;
