pub mod agenda;
pub mod economics;
pub mod rollup;
pub mod trend;
