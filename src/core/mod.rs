pub mod backup;
pub mod calculator;
pub mod log;
pub mod recurrence;
pub mod summary;
