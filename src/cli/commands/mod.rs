pub mod account;
pub mod backup;
pub mod category;
pub mod config;
pub mod db;
pub mod debt;
pub mod event;
pub mod expense;
pub mod export;
pub mod init;
pub mod log;
pub mod marker;
pub mod sim;
pub mod summary;
