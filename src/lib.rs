pub mod api;
pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod exit;
pub mod logging;
pub mod os;
pub mod unit;
