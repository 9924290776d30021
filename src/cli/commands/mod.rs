pub mod complete;
pub mod config;
