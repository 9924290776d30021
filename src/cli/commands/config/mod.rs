//! Configuration management commands.
mod get;
mod set;

pub use get::GetCommand;
pub use set::SetCommand;
