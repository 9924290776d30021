//! Configuration object storage.
//!
//! Defines the contracts the editor works against ([`ConfigStore`] and
//! [`ConfigHandle`]) together with a YAML directory store used by the
//! binary and an in-memory store used in tests.

mod contracts;
mod error;
mod file_store;
mod memory;
mod merging;
mod naming;
mod object;
mod path_ops;


pub use contracts::{ConfigHandle, ConfigStore};
pub use error::ConfigError;
pub use file_store::FileConfigStore;
pub use memory::MemoryConfigStore;
pub use naming::validate_name;
pub use object::{Access, ConfigObject, ConfigSink};
