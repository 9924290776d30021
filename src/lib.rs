//! confctl - command-line administration of site configuration objects.
//!
//! Configuration objects are named YAML documents such as `system.site`.
//! confctl reads them, optionally with overrides layered on top, and edits
//! individual keys behind an explicit confirmation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use confctl::config_store::FileConfigStore;
//! use confctl::editor::{AutoAnswer, ConfigKeyEditor, InputFormat, ReaderInput, SetRequest};
//!
//! let store = FileConfigStore::new("config/active");
//! let editor = ConfigKeyEditor::new(&store, false);
//!
//! let request = SetRequest {
//!     config_name: "system.site",
//!     key: "name",
//!     value: "My site",
//!     input_format: InputFormat::String,
//! };
//! let outcome = editor.set(&request, &mut AutoAnswer(true), &mut ReaderInput::stdin())?;
//! println!("{outcome:?}");
//!
//! let name = editor.get("system.site", Some("name"), true)?;
//! println!("{name:?}");
//! # Ok::<(), confctl::editor::EditorError>(())
//! ```

/// Settings of the tool itself.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Configuration object storage.
pub mod config_store;

/// Reading and editing keys of configuration objects.
pub mod editor;

/// Command-line interface for configuration management.
pub mod cli;

/// Log subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{ConfctlError, Result};
