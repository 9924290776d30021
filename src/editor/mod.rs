//! Reading and editing values inside configuration objects.
//!
//! [`ConfigKeyEditor`] implements `config:get` and `config:set` on top of
//! the narrow [`ConfigStore`](crate::config_store::ConfigStore) contract,
//! with confirmation and piped input injected as [`Confirmer`] and
//! [`InputSource`].

mod confirm;
mod error;
mod input;
mod key_editor;
mod names;
mod value;

#[cfg(test)]
mod tests;

pub use confirm::{AutoAnswer, Chooser, Confirmer, Prompt, ScriptedAnswers, TerminalPrompt};
pub use error::EditorError;
pub use input::{InputSource, ReaderInput};
pub use key_editor::{BULK_KEY, Change, ConfigKeyEditor, SetOutcome, SetRequest};
pub use names::{NameList, csv_to_array, validate_config_name};
pub use value::{InputFormat, STDIN_MARKER, normalize_value};
