//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::editor::InputFormat;

/// confctl - inspect and edit site configuration objects.
///
/// Configuration objects are YAML documents named like `system.site`.
/// Reads show stored values; `--include-overridden` layers overrides on
/// top. Every write asks for confirmation first.
#[derive(Parser, Debug)]
#[command(name = "confctl")]
#[command(author, version, about = "Inspect and edit site configuration objects", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Site root that relative storage paths are resolved against.
    /// Defaults to the current directory.
    #[arg(long, global = true, env = "CONFCTL_ROOT")]
    pub root: Option<PathBuf>,

    /// Settings file to load instead of the per-user one.
    #[arg(long, global = true, env = "CONFCTL_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Run every step of a write except saving it.
    #[arg(long, global = true)]
    pub simulate: bool,

    /// Answer yes to every confirmation.
    #[arg(short = 'y', long, global = true, conflicts_with = "no_interaction")]
    pub yes: bool,

    /// Never prompt; confirmations are declined.
    #[arg(short = 'n', long, global = true)]
    pub no_interaction: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Retrieve a configuration object or one of its keys
    #[command(name = "config:get", visible_aliases = ["cget", "config-get"])]
    ConfigGet(GetArgs),

    /// Set a key in a configuration object
    #[command(name = "config:set", visible_aliases = ["cset", "config-set"])]
    ConfigSet(SetArgs),

    /// List configuration object names for shell completion
    #[command(hide = true)]
    Complete(CompleteArgs),
}

/// Which storage a read goes to.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    /// Configuration currently in effect.
    #[default]
    Active,
    /// Staged configuration awaiting import.
    Sync,
}

/// How `config:get` prints values.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments of `config:get`.
#[derive(Args, Debug, Clone, Default)]
#[command(after_help = "Examples:\n  \
    confctl config:get system.site\n  \
    confctl config:get system.site page.front\n  \
    confctl config:get system.site name --no-include-overridden")]
pub struct GetArgs {
    /// Configuration object name. Asked for interactively when omitted.
    pub config_name: Option<String>,

    /// Dotted key path inside the object.
    pub key: Option<String>,

    /// Storage to read from.
    #[arg(long, value_enum, default_value_t = Source::Active)]
    pub source: Source,

    /// Apply overrides to the values shown.
    #[arg(long, overrides_with = "no_include_overridden")]
    pub include_overridden: bool,

    /// Show stored values without overrides (default).
    #[arg(long, overrides_with = "include_overridden")]
    pub no_include_overridden: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl GetArgs {
    /// Whether overrides are layered into the result. Off unless asked for.
    pub fn include_overridden(&self) -> bool {
        self.include_overridden && !self.no_include_overridden
    }
}

/// Arguments of `config:set`.
#[derive(Args, Debug, Clone)]
#[command(after_help = "Examples:\n  \
    confctl config:set system.site name MySite\n  \
    confctl config:set system.site page.front /node/1\n  \
    confctl config:set user.role.test permissions '[]'\n  \
    cat site.yml | confctl config:set system.site ? - --input-format=yaml")]
pub struct SetArgs {
    /// Configuration object name.
    pub config_name: String,

    /// Dotted key path, or `?` to set several top-level keys from a mapping.
    pub key: String,

    /// Value to assign. Use `-` to read it from standard input.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// How to interpret the value: `string` or `yaml`.
    #[arg(long, default_value = "string")]
    pub input_format: InputFormat,
}

/// Arguments of the completion helper.
#[derive(Args, Debug, Clone, Default)]
pub struct CompleteArgs {
    /// Only list names starting with this prefix.
    pub prefix: Option<String>,
}
