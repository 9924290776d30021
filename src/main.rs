//! confctl - command-line entry point.
//!
//! Parses arguments, loads settings, sets up logging and storage, then
//! hands the command to the CLI service. Exit status is 0 on success
//! (including a declined confirmation) and 1 on any error.

use std::{
    env,
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use confctl::{
    ConfctlError,
    cli::{Cli, CliService, ConfigSources, ExecutionContext, GlobalOptions, formatting::format_error},
    config::Settings,
    editor::{AutoAnswer, Prompt, ReaderInput, TerminalPrompt},
    tracing_config,
};
use tracing::{debug, info_span};
use tracing_appender::non_blocking::WorkerGuard;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = e.to_string();
            if io::stderr().is_terminal() {
                eprintln!("{}", format_error(&message));
            } else {
                eprintln!("{message}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Executes the parsed command and returns its output.
///
/// # Errors
/// Returns error if settings cannot be loaded, logging cannot be set up,
/// storage cannot be opened or the command fails.
fn run(cli: &Cli) -> Result<String, ConfctlError> {
    let settings = Settings::load(cli.global.settings.as_deref())?;
    let _guard = init_logging(&settings, cli.global.verbose)?;
    let _span = info_span!("confctl", command = cli.command.name()).entered();

    let root = match &cli.global.root {
        Some(root) => root.clone(),
        None => env::current_dir()?,
    };
    let layout = settings.storage.resolve(&root);
    debug!(?layout, "Resolved storage layout");

    let service = CliService::new(ConfigSources::open(&layout)?);

    let mut prompt = select_prompt(&cli.global);
    let mut input = ReaderInput::stdin();
    let mut ctx = ExecutionContext {
        simulate: cli.global.simulate || settings.general.simulate,
        prompt: prompt.as_mut(),
        input: &mut input,
    };

    Ok(service.execute_command(&cli.command, &mut ctx)?)
}

fn init_logging(settings: &Settings, verbose: u8) -> Result<Option<WorkerGuard>, ConfctlError> {
    let level = settings.general.log_level.raised(verbose);

    if settings.general.log_to_file {
        let guard = tracing_config::init_with_file(level)
            .map_err(|e| ConfctlError::Logging(e.to_string()))?;
        Ok(Some(guard))
    } else {
        tracing_config::init_cli_mode(level).map_err(|e| ConfctlError::Logging(e.to_string()))?;
        Ok(None)
    }
}

/// Explicit flags win; otherwise prompt only when stdin is a terminal.
fn select_prompt(options: &GlobalOptions) -> Box<dyn Prompt> {
    if options.yes {
        Box::new(AutoAnswer(true))
    } else if options.no_interaction || !io::stdin().is_terminal() {
        Box::new(AutoAnswer(false))
    } else {
        Box::new(TerminalPrompt::stdio())
    }
}
