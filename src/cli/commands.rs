//! Command dispatch and handlers

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ComplementService, Presenter, ResultView};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::view::{group_bits, TerminalView};
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};

/// Tally of one interactive session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub computed: usize,
    pub rejected: usize,
}

/// Execute the parsed command line.
pub fn execute(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Calc { binary, no_steps }) => {
            let settings = load_settings(cli)?;
            cmd_calc(binary, settings.show_steps && !no_steps, settings.group_size)
        }
        Some(Commands::Add { a, b }) => {
            let settings = load_settings(cli)?;
            cmd_add(a, b, settings.group_size)
        }
        Some(Commands::Interactive) => cmd_interactive(&load_settings(cli)?),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&load_settings(cli)?),
            ConfigCommands::Init { force } => cmd_config_init(*force),
            ConfigCommands::Path => cmd_config_path(cli.config.as_deref()),
        },
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage(
            "no command given, run `bincomp --help` for usage".into(),
        )),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

#[instrument]
fn cmd_calc(binary: &str, show_steps: bool, group_size: usize) -> CliResult<()> {
    let mut presenter = Presenter::new(TerminalView::new(group_size)).with_steps(show_steps);
    presenter.submit(binary).map_err(CliError::Rendered)?;
    Ok(())
}

#[instrument]
fn cmd_add(a: &str, b: &str, group_size: usize) -> CliResult<()> {
    let sum = ComplementService::new().add(a, b)?;
    output::info(&format!(
        "{} ({})",
        group_bits(sum.as_str(), group_size),
        sum.to_decimal()
    ));
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_interactive(settings: &Settings) -> CliResult<()> {
    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();
    let mut presenter =
        Presenter::new(TerminalView::new(settings.group_size)).with_steps(settings.show_steps);

    let summary = run_session(stdin.lock(), &mut presenter, || {
        if show_prompt {
            output::prompt(&settings.prompt);
        }
    })?;
    debug!(
        "interactive: computed={} rejected={}",
        summary.computed, summary.rejected
    );
    Ok(())
}

/// Feed input lines to a presenter until EOF, `quit` or `exit`.
///
/// Each line is one trigger: the input is edited (clearing any shown
/// error) and then submitted exactly once. Lines are read as raw bytes so
/// invalid UTF-8 is shown as an invalid character instead of ending the
/// session.
pub fn run_session<R, V, P>(
    mut input: R,
    presenter: &mut Presenter<V>,
    mut on_prompt: P,
) -> CliResult<SessionSummary>
where
    R: BufRead,
    V: ResultView,
    P: FnMut(),
{
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();
    on_prompt();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| CliError::io("read input", e))?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        presenter.input_changed();
        match presenter.submit(&line) {
            Ok(_) => summary.computed += 1,
            Err(_) => summary.rejected += 1,
        }
        on_prompt();
    }
    Ok(summary)
}

fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_init(force: bool) -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| {
        CliError::Usage("cannot determine config directory for this platform".into())
    })?;
    Settings::write_template(&path, force)?;
    output::info(&format!("Created {}", path.display()));
    Ok(())
}

fn cmd_config_path(extra: Option<&Path>) -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            let state = if path.exists() { "" } else { " (not found)" };
            output::info(&format!("global: {}{}", path.display(), state));
        }
        None => output::info("global: <unavailable>"),
    }
    if let Some(path) = extra {
        let state = if path.exists() { "" } else { " (not found)" };
        output::info(&format!("extra:  {}{}", path.display(), state));
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
