use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, RenderStyle, Settings};
use crate::demo::{self, SampleKind};
use crate::domain::{Tree, TreeRender};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo { kind, style }) => {
            let mut settings = Settings::load(cli.config.as_deref())?;
            if let Some(style) = style {
                settings.style = *style;
            }
            _demo(*kind, &settings)
        }
        Some(Commands::Config { command }) => _config(command, cli.config.as_deref()),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

/// Writes `tree` in the configured style.
pub fn render<T: Display, W: Write>(
    tree: &Tree<T>,
    settings: &Settings,
    out: &mut W,
) -> io::Result<()> {
    match settings.style {
        RenderStyle::Indent => tree.write_indented(out, settings.indent_width),
        RenderStyle::Tree => write!(out, "{}", tree.to_tree_string()),
    }
}

#[instrument(skip(settings))]
fn _demo(kind: SampleKind, settings: &Settings) -> CliResult<()> {
    debug!(?settings, "running demo");
    match kind {
        SampleKind::Int => show_and_clear("int tree", demo::int_sample()?, settings),
        SampleKind::String => show_and_clear("string tree", demo::string_sample()?, settings),
        SampleKind::Person => show_and_clear("person tree", demo::person_sample()?, settings),
    }
}

fn show_and_clear<T: Display>(title: &str, mut tree: Tree<T>, settings: &Settings) -> CliResult<()> {
    output::header(title);
    render(&tree, settings, &mut io::stdout())?;

    tree.clear();
    output::header(&format!("{} after clear", title));
    render(&tree, settings, &mut io::stdout())?;
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands, explicit: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(explicit)?;
            output::info(settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => return Err(CliError::Usage("no home directory for global config".to_string())),
        },
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
}
