use crate::app::cli::Cli;
use crate::app::models::{Mode, RunConfiguration};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user defaults, read from `~/.config/filetoarray/config.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsFile {
    pub output: Option<PathBuf>,
    pub indent: Option<usize>,
    pub progmem: Option<bool>,
}

fn defaults_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("filetoarray")
            .join("config.toml")
    })
}

fn load_defaults_file() -> Result<DefaultsFile> {
    match defaults_file_path() {
        Some(path) => load_defaults_from(&path),
        None => {
            log::debug!("No home directory, skipping defaults file");
            Ok(DefaultsFile::default())
        }
    }
}

pub fn load_defaults_from(path: &Path) -> Result<DefaultsFile> {
    if !path.exists() {
        return Ok(DefaultsFile::default());
    }

    let content = fs::read_to_string(path)
        .context(format!("Failed to read config at {:?}", path))?;

    let parsed: DefaultsFile =
        toml::from_str(&content).context(format!("Failed to parse {:?}", path))?;

    log::debug!("Loaded defaults from {:?}: {:?}", path, parsed);
    Ok(parsed)
}

/// Merges CLI args over the defaults file over the built-in defaults.
pub fn merge(cli: Cli, defaults: DefaultsFile) -> RunConfiguration {
    let builtin = RunConfiguration::default();

    // -h wins over -v, both win over processing
    let mode = if cli.help {
        Mode::Help
    } else if cli.version {
        Mode::Version
    } else {
        Mode::Process
    };

    RunConfiguration {
        mode,
        input_path: cli.file,
        output_path: cli.output.or(defaults.output).unwrap_or(builtin.output_path),
        indent: cli.indent.or(defaults.indent).unwrap_or(builtin.indent),
        progmem: cli.progmem || defaults.progmem.unwrap_or(builtin.progmem),
    }
}

pub fn resolve_config(cli: Cli) -> Result<RunConfiguration> {
    let defaults = load_defaults_file()?;
    let config = merge(cli, defaults);
    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
