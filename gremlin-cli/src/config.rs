use eyre::{Result, WrapErr, eyre};
use gremlin_translator::{StringQuoting, TranslatorConfig};
use std::{fs, path::Path};

/// Flags that override values read from a config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_name: Option<String>,
    pub include_source_instructions: bool,
    pub escape_strings: bool,
    pub max_depth: Option<usize>,
    pub unbounded: bool,
}

pub fn load_config(path: Option<&Path>) -> Result<TranslatorConfig> {
    let Some(path) = path else {
        return Ok(TranslatorConfig::default());
    };

    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
    let config: TranslatorConfig = toml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))?;
    validate(&config)?;
    Ok(config)
}

pub fn apply_overrides(
    mut config: TranslatorConfig,
    overrides: &ConfigOverrides,
) -> Result<TranslatorConfig> {
    if let Some(source_name) = &overrides.source_name {
        config.source_name = source_name.clone();
    }
    if overrides.include_source_instructions {
        config.include_source_instructions = true;
    }
    if overrides.escape_strings {
        config.string_quoting = StringQuoting::Escaped;
    }
    match (overrides.max_depth, overrides.unbounded) {
        (Some(_), true) => return Err(eyre!("--max-depth and --unbounded are mutually exclusive")),
        (Some(0), false) => return Err(eyre!("--max-depth must be greater than zero")),
        (Some(limit), false) => config.max_depth = Some(limit),
        (None, true) => config.max_depth = None,
        (None, false) => {}
    }
    validate(&config)?;
    Ok(config)
}

pub fn to_toml(config: &TranslatorConfig) -> Result<String> {
    toml::to_string_pretty(config).wrap_err("Failed to serialize config")
}

fn validate(config: &TranslatorConfig) -> Result<()> {
    if config.source_name.trim().is_empty() {
        return Err(eyre!("source_name must not be empty"));
    }
    Ok(())
}
