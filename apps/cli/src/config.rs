use std::{collections::HashMap, fs, io, path::Path};

use anyhow::Context;
use clap::ValueEnum;

pub const SETTINGS_FILE: &str = "bitconv.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_format: OutputFormat,
    pub log_filter: String,
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            log_filter: "warn".into(),
            strict: false,
        }
    }
}

/// Defaults, then `bitconv.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = read_settings_file(Path::new(SETTINGS_FILE))? {
        apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to parse settings file '{SETTINGS_FILE}'"))?;
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err)
            .with_context(|| format!("failed to read settings file '{}'", path.display())),
    }
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;
    let get = |key: &str| {
        file_cfg.get(key).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    };

    if let Some(v) = get("output_format").as_deref().and_then(OutputFormat::parse) {
        settings.output_format = v;
    }
    if let Some(v) = get("log_filter") {
        settings.log_filter = v;
    }
    if let Some(v) = get("strict").as_deref().and_then(parse_bool) {
        settings.strict = v;
    }

    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for name in ["BITCONV_FORMAT", "APP__OUTPUT_FORMAT"] {
        if let Some(v) = lookup(name).as_deref().and_then(OutputFormat::parse) {
            settings.output_format = v;
        }
    }

    for name in ["RUST_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = lookup(name).filter(|v| !v.trim().is_empty()) {
            settings.log_filter = v;
        }
    }

    if let Some(v) = lookup("APP__STRICT").as_deref().and_then(parse_bool) {
        settings.strict = v;
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
