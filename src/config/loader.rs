//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ComandaError, ComandaResult};

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "comanda.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ComandaResult<(Config, Vec<ConfigWarning>)> {
    let content =
        fs::read_to_string(path).map_err(|e| ComandaError::persistence(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ComandaError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let (section, key) = match path_str.rsplit_once('.') {
                Some((section, key)) => (Some(section), key),
                None => (None, path_str.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration in priority order:
/// 1. `explicit` path (must exist)
/// 2. `comanda.toml` in `cwd`
/// 3. `<user config dir>/comanda/config.toml`
/// 4. Built-in defaults
///
/// Environment overrides are applied last.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> ComandaResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(cwd.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];
    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            tracing::debug!(path = %candidate.display(), "configuration loaded");
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<user config dir>/comanda/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("comanda").join("config.toml"))
}

/// Apply environment variable overrides (COMANDA_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // COMANDA_DATA_DIR
    if let Some(root) = lookup("COMANDA_DATA_DIR").filter(|v| !v.trim().is_empty()) {
        config.storage.root = PathBuf::from(root);
    }

    // COMANDA_VERBOSITY
    if let Some(verbosity) = lookup("COMANDA_VERBOSITY") {
        config.output.verbosity = Verbosity::parse(&verbosity);
    }

    config
}

/// Line (1-based) where `key` is assigned or opened as a table
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| declares_key(line.trim_start(), key))
        .map(|i| i + 1)
}

fn declares_key(line: &str, key: &str) -> bool {
    if let Some(header) = line.strip_prefix('[') {
        let name = header.trim_start_matches('[').split(']').next().unwrap_or("");
        return name.rsplit('.').next().map(str::trim) == Some(key);
    }
    let unquoted = line.trim_start_matches(['"', '\'']);
    match unquoted.strip_prefix(key) {
        Some(rest) => rest.trim_start_matches(['"', '\'']).trim_start().starts_with('='),
        None => false,
    }
}

/// Known keys at the same level as the unknown one
fn known_keys(section: Option<&str>) -> &'static [&'static str] {
    match section {
        None => &["storage", "restaurant", "output"],
        Some("storage") => &["root", "dishes", "orders", "saved_orders", "closings"],
        Some("restaurant") => &["name", "tagline"],
        Some("output") => &["verbosity"],
        Some(_) => &[],
    }
}

fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    known_keys(section)
        .iter()
        .map(|known| (*known, edit_distance(unknown, known)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(known, _)| known.to_string())
}

/// Levenshtein distance over chars, keeping a single row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
