//! Configuration types for hoverdict.
//!
//! [`Config::load`] reads `~/.config/hoverdict/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit path instead. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::filter::FieldFilter;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[lookup]
excluded_fields        = []
always_show_no_results = false
no_results_text        = "No results found."

[dictionary]
mode             = "snippets"
note_type        = "Mouseover Dictionary"
term_field       = "Term"
definition_field = "Definition"
no_entry_text    = "No dictionary entry found."

[server]
bind = "127.0.0.1:8766"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/hoverdict/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[lookup]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Field names never rendered in a snippet.
    #[serde(default)]
    pub excluded_fields: Vec<String>,
    /// Return `no_results_text` instead of `""` when nothing matches.
    #[serde(default)]
    pub always_show_no_results: bool,
    #[serde(default = "default_no_results_text")]
    pub no_results_text: String,
}

fn default_no_results_text() -> String { "No results found.".to_string() }

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            excluded_fields: Vec::new(),
            always_show_no_results: false,
            no_results_text: default_no_results_text(),
        }
    }
}

impl LookupConfig {
    pub fn field_filter(&self) -> FieldFilter {
        FieldFilter::new(self.excluded_fields.iter().cloned())
    }
}

/// What the host boundary answers with when asked about a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Render snippets of related notes in the current deck.
    #[default]
    Snippets,
    /// Return the definition field of the matching dictionary note.
    Dictionary,
}

/// `[dictionary]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_note_type")]
    pub note_type: String,
    #[serde(default = "default_term_field")]
    pub term_field: String,
    #[serde(default = "default_definition_field")]
    pub definition_field: String,
    #[serde(default = "default_no_entry_text")]
    pub no_entry_text: String,
}

fn default_note_type() -> String { "Mouseover Dictionary".to_string() }
fn default_term_field() -> String { "Term".to_string() }
fn default_definition_field() -> String { "Definition".to_string() }
fn default_no_entry_text() -> String { "No dictionary entry found.".to_string() }

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            note_type: default_note_type(),
            term_field: default_term_field(),
            definition_field: default_definition_field(),
            no_entry_text: default_no_entry_text(),
        }
    }
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:8766".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/hoverdict/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("hoverdict")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
