use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for either input limit.
pub const MAX_LIMIT: usize = 1_000_000;

/// Configuration du codec.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use br_core::config::{CasePolicy, CodecConfig, FallbackMode};
/// let config = CodecConfig::default();
/// assert_eq!(config.fallback, FallbackMode::Placeholder);
/// assert_eq!(config.case_policy, CasePolicy::Mark);
/// assert_eq!(config.max_text_length, 10_000);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CodecConfig {
    // === Fallback ===
    /// What to do with characters or cells that have no counterpart.
    pub fallback: FallbackMode,
    /// Cell emitted for an unmapped character, in notation (`"123456"`).
    pub placeholder_cell: String,
    /// Character emitted for an unmapped cell.
    pub placeholder_char: char,

    // === Texte ===
    /// Capital letter handling.
    pub case_policy: CasePolicy,
    /// Notation token standing for the empty cell (space).
    pub blank_token: char,

    // === Limites ===
    /// Maximum input length, in chars, accepted at the boundary.
    pub max_text_length: usize,
    /// Maximum number of cells accepted at the boundary.
    pub max_cells: usize,
}

/// Unmapped-unit policy, shared by both directions.
///
/// # Example
/// ```
/// use br_core::config::FallbackMode;
/// assert!(matches!(FallbackMode::default(), FallbackMode::Placeholder));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum FallbackMode {
    /// Drop the unit; output is shorter than the input.
    Skip,
    /// Emit the configured placeholder in its place.
    #[default]
    Placeholder,
}

/// Capital letter handling. Braille has no case without the capital sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum CasePolicy {
    /// Emit the capital sign before each uppercase letter; case round-trips.
    #[default]
    Mark,
    /// Lowercase everything; decoded text is lowercase.
    Fold,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackMode::Placeholder,
            placeholder_cell: "123456".to_string(),
            placeholder_char: '\u{FFFD}',
            case_policy: CasePolicy::Mark,
            blank_token: '_',
            max_text_length: 10_000,
            max_cells: 10_000,
        }
    }
}

impl CodecConfig {
    /// Clamp numeric fields and reset tokens that would make notation
    /// ambiguous. Called after TOML deserialization.
    pub fn clamp_all(&mut self) {
        self.max_text_length = self.max_text_length.clamp(1, MAX_LIMIT);
        self.max_cells = self.max_cells.clamp(1, MAX_LIMIT);
        if self.blank_token.is_ascii_digit() || self.blank_token.is_whitespace() {
            log::warn!(
                "blank_token {:?} collides with notation syntax, using '_'",
                self.blank_token
            );
            self.blank_token = '_';
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    codec: Option<CodecSection>,
    limits: Option<LimitsSection>,
}

#[derive(Deserialize)]
struct CodecSection {
    fallback: Option<FallbackMode>,
    placeholder_cell: Option<String>,
    placeholder_char: Option<char>,
    case_policy: Option<CasePolicy>,
    blank_token: Option<char>,
}

#[derive(Deserialize)]
struct LimitsSection {
    max_text_length: Option<usize>,
    max_cells: Option<usize>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use br_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<CodecConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    parse_config(&content).with_context(|| format!("invalid TOML in {}", path.display()))
}

/// Same as [`load_config`] on an in-memory document.
///
/// # Errors
/// Returns an error if `content` is not a valid config document.
pub fn parse_config(content: &str) -> Result<CodecConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = CodecConfig::default();

    if let Some(c) = file.codec {
        if let Some(v) = c.fallback {
            config.fallback = v;
        }
        if let Some(v) = c.placeholder_cell {
            config.placeholder_cell = v;
        }
        if let Some(v) = c.placeholder_char {
            config.placeholder_char = v;
        }
        if let Some(v) = c.case_policy {
            config.case_policy = v;
        }
        if let Some(v) = c.blank_token {
            config.blank_token = v;
        }
    }

    if let Some(l) = file.limits {
        if let Some(v) = l.max_text_length {
            config.max_text_length = v;
        }
        if let Some(v) = l.max_cells {
            config.max_cells = v;
        }
    }

    config.clamp_all();
    Ok(config)
}
