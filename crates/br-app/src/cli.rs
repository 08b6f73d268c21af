use std::path::PathBuf;

use br_core::config::{CasePolicy, CodecConfig, FallbackMode};
use clap::{Parser, Subcommand, ValueEnum};

/// braillec : texte ↔ Braille six points, avec miroir pour la signalétique embossée.
#[derive(Parser, Debug)]
#[command(name = "braillec", version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Override the configured unmapped-unit policy.
    #[arg(long, value_enum, global = true)]
    pub fallback: Option<FallbackArg>,

    /// Override the configured capital letter policy.
    #[arg(long, value_enum, global = true)]
    pub case: Option<CaseArg>,

    /// Print JSON instead of plain text.
    #[arg(long, default_value_t = false, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Text to Braille: prints notation and glyphs.
    Encode {
        text: String,
    },
    /// Cell notation ("125 135 123 1", `_` for a space) to text.
    Decode {
        notation: String,
    },
    /// Unicode Braille glyphs (⠓⠕⠇⠁) to text.
    DecodeUnicode {
        glyphs: String,
    },
    /// JSON list of cells ([[1,2,5],[1]]) to text.
    DecodeJson {
        cells: String,
    },
    /// Mirror cell notation for reading from the back of the sheet.
    Mirror {
        notation: String,
        /// Also reverse the cell order.
        #[arg(long, default_value_t = false)]
        reverse_order: bool,
    },
    /// Encode text and print it as Braille glyph lines.
    Render {
        text: String,
        /// Mirror the cells first.
        #[arg(long, default_value_t = false)]
        mirror: bool,
        /// With --mirror, also reverse the cell order.
        #[arg(long, default_value_t = false)]
        reverse_order: bool,
        /// Cells per line.
        #[arg(long)]
        width: Option<usize>,
        /// Print the source text above the glyphs.
        #[arg(long, default_value_t = false)]
        caption: bool,
    },
    /// Translate a file line by line, in parallel.
    Batch {
        /// Input file, one text (or notation) per line.
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Direction::Encode)]
        direction: Direction,
        /// Output file. Défaut : stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FallbackArg {
    Skip,
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    Mark,
    Fold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Encode,
    Decode,
}

impl Cli {
    /// Apply `--fallback` / `--case` on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut CodecConfig) {
        if let Some(fallback) = self.fallback {
            config.fallback = match fallback {
                FallbackArg::Skip => FallbackMode::Skip,
                FallbackArg::Placeholder => FallbackMode::Placeholder,
            };
        }
        if let Some(case) = self.case {
            config.case_policy = match case {
                CaseArg::Mark => CasePolicy::Mark,
                CaseArg::Fold => CasePolicy::Fold,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["braillec", "encode", "Hola", "--json", "--case", "fold"]);
        assert!(cli.json);
        assert_eq!(cli.case, Some(CaseArg::Fold));
        assert!(matches!(cli.command, Command::Encode { ref text } if text == "Hola"));
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from(["braillec", "--fallback", "skip", "decode", "1"]);
        let mut config = CodecConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.fallback, FallbackMode::Skip);
        assert_eq!(config.case_policy, CasePolicy::Mark);
    }

    #[test]
    fn batch_defaults_to_encode() {
        let cli = Cli::parse_from(["braillec", "batch", "lines.txt"]);
        match cli.command {
            Command::Batch { direction, out, .. } => {
                assert_eq!(direction, Direction::Encode);
                assert!(out.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_fallback_is_rejected() {
        assert!(Cli::try_parse_from(["braillec", "--fallback", "explode", "encode", "a"]).is_err());
    }
}
