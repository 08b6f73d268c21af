use std::io::Write;

use anyhow::{Context, Result};
use br_codec::alphabet;
use br_codec::translator::Translator;
use br_core::config::CodecConfig;
use clap::Parser;

pub mod batch;
pub mod cli;
pub mod commands;
pub mod output;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Table Braille : une table incohérente ne doit servir aucune requête
    let table = alphabet::standard().context("Braille alphabet failed validation")?;

    // 4. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4b. Appliquer les overrides CLI
    cli.apply_overrides(&mut config);

    // 5. Construire le codec
    let translator =
        Translator::with_alphabet(table, &config).context("invalid codec configuration")?;
    let printer = output::Printer {
        json: cli.json,
        blank: config.blank_token,
    };

    // 6. Exécuter la commande
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &translator, &printer, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Resolve config: a missing file falls back to defaults, a broken one is an error.
fn resolve_config(cli: &cli::Cli) -> Result<CodecConfig> {
    if cli.config.exists() {
        br_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(CodecConfig::default())
    }
}
