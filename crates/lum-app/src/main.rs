use std::io::Write;

use anyhow::Result;
use clap::Parser;
use lum_core::config::RenderConfig;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre la config et appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    if let Some(ref ramp) = cli.ramp {
        config.ramp = ramp.clone();
    }
    config.validate()?;

    // 4. Charger l'image. Toute erreur d'ouverture ou de décodage est
    //    fatale : aucun art n'est émis.
    let frame = lum_source::load_image(&cli.image)?;

    // 5. Rendre et écrire sur stdout en une seule passe.
    let art = lum_ascii::render(&frame, &config);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(art.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Resolve config: load --config if the file exists, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if cli.config.exists() {
        lum_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RenderConfig::default())
    }
}
