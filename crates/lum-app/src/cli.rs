use std::path::PathBuf;

use clap::Parser;

/// lumascii — Block-averaging image to ASCII art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image source (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/lumascii.toml.
    #[arg(short, long, default_value = "config/lumascii.toml")]
    pub config: PathBuf,

    /// Ramp de caractères, du plus sombre au plus dense (remplace la config).
    #[arg(long)]
    pub ramp: Option<String>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
