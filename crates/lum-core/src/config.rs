use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Configuration complète du rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// Les défauts reproduisent la sortie historique : blocs de 4×2 pixels
/// parcourus avec un pas colonne de 2 et un pas ligne de 4. Les blocs
/// voisins se recouvrent donc de 2 colonnes et une scanline sur deux est
/// sautée, ce qui compense le ratio d'aspect des cellules terminal.
///
/// # Example
/// ```
/// use lum_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.block_width, 4);
/// assert_eq!(config.row_step, 4);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Ramp de caractères, du plus sombre au plus dense.
    pub ramp: String,
    /// Largeur d'un bloc échantillonné, en pixels.
    pub block_width: u32,
    /// Hauteur d'un bloc échantillonné, en pixels.
    pub block_height: u32,
    /// Pas horizontal de la grille (pixels entre deux colonnes de sortie).
    pub column_step: u32,
    /// Pas vertical de la grille (pixels entre deux lignes de sortie).
    pub row_step: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ramp: crate::ramp::RAMP_CLASSIC.to_string(),
            block_width: 4,
            block_height: 2,
            column_step: 2,
            row_step: 4,
        }
    }
}

impl RenderConfig {
    /// Force chaque champ dans sa plage valide.
    ///
    /// Steps and block dimensions are floored at 1; a ramp shorter than
    /// 2 glyphs reverts to the default ramp.
    pub fn clamp_all(&mut self) {
        if self.block_width == 0 {
            log::warn!("block_width = 0, forcé à 1");
            self.block_width = 1;
        }
        if self.block_height == 0 {
            log::warn!("block_height = 0, forcé à 1");
            self.block_height = 1;
        }
        if self.column_step == 0 {
            log::warn!("column_step = 0, forcé à 1");
            self.column_step = 1;
        }
        if self.row_step == 0 {
            log::warn!("row_step = 0, forcé à 1");
            self.row_step = 1;
        }
        if self.ramp.chars().count() < 2 {
            log::warn!("ramp trop courte, retour à la ramp par défaut");
            self.ramp = crate::ramp::RAMP_CLASSIC.to_string();
        }
    }

    /// Check the config without mutating it.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] on a zero step/dimension or a ramp
    /// shorter than 2 glyphs.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.block_width == 0 || self.block_height == 0 {
            return Err(CoreError::Config(format!(
                "dimensions de bloc nulles : {}×{}",
                self.block_width, self.block_height
            )));
        }
        if self.column_step == 0 || self.row_step == 0 {
            return Err(CoreError::Config(format!(
                "pas de grille nul : {}/{}",
                self.column_step, self.row_step
            )));
        }
        if self.ramp.chars().count() < 2 {
            return Err(CoreError::Config(
                "ramp de moins de 2 caractères".to_string(),
            ));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: RenderSection,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    ramp: Option<String>,
    block_width: Option<u32>,
    block_height: Option<u32>,
    column_step: Option<u32>,
    row_step: Option<u32>,
}

/// Charge une config TOML, champs absents remplacés par les défauts.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = RenderConfig::default();

    let r = file.render;
    if let Some(v) = r.ramp {
        config.ramp = v;
    }
    if let Some(v) = r.block_width {
        config.block_width = v;
    }
    if let Some(v) = r.block_height {
        config.block_height = v;
    }
    if let Some(v) = r.column_step {
        config.column_step = v;
    }
    if let Some(v) = r.row_step {
        config.row_step = v;
    }

    config.clamp_all();
    Ok(config)
}
