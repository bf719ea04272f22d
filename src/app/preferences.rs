//! src/app/preferences.rs
//!
//! Préférences utilisateur (thème + taille de police), persistées dans un petit
//! fichier clé/valeur TOML :
//!
//! ```toml
//! theme = "light"
//! fontSize = 20
//! ```
//!
//! - fichier absent => valeurs par défaut (pas une erreur)
//! - fichier illisible / mal formé => ErreurPreferences (l’appelant décide du repli)

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nom du fichier, relatif au répertoire courant.
pub const FICHIER_PREFERENCES: &str = "preferences.toml";

pub const TAILLE_POLICE_DEFAUT: u32 = 20;
pub const TAILLE_POLICE_MIN: u32 = 8;
pub const TAILLE_POLICE_MAX: u32 = 48;

#[derive(Error, Debug)]
pub enum ErreurPreferences {
    #[error("E/S préférences : {0}")]
    Io(#[from] io::Error),
    #[error("préférences mal formées : {0}")]
    Lecture(#[from] toml::de::Error),
    #[error("écriture des préférences : {0}")]
    Ecriture(#[from] toml::ser::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "light")]
    Clair,
    #[serde(rename = "dark")]
    Sombre,
}

impl Theme {
    pub fn libelle(self) -> &'static str {
        match self {
            Theme::Clair => "clair",
            Theme::Sombre => "sombre",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    #[serde(rename = "fontSize")]
    pub taille_police: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Clair,
            taille_police: TAILLE_POLICE_DEFAUT,
        }
    }
}

impl Preferences {
    /// Charge le fichier ; absent => défauts.
    pub fn charger(chemin: &Path) -> Result<Self, ErreurPreferences> {
        let texte = match fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "pas de fichier {}, préférences par défaut",
                    chemin.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut prefs: Preferences = toml::from_str(&texte)?;
        prefs.set_taille_police(prefs.taille_police);
        debug!("préférences chargées : {prefs:?}");
        Ok(prefs)
    }

    pub fn enregistrer(&self, chemin: &Path) -> Result<(), ErreurPreferences> {
        let texte = toml::to_string(self)?;
        fs::write(chemin, texte)?;
        info!("préférences enregistrées dans {}", chemin.display());
        Ok(())
    }

    /// Garde-fou : borne la taille de police.
    pub fn set_taille_police(&mut self, taille: u32) {
        self.taille_police = taille.clamp(TAILLE_POLICE_MIN, TAILLE_POLICE_MAX);
    }
}
