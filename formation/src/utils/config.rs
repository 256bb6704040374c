// FICHIER : formation/src/utils/config.rs

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Emplacement par défaut de la build client (équivalent `dist/spa` du site).
pub const DEFAULT_DIST_ROOT: &str = "dist/spa";
/// Dossier de staging des exports par module (toujours recréé avant usage).
pub const DEFAULT_STAGING_ROOT: &str = "dist/scorm-staging";
/// Dossier de sortie des archives .zip.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Configuration du packaging SCORM : trois chemins, surchargeable par
/// l'environnement puis par les drapeaux du CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackagingConfig {
    /// Racine de la build statique (lecture seule pour les exports par module)
    pub dist_root: PathBuf,
    /// Racine des dossiers de staging par module
    pub staging_root: PathBuf,
    /// Dossier où sont écrites les archives
    pub output_dir: PathBuf,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            dist_root: PathBuf::from(DEFAULT_DIST_ROOT),
            staging_root: PathBuf::from(DEFAULT_STAGING_ROOT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl PackagingConfig {
    /// Construit la configuration depuis les valeurs par défaut,
    /// surchargées par `FORMATION_DIST`, `FORMATION_STAGING` et
    /// `FORMATION_OUT_DIR` si présents.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dist) = env::var("FORMATION_DIST") {
            config.dist_root = PathBuf::from(dist);
        }
        if let Ok(staging) = env::var("FORMATION_STAGING") {
            config.staging_root = PathBuf::from(staging);
        }
        if let Ok(out) = env::var("FORMATION_OUT_DIR") {
            config.output_dir = PathBuf::from(out);
        }
        config
    }

    /// Ancre les trois chemins sous `root` (utilisé par les tests et le CLI
    /// quand il est lancé hors de la racine du dépôt).
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            dist_root: root.join(DEFAULT_DIST_ROOT),
            staging_root: root.join(DEFAULT_STAGING_ROOT),
            output_dir: root.to_path_buf(),
        }
    }

    /// Dossier de staging dédié à un module.
    pub fn staging_dir_for(&self, module_id: &str) -> PathBuf {
        self.staging_root.join(module_id)
    }
}
