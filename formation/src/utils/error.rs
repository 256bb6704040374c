use std::io;

// --- RE-EXPORTS ANYHOW (Pour la flexibilité du CLI) ---
// On expose les outils flexibles pour l'application finale
pub use anyhow::{anyhow, Context};
// On renomme le Result de anyhow pour ne pas qu'il écrase le nôtre
pub use anyhow::Result as AnyResult;

// --- GESTION D'ERREUR STRICTE ---

/// Type de résultat standard pour l'outillage formation
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs de l'application.
/// Elle dérive `thiserror::Error` pour faciliter la conversion automatique.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),

    #[error("Introuvable : {0}")]
    NotFound(String),

    #[error("Erreur de manifest : {0}")]
    Manifest(String),

    #[error("Erreur d'archive : {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Erreur Système : {0}")]
    System(#[from] anyhow::Error),
}

// Helpers pour convertir des erreurs string en AppError
// Permet de faire : return Err("Mon erreur".into());
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::System(anyhow::anyhow!(s))
    }
}

// Permet de faire : return Err("Mon erreur literal".into());
impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::System(anyhow::anyhow!(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display_formatting() {
        let err = AppError::Config("Dossier de build manquant".to_string());
        assert_eq!(
            err.to_string(),
            "Erreur de configuration : Dossier de build manquant"
        );

        let err_manifest = AppError::Manifest("index.html absent".to_string());
        assert_eq!(
            err_manifest.to_string(),
            "Erreur de manifest : index.html absent"
        );

        let err_not_found = AppError::NotFound("module etape-99".to_string());
        assert_eq!(err_not_found.to_string(), "Introuvable : module etape-99");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Accès refusé");
        let app_err: AppError = io_err.into();

        match app_err {
            AppError::Io(msg) => assert!(msg.to_string().contains("Accès refusé")),
            _ => panic!("Devrait être converti en AppError::Io"),
        }
    }

    #[test]
    fn test_from_anyhow_error() {
        let anyhow_err = anyhow::anyhow!("Erreur inconnue");
        let app_err: AppError = anyhow_err.into();

        match app_err {
            AppError::System(err) => assert_eq!(err.to_string(), "Erreur inconnue"),
            _ => panic!("Devrait être converti en AppError::System"),
        }
    }

    #[test]
    fn test_from_string_helpers() {
        // Test From<String>
        let err_string: AppError = String::from("Erreur string").into();
        match err_string {
            AppError::System(e) => assert_eq!(e.to_string(), "Erreur string"),
            _ => panic!("String devrait devenir AppError::System"),
        }

        // Test From<&str>
        let err_str: AppError = "Erreur str".into();
        match err_str {
            AppError::System(e) => assert_eq!(e.to_string(), "Erreur str"),
            _ => panic!("&str devrait devenir AppError::System"),
        }
    }
}
