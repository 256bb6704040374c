use clap::Args;
use std::path::PathBuf;

use formation::scorm::generate_manifest;
use formation::{user_success, utils::prelude::*};

/// Génération du manifest IMS seul, sans archivage
#[derive(Args, Clone, Debug)]
pub struct ManifestArgs {
    /// Restreint le manifest à un module (href index.html?module=<id>)
    #[arg(long)]
    pub module: Option<String>,

    /// Chemin de sortie (par défaut : <dist>/imsmanifest.xml)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn handle(args: ManifestArgs, config: PackagingConfig) -> Result<()> {
    let path = generate_manifest(
        &config.dist_root,
        args.out.as_deref(),
        args.module.as_deref(),
    )
    .await?;

    user_success!("MANIFEST_OK", "Manifest SCORM généré : {}", path.display());
    Ok(())
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use super::*;
    use formation::utils::fs;

    #[tokio::test]
    async fn test_manifest_dispatch_for_module() {
        let dir = tempfile::tempdir().unwrap();
        let config = PackagingConfig::rooted_at(dir.path());
        fs::write(config.dist_root.join("index.html"), "<html></html>")
            .await
            .unwrap();

        let args = ManifestArgs {
            module: Some("examen-final".to_string()),
            out: None,
        };
        assert!(handle(args, config.clone()).await.is_ok());

        let xml = fs::read_to_string(&config.dist_root.join("imsmanifest.xml"))
            .await
            .unwrap();
        assert!(xml.contains("href=\"index.html?module=examen-final\""));
    }

    #[tokio::test]
    async fn test_manifest_missing_build_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = PackagingConfig::rooted_at(dir.path());

        let args = ManifestArgs {
            module: None,
            out: None,
        };
        assert!(handle(args, config).await.is_err());
    }
}
