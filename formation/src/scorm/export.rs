// FICHIER : formation/src/scorm/export.rs
//
// Pipeline d'export SCORM : vérifier -> staguer -> injecter -> manifest ->
// archiver. Chaque étape est une fonction explicite qui rend un Result
// contrôlé par l'orchestrateur. La build partagée n'est jamais mutée par un
// export de module : on copie vers un staging recréé à chaque passage, puis
// on ne touche plus qu'au staging. Séquentiel par construction — le packaging
// est une opération d'opérateur, basse fréquence.

use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

use crate::catalog::{self, TrainingModule};
use crate::scorm::manifest::{self, LAUNCH_FILE};
use crate::utils::config::PackagingConfig;
use crate::utils::error::{AppError, Result};
use crate::utils::fs;

/// Préfixe des archives produites.
pub const PACKAGE_BASE_NAME: &str = "decathlon-formation-capitaine";

/// Drapeau global consommé au runtime par le client pour ne rendre qu'un
/// module (contrat de lancement standalone).
pub const MODULE_FLAG: &str = "window.__SCORM_MODULE__";

const MODULE_FLAG_PATTERN: &str = r#"window\.__SCORM_MODULE__\s*=\s*"[^"]*";?"#;

/// Orchestrateur des exports. Construit sur une configuration de chemins,
/// tous les effets de bord passent par ses étapes.
pub struct ExportPipeline {
    config: PackagingConfig,
}

/// Découpe une sélection `--module id1,id2` : séparateur virgule, entrées
/// nettoyées, entrées vides ignorées.
pub fn parse_module_selection(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Résout une sélection d'ids vers le catalogue. Un id inconnu est fatal
/// avant tout export : sauter silencieusement un module produirait moins de
/// paquets que demandé.
pub fn resolve_selection(ids: &[String]) -> Result<Vec<&'static TrainingModule>> {
    ids.iter()
        .map(|id| {
            catalog::module_by_id(id)
                .ok_or_else(|| AppError::NotFound(format!("module inconnu : {id}")))
        })
        .collect()
}

impl ExportPipeline {
    pub fn new(config: PackagingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PackagingConfig {
        &self.config
    }

    /// Nom de l'archive : parcours complet ou module nommé.
    pub fn zip_name(module: Option<&TrainingModule>) -> String {
        match module {
            Some(m) => format!("{PACKAGE_BASE_NAME}-{}-scorm.zip", m.module_id),
            None => format!("{PACKAGE_BASE_NAME}-scorm.zip"),
        }
    }

    /// Étape 1 — préconditions : la build doit exister et contenir le fichier
    /// de lancement. Cet outil ne déclenche jamais de build lui-même.
    pub async fn verify_build(&self) -> Result<()> {
        let dist = &self.config.dist_root;
        if !fs::is_dir(dist).await {
            return Err(AppError::Config(format!(
                "Le dossier de build {} n'existe pas. Lance d'abord la build du site client.",
                dist.display()
            )));
        }
        if !fs::exists(&dist.join(LAUNCH_FILE)).await {
            return Err(AppError::Config(format!(
                "Le fichier {LAUNCH_FILE} est introuvable dans {}. Vérifie ta build client.",
                dist.display()
            )));
        }
        Ok(())
    }

    /// Exporte le parcours complet : manifest généré en place à la racine de
    /// la build, puis archive de tout le dossier.
    pub async fn export_full_course(&self) -> Result<PathBuf> {
        self.verify_build().await?;

        manifest::generate_manifest(&self.config.dist_root, None, None).await?;

        let zip_path = self.output_path(Self::zip_name(None)).await?;
        self.archive(&self.config.dist_root, &zip_path)?;

        tracing::info!(archive = %zip_path.display(), "Archive SCORM du parcours complet créée");
        Ok(zip_path)
    }

    /// Exporte un module : staging recréé, drapeau injecté dans la copie,
    /// manifest restreint au module, archive. La build d'origine reste
    /// intacte pour les exports suivants.
    pub async fn export_module(&self, module: &TrainingModule) -> Result<PathBuf> {
        self.verify_build().await?;

        let staging = self.stage(module).await?;
        self.inject_module_flag(&staging.join(LAUNCH_FILE), module.module_id)
            .await?;
        manifest::generate_manifest(&staging, None, Some(module.module_id)).await?;

        let zip_path = self.output_path(Self::zip_name(Some(module))).await?;
        self.archive(&staging, &zip_path)?;

        tracing::info!(
            module = module.module_id,
            archive = %zip_path.display(),
            "Archive SCORM du module créée"
        );
        Ok(zip_path)
    }

    /// Exporte chaque module du catalogue, dans l'ordre, l'un après l'autre.
    pub async fn export_all(&self) -> Result<Vec<PathBuf>> {
        let mut archives = Vec::new();
        for module in catalog::modules() {
            archives.push(self.export_module(module).await?);
        }
        Ok(archives)
    }

    /// Exporte une sélection déjà résolue de modules.
    pub async fn export_modules(
        &self,
        modules: &[&'static TrainingModule],
    ) -> Result<Vec<PathBuf>> {
        let mut archives = Vec::new();
        for module in modules {
            archives.push(self.export_module(module).await?);
        }
        Ok(archives)
    }

    /// Étape 2 — staging : suppression puis recréation complète (jamais de
    /// fusion), pour qu'un re-run n'accumule aucun fichier périmé d'un export
    /// précédent, même interrompu.
    async fn stage(&self, module: &TrainingModule) -> Result<PathBuf> {
        let staging = self.config.staging_dir_for(module.module_id);
        fs::remove_dir_all(&staging).await?;
        fs::create_dir_all(&staging).await?;
        fs::copy_dir_all(&self.config.dist_root, &staging).await?;
        Ok(staging)
    }

    /// Étape 3 — injection : remplace une affectation existante du drapeau,
    /// sinon insère un script avant `</head>`. Une page sans `</head>` est
    /// une build cassée, donc fatale.
    async fn inject_module_flag(&self, index_path: &Path, module_id: &str) -> Result<()> {
        let html = fs::read_to_string(index_path).await?;
        let assignment = format!("{MODULE_FLAG} = \"{module_id}\";");

        let flag_re = Regex::new(MODULE_FLAG_PATTERN)
            .map_err(|e| AppError::Config(format!("motif du drapeau module : {e}")))?;

        let rewritten = if flag_re.is_match(&html) {
            flag_re.replace(&html, assignment.as_str()).into_owned()
        } else if let Some(pos) = html.find("</head>") {
            let mut out = String::with_capacity(html.len() + assignment.len() + 20);
            out.push_str(&html[..pos]);
            out.push_str(&format!("<script>{assignment}</script>"));
            out.push_str(&html[pos..]);
            out
        } else {
            return Err(AppError::Manifest(format!(
                "{} ne contient ni drapeau module ni balise </head> : build inutilisable",
                index_path.display()
            )));
        };

        fs::write(index_path, rewritten).await
    }

    /// Étape 5 — archive : toute l'arborescence du dossier, entrées en
    /// chemins relatifs `/`, écrasement de toute archive au même chemin.
    fn archive(&self, dir: &Path, zip_path: &Path) -> Result<PathBuf> {
        let file = std::fs::File::create(zip_path)?;
        let mut zip = zip::ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for entry in fs::list_files_relative(dir)? {
            zip.start_file(entry.as_str(), options)?;
            let content = std::fs::read(dir.join(&entry))?;
            zip.write_all(&content)?;
        }
        zip.finish()?;
        Ok(zip_path.to_path_buf())
    }

    async fn output_path(&self, name: String) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.output_dir).await?;
        Ok(self.config.output_dir.join(name))
    }
}
