use clap::Args;

use formation::scorm::{parse_module_selection, resolve_selection, ExportPipeline};
use formation::{user_info, user_success, utils::prelude::*};

/// Export de paquets SCORM distribuables
#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    /// Exporte chaque module du catalogue individuellement
    #[arg(long, conflicts_with = "module")]
    pub all: bool,

    /// Exporte uniquement les modules nommés (ids séparés par des virgules)
    #[arg(long, value_name = "ID[,ID...]")]
    pub module: Option<String>,
}

pub async fn handle(args: ExportArgs, config: PackagingConfig) -> Result<()> {
    let pipeline = ExportPipeline::new(config);

    if args.all {
        user_info!("EXPORT_ALL", "Export de chaque module du catalogue…");
        let archives = pipeline.export_all().await?;
        for archive in &archives {
            user_success!("EXPORT_OK", "Archive SCORM créée : {}", archive.display());
        }
        user_success!("EXPORT_ALL_OK", "{} paquets générés", archives.len());
        return Ok(());
    }

    if let Some(raw) = &args.module {
        let ids = parse_module_selection(raw);
        if ids.is_empty() {
            return Err(AppError::Config(
                "--module exige au moins un id de module".to_string(),
            ));
        }
        // Résolution complète avant le moindre export : un id inconnu est fatal
        let modules = resolve_selection(&ids)?;
        user_info!("EXPORT_SELECTION", "Export de {} module(s)…", modules.len());
        for archive in pipeline.export_modules(&modules).await? {
            user_success!("EXPORT_OK", "Archive SCORM créée : {}", archive.display());
        }
        return Ok(());
    }

    user_info!("EXPORT_COURSE", "Export du parcours complet…");
    let archive = pipeline.export_full_course().await?;
    user_success!("EXPORT_OK", "Archive SCORM créée : {}", archive.display());
    Ok(())
}
