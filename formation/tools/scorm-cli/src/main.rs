use clap::{Parser, Subcommand};
use std::path::PathBuf;

// On garde le module local des commandes
mod commands;

use formation::{
    user_error,
    utils::{context, prelude::*},
};

#[derive(Parser)]
#[command(name = "scorm-cli")]
#[command(about = "Packaging SCORM de la formation « Fin du paiement par chèque »", long_about = None)]
#[command(version)]
struct Cli {
    /// Racine de la build client (dist/spa par défaut)
    #[arg(long, global = true, env = "FORMATION_DIST")]
    dist: Option<PathBuf>,

    /// Dossier de sortie des archives
    #[arg(long, global = true, env = "FORMATION_OUT_DIR")]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    // Optionnel : sans sous-commande, on exporte le parcours complet
    command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Exporte un ou plusieurs paquets SCORM (parcours complet par défaut)
    Export(commands::export::ExportArgs),

    /// Génère uniquement le manifest imsmanifest.xml
    Manifest(commands::manifest::ManifestArgs),
}

#[tokio::main]
async fn main() {
    // 1. Initialisation du Logger
    context::init_logging();

    // 2. Parsing & Dispatch
    let cli = Cli::parse();
    let config = build_config(&cli);

    let result = match cli.command {
        Some(Commands::Export(args)) => commands::export::handle(args, config).await,
        Some(Commands::Manifest(args)) => commands::manifest::handle(args, config).await,
        // Contrat CLI : sans argument, export du parcours complet
        None => commands::export::handle(commands::export::ExportArgs::default(), config).await,
    };

    if let Err(e) = result {
        user_error!("CMD_FAIL", "{}", e);
        std::process::exit(1);
    }

    tracing::debug!("Fin de l'exécution du CLI");
}

/// Configuration effective : environnement puis surcharges des drapeaux.
fn build_config(cli: &Cli) -> PackagingConfig {
    let mut config = PackagingConfig::from_env();
    if let Some(dist) = &cli.dist {
        config.dist_root = dist.clone();
    }
    if let Some(out_dir) = &cli.out_dir {
        config.output_dir = out_dir.clone();
    }
    config
}
