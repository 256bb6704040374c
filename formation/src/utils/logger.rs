// FICHIER : formation/src/utils/logger.rs

use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        // =========================================================================
        // LAYER 1 : CONSOLE (Pour l'Humain)
        // =========================================================================
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        // Filtre anti-doublon pour ne pas polluer la console avec les logs des macros
        let anti_double_filter =
            filter_fn(|metadata| !metadata.fields().iter().any(|f| f.name() == "event"));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(env_filter)
            .with_filter(anti_double_filter);

        // =========================================================================
        // LAYER 2 : FICHIER JSON (Optionnel, activé par FORMATION_LOG_DIR)
        // =========================================================================
        let file_layer = std::env::var("FORMATION_LOG_DIR").ok().map(|log_dir| {
            std::fs::create_dir_all(&log_dir).ok();
            let file_appender = rolling::daily(&log_dir, "formation.log");
            fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });

        // =========================================================================
        // ASSEMBLAGE ET INITIALISATION
        // =========================================================================
        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if registry.try_init().is_err() {
            tracing::warn!(
                "⚠️ [Logger] Tentative de ré-initialisation ignorée (Global subscriber déjà actif)."
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_logging_is_reentrant() {
        // Deux appels consécutifs ne doivent jamais paniquer
        init_logging();
        init_logging();
    }
}
