// FICHIER : formation/src/utils/mod.rs

// =========================================================================
//  FORMATION UTILS - Foundation Layer
// =========================================================================

// --- 1. MODULES INTERNES ---

pub mod config;
pub mod error;
pub mod fs;
pub mod logger;
pub mod macros;

// --- 2. FAÇADES SÉMANTIQUES ---

/// **Core Foundation** : Types de base et Erreurs.
pub mod core {
    pub use super::error::{AppError, Result};
}

/// **Application Context** : Config & Logs.
pub mod context {
    pub use super::config::PackagingConfig;
    pub use super::logger::init_logging;
}

/// **Le Prélude** : À utiliser via `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::context::PackagingConfig;
    pub use super::core::{AppError, Result};
    pub use tracing::{debug, error, info, warn};
}

// --- 3. EXPORTS DIRECTS ---

pub use config::PackagingConfig;
pub use error::{AppError, Result};
pub use logger::init_logging;
