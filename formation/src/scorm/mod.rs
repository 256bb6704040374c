// FICHIER : formation/src/scorm/mod.rs
//
// Couche SCORM : pont score/complétion côté runtime, génération de manifest
// et export de paquets côté build.

pub mod bridge;
pub mod export;
pub mod manifest;

pub use bridge::{LmsRuntime, ScormBridge};
pub use export::{parse_module_selection, resolve_selection, ExportPipeline};
pub use manifest::{generate_manifest, ManifestDescriptor};
