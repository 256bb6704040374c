// FICHIER : formation/src/lib.rs
//
// Outillage de la formation « Fin du paiement par chèque » :
// - `catalog` : catalogue ordonné des modules (source de vérité unique)
// - `navigation` : précédent/suivant en mode linéaire ou standalone
// - `scorm` : pont LMS, manifest IMS et export de paquets
// - `utils` : couche de fondation (erreurs, fs, config, logs, macros)

pub mod catalog;
pub mod navigation;
pub mod scorm;
pub mod utils;
