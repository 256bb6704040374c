// FICHIER : formation/src/catalog/mod.rs
//
// Catalogue des modules de la formation « Fin du paiement par chèque ».
// Source de vérité unique : l'ordre du tableau définit à la fois l'ordre
// d'affichage et l'adjacence précédent/suivant de la navigation.

mod modules;

pub use modules::TRAINING_MODULES;

use serde::Serialize;

/// Identifiants des sections de la page (ancres de rendu côté client).
pub mod section {
    pub const INTRO: &str = "section-intro";
    pub const OVERVIEW: &str = "section-overview";
    pub const POSTURE: &str = "section-posture";
    pub const REFLEXES: &str = "section-reflexes";
    pub const CLIENT_GUIDE: &str = "section-clients";
    pub const SCENARIOS: &str = "section-scenarios";
    pub const PODCAST: &str = "section-podcast";
    pub const SYNTHESIS: &str = "section-synthese";
    pub const FINAL_QUIZ: &str = "section-final-quiz";
}

/// Nature d'un module : les `Intro` sont des points d'entrée qui ne comptent
/// pas dans le parcours linéaire, contrairement aux `Step` et à l'`Exam`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Intro,
    Step,
    Exam,
}

/// Un module de formation. Immuable, durée de vie du process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingModule {
    /// Identifiant stable (slug) : clé de routage et clé de packaging SCORM
    pub module_id: &'static str,
    /// Libellé d'ordre, purement affichage (peut porter un suffixe : "00B")
    pub order: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Section de la page rendue par ce module
    pub section_id: &'static str,
    pub module_type: ModuleType,
    /// Libellé de badge explicite ; sinon dérivé : « Étape {order} »
    pub badge_label: Option<&'static str>,
    /// Nombre d'items notés portés par ce module (scénarios, questions…)
    pub gradable_items: usize,
}

/// Catalogue complet, dans l'ordre d'affichage. Les appelants ne mutent pas.
pub fn modules() -> &'static [TrainingModule] {
    TRAINING_MODULES
}

/// Recherche par identifiant. Un id inconnu est un cas attendu (URL périmée) :
/// on renvoie `None`, jamais une erreur — c'est l'appelant qui redirige.
pub fn module_by_id(module_id: &str) -> Option<&'static TrainingModule> {
    TRAINING_MODULES.iter().find(|m| m.module_id == module_id)
}

/// Position du module dans le catalogue.
pub fn module_index(module_id: &str) -> Option<usize> {
    TRAINING_MODULES.iter().position(|m| m.module_id == module_id)
}

/// Modules du parcours linéaire (étapes + examen), ordre du catalogue.
/// Sert aux affichages « X sur Y » qui ne comptent pas les introductions.
pub fn linear_steps() -> impl Iterator<Item = &'static TrainingModule> {
    TRAINING_MODULES
        .iter()
        .filter(|m| m.module_type != ModuleType::Intro)
}

/// Libellé de badge d'un module.
pub fn badge_label(module: &TrainingModule) -> String {
    match module.badge_label {
        Some(label) => label.to_string(),
        None => format!("Étape {}", module.order),
    }
}

/// Total d'items notés du parcours, dérivé du catalogue.
/// Remplace le littéral `TOTAL_QUESTIONS` entretenu à la main, dont les
/// variantes historiques de la page avaient fini par diverger (4, 7 ou 8).
pub fn total_gradable_items() -> usize {
    linear_steps().map(|m| m.gradable_items).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_module_ids_are_unique() {
        let mut seen = HashSet::new();
        for module in modules() {
            assert!(
                seen.insert(module.module_id),
                "module_id dupliqué : {}",
                module.module_id
            );
        }
    }

    #[test]
    fn test_module_by_id_resolves_known_ids() {
        let exam = module_by_id("examen-final").expect("examen-final doit exister");
        assert_eq!(exam.module_type, ModuleType::Exam);
        assert_eq!(exam.section_id, section::FINAL_QUIZ);

        let intro = module_by_id("introduction").expect("introduction doit exister");
        assert_eq!(intro.module_type, ModuleType::Intro);
    }

    #[test]
    fn test_unknown_id_returns_none() {
        assert!(module_by_id("does-not-exist").is_none());
        assert!(module_index("does-not-exist").is_none());
    }

    #[test]
    fn test_linear_steps_exclude_intros() {
        let steps: Vec<_> = linear_steps().collect();
        assert_eq!(steps.len(), 8);
        assert!(steps.iter().all(|m| m.module_type != ModuleType::Intro));
        // L'ordre du catalogue est préservé
        assert_eq!(steps.first().unwrap().module_id, "etape-01");
        assert_eq!(steps.last().unwrap().module_id, "examen-final");
    }

    #[test]
    fn test_badge_label_override_and_derivation() {
        let intro = module_by_id("introduction").unwrap();
        assert_eq!(badge_label(intro), "Introduction");

        let step = module_by_id("etape-02").unwrap();
        assert_eq!(badge_label(step), "Étape 02");
    }

    #[test]
    fn test_total_gradable_items_is_derived() {
        // 1 mini-quiz posture + 3 scénarios + 4 questions d'examen
        assert_eq!(total_gradable_items(), 8);
    }
}
