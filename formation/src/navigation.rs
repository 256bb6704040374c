// FICHIER : formation/src/navigation.rs
//
// Calcul du précédent/suivant pour un module donné. Fonction pure sur
// l'instantané du catalogue : mêmes entrées, même sortie.

use crate::catalog::{self, TrainingModule, TRAINING_MODULES};

/// Mode de navigation.
///
/// En `Linear`, l'apprenant parcourt tout le catalogue et les voisins sont
/// les entrées adjacentes. En `Standalone` (module unique livré seul à un
/// LMS), les voisins sont forcés absents : leur contenu n'est pas embarqué
/// dans ce paquet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    #[default]
    Linear,
    Standalone,
}

/// Contexte de navigation dérivé, recalculé à chaque requête.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationContext {
    pub previous: Option<&'static TrainingModule>,
    pub next: Option<&'static TrainingModule>,
}

/// Calcule les voisins du module `module_id` dans le mode demandé.
///
/// Renvoie `None` si l'id ne résout pas : c'est une erreur de routage côté
/// appelant (redirection vers l'accueil), pas une affaire du contrôleur.
pub fn compute_navigation(module_id: &str, mode: NavigationMode) -> Option<NavigationContext> {
    let index = catalog::module_index(module_id)?;

    if mode == NavigationMode::Standalone {
        return Some(NavigationContext::default());
    }

    let previous = index.checked_sub(1).map(|i| &TRAINING_MODULES[i]);
    let next = TRAINING_MODULES.get(index + 1);

    Some(NavigationContext { previous, next })
}

/// Extrait l'id de module d'une query string de lancement
/// (`index.html?module=etape-02`), avec ou sans `?` initial.
/// C'est le pendant runtime du href produit par le générateur de manifest.
pub fn standalone_module_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "module")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_module_has_no_previous() {
        let first = TRAINING_MODULES.first().unwrap();
        let nav = compute_navigation(first.module_id, NavigationMode::Linear).unwrap();
        assert!(nav.previous.is_none());
        assert_eq!(nav.next.unwrap().module_id, TRAINING_MODULES[1].module_id);
    }

    #[test]
    fn test_last_module_has_no_next() {
        let last = TRAINING_MODULES.last().unwrap();
        let nav = compute_navigation(last.module_id, NavigationMode::Linear).unwrap();
        assert!(nav.next.is_none());
        assert_eq!(
            nav.previous.unwrap().module_id,
            TRAINING_MODULES[TRAINING_MODULES.len() - 2].module_id
        );
    }

    #[test]
    fn test_interior_module_adjacency() {
        for (i, module) in TRAINING_MODULES.iter().enumerate() {
            let nav = compute_navigation(module.module_id, NavigationMode::Linear).unwrap();
            if i > 0 {
                assert_eq!(
                    nav.previous.unwrap().module_id,
                    TRAINING_MODULES[i - 1].module_id
                );
            }
            if i < TRAINING_MODULES.len() - 1 {
                assert_eq!(nav.next.unwrap().module_id, TRAINING_MODULES[i + 1].module_id);
            }
        }
    }

    #[test]
    fn test_standalone_forces_both_neighbours_absent() {
        for module in TRAINING_MODULES {
            let nav = compute_navigation(module.module_id, NavigationMode::Standalone).unwrap();
            assert!(nav.previous.is_none());
            assert!(nav.next.is_none());
        }
    }

    #[test]
    fn test_unknown_id_yields_none() {
        assert!(compute_navigation("does-not-exist", NavigationMode::Linear).is_none());
    }

    #[test]
    fn test_navigation_from_etape_01() {
        // etape-01 est précédée des deux modules d'introduction
        let nav = compute_navigation("etape-01", NavigationMode::Linear).unwrap();
        assert_eq!(nav.previous.unwrap().module_id, "ta-feuille-de-route");
        assert_eq!(nav.next.unwrap().module_id, "etape-02");
    }

    #[test]
    fn test_standalone_module_from_query() {
        assert_eq!(
            standalone_module_from_query("?module=etape-02"),
            Some("etape-02".to_string())
        );
        assert_eq!(
            standalone_module_from_query("v=2&module=examen-final"),
            Some("examen-final".to_string())
        );
        assert_eq!(standalone_module_from_query("?module="), None);
        assert_eq!(standalone_module_from_query("?autre=x"), None);
        assert_eq!(standalone_module_from_query(""), None);
    }
}
