// FICHIER : formation/src/scorm/bridge.rs
//
// Pont score/complétion vers le runtime du LMS hôte. Le pont est un puits
// d'écriture : il accumule un compteur de bonnes réponses partagé par des
// rapporteurs indépendants et pousse score et statuts vers l'hôte. L'absence
// d'hôte (prévisualisation hors LMS) est un cas normal : tout dégrade en no-op.

use crate::catalog;

/// Clés du data model CMI écrites par le pont.
pub const CMI_SCORE_RAW: &str = "cmi.core.score.raw";
pub const CMI_COMPLETION_STATUS: &str = "cmi.completion_status";
pub const CMI_SUCCESS_STATUS: &str = "cmi.success_status";

/// Seuil de réussite du parcours.
pub const PASS_THRESHOLD: f64 = 0.7;

/// Contrat du runtime LMS hôte.
///
/// Toutes les méthodes ont un corps no-op par défaut : un hôte peut n'exposer
/// qu'un sous-ensemble de l'API (voire rien), le pont doit tolérer toutes les
/// combinaisons sans erreur.
pub trait LmsRuntime {
    /// Prise de contact, appelée au plus une fois.
    fn initialize(&mut self) {}
    /// Écrit une valeur du data model CMI.
    fn set_value(&mut self, _key: &str, _value: &str) {}
    /// Pousse les écritures en attente côté hôte.
    fn commit(&mut self) {}
}

/// États du pont sur la durée de vie d'une session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BridgeState {
    Uninitialized,
    Initialized,
    Completed,
}

/// Pont score/complétion. Une seule instance construite au démarrage de
/// l'application, passée par référence à chaque composant rapporteur —
/// jamais d'état global ambiant.
pub struct ScormBridge {
    runtime: Option<Box<dyn LmsRuntime>>,
    state: BridgeState,
    total_questions: usize,
    correct_count: usize,
}

impl ScormBridge {
    /// Construit un pont pour un total d'items donné.
    /// `runtime: None` modélise l'absence d'hôte LMS.
    pub fn new(runtime: Option<Box<dyn LmsRuntime>>, total_questions: usize) -> Self {
        Self {
            runtime,
            state: BridgeState::Uninitialized,
            total_questions,
            correct_count: 0,
        }
    }

    /// Construit le pont du parcours complet : le total d'items est dérivé
    /// du catalogue, jamais entretenu à la main.
    pub fn for_course(runtime: Option<Box<dyn LmsRuntime>>) -> Self {
        Self::new(runtime, catalog::total_gradable_items())
    }

    /// Prise de contact avec l'hôte, au chargement de la page.
    /// Au plus un appel à l'initialize hôte ; ré-invocations ignorées.
    pub fn initialize(&mut self) {
        if self.state != BridgeState::Uninitialized {
            return;
        }
        if let Some(runtime) = self.runtime.as_mut() {
            runtime.initialize();
        }
        self.state = BridgeState::Initialized;
    }

    /// Enregistre l'issue d'un item (scénario ou question résolu).
    /// Sur une bonne réponse, le score courant est poussé à l'hôte puis commité.
    /// La prise de contact hôte précède toujours la première écriture.
    pub fn record_outcome(&mut self, correct: bool) {
        if !correct {
            return;
        }
        if self.state == BridgeState::Uninitialized {
            self.initialize();
        }
        self.correct_count += 1;

        let percentage = self.score_percentage();
        if let Some(runtime) = self.runtime.as_mut() {
            runtime.set_value(CMI_SCORE_RAW, &percentage.to_string());
            runtime.commit();
        }
    }

    /// Clôture du parcours, déclenchée par l'action de fin de formation.
    /// Idempotent : seul le premier appel écrit les statuts.
    pub fn mark_completed(&mut self) {
        if self.state == BridgeState::Completed {
            return;
        }
        if self.state == BridgeState::Uninitialized {
            self.initialize();
        }
        self.state = BridgeState::Completed;

        let passed = self.pass_ratio() >= PASS_THRESHOLD;
        if let Some(runtime) = self.runtime.as_mut() {
            runtime.set_value(CMI_COMPLETION_STATUS, "completed");
            runtime.set_value(CMI_SUCCESS_STATUS, if passed { "passed" } else { "failed" });
            runtime.commit();
        }
    }

    /// Score courant, arrondi en pourcentage entier.
    pub fn score_percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        let ratio = self.correct_count as f64 / self.total_questions as f64;
        (ratio * 100.0).round() as u32
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn is_completed(&self) -> bool {
        self.state == BridgeState::Completed
    }

    fn pass_ratio(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_count as f64 / self.total_questions as f64
    }
}
