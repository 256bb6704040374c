// FICHIER : formation/src/catalog/modules.rs
//
// Données du catalogue. Contenu repris du parcours capitaine 2026.

use super::{section, ModuleType, TrainingModule};

pub const TRAINING_MODULES: &[TrainingModule] = &[
    TrainingModule {
        module_id: "introduction",
        order: "00",
        title: "Introduction à la transition",
        description: "Découvre les enjeux du passage à une caisse sans chèque et le rôle attendu des capitaines.",
        section_id: section::INTRO,
        module_type: ModuleType::Intro,
        badge_label: Some("Introduction"),
        gradable_items: 0,
    },
    TrainingModule {
        module_id: "ta-feuille-de-route",
        order: "00B",
        title: "Ta feuille de route",
        description: "Visualise les objectifs, repères clés et l'ensemble des modules pour préparer ton parcours.",
        section_id: section::OVERVIEW,
        module_type: ModuleType::Intro,
        badge_label: Some("Ta feuille de route"),
        gradable_items: 0,
    },
    TrainingModule {
        module_id: "etape-01",
        order: "01",
        title: "Adopter la posture verbale & non verbale",
        description: "Pose les bases : mots, ton et attitude pour désamorcer les tensions.",
        section_id: section::POSTURE,
        module_type: ModuleType::Step,
        badge_label: None,
        gradable_items: 1,
    },
    TrainingModule {
        module_id: "etape-02",
        order: "02",
        title: "Les 3 réflexes clés à adopter",
        description: "Empathie, clarté et alternatives pour accompagner chaque client avec assurance.",
        section_id: section::REFLEXES,
        module_type: ModuleType::Step,
        badge_label: None,
        gradable_items: 0,
    },
    TrainingModule {
        module_id: "etape-03",
        order: "03",
        title: "Comprendre les réactions",
        description: "Explore les profils clients et prépare tes réponses clés.",
        section_id: section::CLIENT_GUIDE,
        module_type: ModuleType::Step,
        badge_label: None,
        gradable_items: 0,
    },
    TrainingModule {
        module_id: "etape-04",
        order: "04",
        title: "Comprendre les réactions",
        description: "Explore les profils clients et prépare tes réponses clés.",
        section_id: section::CLIENT_GUIDE,
        module_type: ModuleType::Step,
        badge_label: None,
        gradable_items: 0,
    },
    TrainingModule {
        module_id: "etape-05",
        order: "05",
        title: "S'exercer en situation",
        description: "Choisis la bonne réponse dans les scénarios inspirés du terrain.",
        section_id: section::SCENARIOS,
        module_type: ModuleType::Step,
        badge_label: None,
        gradable_items: 3,
    },
    TrainingModule {
        module_id: "etape-06",
        order: "06",
        title: "Écouter le terrain",
        description: "Découvre l'expérience de Muriel, capitaine de magasin Decathlon.",
        section_id: section::PODCAST,
        module_type: ModuleType::Step,
        badge_label: None,
        gradable_items: 0,
    },
    TrainingModule {
        module_id: "etape-07",
        order: "07",
        title: "Activer tes forces",
        description: "Synthétise les apprentissages et prépare ton passage à l'action.",
        section_id: section::SYNTHESIS,
        module_type: ModuleType::Step,
        badge_label: None,
        gradable_items: 0,
    },
    TrainingModule {
        module_id: "examen-final",
        order: "08",
        title: "Valider tes acquis",
        description: "Réponds au quiz final et finalise la formation.",
        section_id: section::FINAL_QUIZ,
        module_type: ModuleType::Exam,
        badge_label: Some("Examen final"),
        gradable_items: 4,
    },
];
