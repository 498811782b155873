use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Représente une note obtenue par un étudiant dans une UE
///
/// Classe d'association : la note référence l'étudiant et l'UE par identifiants,
/// elle n'est possédée ni par l'un ni par l'autre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    /// Identifiant unique (affecté par le stockage à la création, 0 tant que non persisté)
    pub id: i64,

    /// Valeur de la note (entre 0 et 20)
    pub value: f32,

    /// Étudiant noté
    pub student_id: i64,

    /// UE concernée
    pub course_unit_id: i64,

    /// Date de création de la fiche
    pub created_at: DateTime<Utc>,
}

impl Grade {
    /// Crée une note non persistée
    pub fn new(value: f32, student_id: i64, course_unit_id: i64) -> Self {
        Self {
            id: 0,
            value,
            student_id,
            course_unit_id,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Note {} : Étudiant {} - UE {} - Valeur {}/20",
            self.id, self.student_id, self.course_unit_id, self.value
        )
    }
}
