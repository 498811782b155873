use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Représente une unité d'enseignement (UE)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseUnit {
    /// Identifiant unique (affecté par le stockage à la création, 0 tant que non persisté)
    pub id: i64,

    /// Numéro de l'UE (unique)
    pub code: String,

    /// Intitulé de l'UE
    pub title: String,

    /// Date de création de la fiche
    pub created_at: DateTime<Utc>,
}

impl CourseUnit {
    /// Crée une UE non persistée
    pub fn new(code: &str, title: &str) -> Self {
        Self {
            id: 0,
            code: code.to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for CourseUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID {} : {} - {}", self.id, self.code, self.title)
    }
}
