use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Représente un parcours de formation
///
/// Les étudiants inscrits ne sont pas portés par l'entité : l'inscription se
/// retrouve en interrogeant les étudiants sur leur `track_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Identifiant unique (affecté par le stockage à la création, 0 tant que non persisté)
    pub id: i64,

    /// Nom du parcours (unique)
    pub name: String,

    /// Année de formation (entre 1900 et 2100)
    pub formation_year: i32,

    /// UEs enseignées dans ce parcours (association ManyToMany portée par identifiants)
    pub course_unit_ids: Vec<i64>,

    /// Date de création de la fiche
    pub created_at: DateTime<Utc>,
}

impl Track {
    /// Crée un parcours non persisté, sans UE enseignée
    pub fn new(name: &str, formation_year: i32) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            formation_year,
            course_unit_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID {} : {} - Année {} ({} UEs enseignées)",
            self.id,
            self.name,
            self.formation_year,
            self.course_unit_ids.len()
        )
    }
}
