use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Représente un étudiant inscrit à l'université
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Student {
    /// Identifiant unique (affecté par le stockage à la création, 0 tant que non persisté)
    pub id: i64,

    /// Numéro d'étudiant (unique)
    pub number: String,

    /// Nom de famille
    pub last_name: String,

    /// Prénom
    pub first_name: String,

    /// Email de l'étudiant (unique)
    #[validate(email(message = "Format d'email invalide"))]
    pub email: String,

    /// Parcours suivi par l'étudiant (au plus un)
    pub track_id: Option<i64>,

    /// Date de création de la fiche
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Crée une fiche étudiant non persistée, sans parcours
    pub fn new(number: &str, last_name: &str, first_name: &str, email: &str) -> Self {
        Self {
            id: 0,
            number: number.to_string(),
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            email: email.to_string(),
            track_id: None,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID {} : {} - {} {} ({})",
            self.id, self.number, self.first_name, self.last_name, self.email
        )
    }
}
