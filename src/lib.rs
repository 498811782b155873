// src/lib.rs
// Modules principaux
pub mod core;
pub mod infrastructure;
pub mod models;
pub mod repositories;
pub mod utils;

// Ré-exports pour faciliter l'utilisation
pub use self::core::*;
pub use infrastructure::InMemoryRepositoryFactory;
pub use models::*;
pub use repositories::*;
pub use utils::*;

// Version de l'application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Scolarite Platform";

// Types communs
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use validator::Validate;
