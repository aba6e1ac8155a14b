//! Datenbankmodelle fuer Thrive
//!
//! Diese Typen repraesentieren Konten-Datensaetze aus der Datenbank.
//! Der Passwort-Hash verlaesst dieses Crate nur ueber `KontoRecord`;
//! fuer den Client gibt es die Projektion `KontoProfil`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use thrive_core::{KontoId, KontoProfil, Rolle};

/// Konto-Datensatz aus der Datenbank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KontoRecord {
    pub id: KontoId,
    /// E-Mail-Adresse, eindeutiger Schluessel (case-sensitiv wie gespeichert)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2id-PHC-String, niemals das Klartext-Passwort
    pub password_hash: String,
    pub rolle: Rolle,
    pub created_at: DateTime<Utc>,
}

impl KontoRecord {
    /// Oeffentliche Projektion ohne Geheimnisse
    pub fn profil(&self) -> KontoProfil {
        KontoProfil {
            id: self.id,
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email.clone(),
            rolle: self.rolle,
        }
    }
}

/// Daten zum Erstellen eines neuen Kontos
#[derive(Debug, Clone)]
pub struct NeuesKonto<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password_hash: &'a str,
    pub rolle: Rolle,
}
