//! Gemeinsame Typen fuer die Thrive-Plattform
//!
//! Die Konto-ID verwendet das Newtype-Pattern um Verwechslungen mit
//! anderen UUIDs zur Compilezeit auszuschliessen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Eindeutige Konto-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KontoId(pub Uuid);

impl KontoId {
    /// Erstellt eine neue zufaellige KontoId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for KontoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for KontoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rolle eines Kontos auf der Plattform
///
/// Die Rolle steuert clientseitig welches Dashboard angezeigt wird.
/// Sie ist KEINE serverseitige Berechtigungsgrenze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rolle {
    Student,
    Counselor,
    Admin,
}

impl Rolle {
    pub fn als_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Counselor => "counselor",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Rolle {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "counselor" => Ok(Self::Counselor),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unbekannte Rolle: {other}")),
        }
    }
}

impl std::fmt::Display for Rolle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.als_str())
    }
}

/// Oeffentliche Projektion eines Kontos
///
/// Enthaelt nur Felder die an den Client gehen duerfen – niemals
/// den Passwort-Hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KontoProfil {
    pub id: KontoId,
    /// Anzeigename ("Vorname Nachname")
    pub name: String,
    pub email: String,
    #[serde(rename = "role")]
    pub rolle: Rolle,
}
