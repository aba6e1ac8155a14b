//! Repository-Trait fuer den Credential-Store
//!
//! Das Repository-Pattern entkoppelt den Auth-Service von der konkreten
//! Datenbank-Implementierung. Produktiv laeuft SQLite (`sqlite::SqliteDb`),
//! Tests koennen eine In-Memory-Implementierung einhaengen.

use thrive_core::KontoId;

use crate::error::DbResult;
use crate::models::{KontoRecord, NeuesKonto};

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://thrive.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Timeout beim Holen einer Pool-Verbindung in Sekunden.
    /// Nach Ablauf gilt der Store als nicht erreichbar.
    pub verbindungs_timeout_sekunden: u64,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://thrive.db".into(),
            max_verbindungen: 5,
            verbindungs_timeout_sekunden: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Konto-Datenzugriffe
///
/// Invariante: pro E-Mail existiert hoechstens ein Konto. `create` muss
/// bei einer Verletzung `DbError::Eindeutigkeit` liefern – atomar auf
/// Storage-Ebene, nicht nur per Vorab-Lookup.
#[allow(async_fn_in_trait)]
pub trait KontoRepository: Send + Sync {
    /// Legt ein neues Konto an
    async fn create(&self, data: NeuesKonto<'_>) -> DbResult<KontoRecord>;

    /// Laedt ein Konto anhand der E-Mail-Adresse
    async fn get_by_email(&self, email: &str) -> DbResult<Option<KontoRecord>>;

    /// Laedt ein Konto anhand seiner ID
    async fn get_by_id(&self, id: KontoId) -> DbResult<Option<KontoRecord>>;

    /// Listet alle Konten auf
    async fn list(&self) -> DbResult<Vec<KontoRecord>>;
}
