//! thrive-db – Credential-Store
//!
//! Dieses Crate stellt das Repository-Pattern fuer Konten bereit:
//! ein `KontoRepository`-Trait plus die SQLite-Implementierung.
//! Die Eindeutigkeit der E-Mail wird per Unique-Index auf Storage-Ebene
//! erzwungen, nicht nur per Vorab-Lookup im Service.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::{DbError, DbResult};
pub use models::{KontoRecord, NeuesKonto};
pub use repository::{DatabaseConfig, KontoRepository};
pub use sqlite::SqliteDb;
