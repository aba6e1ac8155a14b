//! SQLite-Backend-Implementierung des KontoRepository

pub mod konten;
pub mod pool;

pub use pool::SqliteDb;
