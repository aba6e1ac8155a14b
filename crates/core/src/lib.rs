//! thrive-core – gemeinsame Typen
//!
//! Dieses Crate stellt die Typen bereit, die von allen anderen
//! Thrive-Crates geteilt werden: Konto-ID, Rolle und die oeffentliche
//! Konto-Projektion.

pub mod types;

pub use types::{KontoId, KontoProfil, Rolle};
