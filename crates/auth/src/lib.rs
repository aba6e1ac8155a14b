//! thrive-auth – Auth-Service
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id
//! - Eingabe-Validierung (E-Mail, Passwort-Policy, Rollen)
//! - Session-Management (in-memory mit TTL)
//! - AuthService (Registrierung, Login, Logout, Konten-Auflistung)
//! - Route-Guard-Kontrakt fuer den Client

pub mod error;
pub mod guard;
pub mod password;
pub mod service;
pub mod session;
pub mod validierung;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult};
pub use guard::{route_pruefen, GuardEntscheidung, IdentitaetsMarker, RollenAnforderung};
pub use password::{passwort_hashen, passwort_verifizieren};
pub use service::{AuthService, Registrierung};
pub use session::{Session, SessionStore};
