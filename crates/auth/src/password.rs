//! Passwort-Hashing mit Argon2id
//!
//! Argon2id ist der empfohlene adaptive Hash gemaess OWASP-Richtlinien.
//! Die Parameter sind so gewaehlt, dass ein Hash-Vorgang auf ueblicher
//! Hardware einige zehn Millisekunden dauert.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};

use crate::error::AuthError;

/// Speicher-Kosten: 64 MiB
const M_COST_KIB: u32 = 64 * 1024;
/// Iterationen
const T_COST: u32 = 3;
/// Parallelitaet
const P_COST: u32 = 1;

fn argon2_instanz() -> Argon2<'static> {
    let params = Params::new(M_COST_KIB, T_COST, P_COST, None)
        .expect("Argon2-Parameter ungueltig");
    Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params)
}

/// Hasht ein Passwort mit Argon2id und einem zufaelligen Salt
///
/// Gibt den PHC-String zurueck (inkl. Algorithmus, Parameter und Salt).
/// Das Klartext-Passwort wird weder gespeichert noch geloggt.
pub fn passwort_hashen(passwort: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    argon2_instanz()
        .hash_password(passwort.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswortHashing(e.to_string()))
}

/// Verifiziert ein Passwort gegen einen gespeicherten PHC-Hash
///
/// Gibt `true` zurueck wenn das Passwort korrekt ist. Der Vergleich
/// laeuft ueber die Verify-Routine der Bibliothek, nicht ueber
/// String-Gleichheit.
pub fn passwort_verifizieren(passwort: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::PasswortHashing(format!("Ungueltiges Hash-Format: {e}")))?;

    match argon2_instanz().verify_password(passwort.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswortHashing(e.to_string())),
    }
}
