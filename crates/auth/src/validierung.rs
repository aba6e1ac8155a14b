//! Eingabe-Validierung fuer Registrierung und Login
//!
//! Die Pruefungen laufen VOR jedem Datenbankzugriff und vor dem Hashing,
//! damit ungueltige Anfragen keine Schreibvorgaenge und keine teuren
//! Hash-Berechnungen ausloesen.

use std::str::FromStr;

use thrive_core::Rolle;

use crate::error::{AuthError, AuthResult};

/// Mindestlaenge fuer Passwoerter
pub const PASSWORT_MINDESTLAENGE: usize = 6;

/// Prueft eine E-Mail-Adresse auf syntaktische Gueltigkeit
///
/// Bewusst konservativ: genau ein '@', nicht-leerer Local-Part,
/// Domain mit Punkt, keine Leerzeichen. Keine vollstaendige
/// RFC-5321-Pruefung.
pub fn email_pruefen(email: &str) -> AuthResult<()> {
    if email.is_empty() {
        return Err(AuthError::validierung("E-Mail fehlt"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(AuthError::validierung("E-Mail enthaelt Leerzeichen"));
    }

    let mut teile = email.splitn(2, '@');
    let local = teile.next().unwrap_or("");
    let domain = teile.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AuthError::validierung("E-Mail-Adresse ungueltig"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(AuthError::validierung("E-Mail-Domain ungueltig"));
    }

    Ok(())
}

/// Prueft ein Passwort gegen die Mindestlaengen-Policy
pub fn passwort_pruefen(passwort: &str) -> AuthResult<()> {
    if passwort.chars().count() < PASSWORT_MINDESTLAENGE {
        return Err(AuthError::validierung(format!(
            "Passwort zu kurz (mindestens {PASSWORT_MINDESTLAENGE} Zeichen)"
        )));
    }
    Ok(())
}

/// Prueft einen Namensbestandteil (Vor- oder Nachname)
pub fn name_pruefen(feld: &str, wert: &str) -> AuthResult<()> {
    if wert.trim().is_empty() {
        return Err(AuthError::validierung(format!("{feld} fehlt")));
    }
    Ok(())
}

/// Parst den Rollen-String aus der Anfrage
pub fn rolle_pruefen(rolle: &str) -> AuthResult<Rolle> {
    Rolle::from_str(rolle).map_err(AuthError::Validierung)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gueltige_emails() {
        for email in ["a@x.com", "anna.beispiel@uni.example", "x+tag@sub.domain.org"] {
            assert!(email_pruefen(email).is_ok(), "sollte gueltig sein: {email}");
        }
    }

    #[test]
    fn ungueltige_emails() {
        for email in ["", "ohne-at", "@x.com", "a@", "a@b", "a @x.com", "a@@x.com", "a@.com", "a@x."] {
            assert!(
                matches!(email_pruefen(email), Err(AuthError::Validierung(_))),
                "sollte ungueltig sein: {email:?}"
            );
        }
    }

    #[test]
    fn passwort_mindestlaenge() {
        assert!(passwort_pruefen("12345").is_err());
        assert!(passwort_pruefen("123456").is_ok());
        assert!(passwort_pruefen("secret1").is_ok());
    }

    #[test]
    fn namen_nicht_leer() {
        assert!(name_pruefen("Vorname", "").is_err());
        assert!(name_pruefen("Vorname", "   ").is_err());
        assert!(name_pruefen("Vorname", "Anna").is_ok());
    }

    #[test]
    fn rollen_parsing() {
        assert_eq!(rolle_pruefen("student").unwrap(), Rolle::Student);
        assert_eq!(rolle_pruefen("counselor").unwrap(), Rolle::Counselor);
        assert_eq!(rolle_pruefen("admin").unwrap(), Rolle::Admin);
        assert!(matches!(rolle_pruefen("chef"), Err(AuthError::Validierung(_))));
    }
}
