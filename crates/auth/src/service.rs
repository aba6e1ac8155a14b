//! Auth-Service fuer Thrive
//!
//! Zentraler Service fuer Registrierung, Login, Logout und
//! Session-Validierung. Vereinheitlicht die Registrierungslogik hinter
//! einem einzigen Kontrakt und nutzt das Konto-Repository plus den
//! Session-Store.

use std::sync::Arc;

use thrive_core::KontoProfil;
use thrive_db::{DbError, KontoRecord, KontoRepository, NeuesKonto};

use crate::{
    error::{AuthError, AuthResult},
    password::{passwort_hashen, passwort_verifizieren},
    session::{Session, SessionStore},
    validierung,
};

/// Eingabedaten einer Registrierung (kanonische Form mit getrennten Namen)
#[derive(Debug, Clone)]
pub struct Registrierung<'a> {
    pub email: &'a str,
    pub passwort: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    /// Rolle als Wire-String ("student", "counselor", "admin")
    pub rolle: &'a str,
}

/// Auth-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct AuthService<K: KontoRepository> {
    konten: Arc<K>,
    sessions: Arc<SessionStore>,
}

impl<K: KontoRepository> AuthService<K> {
    pub fn neu(konten: Arc<K>, sessions: Arc<SessionStore>) -> Self {
        Self { konten, sessions }
    }

    /// Registriert ein neues Konto
    ///
    /// Prueft die Eingaben, lehnt bereits registrierte E-Mails ab und
    /// legt das Konto mit gehashtem Passwort an. Bei Erfolg genau ein
    /// Schreibvorgang; bei Duplikat oder Validierungsfehler keiner.
    pub async fn registrieren(&self, daten: Registrierung<'_>) -> AuthResult<KontoRecord> {
        validierung::email_pruefen(daten.email)?;
        validierung::passwort_pruefen(daten.passwort)?;
        validierung::name_pruefen("Vorname", daten.first_name)?;
        validierung::name_pruefen("Nachname", daten.last_name)?;
        let rolle = validierung::rolle_pruefen(daten.rolle)?;

        // Vorab-Lookup fuer die normale Fehlermeldung. Das Rennen zweier
        // gleichzeitiger Registrierungen entscheidet der Unique-Index im
        // Store, nicht dieser Check.
        if self.konten.get_by_email(daten.email).await?.is_some() {
            return Err(AuthError::EmailVergeben(daten.email.to_string()));
        }

        let password_hash = passwort_hashen(daten.passwort)?;

        let konto = self
            .konten
            .create(NeuesKonto {
                email: daten.email,
                first_name: daten.first_name,
                last_name: daten.last_name,
                password_hash: &password_hash,
                rolle,
            })
            .await
            .map_err(|e| match e {
                DbError::Eindeutigkeit(_) => AuthError::EmailVergeben(daten.email.to_string()),
                andere => AuthError::Datenbank(andere),
            })?;

        tracing::info!(
            konto_id = %konto.id,
            email = %konto.email,
            rolle = %konto.rolle,
            "Neues Konto registriert"
        );

        Ok(konto)
    }

    /// Meldet ein Konto an und erstellt eine neue Session
    ///
    /// Unterscheidet bewusst zwischen unbekannter E-Mail
    /// (`KontoNichtGefunden`) und falschem Passwort
    /// (`UngueltigeAnmeldedaten`) – das entspricht dem API-Kontrakt
    /// (404 vs. 400).
    pub async fn anmelden(&self, email: &str, passwort: &str) -> AuthResult<(KontoRecord, Session)> {
        let konto = self
            .konten
            .get_by_email(email)
            .await?
            .ok_or(AuthError::KontoNichtGefunden)?;

        let korrekt = passwort_verifizieren(passwort, &konto.password_hash)?;
        if !korrekt {
            tracing::warn!(email = %email, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        let session = self.sessions.erstellen(konto.id).await?;

        tracing::info!(konto_id = %konto.id, email = %konto.email, "Konto angemeldet");

        Ok((konto, session))
    }

    /// Meldet ab und invalidiert die Session
    pub async fn abmelden(&self, session_token: &str) -> AuthResult<()> {
        self.sessions.invalidieren(session_token).await?;
        tracing::debug!("Session invalidiert (Abmeldung)");
        Ok(())
    }

    /// Validiert einen Session-Token und gibt das zugehoerige Konto zurueck
    pub async fn session_validieren(&self, token: &str) -> AuthResult<KontoRecord> {
        let session = self.sessions.validieren(token).await?;

        self.konten
            .get_by_id(session.konto_id)
            .await?
            .ok_or(AuthError::SessionUngueltig)
    }

    /// Listet alle Konten als oeffentliche Projektionen auf
    ///
    /// Der Passwort-Hash wird hier abgestreift und verlaesst den
    /// Service nie.
    pub async fn konten_auflisten(&self) -> AuthResult<Vec<KontoProfil>> {
        let konten = self.konten.list().await?;
        Ok(konten.iter().map(KontoRecord::profil).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::Mutex;

    use chrono::Utc;
    use thrive_core::{KontoId, Rolle};
    use thrive_db::DbResult;

    // Minimales In-Memory-Repository. Der Duplikat-Check in `create`
    // laeuft unter dem Mutex und ist damit atomar – wie der
    // Unique-Index der echten Datenbank.
    #[derive(Default)]
    struct TestKontoRepo {
        konten: Mutex<Vec<KontoRecord>>,
    }

    impl KontoRepository for TestKontoRepo {
        async fn create(&self, data: NeuesKonto<'_>) -> DbResult<KontoRecord> {
            let mut konten = self.konten.lock().unwrap();
            if konten.iter().any(|k| k.email == data.email) {
                return Err(DbError::Eindeutigkeit(format!(
                    "E-Mail '{}' bereits registriert",
                    data.email
                )));
            }
            let record = KontoRecord {
                id: KontoId::new(),
                email: data.email.to_string(),
                first_name: data.first_name.to_string(),
                last_name: data.last_name.to_string(),
                password_hash: data.password_hash.to_string(),
                rolle: data.rolle,
                created_at: Utc::now(),
            };
            konten.push(record.clone());
            Ok(record)
        }

        async fn get_by_email(&self, email: &str) -> DbResult<Option<KontoRecord>> {
            Ok(self
                .konten
                .lock()
                .unwrap()
                .iter()
                .find(|k| k.email == email)
                .cloned())
        }

        async fn get_by_id(&self, id: KontoId) -> DbResult<Option<KontoRecord>> {
            Ok(self
                .konten
                .lock()
                .unwrap()
                .iter()
                .find(|k| k.id == id)
                .cloned())
        }

        async fn list(&self) -> DbResult<Vec<KontoRecord>> {
            Ok(self.konten.lock().unwrap().clone())
        }
    }

    fn test_service() -> AuthService<TestKontoRepo> {
        AuthService::neu(Arc::new(TestKontoRepo::default()), SessionStore::neu(24))
    }

    fn registrierung<'a>(email: &'a str, passwort: &'a str) -> Registrierung<'a> {
        Registrierung {
            email,
            passwort,
            first_name: "Anna",
            last_name: "Beispiel",
            rolle: "student",
        }
    }

    #[tokio::test]
    async fn registrieren_und_anmelden() {
        let service = test_service();

        let konto = service
            .registrieren(registrierung("a@x.com", "secret1"))
            .await
            .expect("Registrierung fehlgeschlagen");

        assert_eq!(konto.email, "a@x.com");
        assert_eq!(konto.rolle, Rolle::Student);
        assert_ne!(konto.password_hash, "secret1");

        let (angemeldet, session) = service
            .anmelden("a@x.com", "secret1")
            .await
            .expect("Anmeldung fehlgeschlagen");

        assert_eq!(angemeldet.id, konto.id);
        assert!(!session.token.is_empty());
    }

    #[tokio::test]
    async fn doppelte_registrierung_schlaegt_fehl() {
        let service = test_service();
        service
            .registrieren(registrierung("doppelt@x.com", "passwort1"))
            .await
            .unwrap();

        let ergebnis = service
            .registrieren(registrierung("doppelt@x.com", "anderes1"))
            .await;
        assert!(matches!(ergebnis, Err(AuthError::EmailVergeben(_))));

        // Es bleibt bei genau einem Konto
        let alle = service.konten_auflisten().await.unwrap();
        assert_eq!(alle.len(), 1);
    }

    #[tokio::test]
    async fn falsches_passwort_abgelehnt() {
        let service = test_service();
        service
            .registrieren(registrierung("u@x.com", "richtig1"))
            .await
            .unwrap();

        let ergebnis = service.anmelden("u@x.com", "falsch1").await;
        assert!(matches!(ergebnis, Err(AuthError::UngueltigeAnmeldedaten)));
    }

    #[tokio::test]
    async fn unbekannte_email_gibt_nicht_gefunden() {
        let service = test_service();
        // Niemals UngueltigeAnmeldedaten fuer unbekannte Konten
        let ergebnis = service.anmelden("niemand@x.com", "egal12").await;
        assert!(matches!(ergebnis, Err(AuthError::KontoNichtGefunden)));
    }

    #[tokio::test]
    async fn validierungsfehler_schreiben_nichts() {
        let service = test_service();

        for daten in [
            registrierung("keine-email", "secret1"),
            registrierung("a@x.com", "kurz"),
            Registrierung {
                rolle: "chef",
                ..registrierung("b@x.com", "secret1")
            },
            Registrierung {
                first_name: "",
                ..registrierung("c@x.com", "secret1")
            },
        ] {
            let ergebnis = service.registrieren(daten).await;
            assert!(matches!(ergebnis, Err(AuthError::Validierung(_))));
        }

        assert!(service.konten_auflisten().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn session_validieren_und_abmelden() {
        let service = test_service();
        service
            .registrieren(registrierung("s@x.com", "secret1"))
            .await
            .unwrap();
        let (_, session) = service.anmelden("s@x.com", "secret1").await.unwrap();

        let konto = service.session_validieren(&session.token).await.unwrap();
        assert_eq!(konto.email, "s@x.com");

        service.abmelden(&session.token).await.unwrap();
        let ergebnis = service.session_validieren(&session.token).await;
        assert!(matches!(ergebnis, Err(AuthError::SessionUngueltig)));
    }

    #[tokio::test]
    async fn auflistung_ohne_hashes() {
        let service = test_service();
        service
            .registrieren(registrierung("l@x.com", "secret1"))
            .await
            .unwrap();

        let profile = service.konten_auflisten().await.unwrap();
        assert_eq!(profile.len(), 1);
        assert_eq!(profile[0].name, "Anna Beispiel");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn gleichzeitige_registrierungen_eine_gewinnt() {
        let service = Arc::new(test_service());

        let mut handles = Vec::new();
        for i in 0..5 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                let passwort = format!("passwort{i}");
                service
                    .registrieren(Registrierung {
                        email: "rennen@x.com",
                        passwort: &passwort,
                        first_name: "R",
                        last_name: "T",
                        rolle: "student",
                    })
                    .await
            }));
        }

        let mut erfolge = 0;
        let mut duplikate = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => erfolge += 1,
                Err(AuthError::EmailVergeben(_)) => duplikate += 1,
                Err(andere) => panic!("Unerwarteter Fehler: {andere}"),
            }
        }

        assert_eq!(erfolge, 1, "Genau eine Registrierung darf gewinnen");
        assert_eq!(duplikate, 4);
        assert_eq!(service.konten_auflisten().await.unwrap().len(), 1);
    }

    #[test]
    fn rolle_from_str_fuer_wire_werte() {
        assert_eq!(Rolle::from_str("counselor").unwrap(), Rolle::Counselor);
    }
}
