//! Session-Management fuer Thrive
//!
//! Der Login gibt einen serverseitig ausgestellten Token zurueck, der
//! bei jedem geschuetzten API-Aufruf validiert wird. Sessions liegen
//! in-memory (HashMap mit TTL); ein Hintergrund-Task raeumt abgelaufene
//! Eintraege weg. Der clientseitig gecachte Rollen-Marker bleibt damit
//! ein reiner UI-Hinweis und nie die Autorisierungsquelle.

use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use rand::RngCore;
use tokio::sync::RwLock;

use thrive_core::KontoId;

use crate::error::{AuthError, AuthResult};

/// Intervall fuer den automatischen Cleanup-Task: 15 Minuten
const CLEANUP_INTERVALL: Duration = Duration::from_secs(15 * 60);

/// Ein aktives Session-Token
#[derive(Debug, Clone)]
pub struct Session {
    /// Der Token-String (URL-sicheres Base64, 32 Zufallsbytes)
    pub token: String,
    /// Konto dem diese Session gehoert
    pub konto_id: KontoId,
    pub erstellt_am: DateTime<Utc>,
    pub laeuft_ab_am: DateTime<Utc>,
}

impl Session {
    /// Gibt `true` zurueck wenn die Session noch gueltig ist
    pub fn ist_gueltig(&self) -> bool {
        Utc::now() < self.laeuft_ab_am
    }
}

/// In-Memory Session-Store mit TTL
#[derive(Debug)]
pub struct SessionStore {
    /// token -> Session
    sessions: RwLock<HashMap<String, Session>>,
    ttl: chrono::Duration,
}

impl SessionStore {
    /// Erstellt einen leeren Store mit der angegebenen Lebensdauer
    pub fn neu(ttl_stunden: i64) -> Arc<Self> {
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: chrono::Duration::hours(ttl_stunden),
        })
    }

    /// Startet den periodischen Cleanup-Task fuer diesen Store
    pub fn cleanup_task_starten(store: &Arc<Self>) {
        let store = Arc::clone(store);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(CLEANUP_INTERVALL).await;
                let entfernt = store.cleanup_abgelaufene().await;
                if entfernt > 0 {
                    tracing::debug!(anzahl = entfernt, "Abgelaufene Sessions bereinigt");
                }
            }
        });
    }

    /// Erstellt eine neue Session fuer das angegebene Konto
    pub async fn erstellen(&self, konto_id: KontoId) -> AuthResult<Session> {
        let jetzt = Utc::now();
        let session = Session {
            token: token_generieren(),
            konto_id,
            erstellt_am: jetzt,
            laeuft_ab_am: jetzt + self.ttl,
        };

        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        tracing::debug!(konto_id = %konto_id, "Neue Session erstellt");
        Ok(session)
    }

    /// Validiert einen Token und gibt die Session zurueck
    ///
    /// `SessionUngueltig` wenn der Token unbekannt ist,
    /// `SessionAbgelaufen` wenn die TTL ueberschritten wurde.
    pub async fn validieren(&self, token: &str) -> AuthResult<Session> {
        let sessions = self.sessions.read().await;
        match sessions.get(token) {
            None => Err(AuthError::SessionUngueltig),
            Some(session) if !session.ist_gueltig() => Err(AuthError::SessionAbgelaufen),
            Some(session) => Ok(session.clone()),
        }
    }

    /// Invalidiert (loescht) eine Session anhand des Tokens
    pub async fn invalidieren(&self, token: &str) -> AuthResult<()> {
        self.sessions.write().await.remove(token);
        tracing::debug!("Session invalidiert");
        Ok(())
    }

    /// Bereinigt abgelaufene Sessions, gibt die Anzahl der entfernten zurueck
    pub async fn cleanup_abgelaufene(&self) -> usize {
        let jetzt = Utc::now();
        let mut sessions = self.sessions.write().await;
        let vorher = sessions.len();
        sessions.retain(|_, s| s.laeuft_ab_am > jetzt);
        vorher - sessions.len()
    }

    /// Anzahl der aktuell gueltigen Sessions
    pub async fn anzahl_aktive(&self) -> usize {
        let jetzt = Utc::now();
        let sessions = self.sessions.read().await;
        sessions.values().filter(|s| s.laeuft_ab_am > jetzt).count()
    }
}

/// Generiert einen kryptografisch sicheren Session-Token
fn token_generieren() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn erstellen_und_validieren() {
        let store = SessionStore::neu(24);
        let konto_id = KontoId::new();

        let session = store.erstellen(konto_id).await.unwrap();
        assert!(session.ist_gueltig());

        let validiert = store.validieren(&session.token).await.unwrap();
        assert_eq!(validiert.konto_id, konto_id);
    }

    #[tokio::test]
    async fn unbekannter_token_gibt_fehler() {
        let store = SessionStore::neu(24);
        let ergebnis = store.validieren("kein_gueltiger_token").await;
        assert!(matches!(ergebnis, Err(AuthError::SessionUngueltig)));
    }

    #[tokio::test]
    async fn invalidieren_entfernt_session() {
        let store = SessionStore::neu(24);
        let session = store.erstellen(KontoId::new()).await.unwrap();

        store.invalidieren(&session.token).await.unwrap();
        let ergebnis = store.validieren(&session.token).await;
        assert!(matches!(ergebnis, Err(AuthError::SessionUngueltig)));
    }

    #[tokio::test]
    async fn abgelaufene_session_wird_abgelehnt() {
        // TTL 0 Stunden: Session ist sofort abgelaufen
        let store = SessionStore::neu(0);
        let session = store.erstellen(KontoId::new()).await.unwrap();

        let ergebnis = store.validieren(&session.token).await;
        assert!(matches!(ergebnis, Err(AuthError::SessionAbgelaufen)));

        assert_eq!(store.cleanup_abgelaufene().await, 1);
        assert_eq!(store.anzahl_aktive().await, 0);
    }

    #[tokio::test]
    async fn token_sind_eindeutig() {
        let store = SessionStore::neu(24);
        let konto_id = KontoId::new();

        let s1 = store.erstellen(konto_id).await.unwrap();
        let s2 = store.erstellen(konto_id).await.unwrap();
        assert_ne!(s1.token, s2.token);
        assert_eq!(store.anzahl_aktive().await, 2);
    }
}
