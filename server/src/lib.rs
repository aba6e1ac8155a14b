//! thrive-server – Bibliotheks-Root
//!
//! Deklariert die Server-Module und verdrahtet Datenbank, Auth-Service
//! und REST-API zu einem laufenden Prozess.

pub mod config;

use std::sync::Arc;

use anyhow::Result;

use config::ServerConfig;
use thrive_api::{ApiServer, ApiServerKonfig, ApiState};
use thrive_auth::{AuthService, SessionStore};
use thrive_db::{DatabaseConfig, SqliteDb};

/// Haelt die Server-Konfiguration zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Startet alle Subsysteme und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Datenbankverbindung herstellen, Migrationen ausfuehren
    /// 2. Session-Store samt Cleanup-Task starten
    /// 3. Auth-Service bauen
    /// 4. REST-API starten, auf Ctrl-C warten
    pub async fn starten(self) -> Result<()> {
        tracing::info!(
            server_name = %self.config.server.name,
            api = %self.config.api_bind_adresse(),
            "Server startet"
        );

        let db = SqliteDb::oeffnen(&DatabaseConfig {
            url: self.config.datenbank.url.clone(),
            max_verbindungen: self.config.datenbank.max_verbindungen,
            verbindungs_timeout_sekunden: self.config.datenbank.verbindungs_timeout_sekunden,
            sqlite_wal: true,
        })
        .await?;

        let sessions = SessionStore::neu(self.config.sessions.ttl_stunden);
        SessionStore::cleanup_task_starten(&sessions);

        let auth = Arc::new(AuthService::neu(Arc::new(db), sessions));
        let state = ApiState::neu(auth);

        let api = ApiServer::neu(ApiServerKonfig {
            bind_addr: self.config.api_bind_adresse().parse()?,
            cors_origins: self.config.netzwerk.cors_origins.clone(),
        });

        api.starten(state, async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown-Signal empfangen, Server wird beendet");
        })
        .await?;

        Ok(())
    }
}
