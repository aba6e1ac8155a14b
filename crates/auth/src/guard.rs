//! Route-Guard-Kontrakt fuer den Client
//!
//! Der Client haelt nach dem Login einen lokal gecachten Identitaets-Marker
//! (Name, E-Mail, Rolle) und entscheidet damit, ob eine geschuetzte View
//! gerendert oder zum Login umgeleitet wird. Das ist reines UI-Routing:
//! der Marker ist eine unverifizierte Behauptung und darf serverseitig
//! niemals als Autorisierung gelten. Jeder geschuetzte API-Aufruf wird
//! unabhaengig ueber den Session-Token authentifiziert.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use thrive_core::Rolle;

/// Lokal gecachte, nicht-geheime Konto-Felder des Clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentitaetsMarker {
    pub name: String,
    pub email: String,
    #[serde(rename = "role")]
    pub rolle: Rolle,
}

/// Rollen-Anforderung einer geschuetzten Route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollenAnforderung {
    /// Wildcard "any": jede angemeldete Identitaet darf rendern
    Beliebig,
    /// Nur die exakt passende Rolle darf rendern
    Genau(Rolle),
}

impl FromStr for RollenAnforderung {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Beliebig),
            other => Rolle::from_str(other).map(Self::Genau),
        }
    }
}

/// Entscheidung des Route-Guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardEntscheidung {
    /// View rendern
    Anzeigen,
    /// Zur Login-View umleiten
    ZumLogin,
}

/// Prueft ob eine geschuetzte Route gerendert werden darf
///
/// Rendert nur wenn ein Marker vorhanden ist UND die Anforderung
/// "any" ist ODER die Marker-Rolle exakt passt. In allen anderen
/// Faellen wird zum Login umgeleitet.
pub fn route_pruefen(
    marker: Option<&IdentitaetsMarker>,
    anforderung: RollenAnforderung,
) -> GuardEntscheidung {
    match (marker, anforderung) {
        (None, _) => GuardEntscheidung::ZumLogin,
        (Some(_), RollenAnforderung::Beliebig) => GuardEntscheidung::Anzeigen,
        (Some(m), RollenAnforderung::Genau(rolle)) if m.rolle == rolle => {
            GuardEntscheidung::Anzeigen
        }
        _ => GuardEntscheidung::ZumLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(rolle: Rolle) -> IdentitaetsMarker {
        IdentitaetsMarker {
            name: "Anna Beispiel".into(),
            email: "anna@uni.example".into(),
            rolle,
        }
    }

    #[test]
    fn ohne_marker_zum_login() {
        assert_eq!(
            route_pruefen(None, RollenAnforderung::Beliebig),
            GuardEntscheidung::ZumLogin
        );
        assert_eq!(
            route_pruefen(None, RollenAnforderung::Genau(Rolle::Admin)),
            GuardEntscheidung::ZumLogin
        );
    }

    #[test]
    fn wildcard_laesst_jede_rolle_durch() {
        for rolle in [Rolle::Student, Rolle::Counselor, Rolle::Admin] {
            assert_eq!(
                route_pruefen(Some(&marker(rolle)), RollenAnforderung::Beliebig),
                GuardEntscheidung::Anzeigen
            );
        }
    }

    #[test]
    fn exakte_rolle_erforderlich() {
        let m = marker(Rolle::Student);
        assert_eq!(
            route_pruefen(Some(&m), RollenAnforderung::Genau(Rolle::Student)),
            GuardEntscheidung::Anzeigen
        );
        assert_eq!(
            route_pruefen(Some(&m), RollenAnforderung::Genau(Rolle::Counselor)),
            GuardEntscheidung::ZumLogin
        );
    }

    #[test]
    fn anforderung_aus_string() {
        assert_eq!(
            RollenAnforderung::from_str("any").unwrap(),
            RollenAnforderung::Beliebig
        );
        assert_eq!(
            RollenAnforderung::from_str("counselor").unwrap(),
            RollenAnforderung::Genau(Rolle::Counselor)
        );
        assert!(RollenAnforderung::from_str("alle").is_err());
    }
}
