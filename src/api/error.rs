// ============================================================================
// Erreurs API normalisées
// ============================================================================
// Toute erreur d'un appel API est convertie en un message lisible par
// l'utilisateur, de manière identique pour les cinq endpoints
//
// CONCEPTS RUST :
// 1. thiserror : dérive Display + Error à partir d'attributs
// 2. Enums avec données : Detail(String) transporte le message serveur
// 3. Ordre des vérifications : timeout → réseau → detail → 404 → 500 → autre
// ============================================================================

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Erreur normalisée renvoyée par le client API
///
/// CONCEPT RUST : #[error("...")]
/// - Le message est le texte exact affiché dans la vue
/// - Clone : l'erreur traverse les channels et est stockée dans l'état de la vue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Network error. Please check your connection and try again.")]
    Network,

    /// Message fourni par le serveur ({"detail": "..."}), affiché tel quel
    #[error("{0}")]
    Detail(String),

    #[error("Resource not found. Please try again later.")]
    NotFound,

    #[error("Server error. Please try again later.")]
    Server,

    /// Réponse 2xx dont le JSON ne correspond pas au contrat attendu
    /// (la raison technique va dans les logs, pas à l'écran)
    #[error("Received an invalid response from the server. Please try again.")]
    InvalidPayload { reason: String },

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected,
}

/// Corps d'erreur du backend : { "detail": string }
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Classe une erreur de transport (pas de réponse HTTP exploitable)
    ///
    /// CONCEPT : is_timeout() avant les autres
    /// - Un timeout de connexion est aussi une erreur de connexion
    /// - Le timeout doit gagner pour afficher le bon message
    /// - Toute requête restée sans réponse complète (connexion refusée,
    ///   coupée avant la réponse, corps interrompu) est une erreur réseau
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() || err.is_request() || err.is_body() || err.is_decode() {
            ApiError::Network
        } else {
            ApiError::Unexpected
        }
    }

    /// Classe une réponse HTTP non-2xx à partir du status et du corps brut
    ///
    /// Le detail serveur prime sur le status : un 404 avec
    /// {"detail": "Player not found"} affiche "Player not found".
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty());

        if let Some(detail) = detail {
            return ApiError::Detail(detail);
        }

        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => ApiError::Server,
            _ => ApiError::Unexpected,
        }
    }

    /// Message destiné à l'utilisateur
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_messages() {
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out. Please try again.");
        assert_eq!(
            ApiError::NotFound.to_string(),
            "Resource not found. Please try again later."
        );
        assert_eq!(ApiError::Server.to_string(), "Server error. Please try again later.");
        assert_eq!(
            ApiError::Unexpected.to_string(),
            "An unexpected error occurred. Please try again."
        );
    }

    #[test]
    fn test_detail_wins_over_status() {
        let body = r#"{"detail": "X"}"#;

        assert_eq!(ApiError::from_status(StatusCode::NOT_FOUND, body).user_message(), "X");
        assert_eq!(ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, body).user_message(), "X");
        assert_eq!(ApiError::from_status(StatusCode::BAD_REQUEST, body).user_message(), "X");
    }

    #[test]
    fn test_status_mapping_without_detail() {
        assert_eq!(ApiError::from_status(StatusCode::NOT_FOUND, ""), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            ApiError::Server
        );
        assert_eq!(ApiError::from_status(StatusCode::BAD_GATEWAY, "{}"), ApiError::Unexpected);
    }

    #[test]
    fn test_empty_detail_is_ignored() {
        let body = r#"{"detail": ""}"#;
        assert_eq!(ApiError::from_status(StatusCode::NOT_FOUND, body), ApiError::NotFound);
    }

    #[test]
    fn test_invalid_payload_hides_reason() {
        let err = ApiError::InvalidPayload {
            reason: "missing field `title`".to_string(),
        };
        assert!(!err.user_message().contains("title"));
    }
}
