// ============================================================================
// API Client : NFL Draft Odds
// ============================================================================
// Récupère les données de cotes depuis le backend REST
//
// CONCEPTS RUST AVANCÉS :
// 1. async/await : programmation asynchrone (non-bloquante)
// 2. Génériques : une seule fonction get<T> pour les cinq endpoints
// 3. Serde : désérialisation JSON typée (DeserializeOwned)
// 4. Clone bon marché : reqwest::Client partage son pool de connexions
// ============================================================================

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::api::error::ApiError;
use crate::models::{ChartData, DraftBoardData, OddsEntry, OddsMovementData, RankingsMap};

/// URL du backend si rien n'est configuré
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Timeout fixe de toutes les requêtes
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================================
// Configuration du client
// ============================================================================

/// Paramètres de connexion au backend
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// URL de base (ex: "http://localhost:8000")
    pub base_url: String,

    /// Timeout appliqué à chaque requête
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ============================================================================
// Structure : OddsApiClient
// ============================================================================

/// Client typé pour les endpoints /odds/*
///
/// CONCEPT RUST : #[derive(Clone)]
/// - reqwest::Client est un Arc interne, le cloner ne recrée pas de pool
/// - Chaque tâche async du worker reçoit sa propre copie du client
#[derive(Debug, Clone)]
pub struct OddsApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OddsApiClient {
    /// Crée le client HTTP avec le timeout configuré
    ///
    /// CONCEPT RUST : Result<Self, ApiError>
    /// - La construction du client peut échouer (TLS, config système)
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("draftboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                warn!(error = %e, "Failed to build HTTP client");
                ApiError::Unexpected
            })?;

        // "http://host:8000/" et "http://host:8000" doivent donner les mêmes URLs
        let base_url = config.base_url.trim_end_matches('/').to_string();

        debug!(base_url = %base_url, timeout = ?config.timeout, "HTTP client created");
        Ok(Self { http, base_url })
    }

    /// URL de base effective (sans "/" final)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Endpoints publics
    // ========================================================================

    /// GET /odds/player/{name} : historique des cotes d'un joueur
    #[instrument(skip(self))]
    pub async fn player_odds_history(&self, name: &str) -> Result<Vec<OddsMovementData>, ApiError> {
        self.get(&player_path(name)).await
    }

    /// GET /odds/player/{name}/chart : série pré-agrégée pour le graphique
    #[instrument(skip(self))]
    pub async fn player_odds_chart(&self, name: &str) -> Result<ChartData, ApiError> {
        self.get(&format!("{}/chart", player_path(name))).await
    }

    /// GET /odds/rankings : map nom -> classement consensus
    #[instrument(skip(self))]
    pub async fn consensus_rankings(&self) -> Result<RankingsMap, ApiError> {
        self.get("/odds/rankings").await
    }

    /// GET /odds/draft-board : liste ordonnée par classement
    #[instrument(skip(self))]
    pub async fn draft_board(&self) -> Result<Vec<DraftBoardData>, ApiError> {
        self.get("/odds/draft-board").await
    }

    /// GET /odds/latest : dernières cotations brutes
    #[instrument(skip(self))]
    pub async fn latest_odds(&self) -> Result<Vec<OddsEntry>, ApiError> {
        self.get("/odds/latest").await
    }

    // ========================================================================
    // Requête générique
    // ========================================================================

    /// Exécute un GET et parse la réponse vers le type attendu
    ///
    /// CONCEPT RUST : Génériques avec trait bound
    /// - T: DeserializeOwned : T peut être construit depuis du JSON
    /// - Le type est inféré depuis le type de retour de l'appelant
    ///
    /// CONCEPT : Frontière de confiance
    /// - On lit le corps en texte puis on parse avec serde_json
    /// - Un JSON qui ne respecte pas le contrat → InvalidPayload (fail closed)
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Sending HTTP request");

        let response = self.http.get(&url).send().await.map_err(|e| {
            let err = ApiError::from_transport(&e);
            warn!(url = %url, error = %e, normalized = ?err, "HTTP request failed");
            err
        })?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        let body = response.text().await.map_err(|e| {
            let err = ApiError::from_transport(&e);
            warn!(url = %url, error = %e, normalized = ?err, "Failed to read response body");
            err
        })?;

        // Vérifie que la réponse est un succès HTTP (200-299)
        if !status.is_success() {
            let err = ApiError::from_status(status, &body);
            warn!(url = %url, status = %status, normalized = ?err, "Backend returned error status");
            return Err(err);
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Response does not match expected shape");
            ApiError::InvalidPayload { reason: e.to_string() }
        })?;

        info!(url = %url, bytes = body.len(), "Request succeeded");
        Ok(parsed)
    }
}

/// Chemin /odds/player/{name} avec le nom encodé
///
/// CONCEPT : Percent-encoding
/// - "Travis Hunter" → "Travis%20Hunter"
/// - Un nom contenant "/" ne peut pas casser le chemin
fn player_path(name: &str) -> String {
    format!("/odds/player/{}", urlencoding::encode(name))
}

// ============================================================================
// Tests unitaires
// ============================================================================
// CONCEPT : Faux serveur HTTP (wiremock)
// - MockServer démarre un vrai serveur local sur un port libre
// - Chaque Mock décrit une requête attendue et la réponse à renvoyer
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OddsApiClient {
        OddsApiClient::new(ClientConfig {
            base_url: server.uri(),
            timeout: Duration::from_millis(500),
        })
        .unwrap()
    }

    #[test]
    fn test_player_path_is_encoded() {
        assert_eq!(player_path("Travis Hunter"), "/odds/player/Travis%20Hunter");
        assert_eq!(player_path("A/B"), "/odds/player/A%2FB");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = OddsApiClient::new(ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_draft_board_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/draft-board"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"player_name": "Cam Ward", "consensus_position": 1.2, "standard_deviation": 0.4},
                {"player_name": "Travis Hunter", "consensus_position": 2.5, "standard_deviation": 1.0}
            ])))
            .mount(&server)
            .await;

        let board = client_for(&server).draft_board().await.unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].player_name, "Cam Ward");
        assert_eq!(board[1].standard_deviation, 1.0);
    }

    #[tokio::test]
    async fn test_player_history_uses_encoded_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/player/Travis%20Hunter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"timestamp": "2025-04-01T12:00:00", "odds": "+300", "draft_position": 2,
                 "sportsbook": "DraftKings", "market_type": "top_2"}
            ])))
            .mount(&server)
            .await;

        let history = client_for(&server).player_odds_history("Travis Hunter").await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].odds, "+300");
    }

    #[tokio::test]
    async fn test_player_chart() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/player/Cam%20Ward/chart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "title": "Odds Movement for Cam Ward",
                "xAxisLabel": "Date",
                "yAxisLabel": "American Odds",
                "data": [{"timestamp": "2025-04-01T12:00:00", "value": -150.0}]
            })))
            .mount(&server)
            .await;

        let chart = client_for(&server).player_odds_chart("Cam Ward").await.unwrap();

        assert_eq!(chart.title, "Odds Movement for Cam Ward");
        assert_eq!(chart.data[0].value, -150.0);
    }

    #[tokio::test]
    async fn test_rankings_and_latest() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/rankings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Cam Ward": {"consensus_position": 1.0, "standard_deviation": 0.0, "number_of_markets": 3}
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/odds/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let rankings = client.consensus_rankings().await.unwrap();
        let latest = client.latest_odds().await.unwrap();

        assert_eq!(rankings["Cam Ward"].number_of_markets, 3);
        assert!(latest.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_without_detail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/draft-board"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).draft_board().await.unwrap_err();
        assert_eq!(err.user_message(), "Resource not found. Please try again later.");
    }

    #[tokio::test]
    async fn test_detail_is_surfaced_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/rankings"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"detail": "No odds data available for rankings"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).consensus_rankings().await.unwrap_err();
        assert_eq!(err.user_message(), "No odds data available for rankings");
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/latest"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).latest_odds().await.unwrap_err();
        assert_eq!(err, ApiError::Server);
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/draft-board"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let err = client_for(&server).draft_board().await.unwrap_err();
        assert_eq!(err.user_message(), "Request timed out. Please try again.");
    }

    #[tokio::test]
    async fn test_network_unreachable() {
        // Port 1 : rien n'écoute, la connexion est refusée
        let client = OddsApiClient::new(ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = client.draft_board().await.unwrap_err();
        assert_eq!(err, ApiError::Network);
    }

    #[tokio::test]
    async fn test_connection_closed_before_response() {
        // Le serveur accepte la connexion puis la ferme sans répondre
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                drop(socket);
            }
        });

        let client = OddsApiClient::new(ClientConfig {
            base_url: format!("http://{}", addr),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = client.draft_board().await.unwrap_err();
        assert_eq!(err, ApiError::Network);
        assert_eq!(
            err.user_message(),
            "Network error. Please check your connection and try again."
        );
    }

    #[tokio::test]
    async fn test_malformed_payload_fails_closed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/odds/draft-board"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let err = client_for(&server).draft_board().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidPayload { .. }));
    }
}
