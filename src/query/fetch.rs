// ============================================================================
// Exécution des requêtes
// ============================================================================
// Fait le lien entre une QueryKey et la fonction du client API correspondante,
// avec retry silencieux et fetch joint pour la page joueur
//
// CONCEPTS RUST :
// 1. Enum de payloads : un seul type de résultat pour toutes les requêtes
// 2. tokio::try_join! : deux futures en parallèle, échec dès que l'une échoue
// 3. Boucle de retry explicite avec compteur
// ============================================================================

use tracing::{debug, warn};

use crate::api::{ApiError, OddsApiClient};
use crate::models::{ChartData, DraftBoardData, OddsEntry, OddsMovementData, RankingsMap};
use crate::query::key::QueryKey;
use crate::query::options::RetryPolicy;

/// Résultat typé d'une requête, selon sa clé
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    PlayerOdds(Vec<OddsMovementData>),
    PlayerOddsChart(ChartData),
    ConsensusRankings(RankingsMap),
    DraftBoard(Vec<DraftBoardData>),
    LatestOdds(Vec<OddsEntry>),
}

/// Données de la page joueur : les deux réponses ou rien
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDetail {
    pub name: String,
    pub history: Vec<OddsMovementData>,
    pub chart: ChartData,
}

/// Un seul appel, sans retry
async fn fetch_once(client: &OddsApiClient, key: &QueryKey) -> Result<QueryData, ApiError> {
    match key {
        QueryKey::PlayerOdds(name) => client.player_odds_history(name).await.map(QueryData::PlayerOdds),
        QueryKey::PlayerOddsChart(name) => {
            client.player_odds_chart(name).await.map(QueryData::PlayerOddsChart)
        }
        QueryKey::ConsensusRankings => {
            client.consensus_rankings().await.map(QueryData::ConsensusRankings)
        }
        QueryKey::DraftBoard => client.draft_board().await.map(QueryData::DraftBoard),
        QueryKey::LatestOdds => client.latest_odds().await.map(QueryData::LatestOdds),
    }
}

/// Exécute la requête, avec `policy.retries` retries silencieux
///
/// CONCEPT : Retry silencieux
/// - Le premier échec est seulement loggé
/// - Seule la dernière erreur remonte à la vue
pub async fn run_query(
    client: &OddsApiClient,
    key: &QueryKey,
    policy: RetryPolicy,
) -> Result<QueryData, ApiError> {
    let mut attempt = 0;

    loop {
        match fetch_once(client, key).await {
            Ok(data) => {
                debug!(query = %key, attempt, "Query succeeded");
                return Ok(data);
            }
            Err(err) if attempt < policy.retries => {
                attempt += 1;
                warn!(query = %key, attempt, error = %err, "Query failed, retrying");
                tokio::time::sleep(policy.delay).await;
            }
            Err(err) => {
                warn!(query = %key, attempt, error = %err, "Query failed");
                return Err(err);
            }
        }
    }
}

/// Fetch joint historique + graphique pour la page joueur
///
/// CONCEPT RUST : tokio::try_join!
/// - Les deux requêtes partent en même temps
/// - Si l'une échoue, l'ensemble échoue (pas d'affichage partiel)
pub async fn run_player_detail(
    client: &OddsApiClient,
    name: &str,
    policy: RetryPolicy,
) -> Result<PlayerDetail, ApiError> {
    let history_key = QueryKey::PlayerOdds(name.to_string());
    let chart_key = QueryKey::PlayerOddsChart(name.to_string());

    let (history, chart) = tokio::try_join!(
        run_query(client, &history_key, policy),
        run_query(client, &chart_key, policy),
    )?;

    match (history, chart) {
        (QueryData::PlayerOdds(history), QueryData::PlayerOddsChart(chart)) => Ok(PlayerDetail {
            name: name.to_string(),
            history,
            chart,
        }),
        // Impossible : fetch_once renvoie toujours la variante de sa clé
        _ => Err(ApiError::Unexpected),
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
