// ============================================================================
// Options de requête ("hooks")
// ============================================================================
// Chaque fonction associe une identité de requête à sa politique :
// - activation (requêtes joueur désactivées si le nom est vide)
// - durée de fraîcheur du cache
// - refetch périodique (5 minutes pour les vues globales)
// - retry silencieux (un seul)
//
// Aucun refetch au retour du focus : un terminal n'a pas cette notion.
// ============================================================================

use std::time::Duration;

use crate::query::key::QueryKey;

/// Intervalle de refetch des vues globales (board, rankings, latest)
pub const REFETCH_INTERVAL: Duration = Duration::from_secs(300);

/// Durée pendant laquelle un résultat en cache est servi sans refetch
pub const STALE_TIME: Duration = Duration::from_secs(300);

/// Nombre de retries silencieux avant d'afficher l'erreur
pub const RETRY_COUNT: u32 = 1;

/// Délai avant le retry
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Politique de retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: RETRY_COUNT,
            delay: RETRY_DELAY,
        }
    }
}

/// Politique d'une requête
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// false : la requête n'est jamais envoyée
    pub enabled: bool,
    pub stale_time: Duration,
    /// None : pas de refetch périodique
    pub refetch_interval: Option<Duration>,
    pub retry: RetryPolicy,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            stale_time: STALE_TIME,
            refetch_interval: None,
            retry: RetryPolicy::default(),
        }
    }
}

/// Une requête prête à être montée : identité + politique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub key: QueryKey,
    pub options: QueryOptions,
}

impl QuerySpec {
    /// Remplace l'intervalle de refetch s'il y en a un (configuration)
    pub fn with_refetch_interval(mut self, interval: Duration) -> Self {
        if self.options.refetch_interval.is_some() {
            self.options.refetch_interval = Some(interval);
        }
        self
    }
}

// ============================================================================
// Une fonction par endpoint
// ============================================================================

/// Historique des cotes d'un joueur (désactivé si le nom est vide)
pub fn player_odds_history_query(name: &str) -> QuerySpec {
    QuerySpec {
        key: QueryKey::PlayerOdds(name.to_string()),
        options: QueryOptions {
            enabled: !name.is_empty(),
            ..QueryOptions::default()
        },
    }
}

/// Graphique des cotes d'un joueur (désactivé si le nom est vide)
pub fn player_odds_chart_query(name: &str) -> QuerySpec {
    QuerySpec {
        key: QueryKey::PlayerOddsChart(name.to_string()),
        options: QueryOptions {
            enabled: !name.is_empty(),
            ..QueryOptions::default()
        },
    }
}

pub fn consensus_rankings_query() -> QuerySpec {
    global_query(QueryKey::ConsensusRankings)
}

pub fn draft_board_query() -> QuerySpec {
    global_query(QueryKey::DraftBoard)
}

pub fn latest_odds_query() -> QuerySpec {
    global_query(QueryKey::LatestOdds)
}

/// Vues globales : fetch au montage + refetch toutes les 5 minutes
fn global_query(key: QueryKey) -> QuerySpec {
    QuerySpec {
        key,
        options: QueryOptions {
            refetch_interval: Some(REFETCH_INTERVAL),
            ..QueryOptions::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_queries_gated_on_name() {
        assert!(!player_odds_history_query("").options.enabled);
        assert!(!player_odds_chart_query("").options.enabled);
        assert!(player_odds_history_query("Cam Ward").options.enabled);
        assert_eq!(player_odds_history_query("Cam Ward").options.refetch_interval, None);
    }

    #[test]
    fn test_global_queries_refetch_every_five_minutes() {
        for spec in [consensus_rankings_query(), draft_board_query(), latest_odds_query()] {
            assert!(spec.options.enabled);
            assert_eq!(spec.options.refetch_interval, Some(Duration::from_secs(300)));
            assert_eq!(spec.options.retry.retries, 1);
        }
    }

    #[test]
    fn test_refetch_override_only_applies_to_periodic_queries() {
        let board = draft_board_query().with_refetch_interval(Duration::from_secs(60));
        let player = player_odds_history_query("Cam Ward").with_refetch_interval(Duration::from_secs(60));

        assert_eq!(board.options.refetch_interval, Some(Duration::from_secs(60)));
        assert_eq!(player.options.refetch_interval, None);
    }
}
