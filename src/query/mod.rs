// ============================================================================
// Module : query
// ============================================================================
// Couche "requête" entre le client API et les vues :
// identité de requête, cache avec TTL, refetch périodique, retry,
// et états de vue (chargement / erreur / vide / prêt)
// ============================================================================

pub mod key;        // Identité de requête (endpoint + paramètres)
pub mod cache;      // Cache en mémoire get / set / invalidate
pub mod scheduler;  // Refetch périodique des clés enregistrées
pub mod options;    // Politique par requête (enabled, stale time, refetch, retry)
pub mod fetch;      // Exécution avec retry et fetch joint du détail joueur
pub mod state;      // ViewState<T>

pub use cache::QueryCache;
pub use fetch::{run_player_detail, run_query, PlayerDetail, QueryData};
pub use key::QueryKey;
pub use options::{
    consensus_rankings_query, draft_board_query, latest_odds_query, player_odds_chart_query,
    player_odds_history_query, QueryOptions, QuerySpec, RetryPolicy,
};
pub use scheduler::RefetchScheduler;
pub use state::ViewState;
