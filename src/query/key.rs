// ============================================================================
// QueryKey : identité d'une requête
// ============================================================================
// CONCEPT : Query identity
// - Deux requêtes avec le même endpoint et les mêmes paramètres partagent
//   la même entrée de cache
// - Le nom du joueur fait partie de la clé : changer de joueur change de clé
// ============================================================================

use std::fmt;

/// Identité d'une requête cacheable
///
/// CONCEPT RUST : derive(Hash, Eq, Ord)
/// - Hash + Eq : nécessaires pour servir de clé dans une HashMap
/// - Ord : permet de trier les clés (ordre de refetch déterministe)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    PlayerOdds(String),
    PlayerOddsChart(String),
    ConsensusRankings,
    DraftBoard,
    LatestOdds,
}

impl QueryKey {
    /// Nom du joueur porté par la clé, s'il y en a un
    pub fn player_name(&self) -> Option<&str> {
        match self {
            QueryKey::PlayerOdds(name) | QueryKey::PlayerOddsChart(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::PlayerOdds(name) => write!(f, "playerOdds/{}", name),
            QueryKey::PlayerOddsChart(name) => write!(f, "playerOddsChart/{}", name),
            QueryKey::ConsensusRankings => write!(f, "consensusRankings"),
            QueryKey::DraftBoard => write!(f, "draftBoard"),
            QueryKey::LatestOdds => write!(f, "latestOdds"),
        }
    }
}
