// ============================================================================
// Structures : ConsensusRanking et DraftBoardData
// ============================================================================
// Classements agrégés par le backend à partir de plusieurs sportsbooks
//
// CONCEPTS RUST :
// 1. IndexMap : map qui conserve l'ordre d'insertion (ordre des clés JSON)
// 2. #[serde(alias = "...")] : accepter plusieurs noms pour un même champ
// 3. deserialize_with : parsing personnalisé d'un champ
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Classement consensus d'un joueur (valeur de la map /odds/rankings)
///
/// Le backend peut renvoyer les colonnes sous leur nom "humain"
/// ("Consensus Position", ...) : les alias serde acceptent les deux formes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusRanking {
    #[serde(alias = "Consensus Position")]
    pub consensus_position: f64,

    #[serde(alias = "Standard Deviation", deserialize_with = "null_as_zero")]
    pub standard_deviation: f64,

    #[serde(alias = "Number of Markets")]
    pub number_of_markets: u32,
}

/// Map nom du joueur -> classement
///
/// CONCEPT RUST : Type alias
/// - IndexMap plutôt que HashMap : l'itération suit l'ordre des clés du JSON
/// - À égalité de position, le tri conserve donc l'ordre envoyé par le serveur
pub type RankingsMap = IndexMap<String, ConsensusRanking>;

/// Une ligne du draft board (ordre = ordre du classement serveur)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftBoardData {
    pub player_name: String,
    pub consensus_position: f64,
    #[serde(deserialize_with = "null_as_zero")]
    pub standard_deviation: f64,
}

/// Un écart-type calculé sur un seul marché vaut null côté backend
///
/// CONCEPT RUST : Option<T> comme étape intermédiaire
/// - On désérialise en Option<f64>
/// - None (null JSON) devient 0.0 : aucune dispersion mesurable
/// - Un type invalide (string, objet) reste une erreur de parsing
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

// ============================================================================
// Tests unitaires
// ============================================================================
