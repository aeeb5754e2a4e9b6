// ============================================================================
// Structures : Player et OddsEntry
// ============================================================================
// Représente un prospect de la draft NFL et une cotation brute d'un sportsbook
//
// CONCEPTS RUST :
// 1. #[derive(Deserialize)] : serde génère le parsing JSON à notre place
// 2. Composition : OddsEntry embarque directement un Player
// 3. Immutabilité : les données reçues ne sont jamais modifiées côté client
// ============================================================================

use serde::{Deserialize, Serialize};

/// Prospect de la draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    /// Poste (ex: "QB", "WR", "EDGE")
    pub position: String,
    pub college: String,
}

/// Une cotation pour un joueur, telle que renvoyée par /odds/latest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsEntry {
    pub id: i64,
    pub player_id: i64,

    /// Cote au format américain, encodée en string (ex: "+150", "-200")
    /// CONCEPT : On garde la string telle quelle
    /// - Le signe "+" est significatif pour l'affichage
    /// - Aucun calcul n'est fait côté client
    pub odds: String,

    pub draft_position: u32,
    pub sportsbook: String,
    pub market_type: String,

    /// Timestamp ISO 8601
    pub timestamp: String,

    /// Joueur embarqué dans la réponse
    pub player: Player,
}

impl OddsEntry {
    /// Formatte l'entrée pour la liste "Latest odds"
    ///
    /// Format : "Cam Ward           #1   +150  DraftKings"
    pub fn display(&self) -> String {
        format!(
            "{:<20} #{:<3} {:>6}  {}",
            self.player.name, self.draft_position, self.odds, self.sportsbook
        )
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odds_entry_from_json() {
        let json = r#"{
            "id": 7,
            "player_id": 3,
            "odds": "+150",
            "draft_position": 1,
            "sportsbook": "DraftKings",
            "market_type": "first_overall",
            "timestamp": "2025-04-01T12:00:00",
            "player": {"id": 3, "name": "Cam Ward", "position": "QB", "college": "Miami"}
        }"#;

        let entry: OddsEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.odds, "+150");
        assert_eq!(entry.player.name, "Cam Ward");
        assert_eq!(entry.player.college, "Miami");
    }

    #[test]
    fn test_odds_entry_missing_player_is_rejected() {
        let json = r#"{
            "id": 7, "player_id": 3, "odds": "+150", "draft_position": 1,
            "sportsbook": "DraftKings", "market_type": "first_overall",
            "timestamp": "2025-04-01T12:00:00"
        }"#;

        assert!(serde_json::from_str::<OddsEntry>(json).is_err());
    }

    #[test]
    fn test_display_contains_fields() {
        let entry = OddsEntry {
            id: 1,
            player_id: 2,
            odds: "-200".to_string(),
            draft_position: 2,
            sportsbook: "FanDuel".to_string(),
            market_type: "top_5".to_string(),
            timestamp: "2025-04-01T12:00:00".to_string(),
            player: Player {
                id: 2,
                name: "Travis Hunter".to_string(),
                position: "CB".to_string(),
                college: "Colorado".to_string(),
            },
        };

        let line = entry.display();
        assert!(line.contains("Travis Hunter"));
        assert!(line.contains("#2"));
        assert!(line.contains("-200"));
        assert!(line.contains("FanDuel"));
    }
}
