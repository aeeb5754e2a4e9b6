// ============================================================================
// Module : models
// ============================================================================
// Ce module contient tous les contrats de données échangés avec le backend
// (joueurs, cotes, classements consensus, données de graphique)
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module public (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod player;   // Joueur et entrée de cote brute
pub mod ranking;  // Classement consensus et données du draft board
pub mod odds;     // Historique des cotes et données de graphique

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use draftboard::models::ranking::DraftBoardData;
// On peut faire : use draftboard::models::DraftBoardData;
pub use player::{OddsEntry, Player};
pub use ranking::{ConsensusRanking, DraftBoardData, RankingsMap};
pub use odds::{ChartData, ChartPoint, OddsMovementData};
