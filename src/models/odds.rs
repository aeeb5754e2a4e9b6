// ============================================================================
// Structures : OddsMovementData et ChartData
// ============================================================================
// Historique des cotes d'un joueur et série pré-agrégée pour le graphique
//
// CONCEPTS RUST :
// 1. #[serde(rename_all = "camelCase")] : le backend envoie xAxisLabel
// 2. Option<String> + #[serde(default)] : champ facultatif dans le JSON
// 3. chrono : parsing des timestamps ISO pour l'affichage
// ============================================================================

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Un point de l'historique des cotes (ordonné dans le temps par le serveur)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsMovementData {
    pub timestamp: String,
    pub odds: String,
    pub draft_position: u32,
    pub sportsbook: String,
    pub market_type: String,
}

impl OddsMovementData {
    /// Date courte pour la table d'historique (ex: "2025-04-01")
    pub fn date_label(&self) -> String {
        format_date(&self.timestamp)
    }
}

/// Point d'une série de graphique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: String,
    pub value: f64,
    #[serde(default)]
    pub label: Option<String>,
}

/// Données prêtes à tracer, agrégées par le backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub data: Vec<ChartPoint>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Extrait la date d'un timestamp ISO
///
/// CONCEPT : Parsing tolérant
/// - Le backend envoie soit un timestamp avec timezone (RFC 3339),
///   soit un timestamp naïf (sans offset, ex: "2025-04-01T12:00:00")
/// - Si aucun format ne matche, on affiche la string brute
pub fn format_date(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%Y-%m-%d").to_string();
    }

    // Timestamps naïfs, avec ou sans fraction de seconde
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

// ============================================================================
// Tests unitaires
// ============================================================================
