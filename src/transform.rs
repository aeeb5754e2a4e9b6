// ============================================================================
// Transformations de vue
// ============================================================================
// Fonctions pures : données API -> données prêtes à tracer ou à lister
//
// CONCEPTS RUST :
// 1. Iterator chaining : iter().enumerate().map().collect()
// 2. Tri stable : sort_by garde l'ordre relatif des égalités
// 3. fold() pour calculer des bornes min/max
// ============================================================================

use std::cmp::Ordering;

use crate::models::{ChartData, ConsensusRanking, DraftBoardData, RankingsMap};

/// Point du graphique draft board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardPoint {
    pub name: String,
    /// Position de consensus
    pub x: f64,
    /// Rang visuel : le premier joueur est tout en haut
    pub y: f64,
    /// Demi-largeur de la barre d'erreur (écart-type)
    pub error_x: f64,
}

/// Transforme le draft board (déjà trié par le serveur) en points
///
/// y = total - index du premier joueur portant le même nom.
///
/// Cas limite connu : la recherche se fait par nom, pas par position.
/// Deux entrées avec le même nom reçoivent donc le même y et se superposent.
pub fn draft_board_points(board: &[DraftBoardData]) -> Vec<BoardPoint> {
    let total = board.len();

    board
        .iter()
        .map(|item| {
            let first_index = board
                .iter()
                .position(|other| other.player_name == item.player_name)
                .unwrap_or(0);

            BoardPoint {
                name: item.player_name.clone(),
                x: item.consensus_position,
                y: (total - first_index) as f64,
                error_x: item.standard_deviation,
            }
        })
        .collect()
}

/// Joueur classé (vue rankings)
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    pub name: String,
    pub ranking: ConsensusRanking,
}

/// Trie les rankings par position de consensus croissante
///
/// CONCEPT RUST : Tri stable
/// - RankingsMap conserve l'ordre des clés envoyé par le serveur
/// - sort_by est stable : à égalité, cet ordre est conservé
pub fn rankings_sorted(rankings: &RankingsMap) -> Vec<RankedPlayer> {
    let mut players: Vec<RankedPlayer> = rankings
        .iter()
        .map(|(name, ranking)| RankedPlayer {
            name: name.clone(),
            ranking: ranking.clone(),
        })
        .collect();

    players.sort_by(|a, b| {
        a.ranking
            .consensus_position
            .partial_cmp(&b.ranking.consensus_position)
            .unwrap_or(Ordering::Equal)
    });

    players
}

/// Points (index, valeur) du graphique d'un joueur, sans retraitement
pub fn odds_chart_points(chart: &ChartData) -> Vec<(f64, f64)> {
    chart
        .data
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect()
}

/// Bornes [min, max] des valeurs, avec une marge de 5%
///
/// None si aucune valeur n'est fournie.
/// Une série constante reçoit une marge de 1 pour que l'axe ait une largeur.
pub fn padded_bounds(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    let (min, max) = values.into_iter().fold((f64::MAX, f64::MIN), |(min, max), v| {
        (min.min(v), max.max(v))
    });

    if min > max {
        return None;
    }

    let margin = if max > min { (max - min) * 0.05 } else { 1.0 };
    Some([min - margin, max + margin])
}

/// Bornes de l'axe X du draft board : barres d'erreur comprises
pub fn board_x_bounds(points: &[BoardPoint]) -> Option<[f64; 2]> {
    padded_bounds(
        points
            .iter()
            .flat_map(|p| [p.x - p.error_x, p.x + p.error_x]),
    )
}

// ============================================================================
// Tests unitaires
// ============================================================================
