// ============================================================================
// Vue Rankings
// ============================================================================
// Table triée par position de consensus croissante
// ============================================================================

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::transform::RankedPlayer;
use crate::ui::common::{render_state, title};

pub fn render_rankings(frame: &mut Frame, app: &App, area: Rect) {
    render_state(
        frame,
        area,
        &app.rankings,
        "Consensus Rankings",
        "No rankings data available",
        |frame, area, rankings| render_table(frame, app, area, rankings),
    );
}

/// Ligne de table : rang, joueur, position (1 déc.), écart-type (2 déc.), marchés
fn ranking_cells(rank: usize, player: &RankedPlayer) -> [String; 5] {
    [
        rank.to_string(),
        player.name.clone(),
        format!("{:.1}", player.ranking.consensus_position),
        format!("{:.2}", player.ranking.standard_deviation),
        player.ranking.number_of_markets.to_string(),
    ]
}

fn render_table(frame: &mut Frame, app: &App, area: Rect, rankings: &[RankedPlayer]) {
    let header = Row::new(vec!["Rank", "Player", "Consensus Position", "Std Dev", "Markets"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = rankings
        .iter()
        .enumerate()
        .map(|(index, player)| Row::new(ranking_cells(index + 1, player)))
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(24),
        Constraint::Length(20),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title(&format!("Consensus Rankings ({} players)", rankings.len()))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
