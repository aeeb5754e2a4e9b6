// ============================================================================
// Vue Draft Board
// ============================================================================
// Graphique : un point par joueur, x = position de consensus,
// y = rang visuel (premier joueur en haut), barre d'erreur = écart-type.
// En dessous : top 10 des prospects. À droite : dernières cotes.
//
// CONCEPTS RATATUI :
// 1. GraphType::Scatter pour les points
// 2. Un Dataset GraphType::Line de deux points par barre d'erreur
// 3. Labels d'axe Y construits à partir des noms
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, List, ListItem, Row, Table,
        TableState,
    },
    Frame,
};

use crate::app::{App, TOP_PROSPECTS};
use crate::models::{DraftBoardData, OddsEntry};
use crate::transform::{board_x_bounds, draft_board_points, BoardPoint};
use crate::ui::common::{render_state, title, truncate};

/// Au-delà, les labels de l'axe Y ne sont plus lisibles
const MAX_NAMED_ROWS: usize = 25;

const EMPTY_BOARD: &str =
    "No draft board data available. Please check back later when odds data has been collected.";

pub fn render_draft_board(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_state(
        frame,
        columns[0],
        &app.draft_board,
        "Draft Board",
        EMPTY_BOARD,
        |frame, area, board| render_board(frame, app, area, board),
    );

    render_state(
        frame,
        columns[1],
        &app.latest_odds,
        "Latest Odds",
        "No odds data available",
        |frame, area, odds| render_latest_odds(frame, area, odds),
    );
}

fn render_board(frame: &mut Frame, app: &App, area: Rect, board: &[DraftBoardData]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(TOP_PROSPECTS as u16 + 3)])
        .split(area);

    render_chart(frame, rows[0], board);
    render_top_prospects(frame, app, rows[1], board);
}

/// Graphique : positions de consensus avec barres d'erreur
fn render_chart(frame: &mut Frame, area: Rect, board: &[DraftBoardData]) {
    let points = draft_board_points(board);
    let Some([x_min, x_max]) = board_x_bounds(&points) else {
        return;
    };
    let x_min = x_min.max(0.0);
    let total = points.len() as f64;

    let markers: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    let error_bars: Vec<[(f64, f64); 2]> = points
        .iter()
        .map(|p| [(p.x - p.error_x, p.y), (p.x + p.error_x, p.y)])
        .collect();

    // Barres d'erreur d'abord : les points sont dessinés par-dessus
    let mut datasets: Vec<Dataset> = error_bars
        .iter()
        .map(|bar| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(bar)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name("Consensus position")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .data(&markers),
    );

    let x_axis = Axis::default()
        .title("Consensus Draft Position")
        .style(Style::default().fg(Color::Gray))
        .bounds([x_min, x_max])
        .labels(vec![
            Span::raw(format!("{:.0}", x_min)),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{:.0}", x_max)),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, total + 1.0])
        .labels(y_labels(&points, area.height));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title("NFL Draft Board: Consensus Rankings")),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .hidden_legend_constraints((Constraint::Ratio(1, 4), Constraint::Ratio(1, 4)));

    frame.render_widget(chart, area);
}

/// Labels de l'axe Y, du bas vers le haut
///
/// Un label par rang quand la place le permet, sinon les rangs extrêmes.
fn y_labels(points: &[BoardPoint], height: u16) -> Vec<Span<'static>> {
    let total = points.len();

    if total > MAX_NAMED_ROWS || total + 4 > height as usize {
        return vec![
            Span::raw(""),
            Span::raw(format!("#{}", total)),
            Span::raw("#1"),
        ];
    }

    let mut labels = vec![Span::raw("")];
    labels.extend((1..=total).map(|y| {
        // Doublons : le rang n'a pas forcément de point propre
        let name = points
            .iter()
            .find(|p| p.y as usize == y)
            .map(|p| truncate(&p.name, 16))
            .unwrap_or_default();
        Span::raw(name)
    }));
    labels.push(Span::raw(""));
    labels
}

/// Top 10 : rang, nom, position de consensus, écart-type
fn render_top_prospects(frame: &mut Frame, app: &App, area: Rect, board: &[DraftBoardData]) {
    let header = Row::new(vec!["Rank", "Player", "Position", "Std Dev"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = board
        .iter()
        .take(TOP_PROSPECTS)
        .enumerate()
        .map(|(index, item)| {
            Row::new(vec![
                Cell::from(format!("{}", index + 1)),
                Cell::from(item.player_name.clone()),
                Cell::from(format!("{:.1}", item.consensus_position)),
                Cell::from(format!("±{:.2}", item.standard_deviation)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title("Top Prospects")),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
        .highlight_symbol("▶ ");

    let selected = (!board.is_empty()).then_some(app.selected_index);
    let mut state = TableState::default().with_selected(selected);

    frame.render_stateful_widget(table, area, &mut state);
}

/// Panneau des dernières cotes
fn render_latest_odds(frame: &mut Frame, area: Rect, odds: &[OddsEntry]) {
    let items: Vec<ListItem> = odds
        .iter()
        .map(|entry| {
            let color = if entry.odds.starts_with('-') {
                Color::Green
            } else {
                Color::White
            };
            ListItem::new(entry.display()).style(Style::default().fg(color))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title("Latest Odds")),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(names: &[&str]) -> Vec<BoardPoint> {
        let board: Vec<DraftBoardData> = names
            .iter()
            .enumerate()
            .map(|(i, name)| DraftBoardData {
                player_name: name.to_string(),
                consensus_position: i as f64 + 1.0,
                standard_deviation: 1.0,
            })
            .collect();
        draft_board_points(&board)
    }

    #[test]
    fn test_y_labels_bottom_to_top() {
        let labels = y_labels(&points(&["Cam Ward", "Travis Hunter"]), 40);

        let texts: Vec<String> = labels.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(texts, vec!["", "Travis Hunter", "Cam Ward", ""]);
    }

    #[test]
    fn test_y_labels_fall_back_to_ranks_when_crowded() {
        let names: Vec<String> = (0..30).map(|i| format!("Player {}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let labels = y_labels(&points(&refs), 80);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[1].content, "#30");
    }
}
