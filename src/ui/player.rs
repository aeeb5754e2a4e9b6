// ============================================================================
// Vue Joueur
// ============================================================================
// Graphique ligne de l'évolution des cotes + table d'historique
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::models::odds::format_date;
use crate::models::{ChartData, OddsMovementData};
use crate::query::PlayerDetail;
use crate::router::Route;
use crate::transform::{odds_chart_points, padded_bounds};
use crate::ui::common::{render_no_data, render_state, title};

pub fn render_player(frame: &mut Frame, app: &App, area: Rect) {
    let name = match &app.route {
        Route::Player(name) => name.as_str(),
        _ => "",
    };

    if name.is_empty() {
        render_no_data(frame, area, "Player", "No player specified");
        return;
    }

    let empty_message = format!(
        "No odds data available for {}. Please check back later when odds data has been collected.",
        name
    );

    render_state(frame, area, &app.player, name, &empty_message, |frame, area, detail| {
        render_detail(frame, app, area, detail)
    });
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect, detail: &PlayerDetail) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_chart(frame, rows[0], &detail.chart);
    render_history(frame, app, rows[1], &detail.name, &detail.history);
}

/// Cotes américaines signées : "+150", "-200"
fn american_odds(value: f64) -> String {
    format!("{:+.0}", value)
}

fn render_chart(frame: &mut Frame, area: Rect, chart: &ChartData) {
    if chart.is_empty() {
        render_no_data(frame, area, &chart.title, "No chart data available");
        return;
    }

    let points = odds_chart_points(chart);
    let Some([y_min, y_max]) = padded_bounds(points.iter().map(|&(_, y)| y)) else {
        return;
    };

    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let first_date = chart.data.first().map(|p| format_date(&p.timestamp)).unwrap_or_default();
    let last_date = chart.data.last().map(|p| format_date(&p.timestamp)).unwrap_or_default();

    let datasets = vec![Dataset::default()
        .name(chart.y_axis_label.as_str())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points)];

    let x_axis = Axis::default()
        .title(chart.x_axis_label.as_str())
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, x_max])
        .labels(vec![Span::raw(first_date), Span::raw(last_date)]);

    let y_axis = Axis::default()
        .title(chart.y_axis_label.as_str())
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(american_odds(y_min)),
            Span::raw(american_odds((y_min + y_max) / 2.0)),
            Span::raw(american_odds(y_max)),
        ]);

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title(&chart.title)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(widget, area);
}

/// Table : date, sportsbook, pick, marché, cote
fn render_history(frame: &mut Frame, app: &App, area: Rect, name: &str, history: &[OddsMovementData]) {
    let header = Row::new(vec!["Date", "Sportsbook", "Pick", "Market", "Odds"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = history
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.date_label(),
                entry.sportsbook.clone(),
                format!("#{}", entry.draft_position),
                entry.market_type.clone(),
                entry.odds.clone(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Min(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title(&format!("Odds History: {} ({} entries)", name, history.len()))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
