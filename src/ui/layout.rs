// ============================================================================
// Layout : header, onglets, contenu, footer
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::router::Route;
use crate::ui::common::key_style;

/// Zones de l'écran
pub struct Areas {
    pub header: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Découpe l'écran (header 3, onglets 3, contenu, footer 3)
pub fn create_layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Areas {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        footer: chunks[3],
    }
}

/// Header : titre + indicateur de chargement
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Draftboard ")
        .title_alignment(Alignment::Center);

    let mut spans = vec![Span::styled(
        "NFL Draft Odds",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];

    if let Some(message) = app.loading_message() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            message,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Onglets de navigation ; le joueur n'apparaît que sur sa route
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut titles = vec![
        Line::from(vec![Span::styled("1", key_style()), Span::raw(format!(" {}", Route::DraftBoard.title()))]),
        Line::from(vec![Span::styled("2", key_style()), Span::raw(format!(" {}", Route::Rankings.title()))]),
    ];

    let selected = match &app.route {
        Route::DraftBoard => 0,
        Route::Rankings => 1,
        Route::Player(name) => {
            let label = if name.is_empty() { app.route.title() } else { name.as_str() };
            titles.push(Line::from(format!(" {}", label)));
            2
        }
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", app.route.path())))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Footer : raccourcis, confirmation de quit, ou ligne de saisie
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    if app.is_in_input_mode() {
        render_input_footer(frame, app, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Press ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " again to quit, any other key to cancel ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        let mut spans = Vec::new();
        let mut shortcut = |key: &'static str, label: &'static str| {
            spans.push(Span::styled(key, key_style()));
            spans.push(Span::raw(label));
        };

        shortcut("[q]", " Quit  ");
        shortcut("[1/2]", " Views  ");
        shortcut("[/]", " Player  ");
        match app.route {
            Route::Player(_) => shortcut("[↑↓ / j k]", " Scroll  "),
            _ => {
                shortcut("[↑↓ / j k]", " Select  ");
                shortcut("[Enter]", " Open  ");
            }
        }
        shortcut("[r]", " Retry  ");
        shortcut("[Esc]", " Back");

        Line::from(spans)
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_input_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Line::from(vec![
            Span::styled(" [Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" Open  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel "),
        ]));

    let line = Line::from(vec![
        Span::styled(
            app.input_prompt.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(app.input_buffer.as_str()),
        Span::styled("█", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
