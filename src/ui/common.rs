// ============================================================================
// Widgets communs
// ============================================================================
// Les quatre états d'une vue : chargement, erreur, vide, prêt
//
// CONCEPTS RUST :
// 1. Fonction générique sur ViewState<T>
// 2. Closure FnOnce pour le rendu de l'état "prêt"
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::query::ViewState;

/// Titre de bloc avec espaces (" Rankings ")
pub fn title(text: &str) -> String {
    format!(" {} ", text)
}

/// Style des raccourcis clavier ("[q]", "[Enter]"...)
pub fn key_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

/// Aiguille le rendu selon l'état de la vue
pub fn render_state<T>(
    frame: &mut Frame,
    area: Rect,
    state: &ViewState<T>,
    view_title: &str,
    empty_message: &str,
    ready: impl FnOnce(&mut Frame, Rect, &T),
) {
    match state {
        ViewState::Loading => render_loading(frame, area, view_title),
        ViewState::Failed(message) => render_error(frame, area, message),
        ViewState::Empty => render_no_data(frame, area, view_title, empty_message),
        ViewState::Ready(data) => ready(frame, area, data),
    }
}

/// Squelette de chargement : lignes grisées
pub fn render_loading(frame: &mut Frame, area: Rect, view_title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title(view_title));

    let skeleton_width = area.width.saturating_sub(6) as usize;
    let rows = area.height.saturating_sub(4) as usize;

    let mut text = vec![
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    // Largeurs décroissantes pour imiter des lignes de contenu
    text.extend((0..rows.min(8)).map(|i| {
        let width = skeleton_width.saturating_sub((i % 3) * skeleton_width / 6);
        Line::from(Span::styled("░".repeat(width), Style::default().fg(Color::DarkGray)))
    }));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Alerte d'erreur avec rappel du retry
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            " ⚠ Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("[r]", key_style()),
            Span::raw(" to retry"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Message "aucune donnée" (ni erreur, ni chargement)
pub fn render_no_data(frame: &mut Frame, area: Rect, view_title: &str, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title(view_title));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Tronque un nom trop long pour une colonne ou un label d'axe
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
