// ============================================================================
// Événements clavier
// ============================================================================
// Lecture des événements crossterm + helpers de reconnaissance des touches
//
//   1 / 2      draft board / rankings
//   Enter      ouvre le joueur sélectionné
//   /          saisie d'un nom de joueur
//   ↑↓ / jk    sélection
//   r          retry
//   Esc        retour
//   q (x2)     quitter
// ============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Intervalle de poll : un Tick est émis si rien n'arrive
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Aucun événement pendant POLL_INTERVAL (ou événement ignoré)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    poll_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Lit le prochain événement (bloquant au plus poll_interval)
    ///
    /// CONCEPT : Filter sur KeyEventKind
    /// - Certains OS envoient Press ET Release, on ne garde que Press
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.poll_interval).context("Échec du poll des événements terminal")? {
            return Ok(Event::Tick);
        }

        match event::read().context("Échec de la lecture d'un événement terminal")? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            _ => Ok(Event::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : reconnaître une touche
// ============================================================================

/// KeyCode d'un événement clavier
fn key_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) => Some(key.code),
        Event::Tick => None,
    }
}

pub fn is_quit_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('q') | KeyCode::Char('Q')))
}

pub fn is_escape_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Esc))
}

pub fn is_enter_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Enter))
}

/// Flèche haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Up | KeyCode::Char('k')))
}

/// Flèche bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Down | KeyCode::Char('j')))
}

/// '1' : draft board
pub fn is_board_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('1')))
}

/// '2' : rankings
pub fn is_rankings_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('2')))
}

/// 'r' : relance les requêtes de la vue
pub fn is_retry_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('r') | KeyCode::Char('R')))
}

/// '/' : saisie d'un nom de joueur
pub fn is_search_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('/')))
}

pub fn is_backspace_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Backspace))
}

/// Caractère acceptable dans un nom de joueur ("Ja'Marr Chase", "Smith-Njigba", "Jr.")
pub fn get_name_char(event: &Event) -> Option<char> {
    match key_code(event) {
        Some(KeyCode::Char(c)) if c.is_alphanumeric() || matches!(c, ' ' | '-' | '.' | '\'') => Some(c),
        _ => None,
    }
}
