// ============================================================================
// Module : ui
// ============================================================================
// Rendu ratatui : layout commun + une vue par route
// ============================================================================

pub mod events;       // Lecture et reconnaissance des touches
pub mod common;       // Chargement / erreur / aucune donnée
pub mod layout;       // Header, onglets, footer
pub mod draft_board;  // Route "/"
pub mod player;       // Route "/player/:name"
pub mod rankings;     // Route "/rankings"

pub use events::{Event, EventHandler};

use ratatui::Frame;

use crate::app::App;
use crate::router::Route;

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Une vue par variante de Route, exhaustivité vérifiée
pub fn render(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.size());

    layout::render_header(frame, app, areas.header);
    layout::render_tabs(frame, app, areas.tabs);

    match app.route {
        Route::DraftBoard => draft_board::render_draft_board(frame, app, areas.content),
        Route::Player(_) => player::render_player(frame, app, areas.content),
        Route::Rankings => rankings::render_rankings(frame, app, areas.content),
    }

    layout::render_footer(frame, app, areas.footer);
}
