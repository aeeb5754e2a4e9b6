// ============================================================================
// Router : chemins des vues
// ============================================================================
// Trois vues routées :
// - "/"              : draft board
// - "/player/:name"  : détail d'un joueur (nom percent-encodé)
// - "/rankings"      : tableau des rankings
//
// CONCEPT RUST : FromStr + Display
// - parse() et to_string() sont symétriques
// ============================================================================

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context};

/// Vue routée
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    DraftBoard,
    /// Le nom peut être vide ("/player/") : la vue affiche alors un message
    Player(String),
    Rankings,
}

impl Route {
    /// Chemin de la route, nom du joueur percent-encodé
    pub fn path(&self) -> String {
        match self {
            Route::DraftBoard => "/".to_string(),
            Route::Player(name) => format!("/player/{}", urlencoding::encode(name)),
            Route::Rankings => "/rankings".to_string(),
        }
    }

    /// Titre court affiché dans les onglets
    pub fn title(&self) -> &'static str {
        match self {
            Route::DraftBoard => "Draft Board",
            Route::Player(_) => "Player",
            Route::Rankings => "Rankings",
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::DraftBoard
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Route::DraftBoard);
        }

        if trimmed.trim_end_matches('/') == "/rankings" {
            return Ok(Route::Rankings);
        }

        if let Some(encoded) = trimmed.strip_prefix("/player/") {
            let name = urlencoding::decode(encoded)
                .with_context(|| format!("Nom de joueur mal encodé : {}", encoded))?;
            return Ok(Route::Player(name.into_owned()));
        }

        if trimmed == "/player" {
            return Ok(Route::Player(String::new()));
        }

        bail!("Route inconnue : {}", path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
