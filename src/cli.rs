// ============================================================================
// Arguments de ligne de commande
// ============================================================================
// Les arguments fournis surchargent la configuration lue dans l'environnement
// ============================================================================

use clap::Parser;

use crate::config::Config;
use crate::router::Route;

/// Terminal viewer for NFL draft odds
#[derive(Debug, Parser)]
#[command(name = "draftboard", version, about)]
pub struct Args {
    /// Backend base URL (overrides DRAFTBOARD_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Initial view: "/", "/rankings" or "/player/<name>"
    #[arg(long, default_value = "/")]
    pub route: Route,
}

impl Args {
    /// Applique les surcharges à la configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        config
    }
}
