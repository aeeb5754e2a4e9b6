// ============================================================================
// ViewState : état d'affichage d'une vue
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Chargement, erreur, vide et prêt sont quatre états distincts
// - "Aucune donnée" n'est ni une erreur ni un chargement
// - Le compilateur force les vues à gérer les quatre cas
// ============================================================================

/// État d'une vue alimentée par une ou plusieurs requêtes
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Requête en cours, rien à afficher
    Loading,

    /// Erreur normalisée (message utilisateur)
    Failed(String),

    /// Réponse valide mais sans données
    Empty,

    /// Données prêtes à afficher
    Ready(T),
}

impl<T> ViewState<T> {
    /// Construit l'état à partir d'une réponse réussie
    ///
    /// CONCEPT RUST : Closure en paramètre
    /// - is_empty décide si la réponse compte comme "aucune donnée"
    pub fn from_data(data: T, is_empty: impl FnOnce(&T) -> bool) -> Self {
        if is_empty(&data) {
            ViewState::Empty
        } else {
            ViewState::Ready(data)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}
