// ============================================================================
// Module : api
// ============================================================================
// Client HTTP pour l'API des cotes de la draft NFL et normalisation des erreurs
// ============================================================================

pub mod client;  // Client des cinq endpoints /odds/*
pub mod error;   // Taxonomie des erreurs et messages utilisateur

// Re-export des types principaux
pub use client::{ClientConfig, OddsApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;
