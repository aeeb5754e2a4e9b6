// ============================================================================
// Draftboard - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests d'intégration
// ============================================================================

pub mod api;        // Client HTTP de l'API des cotes + erreurs normalisées
pub mod models;     // Structures de données (contrats JSON)
pub mod query;      // Clés, cache, refetch, retry, états de vue
pub mod transform;  // Données API -> données affichables
pub mod router;     // Routes "/", "/player/:name", "/rankings"
pub mod config;     // Configuration (variables d'environnement)
pub mod cli;        // Arguments de ligne de commande
pub mod app;        // État de l'application
pub mod ui;         // Interface utilisateur
