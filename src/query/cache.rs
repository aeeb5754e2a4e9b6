// ============================================================================
// QueryCache : cache en mémoire avec durée de vie
// ============================================================================
// Stocke le dernier résultat de chaque requête, indexé par son identité
//
// CONCEPTS RUST :
// 1. Génériques : QueryCache<K, V> fonctionne pour toute clé hashable
// 2. Instant : horloge monotone (insensible aux changements d'heure système)
// 3. Variantes *_at(now) : l'horloge est injectée, donc testable
// ============================================================================

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Entrée de cache : valeur + date d'expiration
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Cache clé → valeur avec TTL par entrée
///
/// Aucune persistance : le cache vit le temps du processus.
#[derive(Debug)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Retourne la valeur si elle est encore fraîche
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Variante avec horloge explicite
    ///
    /// CONCEPT RUST : Option chaining
    /// - .get(key)? : None si la clé est absente
    /// - .filter() : None si l'entrée est expirée
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    /// Remplace entièrement la valeur associée à la clé
    pub fn set(&mut self, key: K, value: V, ttl: Duration) {
        self.set_at(key, value, ttl, Instant::now());
    }

    pub fn set_at(&mut self, key: K, value: V, ttl: Duration, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + ttl,
            },
        );
    }

    /// Supprime l'entrée (la prochaine lecture sera un miss)
    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// Nombre d'entrées stockées (expirées comprises)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
