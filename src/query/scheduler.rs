// ============================================================================
// RefetchScheduler : rafraîchissement périodique
// ============================================================================
// Chaque clé enregistrée est re-fetchée à intervalle fixe tant qu'elle
// reste enregistrée (= tant que la vue qui l'utilise est affichée)
//
// CONCEPTS RUST :
// 1. Cycle de vie explicite : register au montage, deregister au démontage
// 2. Pas de timer par clé : la boucle d'événements appelle due() à chaque tick
// 3. Vec triée en sortie pour un ordre déterministe
// ============================================================================

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Planification d'une clé
#[derive(Debug, Clone, Copy)]
struct Schedule {
    interval: Duration,
    next_due: Instant,
}

/// Planificateur de refetch
#[derive(Debug)]
pub struct RefetchScheduler<K> {
    schedules: HashMap<K, Schedule>,
}

impl<K> RefetchScheduler<K>
where
    K: Hash + Eq + Clone + Ord,
{
    pub fn new() -> Self {
        Self {
            schedules: HashMap::new(),
        }
    }

    /// Enregistre une clé : premier refetch dans `interval`
    ///
    /// Ré-enregistrer une clé déjà présente réarme son compteur.
    pub fn register(&mut self, key: K, interval: Duration, now: Instant) {
        self.schedules.insert(
            key,
            Schedule {
                interval,
                next_due: now + interval,
            },
        );
    }

    /// Retire une clé (la vue a été quittée)
    pub fn deregister(&mut self, key: &K) {
        self.schedules.remove(key);
    }

    /// Retourne les clés dont l'intervalle est écoulé et les réarme
    ///
    /// CONCEPT RUST : iter_mut + filter
    /// - On modifie next_due en place pendant l'itération
    pub fn due(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<K> = self
            .schedules
            .iter_mut()
            .filter(|(_, schedule)| now >= schedule.next_due)
            .map(|(key, schedule)| {
                schedule.next_due = now + schedule.interval;
                key.clone()
            })
            .collect();

        due.sort();
        due
    }

    /// Rend une clé immédiatement due (refetch reporté au prochain tick)
    pub fn mark_due(&mut self, key: &K, now: Instant) {
        if let Some(schedule) = self.schedules.get_mut(key) {
            schedule.next_due = now;
        }
    }

    pub fn is_registered(&self, key: &K) -> bool {
        self.schedules.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

impl<K> Default for RefetchScheduler<K>
where
    K: Hash + Eq + Clone + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
