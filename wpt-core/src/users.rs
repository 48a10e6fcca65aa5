//! Benutzerverzeichnis: Karten-ID → Benutzer
//!
//! Feste Kapazität, kein Heap. Nicht gefundene Karten liefern `None`.

use heapless::LinearMap;

use crate::types::{CardId, User};

/// Maximale Anzahl registrierter Benutzer
pub const MAX_USERS: usize = 8;

/// Fehler: Verzeichnis hat keinen freien Platz mehr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectoryFull;

/// Die beiden ab Werk bekannten Karten
pub const DEFAULT_ROSTER: [User; 2] = [
    User::new(CardId(0xA8), "John", "Doe"),
    User::new(CardId(0x90), "Jane", "Doe"),
];

pub struct UserDirectory {
    users: LinearMap<CardId, User, MAX_USERS>,
}

impl UserDirectory {
    pub const fn new() -> Self {
        Self {
            users: LinearMap::new(),
        }
    }

    /// Verzeichnis mit `DEFAULT_ROSTER`
    pub fn with_default_roster() -> Self {
        let mut directory = Self::new();
        for user in DEFAULT_ROSTER {
            // MAX_USERS > DEFAULT_ROSTER.len()
            let _ = directory.register(user);
        }
        directory
    }

    /// Registriert einen Benutzer; eine bekannte Karte wird ersetzt
    pub fn register(&mut self, user: User) -> Result<(), DirectoryFull> {
        self.users
            .insert(user.card, user)
            .map(|_| ())
            .map_err(|_| DirectoryFull)
    }

    pub fn lookup(&self, card: CardId) -> Option<&User> {
        self.users.get(&card)
    }

    /// Schreibt Punkte gut (sättigend) und liefert den neuen Stand
    pub fn credit_points(&mut self, card: CardId, points: u32) -> Option<u32> {
        let user = self.users.get_mut(&card)?;
        user.points = user.points.saturating_add(points);
        Some(user.points)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
