//! Geteilter Zustand des Kiosks
//!
//! Wird einmal beim Start als `'static` angelegt (StaticCell) und von allen
//! Tasks per Referenz benutzt.

use core::cell::RefCell;
use core::net::Ipv4Addr;
use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::once_lock::OnceLock;

use crate::logic::RenderContext;
use crate::signal::ScreenSignal;
use crate::types::{CardId, User};
use crate::users::{DirectoryFull, UserDirectory};

/// Fehler: Karte ist nicht im Verzeichnis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownCard(pub CardId);

/// Fehler: Adresse wurde bereits veröffentlicht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressAlreadyPublished;

struct Users {
    directory: UserDirectory,
    current: Option<CardId>,
}

pub struct KioskState {
    signal: ScreenSignal,
    // f32 als Bits, damit ohne Lock lesbar
    weight_bits: AtomicU32,
    users: Mutex<CriticalSectionRawMutex, RefCell<Users>>,
    address: OnceLock<Ipv4Addr>,
}

impl KioskState {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            signal: ScreenSignal::new(),
            weight_bits: AtomicU32::new(0f32.to_bits()),
            users: Mutex::new(RefCell::new(Users {
                directory,
                current: None,
            })),
            address: OnceLock::new(),
        }
    }

    pub fn signal(&self) -> &ScreenSignal {
        &self.signal
    }

    /// Letzter Messwert der Waage in kg
    pub fn set_weight(&self, kg: f32) {
        self.weight_bits.store(kg.to_bits(), Ordering::Release);
    }

    pub fn weight(&self) -> f32 {
        f32::from_bits(self.weight_bits.load(Ordering::Acquire))
    }

    /// Macht die Karte zum aktuellen Benutzer
    pub fn select_user(&self, card: CardId) -> Result<(), UnknownCard> {
        self.users.lock(|users| {
            let mut users = users.borrow_mut();
            if users.directory.lookup(card).is_none() {
                return Err(UnknownCard(card));
            }
            users.current = Some(card);
            Ok(())
        })
    }

    pub fn clear_user(&self) {
        self.users.lock(|users| users.borrow_mut().current = None);
    }

    /// Kopie des aktuellen Benutzers
    pub fn current_user(&self) -> Option<User> {
        self.users.lock(|users| {
            let users = users.borrow();
            users
                .current
                .and_then(|card| users.directory.lookup(card).copied())
        })
    }

    /// Schreibt dem aktuellen Benutzer Punkte gut, liefert den neuen Stand
    pub fn credit_current_user(&self, points: u32) -> Option<u32> {
        self.users.lock(|users| {
            let mut users = users.borrow_mut();
            let card = users.current?;
            users.directory.credit_points(card, points)
        })
    }

    /// Registriert oder ersetzt einen Benutzer im Verzeichnis
    pub fn register_user(&self, user: User) -> Result<(), DirectoryFull> {
        self.users
            .lock(|users| users.borrow_mut().directory.register(user))
    }

    /// Veröffentlicht die per DHCP erhaltene Adresse (einmalig)
    pub fn publish_address(&self, address: Ipv4Addr) -> Result<(), AddressAlreadyPublished> {
        self.address
            .init(address)
            .map_err(|_| AddressAlreadyPublished)
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        self.address.try_get().copied()
    }

    /// Momentaufnahme aller Werte, die Screens anzeigen
    pub fn snapshot(&self) -> RenderContext {
        RenderContext {
            user: self.current_user(),
            weight_kg: self.weight(),
            address: self.address(),
        }
    }
}

impl Default for KioskState {
    fn default() -> Self {
        Self::new(UserDirectory::with_default_roster())
    }
}
