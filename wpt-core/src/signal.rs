//! Screen-Signal zwischen Produzenten und Display-Controller
//!
//! Ein einzelnes `AtomicU8`: Produzenten schreiben mit `Release`,
//! der Display-Controller liest mit `Acquire`.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::types::{Screen, ScreenRequest};

/// Angeforderter Bildschirm als atomarer Signal-Code
pub struct ScreenSignal {
    code: AtomicU8,
}

impl ScreenSignal {
    pub const fn new() -> Self {
        Self {
            code: AtomicU8::new(Screen::Idle as u8),
        }
    }

    /// Fordert einen Screen an (überschreibt eine noch nicht gezeigte Anforderung)
    pub fn request(&self, screen: Screen) {
        self.request_code(screen.code());
    }

    /// Schreibt einen rohen Code, auch unbekannte Werte
    pub fn request_code(&self, code: u8) {
        self.code.store(code, Ordering::Release);
    }

    pub fn current_code(&self) -> u8 {
        self.code.load(Ordering::Acquire)
    }

    pub fn current(&self) -> ScreenRequest {
        ScreenRequest::from_code(self.current_code())
    }

    pub fn is_idle(&self) -> bool {
        self.current_code() == Screen::Idle as u8
    }

    /// Übergang nach dem Anzeigen: `from` → `next`
    ///
    /// Greift nur, wenn das Signal noch `from` enthält. Hat ein Produzent
    /// inzwischen etwas Neues angefordert, bleibt dessen Code stehen und
    /// es wird `false` zurückgegeben.
    pub fn complete(&self, from: u8, next: Screen) -> bool {
        self.code
            .compare_exchange(from, next.code(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for ScreenSignal {
    fn default() -> Self {
        Self::new()
    }
}
