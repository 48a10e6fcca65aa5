//! Core Types für den Kiosk
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Bildschirm-Anforderung (Signal-Code)
///
/// Die Discriminants sind die Codes, die andere Tasks (Kartenleser, Waage,
/// Türsensor, Start/Stop-Taster) in das Signal schreiben.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Screen {
    Idle = 0,
    Booting = 1,
    WifiConnected = 2,
    Welcome = 3,
    PleaseWait = 4,
    UserGreeting = 5,
    InvalidUser = 6,
    DoorUnlocked = 7,
    StartProcessing = 8,
    LoginTimeout = 9,
    DoorNotClosed = 10,
    Processing = 11,
    ProcessDone = 12,
    EmergencyStop = 13,
    CloseDoor = 14,
    ContainerFull = 15,
    ConnectPrompt = 16,
}

impl Screen {
    /// Alle Screens in Code-Reihenfolge
    pub const ALL: [Screen; 17] = [
        Screen::Idle,
        Screen::Booting,
        Screen::WifiConnected,
        Screen::Welcome,
        Screen::PleaseWait,
        Screen::UserGreeting,
        Screen::InvalidUser,
        Screen::DoorUnlocked,
        Screen::StartProcessing,
        Screen::LoginTimeout,
        Screen::DoorNotClosed,
        Screen::Processing,
        Screen::ProcessDone,
        Screen::EmergencyStop,
        Screen::CloseDoor,
        Screen::ContainerFull,
        Screen::ConnectPrompt,
    ];

    /// Signal-Code dieses Screens
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Screen zu einem Signal-Code, `None` für unbekannte Codes
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

/// Inhalt des Signals, wie ihn der Display-Controller sieht
///
/// Produzenten können beliebige Codes schreiben; alles außerhalb der
/// bekannten Screens landet in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenRequest {
    Known(Screen),
    Unknown(u8),
}

impl ScreenRequest {
    pub fn from_code(code: u8) -> Self {
        match Screen::from_code(code) {
            Some(screen) => Self::Known(screen),
            None => Self::Unknown(code),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Known(screen) => screen.code(),
            Self::Unknown(code) => code,
        }
    }

    pub fn is_idle(self) -> bool {
        self == Self::Known(Screen::Idle)
    }
}

impl From<Screen> for ScreenRequest {
    fn from(screen: Screen) -> Self {
        Self::Known(screen)
    }
}

/// Kennung einer Benutzerkarte (vom Kartenleser geliefert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CardId(pub u32);

/// Registrierter Benutzer mit Punktestand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub card: CardId,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub points: u32,
}

impl User {
    /// Neuer Benutzer ohne Punkte
    pub const fn new(card: CardId, first_name: &'static str, last_name: &'static str) -> Self {
        Self {
            card,
            first_name,
            last_name,
            points: 0,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for User {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "User {{ card: {=u32:#x}, name: {} {}, points: {} }}",
            self.card.0,
            self.first_name,
            self.last_name,
            self.points
        )
    }
}
