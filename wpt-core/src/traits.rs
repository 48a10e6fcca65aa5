//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::net::Ipv4Addr;

use rgb::RGB8;

/// Fehler-Typ für Display-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// I²C-Transaktion zum LCD oder Backlight-Controller fehlgeschlagen
    Bus,
}

/// Trait für ein zweizeiliges Zeichen-Display mit RGB-Backlight
///
/// # Implementierungen
/// - **Production:** `RgbLcd1602` (DFRobot RGB LCD1602 über I²C)
/// - **Testing:** `MockLcd` (in-memory DDRAM-Abbild)
pub trait CharacterDisplay {
    /// Initialisiert den Display-Controller (Function Set, Display On, Clear)
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Setzt die Backlight-Farbe
    fn set_rgb(&mut self, color: RGB8) -> Result<(), DisplayError>;

    /// Schaltet das Backlight ein (letzte Farbe) oder aus
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Löscht den Inhalt und setzt Cursor und Scroll-Offset zurück
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Positioniert den Cursor (`col` 0..40, `row` 0..2)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Schreibt Text ab der aktuellen Cursor-Position
    ///
    /// `→` und `←` werden auf die Pfeil-Zeichen des LCD-ROMs abgebildet.
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Verschiebt den sichtbaren Ausschnitt um eine Spalte nach links
    fn scroll_left(&mut self) -> Result<(), DisplayError>;
}

/// Fehler-Typ für Radio-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Station-Modus konnte nicht gesetzt/gestartet werden
    ModeFailed,
    /// Verbindungsanfrage wurde vom Treiber abgelehnt
    ConnectFailed,
}

/// Zugangsdaten für das WLAN (zur Build-Zeit eingebacken)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

/// Trait für den WiFi-Treiber im Station-Modus
///
/// Alle Methoden sind nicht-blockierend; das Warten übernimmt
/// `network::join`.
pub trait WifiRadio {
    /// Schaltet das Radio in den Station-Modus und startet es
    fn enter_station_mode(&mut self) -> Result<(), RadioError>;

    /// Stößt einen (neuen) Verbindungsversuch an
    fn begin(&mut self, credentials: &Credentials<'_>) -> Result<(), RadioError>;

    /// Verbunden = assoziiert und Adresse per DHCP erhalten
    fn is_connected(&mut self) -> bool;

    /// Zugewiesene IPv4-Adresse, sobald verfügbar
    fn local_address(&self) -> Option<Ipv4Addr>;

    /// Automatisches Reconnect auf Treiber-Ebene
    fn set_auto_reconnect(&mut self, enabled: bool);

    /// Zugangsdaten persistent halten
    fn set_persistent(&mut self, enabled: bool);
}

/// Monotone Zeitquelle in Millisekunden
pub trait Clock {
    fn now_ms(&self) -> u64;
}
