//! Gemeinsame Mocks für die Integration Tests
//!
//! Alle Mocks laufen auf dem Host (x86_64), ohne Hardware.

#![allow(dead_code)]

use core::net::Ipv4Addr;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use rgb::RGB8;
use wpt_core::{CharacterDisplay, Clock, Credentials, DisplayError, RadioError, WifiRadio};

pub const DDRAM_WIDTH: usize = 40;
pub const VISIBLE_COLUMNS: usize = 16;

// ============================================================================
// Mock LCD (DDRAM-Abbild)
// ============================================================================

/// In-memory LCD: zwei 40-Zeichen DDRAM-Zeilen, Cursor und Scroll-Offset
pub struct MockLcd {
    ddram: [[char; DDRAM_WIDTH]; 2],
    col: usize,
    row: usize,
    shift: usize,
    pub initialized: bool,
    pub backlight_on: bool,
    pub color: Option<RGB8>,
    pub clear_count: usize,
    pub print_count: usize,
    pub scroll_count: usize,
    pub fail_next_op: bool,
}

impl MockLcd {
    pub fn new() -> Self {
        Self {
            ddram: [[' '; DDRAM_WIDTH]; 2],
            col: 0,
            row: 0,
            shift: 0,
            initialized: false,
            backlight_on: false,
            color: None,
            clear_count: 0,
            print_count: 0,
            scroll_count: 0,
            fail_next_op: false,
        }
    }

    /// Komplette DDRAM-Zeile ohne Leerzeichen am Ende
    pub fn line(&self, row: usize) -> String {
        let text: String = self.ddram[row].iter().collect();
        text.trim_end().to_string()
    }

    /// Die 16 sichtbaren Zeichen einer Zeile (mit Scroll-Offset)
    pub fn visible(&self, row: usize) -> String {
        let text: String = (0..VISIBLE_COLUMNS)
            .map(|i| self.ddram[row][(self.shift + i) % DDRAM_WIDTH])
            .collect();
        text.trim_end().to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    fn check(&mut self) -> Result<(), DisplayError> {
        if self.fail_next_op {
            self.fail_next_op = false;
            return Err(DisplayError::Bus);
        }
        Ok(())
    }
}

impl CharacterDisplay for MockLcd {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.initialized = true;
        self.clear()
    }

    fn set_rgb(&mut self, color: RGB8) -> Result<(), DisplayError> {
        self.check()?;
        self.color = Some(color);
        self.backlight_on = true;
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.check()?;
        self.backlight_on = on;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.ddram = [[' '; DDRAM_WIDTH]; 2];
        self.col = 0;
        self.row = 0;
        self.shift = 0;
        self.clear_count += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.check()?;
        self.col = col as usize % DDRAM_WIDTH;
        self.row = (row as usize).min(1);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        self.check()?;
        for c in text.chars() {
            self.ddram[self.row][self.col] = c;
            self.col = (self.col + 1) % DDRAM_WIDTH;
        }
        self.print_count += 1;
        Ok(())
    }

    fn scroll_left(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.shift = (self.shift + 1) % DDRAM_WIDTH;
        self.scroll_count += 1;
        Ok(())
    }
}

// ============================================================================
// Simulierte Zeit (Clock + async DelayNs)
// ============================================================================

/// Simulierte Zeit: jeder Delay springt sofort vorwärts
///
/// Mit `horizon_ms` bleibt ein Delay, der über den Horizont hinaus
/// führen würde, für immer pending. So lässt sich eine Endlosschleife
/// mit `embassy_futures::poll_once` bis zu einem Zeitpunkt treiben.
pub struct SimTime {
    now_ns: u64,
    horizon_ms: Option<u64>,
    pub delay_calls: usize,
}

impl SimTime {
    pub fn new() -> Self {
        Self {
            now_ns: 0,
            horizon_ms: None,
            delay_calls: 0,
        }
    }

    pub fn with_horizon_ms(horizon_ms: u64) -> Self {
        Self {
            horizon_ms: Some(horizon_ms),
            ..Self::new()
        }
    }

    async fn advance(&mut self, ns: u64) {
        if let Some(horizon) = self.horizon_ms {
            if self.now_ns + ns > horizon * 1_000_000 {
                core::future::pending::<()>().await;
            }
        }
        self.now_ns += ns;
        self.delay_calls += 1;
    }
}

impl Clock for SimTime {
    fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }
}

impl embedded_hal_async::delay::DelayNs for SimTime {
    async fn delay_ns(&mut self, ns: u32) {
        self.advance(ns as u64).await;
    }

    async fn delay_us(&mut self, us: u32) {
        self.advance(us as u64 * 1_000).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.advance(ms as u64 * 1_000_000).await;
    }
}

// ============================================================================
// Simuliertes WiFi-Radio
// ============================================================================

pub const SIM_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 4, 23);

pub const TEST_CREDENTIALS: Credentials<'static> = Credentials {
    ssid: "Weidos",
    password: "secret",
};

/// Radio, das nach `connect_after_polls` Abfragen verbunden meldet
/// (`None` = nie). Verbindet nur, wenn der Station-Modus aktiv ist.
pub struct SimRadio {
    connect_after_polls: Option<u32>,
    address: Ipv4Addr,
    pub polls: u32,
    pub begin_calls: u32,
    pub station_mode: bool,
    pub mode_calls: u32,
    /// Anzahl der ersten Moduswechsel, die mit `ModeFailed` scheitern
    pub failing_mode_calls: u32,
    pub auto_reconnect: bool,
    pub persistent: bool,
    pub fail_begin: bool,
    pub last_ssid: Option<String>,
}

impl SimRadio {
    pub fn connecting_after(polls: u32) -> Self {
        Self {
            connect_after_polls: Some(polls),
            address: SIM_ADDRESS,
            polls: 0,
            begin_calls: 0,
            station_mode: false,
            mode_calls: 0,
            failing_mode_calls: 0,
            auto_reconnect: false,
            persistent: false,
            fail_begin: false,
            last_ssid: None,
        }
    }

    pub fn never_connecting() -> Self {
        Self {
            connect_after_polls: None,
            ..Self::connecting_after(0)
        }
    }

    fn connected(&self) -> bool {
        self.station_mode && self.connect_after_polls.is_some_and(|n| self.polls > n)
    }
}

impl WifiRadio for SimRadio {
    fn enter_station_mode(&mut self) -> Result<(), RadioError> {
        self.mode_calls += 1;
        if self.mode_calls <= self.failing_mode_calls {
            return Err(RadioError::ModeFailed);
        }
        self.station_mode = true;
        Ok(())
    }

    fn begin(&mut self, credentials: &Credentials<'_>) -> Result<(), RadioError> {
        self.begin_calls += 1;
        self.last_ssid = Some(credentials.ssid.to_string());
        if self.fail_begin {
            return Err(RadioError::ConnectFailed);
        }
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.polls += 1;
        self.connected()
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        self.connected().then_some(self.address)
    }

    fn set_auto_reconnect(&mut self, enabled: bool) {
        self.auto_reconnect = enabled;
    }

    fn set_persistent(&mut self, enabled: bool) {
        self.persistent = enabled;
    }
}

// ============================================================================
// Aufzeichnender I²C-Bus + blockierender Delay (für den LCD-Treiber)
// ============================================================================

#[derive(Default)]
pub struct RecordingI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
}

impl RecordingI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Datenbytes an den Text-Controller (Prefix 0x40) als Text
    pub fn printed_bytes(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(addr, bytes)| *addr == 0x3E && bytes.first() == Some(&0x40))
            .map(|(_, bytes)| bytes[1])
            .collect()
    }
}

impl ErrorType for RecordingI2c {
    type Error = ErrorKind;
}

impl I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        for operation in operations {
            if let Operation::Write(bytes) = operation {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
