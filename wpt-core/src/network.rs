//! WiFi-Bootstrapper
//!
//! `join` wartet blockierend (async) bis das Radio verbunden ist und eine
//! Adresse hat. Läuft ein Versuch länger als sein Zeitfenster, wird die
//! Verbindung neu angestoßen. `bootstrap` verbindet das mit dem geteilten
//! Zustand: Adresse veröffentlichen, "Wifi Connected" Screen anfordern.

use core::net::Ipv4Addr;

use embedded_hal_async::delay::DelayNs;

use crate::state::KioskState;
use crate::traits::{Clock, Credentials, WifiRadio};
use crate::types::Screen;

/// Zeitfenster pro Verbindungsversuch
pub const ATTEMPT_TIMEOUT_MS: u32 = 2000;

/// Abstand zwischen zwei Status-Abfragen
pub const POLL_INTERVAL_MS: u32 = 100;

/// Wie sich das Zeitfenster mit jedem weiteren Versuch verändert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backoff {
    /// Jeder Versuch bekommt dasselbe Fenster
    Fixed,
    /// Fenster wächst pro Versuch um `step_ms`, gedeckelt bei `max_ms`
    Linear { step_ms: u32, max_ms: u32 },
    /// Fenster verdoppelt sich pro Versuch, gedeckelt bei `max_ms`
    Exponential { max_ms: u32 },
}

impl Backoff {
    /// Zeitfenster für den Versuch mit Index `retry` (0 = erster Versuch)
    pub fn window_ms(self, base_ms: u32, retry: u32) -> u32 {
        match self {
            Backoff::Fixed => base_ms,
            Backoff::Linear { step_ms, max_ms } => base_ms
                .saturating_add(step_ms.saturating_mul(retry))
                .min(max_ms.max(base_ms)),
            Backoff::Exponential { max_ms } => {
                let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
                base_ms.saturating_mul(factor).min(max_ms.max(base_ms))
            }
        }
    }
}

/// Retry-Verhalten beim Verbinden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    pub attempt_timeout_ms: u32,
    pub poll_interval_ms: u32,
    /// `None` = unbegrenzt
    pub max_attempts: Option<u32>,
    pub backoff: Backoff,
    pub auto_reconnect: bool,
    pub persistent: bool,
}

impl RetryPolicy {
    /// Endlos wiederholen, festes 2 s Fenster, Status alle 100 ms
    pub const fn forever() -> Self {
        Self {
            attempt_timeout_ms: ATTEMPT_TIMEOUT_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            max_attempts: None,
            backoff: Backoff::Fixed,
            auto_reconnect: true,
            persistent: true,
        }
    }

    pub const fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub const fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    fn window_ms(&self, retry: u32) -> u64 {
        self.backoff.window_ms(self.attempt_timeout_ms, retry) as u64
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::forever()
    }
}

/// Ergebnis einer erfolgreichen Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinReport {
    pub address: Ipv4Addr,
    /// Anzahl der Verbindungsanfragen (inkl. der ersten)
    pub attempts: u32,
    /// Anzahl der Status-Abfragen
    pub polls: u32,
}

#[cfg(feature = "defmt")]
impl defmt::Format for JoinReport {
    fn format(&self, fmt: defmt::Formatter) {
        let [a, b, c, d] = self.address.octets();
        defmt::write!(
            fmt,
            "JoinReport {{ address: {}.{}.{}.{}, attempts: {}, polls: {} }}",
            a,
            b,
            c,
            d,
            self.attempts,
            self.polls
        )
    }
}

/// Fehler beim Verbinden (nur mit begrenzter Policy möglich)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoinError {
    AttemptsExhausted { attempts: u32 },
}

/// Verbindet mit dem WLAN und wartet, bis eine Adresse vorliegt
///
/// Fehler des Treibers beim Anstoßen zählen wie ein abgelaufener Versuch;
/// es wird im nächsten Fenster erneut versucht. Das gilt auch für den
/// Station-Modus: solange er nicht aktiv ist, wird er vor jedem neuen
/// `begin` erneut gesetzt. Mit `RetryPolicy::forever()`
/// kehrt die Funktion nur mit `Ok` zurück.
pub async fn join<R, T>(
    radio: &mut R,
    credentials: &Credentials<'_>,
    policy: &RetryPolicy,
    timer: &mut T,
) -> Result<JoinReport, JoinError>
where
    R: WifiRadio,
    T: Clock + DelayNs,
{
    // Fehlgeschlagener Moduswechsel wird zu Beginn jedes neuen Fensters wiederholt
    let mut station_ready = radio.enter_station_mode().is_ok();
    let _ = radio.begin(credentials);
    radio.set_auto_reconnect(policy.auto_reconnect);
    radio.set_persistent(policy.persistent);

    let mut attempts: u32 = 1;
    let mut polls: u32 = 0;
    let mut window_start = timer.now_ms();
    let mut window = policy.window_ms(0);

    loop {
        polls = polls.wrapping_add(1);
        if radio.is_connected() {
            if let Some(address) = radio.local_address() {
                return Ok(JoinReport {
                    address,
                    attempts,
                    polls,
                });
            }
        }

        let now = timer.now_ms();
        if now.saturating_sub(window_start) >= window {
            if policy.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(JoinError::AttemptsExhausted { attempts });
            }
            if !station_ready {
                station_ready = radio.enter_station_mode().is_ok();
            }
            let _ = radio.begin(credentials);
            window = policy.window_ms(attempts);
            attempts = attempts.saturating_add(1);
            window_start = now;
        }

        timer.delay_ms(policy.poll_interval_ms).await;
    }
}

/// Verbindet endlos und meldet den Erfolg an den Display-Controller
///
/// Adresse wird in `state` veröffentlicht, danach wird `WifiConnected`
/// angefordert (das Banner kettet selbst zu `Welcome` weiter).
pub async fn bootstrap<R, T>(
    state: &KioskState,
    radio: &mut R,
    credentials: &Credentials<'_>,
    timer: &mut T,
) -> JoinReport
where
    R: WifiRadio,
    T: Clock + DelayNs,
{
    let policy = RetryPolicy::forever();
    let report = loop {
        // forever() kennt kein Versuchslimit
        if let Ok(report) = join(radio, credentials, &policy, timer).await {
            break report;
        }
    };

    // Zweiter Bootstrap behält die erste Adresse
    let _ = state.publish_address(report.address);
    state.signal().request(Screen::WifiConnected);
    report
}
