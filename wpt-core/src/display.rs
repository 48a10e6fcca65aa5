//! Display-Controller: pollt das Screen-Signal und rendert Frames
//!
//! Der Controller kennt nur den `CharacterDisplay` Trait und einen
//! async Delay. Die Endlos-Schleife mit Logging läuft im Firmware-Task,
//! hier liegt ein einzelner Durchlauf (`step`), damit er auf dem Host
//! testbar ist.

use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::logic::{self, Frame, Next};
use crate::state::KioskState;
use crate::traits::{CharacterDisplay, DisplayError};
use crate::types::{Screen, ScreenRequest};

/// Wartezeit vor der LCD-Initialisierung (Hardware muss sich stabilisieren)
pub const STARTUP_DELAY_MS: u32 = 100;

/// Polling-Intervall der Display-Schleife
pub const POLL_INTERVAL_MS: u32 = 10;

/// Backlight-Farbe nach dem Start
pub const BACKLIGHT_WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// Ergebnis eines Schleifendurchlaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Signal war IDLE, nichts zu tun
    Idle,
    /// Screen wurde gezeichnet
    Rendered(ScreenRequest),
    /// Gehaltener Code ist schon sichtbar, nichts neu gezeichnet
    Held(u8),
}

pub struct DisplayController<D> {
    display: D,
    shown_hold: Option<u8>,
}

impl<D: CharacterDisplay> DisplayController<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            shown_hold: None,
        }
    }

    /// Initialisiert das LCD: kurz warten, Init, weißes Backlight, Cursor auf 0,0
    pub async fn start<T: DelayNs>(&mut self, delay: &mut T) -> Result<(), DisplayError> {
        delay.delay_ms(STARTUP_DELAY_MS).await;
        self.display.init()?;
        self.display.set_rgb(BACKLIGHT_WHITE)?;
        self.display.set_cursor(0, 0)
    }

    /// Ein Durchlauf: Signal lesen, Übergang setzen, Frame zeichnen
    ///
    /// Der Übergang wird VOR dem Zeichnen gesetzt. Eine Anforderung, die
    /// während des Zeichnens eintrifft (z.B. während der 16 s Banner-Animation),
    /// bleibt damit erhalten und wird im nächsten Durchlauf gezeigt.
    pub async fn step<T: DelayNs>(
        &mut self,
        state: &KioskState,
        delay: &mut T,
    ) -> Result<StepOutcome, DisplayError> {
        let code = state.signal().current_code();
        let request = ScreenRequest::from_code(code);

        let Some(frame) = logic::render(request, &state.snapshot()) else {
            self.shown_hold = None;
            return Ok(StepOutcome::Idle);
        };

        let hold = match frame.next {
            Next::Idle => {
                state.signal().complete(code, Screen::Idle);
                None
            }
            Next::Chain(next) => {
                state.signal().complete(code, next);
                None
            }
            Next::Hold => {
                if self.shown_hold == Some(code) {
                    return Ok(StepOutcome::Held(code));
                }
                Some(code)
            }
        };

        // Gehaltener Code gilt erst nach erfolgreichem Zeichnen als sichtbar
        self.shown_hold = None;
        self.draw(&frame, delay).await?;
        self.shown_hold = hold;
        Ok(StepOutcome::Rendered(request))
    }

    async fn draw<T: DelayNs>(&mut self, frame: &Frame, delay: &mut T) -> Result<(), DisplayError> {
        if frame.backlight_on {
            self.display.set_backlight(true)?;
        }
        if frame.clear {
            self.display.clear()?;
        }
        for line in &frame.lines {
            self.display.set_cursor(line.col, line.row)?;
            self.display.print(&line.text)?;
        }
        if let Some(scroll) = frame.scroll {
            for _ in 0..scroll.steps {
                self.display.scroll_left()?;
                delay.delay_ms(scroll.step_ms).await;
            }
        }
        Ok(())
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_inner(self) -> D {
        self.display
    }
}
