//! Pure Business Logic: Screen-Layouts
//!
//! Jeder Screen wird auf einen Layout-Handler abgebildet, der einen
//! [`Frame`] erzeugt. Der Frame beschreibt, was auf das LCD geschrieben
//! wird UND welchen Wert das Signal danach bekommt ([`Next`]).
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::fmt::Write;
use core::net::Ipv4Addr;

use heapless::{String, Vec};

use crate::types::{Screen, ScreenRequest, User};

/// Zeichen pro Zeile im DDRAM des LCDs (davon 16 sichtbar)
pub const LINE_CAPACITY: usize = 40;

/// Scroll-Schritte für das "Wifi Connected" Banner
pub const BANNER_SCROLL_STEPS: u8 = 40;

/// Pause zwischen zwei Scroll-Schritten in Millisekunden
pub const BANNER_SCROLL_STEP_MS: u32 = 400;

/// Was nach dem Rendern mit dem Signal passiert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Next {
    /// Zurück auf IDLE (Normalfall)
    Idle,
    /// Direkt den nächsten Screen anfordern
    Chain(Screen),
    /// Signal unverändert lassen
    Hold,
}

/// Eine Textzeile an fester Cursor-Position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub col: u8,
    pub row: u8,
    pub text: String<LINE_CAPACITY>,
}

/// Horizontale Scroll-Animation nach dem Schreiben
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub steps: u8,
    pub step_ms: u32,
}

/// Kompletter Bildaufbau eines Screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub backlight_on: bool,
    pub clear: bool,
    pub lines: Vec<TextLine, 2>,
    pub scroll: Option<Scroll>,
    pub next: Next,
}

impl Frame {
    fn new(next: Next) -> Self {
        Self {
            backlight_on: false,
            clear: true,
            lines: Vec::new(),
            scroll: None,
            next,
        }
    }

    fn backlight(mut self) -> Self {
        self.backlight_on = true;
        self
    }

    fn line(mut self, col: u8, row: u8, text: String<LINE_CAPACITY>) -> Self {
        // Höchstens zwei Zeilen pro Screen
        let _ = self.lines.push(TextLine { col, row, text });
        self
    }

    fn text(self, col: u8, row: u8, text: &str) -> Self {
        self.line(col, row, truncated(text))
    }

    /// Text einer Zeile (für Logging und Tests)
    pub fn row_text(&self, row: u8) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.row == row)
            .map(|line| line.text.as_str())
    }
}

/// Dynamische Werte, die manche Screens anzeigen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub user: Option<User>,
    pub weight_kg: f32,
    pub address: Option<Ipv4Addr>,
}

/// Layout-Handler eines Screens
pub type Layout = fn(&RenderContext) -> Frame;

/// Nachschlagen des Handlers für einen Screen
///
/// `Idle` hat keinen Handler, der Controller tut dort nichts.
pub fn layout_for(screen: Screen) -> Option<Layout> {
    let layout: Layout = match screen {
        Screen::Idle => return None,
        Screen::Booting => booting,
        Screen::WifiConnected => wifi_connected,
        Screen::Welcome => welcome,
        Screen::PleaseWait => please_wait,
        Screen::UserGreeting => user_greeting,
        Screen::InvalidUser => invalid_user,
        Screen::DoorUnlocked => door_unlocked,
        Screen::StartProcessing => start_processing,
        Screen::LoginTimeout => login_timeout,
        Screen::DoorNotClosed => door_not_closed,
        Screen::Processing => processing,
        Screen::ProcessDone => process_done,
        Screen::EmergencyStop => emergency_stop,
        Screen::CloseDoor => close_door,
        Screen::ContainerFull => container_full,
        Screen::ConnectPrompt => connect_prompt,
    };
    Some(layout)
}

/// Frame für eine Anforderung, `None` bei IDLE
pub fn render(request: ScreenRequest, ctx: &RenderContext) -> Option<Frame> {
    match request {
        ScreenRequest::Known(screen) => layout_for(screen).map(|layout| layout(ctx)),
        ScreenRequest::Unknown(_) => Some(unknown_code()),
    }
}

/// Punkte für eine Gewichtsmessung: ganze Kilogramm, abgeschnitten
pub fn points_for_weight(kg: f32) -> i32 {
    kg as i32
}

fn truncated(text: &str) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    for c in text.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}

fn formatted(args: core::fmt::Arguments<'_>) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    // Überlange Zeilen werden abgeschnitten, das LCD hat nur 40 Zeichen DDRAM
    let _ = line.write_fmt(args);
    line
}

// ============================================================================
// Layout-Handler
// ============================================================================

fn booting(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .backlight()
        .text(0, 0, "Waste Processor")
        .text(0, 1, "Initializing...")
}

fn wifi_connected(ctx: &RenderContext) -> Frame {
    let address = ctx.address.unwrap_or(Ipv4Addr::UNSPECIFIED);
    let mut frame = Frame::new(Next::Chain(Screen::Welcome))
        .backlight()
        .line(0, 0, formatted(format_args!("Wifi Connected with IP: {}", address)));
    frame.scroll = Some(Scroll {
        steps: BANNER_SCROLL_STEPS,
        step_ms: BANNER_SCROLL_STEP_MS,
    });
    frame
}

fn welcome(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .text(0, 0, "Welcome to W.P.T.")
        .text(0, 1, "→ Put the card ←")
}

fn please_wait(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle).text(0, 1, "Please wait...")
}

fn user_greeting(ctx: &RenderContext) -> Frame {
    match ctx.user {
        Some(user) => Frame::new(Next::Idle)
            .line(3, 0, formatted(format_args!("Hi {}", user.first_name)))
            .line(0, 1, formatted(format_args!("You've {} Points", user.points))),
        // Kein Benutzer ausgewählt
        None => invalid_user(ctx),
    }
}

fn invalid_user(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle).text(2, 0, "Invalid User")
}

fn door_unlocked(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .text(0, 0, "Door Unlocked")
        .text(2, 1, "Press Start  ")
}

fn start_processing(ctx: &RenderContext) -> Frame {
    Frame::new(Next::Idle).text(0, 0, "START Processing").line(
        0,
        1,
        formatted(format_args!(
            "{:.2} Kg {} Points",
            ctx.weight_kg,
            points_for_weight(ctx.weight_kg)
        )),
    )
}

fn login_timeout(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle).text(2, 0, "Login Timeout")
}

fn door_not_closed(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .text(0, 0, "First close Door")
        .text(0, 1, " & Press Start")
}

fn processing(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .text(3, 0, "PROCESSING ")
        .text(0, 1, "..Please Wait...")
}

fn process_done(ctx: &RenderContext) -> Frame {
    let frame = Frame::new(Next::Idle).text(0, 0, "Process END.");
    match ctx.user {
        Some(user) => frame.line(0, 1, formatted(format_args!("{} Total Points", user.points))),
        None => frame,
    }
}

fn emergency_stop(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .text(0, 0, "EMERGENCY STOP")
        .text(0, 1, "BUTTON PRESSED")
}

fn close_door(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .text(0, 0, "PLEASE, CLOSE")
        .text(0, 1, "THE DOOR")
}

fn container_full(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle).text(0, 0, " CONTAINER FULL")
}

fn connect_prompt(_: &RenderContext) -> Frame {
    Frame::new(Next::Idle)
        .text(0, 0, "Connect to")
        .text(0, 1, "Weidos Network")
}

/// Unbekannter Code: kein Clear, Signal bleibt stehen
fn unknown_code() -> Frame {
    let mut frame = Frame::new(Next::Hold).text(0, 0, "Default");
    frame.clear = false;
    frame
}
