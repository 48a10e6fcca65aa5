//! WPT Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE ESP-spezifischen Dependencies.
//! Sie definiert Traits, Pure Functions und die beiden Abläufe des Kiosks
//! (Display-Controller, WiFi-Bootstrapper), generisch über die Traits.

#![no_std]
#![allow(async_fn_in_trait)]

pub mod display;
pub mod lcd;
pub mod logic;
pub mod network;
pub mod signal;
pub mod state;
pub mod traits;
pub mod types;
pub mod users;

// Re-exports für einfachen Zugriff
pub use display::{DisplayController, StepOutcome};
pub use lcd::RgbLcd1602;
pub use logic::{Frame, Next, RenderContext, render};
pub use network::{Backoff, JoinError, JoinReport, RetryPolicy, bootstrap, join};
pub use signal::ScreenSignal;
pub use state::KioskState;
pub use traits::{CharacterDisplay, Clock, Credentials, DisplayError, RadioError, WifiRadio};
pub use types::{CardId, Screen, ScreenRequest, User};
pub use users::UserDirectory;
