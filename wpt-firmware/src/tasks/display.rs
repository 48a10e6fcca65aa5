// Display Task - Zeigt angeforderte Screens auf dem RGB LCD1602
use defmt::{debug, error, info};
use embassy_time::{Duration, Timer};
use wpt_core::{CharacterDisplay, DisplayController, KioskState, StepOutcome};

use crate::config::{DISPLAY_INIT_RETRY_SECS, DISPLAY_POLL_INTERVAL_MS};
use crate::hal::{KioskLcd, SystemTimer};

/// Display Logic - Testbare Schleife ohne Hardware-Abhängigkeit
///
/// - Initialisiert das LCD (wiederholt bei Bus-Fehlern)
/// - Pollt das Screen-Signal alle 10 ms
/// - Zeichnet jede Anforderung höchstens einmal
///
/// Der generische Parameter `D: CharacterDisplay` erlaubt echte Hardware
/// (`RgbLcd1602`) oder ein Mock-Display.
pub async fn display_logic<D: CharacterDisplay>(display: D, state: &KioskState) -> ! {
    let mut timer = SystemTimer;
    let mut controller = DisplayController::new(display);

    while let Err(e) = controller.start(&mut timer).await {
        error!("Display: Init failed: {}", e);
        Timer::after(Duration::from_secs(DISPLAY_INIT_RETRY_SECS)).await;
    }
    info!("Display: Ready");

    loop {
        match controller.step(state, &mut timer).await {
            Ok(StepOutcome::Rendered(request)) => debug!("Display: Showing {}", request),
            Ok(StepOutcome::Idle | StepOutcome::Held(_)) => {}
            // Anforderung ist verbraucht, nächster Screen zeichnet neu
            Err(e) => error!("Display: Failed to draw: {}", e),
        }

        Timer::after(Duration::from_millis(DISPLAY_POLL_INTERVAL_MS)).await;
    }
}

/// Display Task (Hardware-Wrapper)
///
/// Embassy Task, der die echte LCD-Hardware an `display_logic` übergibt.
#[embassy_executor::task]
pub async fn display_task(lcd: KioskLcd, state: &'static KioskState) {
    info!("Display: Starting display task");
    display_logic(lcd, state).await
}
