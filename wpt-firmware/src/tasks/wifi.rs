// WiFi Tasks - Netzwerk-Stack und Überwachung der Verbindung
use defmt::{Debug2Format, error, info, warn};
use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{WifiController, WifiDevice, WifiEvent};

use crate::config::{WIFI_RECONNECT_DELAY_SECS, WIFI_RECONNECT_RETRY_SECS};

/// Link Supervisor Task
///
/// Läuft erst nach dem Bootstrap und übernimmt das automatische
/// Wiederverbinden:
/// - Wartet auf `StaDisconnected`
/// - Verbindet neu, bis der Access Point wieder angenommen hat
///
/// Die beim Bootstrap veröffentlichte Adresse bleibt unverändert.
#[embassy_executor::task]
pub async fn link_supervisor_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting link supervisor");

    loop {
        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WiFi: Disconnected from AP, will reconnect...");
        Timer::after(Duration::from_secs(WIFI_RECONNECT_DELAY_SECS)).await;

        while let Err(e) = controller.connect_async().await {
            error!("WiFi: Reconnect failed: {}", Debug2Format(&e));
            Timer::after(Duration::from_secs(WIFI_RECONNECT_RETRY_SECS)).await;
        }
        info!("WiFi: Reconnected");
    }
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete (DHCP-Client läuft im Stack)
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}
