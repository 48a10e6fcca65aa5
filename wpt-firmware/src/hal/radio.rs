// WiFi-Radio: `WifiRadio` Trait auf esp-radio + embassy-net
use core::net::Ipv4Addr;

use defmt::{Debug2Format, debug, warn};
use embassy_net::Stack;
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController};
use wpt_core::{Credentials, RadioError, WifiRadio};

/// WiFi-Station auf Basis von `WifiController` und dem DHCP-Stack
///
/// "Verbunden" heißt: mit dem Access Point assoziiert UND eine
/// DHCP-Adresse liegt vor.
pub struct EspRadio {
    controller: WifiController<'static>,
    stack: Stack<'static>,
    auto_reconnect: bool,
    persistent: bool,
}

impl EspRadio {
    pub fn new(controller: WifiController<'static>, stack: Stack<'static>) -> Self {
        Self {
            controller,
            stack,
            auto_reconnect: false,
            persistent: false,
        }
    }

    /// Soll nach einem Abbruch automatisch neu verbunden werden?
    pub fn auto_reconnect(&self) -> bool {
        self.auto_reconnect
    }

    /// Credentials sind einkompiliert und überleben damit jeden Neustart
    pub fn persistent(&self) -> bool {
        self.persistent
    }

    /// Gibt den Controller frei (für den Link-Supervisor)
    pub fn into_controller(self) -> WifiController<'static> {
        self.controller
    }
}

impl WifiRadio for EspRadio {
    fn enter_station_mode(&mut self) -> Result<(), RadioError> {
        let mode = ModeConfig::Client(ClientConfig::default());
        self.controller.set_config(&mode).map_err(|e| {
            warn!("WiFi: Failed to set station mode: {}", Debug2Format(&e));
            RadioError::ModeFailed
        })?;

        if matches!(self.controller.is_started(), Ok(false)) {
            self.controller.start().map_err(|e| {
                warn!("WiFi: Failed to start: {}", Debug2Format(&e));
                RadioError::ModeFailed
            })?;
        }
        Ok(())
    }

    fn begin(&mut self, credentials: &Credentials<'_>) -> Result<(), RadioError> {
        debug!("WiFi: Connecting to '{}'...", credentials.ssid);
        let mode = ModeConfig::Client(
            ClientConfig::default()
                .with_ssid(credentials.ssid.into())
                .with_password(credentials.password.into()),
        );
        self.controller.set_config(&mode).map_err(|e| {
            warn!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
            RadioError::ConnectFailed
        })?;

        self.controller.connect().map_err(|e| {
            warn!("WiFi: Connect request failed: {}", Debug2Format(&e));
            RadioError::ConnectFailed
        })
    }

    fn is_connected(&mut self) -> bool {
        matches!(self.controller.is_connected(), Ok(true)) && self.stack.config_v4().is_some()
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        self.stack
            .config_v4()
            .map(|config| config.address.address())
    }

    fn set_auto_reconnect(&mut self, enabled: bool) {
        self.auto_reconnect = enabled;
    }

    fn set_persistent(&mut self, enabled: bool) {
        self.persistent = enabled;
    }
}
