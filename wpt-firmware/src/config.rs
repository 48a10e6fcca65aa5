// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LCD Konfiguration (DFRobot RGB LCD1602 an I2C0)
// ============================================================================

/// GPIO-Pin für I2C SDA
/// Nur Dokumentation: der Pin wird in main() als `peripherals.GPIO6` übergeben
pub const LCD_SDA_GPIO_PIN: u8 = 6;

/// GPIO-Pin für I2C SCL
/// Nur Dokumentation: der Pin wird in main() als `peripherals.GPIO7` übergeben
pub const LCD_SCL_GPIO_PIN: u8 = 7;

/// I2C Taktfrequenz in kHz
/// AiP31068 und PCA9633 laufen sicher mit Standard-Mode (100 kHz)
pub const LCD_I2C_FREQUENCY_KHZ: u32 = 100;

/// Polling-Intervall der Display-Schleife in Millisekunden
pub const DISPLAY_POLL_INTERVAL_MS: u64 = wpt_core::display::POLL_INTERVAL_MS as u64;

/// Wartezeit nach fehlgeschlagener LCD-Initialisierung
pub const DISPLAY_INIT_RETRY_SECS: u64 = 1;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach einem Verbindungsabbruch vor dem Reconnect
pub const WIFI_RECONNECT_DELAY_SECS: u64 = 2;

/// Wartezeit nach fehlgeschlagenem Reconnect
pub const WIFI_RECONNECT_RETRY_SECS: u64 = 5;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

/// Socket-Slots für embassy-net
/// Nur DHCP läuft, keine Anwendungsprotokolle
pub const NET_SOCKET_COUNT: usize = 3;
