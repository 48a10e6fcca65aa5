// Library-Root: Hardware-Anbindung und Tasks des Kiosks
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von wpt-core
pub use wpt_core::{Credentials, KioskState, Screen, UserDirectory, bootstrap};

use crate::config::{WIFI_PASSWORD, WIFI_SSID};

/// Einkompilierte WiFi-Credentials (aus .env via build.rs)
pub const WIFI_CREDENTIALS: Credentials<'static> = Credentials {
    ssid: WIFI_SSID,
    password: WIFI_PASSWORD,
};
