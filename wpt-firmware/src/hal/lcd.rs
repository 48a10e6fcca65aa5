// LCD-Anbindung: RGB LCD1602 Treiber über blockierendes I2C0
use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::{Config, ConfigError, I2c};
use esp_hal::peripherals::{GPIO6, GPIO7, I2C0};
use esp_hal::time::Rate;
use wpt_core::RgbLcd1602;

use crate::config::LCD_I2C_FREQUENCY_KHZ;

/// Konkreter LCD-Typ der Firmware
///
/// Embassy Tasks dürfen nicht generisch sein, deshalb fester Typ.
pub type KioskLcd = RgbLcd1602<I2c<'static, Blocking>, Delay>;

/// Erstellt den LCD-Treiber auf I2C0 (SDA = GPIO6, SCL = GPIO7)
///
/// Initialisiert das Display noch nicht, das macht der Display-Task.
pub fn build_lcd(
    i2c: I2C0<'static>,
    sda: GPIO6<'static>,
    scl: GPIO7<'static>,
) -> Result<KioskLcd, ConfigError> {
    let config = Config::default().with_frequency(Rate::from_khz(LCD_I2C_FREQUENCY_KHZ));
    let bus = I2c::new(i2c, config)?.with_sda(sda).with_scl(scl);

    Ok(RgbLcd1602::new(bus, Delay::new()))
}
