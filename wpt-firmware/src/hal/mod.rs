// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus wpt-core auf der echten
// Hardware. Die Logik selbst liegt in wpt-core und wird auf dem Host getestet.

pub mod lcd;
pub mod radio;
pub mod timer;

pub use lcd::{KioskLcd, build_lcd};
pub use radio::EspRadio;
pub use timer::SystemTimer;
