// Zeitbasis: `Clock` + async `DelayNs` über embassy-time
use embassy_time::{Instant, Timer};
use embedded_hal_async::delay::DelayNs;
use wpt_core::Clock;

/// Monotone Uhr und Delay des Systemtimers (TIMG0 via esp-rtos)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimer;

impl Clock for SystemTimer {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

impl DelayNs for SystemTimer {
    async fn delay_ns(&mut self, ns: u32) {
        Timer::after_nanos(ns.into()).await
    }

    async fn delay_us(&mut self, us: u32) {
        Timer::after_micros(us.into()).await
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(ms.into()).await
    }
}
