// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, StackResources};
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;
use static_cell::StaticCell;

// Projekt-Module und Konfiguration
use wpt_kiosk::config::{EXTRA_HEAP_SIZE, NET_SOCKET_COUNT, WIFI_HEAP_SIZE};
use wpt_kiosk::hal::{EspRadio, SystemTimer, build_lcd};
use wpt_kiosk::tasks::{display_task, link_supervisor_task, net_task};
use wpt_kiosk::{KioskState, Screen, UserDirectory, WIFI_CREDENTIALS, bootstrap};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet den Display-Task und verbindet das WLAN.
/// Danach schläft main() - Display und Link-Überwachung laufen in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    // Zwei Bereiche: reclaimed RAM (64 KB) + extra (36 KB) = 100 KB total
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Geteilter Zustand: Screen-Signal, Benutzer, Gewicht, Adresse
    let directory = UserDirectory::with_default_roster();
    for user in directory.iter() {
        info!("Users: {}", user);
    }
    static STATE: StaticCell<KioskState> = StaticCell::new();
    let state = &*STATE.init(KioskState::new(directory));

    // Display zuerst, damit "Initializing..." während des WiFi-Aufbaus sichtbar ist
    let lcd = build_lcd(peripherals.I2C0, peripherals.GPIO6, peripherals.GPIO7)
        .expect("Failed to initialize I2C for LCD");
    spawner.spawn(display_task(lcd, state)).unwrap();
    state.signal().request(Screen::Booting);

    // WiFi Hardware initialisieren
    static RADIO_INIT: StaticCell<esp_radio::Controller> = StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Netzwerk-Stack erstellen
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Static resources für embassy-net (nur DHCP)
    static RESOURCES: StaticCell<StackResources<NET_SOCKET_COUNT>> = StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // embassy-net erstellt Stack + Runner (nutzt STA interface für Client-Modus)
    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );
    spawner.spawn(net_task(runner)).unwrap();

    // Verbinden: blockiert (async) bis verbunden, zeigt dann "Wifi Connected"
    info!("WiFi: Connecting to '{}'...", WIFI_CREDENTIALS.ssid);
    let mut radio = EspRadio::new(wifi_controller, stack);
    let mut timer = SystemTimer;
    let report = bootstrap(state, &mut radio, &WIFI_CREDENTIALS, &mut timer).await;
    info!("WiFi: Connected {}", report);
    info!(
        "WiFi: auto-reconnect = {}, persistent = {}",
        radio.auto_reconnect(),
        radio.persistent()
    );

    // Automatisches Wiederverbinden übernimmt ab jetzt der Supervisor
    if radio.auto_reconnect() {
        spawner
            .spawn(link_supervisor_task(radio.into_controller()))
            .unwrap();
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
