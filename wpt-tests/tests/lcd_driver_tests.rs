//! Integration Tests für den RGB LCD1602 Treiber
//!
//! Diese Tests laufen auf dem Host (x86_64) mit RecordingI2c statt echtem Bus

mod common;

use common::{RecordingDelay, RecordingI2c, SimTime};
use embassy_futures::block_on;
use rgb::RGB8;
use wpt_core::lcd::{LCD_ADDRESS, RGB_ADDRESS};
use wpt_core::{CharacterDisplay, DisplayController, DisplayError, KioskState, RgbLcd1602, Screen};

fn lcd() -> RgbLcd1602<RecordingI2c, RecordingDelay> {
    RgbLcd1602::new(RecordingI2c::new(), RecordingDelay::default())
}

fn command(value: u8) -> (u8, Vec<u8>) {
    (LCD_ADDRESS, vec![0x80, value])
}

fn register(reg: u8, value: u8) -> (u8, Vec<u8>) {
    (RGB_ADDRESS, vec![reg, value])
}

// ============================================================================
// Tests: Init
// ============================================================================

#[test]
fn test_init_sequence() {
    let mut lcd = lcd();
    lcd.init().unwrap();
    let (i2c, delay) = lcd.release();

    assert_eq!(
        i2c.writes,
        vec![
            command(0x28),
            command(0x28),
            command(0x28),
            command(0x0C),
            command(0x01),
            command(0x06),
            register(0x00, 0x00),
            register(0x08, 0xFF),
            register(0x01, 0x20),
            register(0x04, 255),
            register(0x03, 255),
            register(0x02, 255),
        ]
    );
    // 50 ms Power-on + 3 × 5 ms Function Set + 2 ms Clear
    assert_eq!(delay.total_ns, 67_000_000);
}

// ============================================================================
// Tests: Cursor, Text, Scroll
// ============================================================================

#[test]
fn test_set_cursor_addresses() {
    let mut lcd = lcd();
    lcd.set_cursor(0, 0).unwrap();
    lcd.set_cursor(3, 0).unwrap();
    lcd.set_cursor(2, 1).unwrap();
    let (i2c, _) = lcd.release();

    assert_eq!(i2c.writes, vec![command(0x80), command(0x83), command(0xC2)]);
}

#[test]
fn test_print_maps_arrows_to_rom_glyphs() {
    let mut lcd = lcd();
    lcd.print("→ A ←").unwrap();
    let (i2c, _) = lcd.release();

    assert_eq!(i2c.printed_bytes(), vec![0x7E, b' ', b'A', b' ', 0x7F]);
    assert!(i2c.writes.iter().all(|(addr, _)| *addr == LCD_ADDRESS));
}

#[test]
fn test_scroll_left_command() {
    let mut lcd = lcd();
    lcd.scroll_left().unwrap();
    let (i2c, _) = lcd.release();

    assert_eq!(i2c.writes, vec![command(0x18)]);
}

// ============================================================================
// Tests: Backlight
// ============================================================================

#[test]
fn test_backlight_off_and_restore_color() {
    let mut lcd = lcd();
    lcd.set_rgb(RGB8 { r: 10, g: 20, b: 30 }).unwrap();
    lcd.set_backlight(false).unwrap();
    lcd.set_backlight(true).unwrap();
    let (i2c, _) = lcd.release();

    assert_eq!(
        i2c.writes,
        vec![
            register(0x04, 10),
            register(0x03, 20),
            register(0x02, 30),
            register(0x04, 0),
            register(0x03, 0),
            register(0x02, 0),
            register(0x04, 10),
            register(0x03, 20),
            register(0x02, 30),
        ]
    );
}

// ============================================================================
// Tests: Fehler
// ============================================================================

#[test]
fn test_bus_error_maps_to_display_error() {
    let mut i2c = RecordingI2c::new();
    i2c.fail = true;
    let mut lcd = RgbLcd1602::new(i2c, RecordingDelay::default());

    assert_eq!(lcd.clear(), Err(DisplayError::Bus));
    assert_eq!(lcd.print("x"), Err(DisplayError::Bus));
    assert_eq!(lcd.set_rgb(RGB8::default()), Err(DisplayError::Bus));
}

// ============================================================================
// Tests: Controller + echter Treiber
// ============================================================================

#[test]
fn test_controller_drives_driver() {
    let mut time = SimTime::new();
    let mut controller = DisplayController::new(lcd());
    block_on(controller.start(&mut time)).unwrap();
    let state = KioskState::default();

    state.signal().request(Screen::ContainerFull);
    block_on(controller.step(&state, &mut time)).unwrap();

    let (i2c, _) = controller.into_inner().release();
    assert_eq!(i2c.printed_bytes(), b" CONTAINER FULL".to_vec());
    // Clear, dann Cursor auf 0,0 vor dem Text
    let tail: Vec<_> = i2c
        .writes
        .iter()
        .filter(|(_, bytes)| bytes[0] == 0x80)
        .rev()
        .take(2)
        .cloned()
        .collect();
    assert_eq!(tail, vec![command(0x80), command(0x01)]);
    assert!(state.signal().is_idle());
}
