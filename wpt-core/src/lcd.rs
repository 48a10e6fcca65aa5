//! Treiber für das DFRobot RGB LCD1602 (v1.0)
//!
//! Zwei I²C-Teilnehmer auf einem Bus:
//! - AiP31068 Text-Controller (HD44780-kompatibler Befehlssatz) auf `0x3E`
//! - PCA9633 PWM-Controller für das RGB-Backlight auf `0x60`
//!
//! Generisch über `embedded_hal::i2c::I2c` und `embedded_hal::delay::DelayNs`,
//! damit der Treiber auf dem Host gegen einen Mock-Bus getestet werden kann.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use rgb::RGB8;

use crate::traits::{CharacterDisplay, DisplayError};

/// I²C-Adresse des Text-Controllers (7 Bit)
pub const LCD_ADDRESS: u8 = 0x3E;
/// I²C-Adresse des Backlight-Controllers (7 Bit)
pub const RGB_ADDRESS: u8 = 0x60;

// Steuerbytes vor jedem Befehl/Datenbyte
const CONTROL_COMMAND: u8 = 0x80;
const CONTROL_DATA: u8 = 0x40;

// Befehle
const CMD_CLEAR_DISPLAY: u8 = 0x01;
const CMD_ENTRY_MODE_SET: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_CURSOR_SHIFT: u8 = 0x10;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM_ADDR: u8 = 0x80;

// Flags
const ENTRY_LEFT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const DISPLAY_MOVE: u8 = 0x08;
const MOVE_LEFT: u8 = 0x00;
const TWO_LINES: u8 = 0x08;

// DDRAM-Startadresse der zweiten Zeile
const ROW_1_OFFSET: u8 = 0x40;

// PCA9633 Register
const REG_MODE1: u8 = 0x00;
const REG_MODE2: u8 = 0x01;
const REG_BLUE: u8 = 0x02;
const REG_GREEN: u8 = 0x03;
const REG_RED: u8 = 0x04;
const REG_OUTPUT: u8 = 0x08;

/// Pfeil-Zeichen im Zeichen-ROM (A00)
const GLYPH_RIGHT_ARROW: u8 = 0x7E;
const GLYPH_LEFT_ARROW: u8 = 0x7F;

/// Bildet ein Zeichen auf den Zeichensatz des LCD-ROMs ab
pub fn glyph(c: char) -> u8 {
    match c {
        '→' => GLYPH_RIGHT_ARROW,
        '←' => GLYPH_LEFT_ARROW,
        ' '..='}' => c as u8,
        _ => b'?',
    }
}

pub struct RgbLcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    color: RGB8,
}

impl<I2C: I2c, D: DelayNs> RgbLcd1602<I2C, D> {
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            color: RGB8 {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }

    /// Gibt Bus und Delay wieder frei
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(LCD_ADDRESS, &[CONTROL_COMMAND, value])
            .map_err(|_| DisplayError::Bus)
    }

    fn data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(LCD_ADDRESS, &[CONTROL_DATA, value])
            .map_err(|_| DisplayError::Bus)
    }

    fn set_register(&mut self, register: u8, value: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(RGB_ADDRESS, &[register, value])
            .map_err(|_| DisplayError::Bus)
    }

    fn write_color(&mut self, color: RGB8) -> Result<(), DisplayError> {
        self.set_register(REG_RED, color.r)?;
        self.set_register(REG_GREEN, color.g)?;
        self.set_register(REG_BLUE, color.b)
    }
}

impl<I2C: I2c, D: DelayNs> CharacterDisplay for RgbLcd1602<I2C, D> {
    fn init(&mut self) -> Result<(), DisplayError> {
        // Power-on: Controller braucht >40 ms
        self.delay.delay_ms(50);
        for _ in 0..3 {
            self.command(CMD_FUNCTION_SET | TWO_LINES)?;
            self.delay.delay_ms(5);
        }
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE_SET | ENTRY_LEFT)?;

        // Backlight: Normal-Modus, alle LED-Treiber auf PWM, invertiert
        self.set_register(REG_MODE1, 0x00)?;
        self.set_register(REG_OUTPUT, 0xFF)?;
        self.set_register(REG_MODE2, 0x20)?;
        self.write_color(self.color)
    }

    fn set_rgb(&mut self, color: RGB8) -> Result<(), DisplayError> {
        self.color = color;
        self.write_color(color)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        if on {
            self.write_color(self.color)
        } else {
            self.write_color(RGB8::default())
        }
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR_DISPLAY)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        let offset = if row == 0 { 0 } else { ROW_1_OFFSET };
        self.command(CMD_SET_DDRAM_ADDR | offset | (col & 0x3F))
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for c in text.chars() {
            self.data(glyph(c))?;
        }
        Ok(())
    }

    fn scroll_left(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CURSOR_SHIFT | DISPLAY_MOVE | MOVE_LEFT)
    }
}
