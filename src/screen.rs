//! Pixel-window protocol for the SPI panel.
//!
//! Drawing always follows the same shape: a column window command, a row
//! window command, a memory write command, then the pixels as big-endian
//! RGB565 words. The bus underneath only knows how to move single bytes.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::config::{BOARD_EXTENT, BOARD_ORIGIN, TILE_SIZE};
use crate::graphics::{Bitmap, Color};

pub const SWRESET: u8 = 0x01;
pub const SLPOUT: u8 = 0x11;
pub const DISPON: u8 = 0x29;
pub const CASET: u8 = 0x2A;
pub const RASET: u8 = 0x2B;
pub const RAMWR: u8 = 0x2C;
pub const MADCTL: u8 = 0x36;
pub const COLMOD: u8 = 0x3A;

/// Whether a byte is an opcode or a parameter/pixel byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteKind {
    Command,
    Data,
}

/// Blocking one-byte transmit to the panel
///
/// Transfers cannot fail from the caller's point of view; an
/// implementation drops whatever error its transport reports.
pub trait DisplayBus {
    fn send(&mut self, byte: u8, kind: ByteKind);
}

/// [`DisplayBus`] over an embedded-hal SPI bus with a data/command line
/// and a chip select that is pulsed around every byte
pub struct SpiDisplay<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> SpiDisplay<SPI, DC, CS>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, mut cs: CS) -> Self {
        cs.set_high().ok();
        Self { spi, dc, cs }
    }
}

impl<SPI, DC, CS> DisplayBus for SpiDisplay<SPI, DC, CS>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    fn send(&mut self, byte: u8, kind: ByteKind) {
        match kind {
            ByteKind::Command => self.dc.set_low().ok(),
            ByteKind::Data => self.dc.set_high().ok(),
        };
        self.cs.set_low().ok();
        self.spi.write(&[byte]).ok();
        self.spi.flush().ok();
        self.cs.set_high().ok();
    }
}

/// Block and rectangle writer on top of a [`DisplayBus`]
pub struct Screen<B> {
    bus: B,
}

impl<B: DisplayBus> Screen<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Send one opcode followed by its parameter bytes
    pub fn command(&mut self, opcode: u8, params: &[u8]) {
        self.bus.send(opcode, ByteKind::Command);
        for &byte in params {
            self.bus.send(byte, ByteKind::Data);
        }
    }

    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        self.command(CASET, &[x0h, x0l, x1h, x1l]);
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(RASET, &[y0h, y0l, y1h, y1l]);
        self.bus.send(RAMWR, ByteKind::Command);
    }

    fn push(&mut self, color: Color) {
        let [hi, lo] = color.to_be_bytes();
        self.bus.send(hi, ByteKind::Data);
        self.bus.send(lo, ByteKind::Data);
    }

    /// Stream one tile with its top-left corner at `(x0, y0)`, row by row
    pub fn draw_block(&mut self, x0: u16, y0: u16, pixels: &Bitmap) {
        let last = TILE_SIZE - 1;
        self.set_window(x0, y0, x0 + last, y0 + last);
        for row in pixels {
            for &color in row {
                self.push(color);
            }
        }
    }

    /// Paint the inclusive rectangle `(x0, y0)..=(x1, y1)` with one colour
    pub fn fill_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Color) {
        debug_assert!(x0 <= x1 && y0 <= y1);
        self.set_window(x0, y0, x1, y1);
        let count = (x1 - x0 + 1) as u32 * (y1 - y0 + 1) as u32;
        for _ in 0..count {
            self.push(color);
        }
    }

    /// Paint the whole board area with one colour
    pub fn fill_board(&mut self, color: Color) {
        self.fill_rect(BOARD_ORIGIN, BOARD_ORIGIN, BOARD_EXTENT, BOARD_EXTENT, color);
    }
}

/// Screen position of the tile for cell `(x, y)`
pub const fn tile_origin(x: u8, y: u8) -> (u16, u16) {
    (
        TILE_SIZE * x as u16 + BOARD_ORIGIN,
        TILE_SIZE * y as u16 + BOARD_ORIGIN,
    )
}
