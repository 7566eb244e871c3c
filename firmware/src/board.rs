//! Pin-level glue between the nRF52833 peripherals and the game core.

use embassy_nrf::gpio::{Input, Output};
use embassy_nrf::peripherals::SPI3;
use embassy_nrf::spim::Spim;
use embassy_time::Timer;
use minegrid::config::{ADC_CENTER, ADC_MAX, BOARD_EXTENT};
use minegrid::graphics::BLACK;
use minegrid::screen::{COLMOD, DISPON, MADCTL, SLPOUT, SWRESET};
use minegrid::tasks::Console;
use minegrid::{Axis, Controls, Screen, SpiDisplay};
use rtt_target::rprintln;

pub type Panel<'d> = SpiDisplay<Spim<'d, SPI3>, Output<'d>, Output<'d>>;
pub type Board<'d> = Console<Panel<'d>, Joystick<'d>>;

/// Two-axis stick with its push switch, plus the board's reset button
///
/// The SAADC is sampled asynchronously by the main loop before every tick;
/// the tasks only ever see the latched pair.
pub struct Joystick<'d> {
    latched: [u16; 2],
    button: Input<'d>,
    reset: Input<'d>,
}

impl<'d> Joystick<'d> {
    pub fn new(button: Input<'d>, reset: Input<'d>) -> Self {
        Self {
            latched: [ADC_CENTER; 2],
            button,
            reset,
        }
    }

    /// Store one SAADC conversion (x, y); negative readings near ground clamp to 0
    pub fn latch(&mut self, raw: [i16; 2]) {
        self.latched = raw.map(|v| (v.max(0) as u16).min(ADC_MAX));
    }
}

impl Controls for Joystick<'_> {
    fn sample(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.latched[0],
            Axis::Y => self.latched[1],
        }
    }

    // both switches pull the line low when pressed
    fn button_pressed(&mut self) -> bool {
        self.button.is_low()
    }

    fn reset_pressed(&mut self) -> bool {
        self.reset.is_low()
    }
}

/// Bring the panel out of reset into 16-bit colour and clear the play area
pub async fn wake_panel(
    screen: &mut Screen<Panel<'_>>,
    reset: &mut Output<'_>,
    backlight: &mut Output<'_>,
) {
    reset.set_low();
    Timer::after_millis(200).await;
    reset.set_high();
    Timer::after_millis(200).await;

    screen.command(SWRESET, &[]);
    Timer::after_millis(150).await;
    screen.command(SLPOUT, &[]);
    Timer::after_millis(200).await;
    screen.command(COLMOD, &[0x05]);
    Timer::after_millis(10).await;
    screen.command(DISPON, &[]);
    Timer::after_millis(200).await;
    // row/column order to match the board's mounting
    screen.command(MADCTL, &[0xC8]);

    backlight.set_high();
    screen.fill_rect(0, 0, BOARD_EXTENT, BOARD_EXTENT, BLACK);
    rprintln!("Panel ready");
}
