#![no_std]
#![no_main]

mod board;

use board::{Board, Joystick};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::{bind_interrupts, peripherals, saadc, spim};
use embassy_time::{Duration, Ticker};
use minegrid::config::task_periods;
use minegrid::scheduler::gcd_period;
use minegrid::tasks::{Console, DisplayTask, InputTask, OutcomeTask};
use minegrid::{Scheduler, SpiDisplay, Task};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_init_print!();
    let p = embassy_nrf::init(Default::default());

    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_10BIT;
    let mut adc = saadc::Saadc::new(
        p.SAADC,
        Irqs,
        adc_config,
        [
            saadc::ChannelConfig::single_ended(p.P0_02),
            saadc::ChannelConfig::single_ended(p.P0_03),
        ],
    );
    adc.calibrate().await;

    let stick_button = Input::new(p.P0_04, Pull::Up);
    let reset_button = Input::new(p.P0_14, Pull::Up);

    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M8;
    let spi = spim::Spim::new_txonly(p.SPI3, Irqs, p.P0_17, p.P0_13, spi_config);
    let dc = Output::new(p.P0_12, Level::High, OutputDrive::Standard);
    let cs = Output::new(p.P1_02, Level::High, OutputDrive::Standard);
    let mut panel_reset = Output::new(p.P0_01, Level::High, OutputDrive::Standard);
    let mut backlight = Output::new(p.P0_10, Level::Low, OutputDrive::Standard);

    let mut console: Board<'_> = Console::new(
        SpiDisplay::new(spi, dc, cs),
        Joystick::new(stick_button, reset_button),
    );
    board::wake_panel(&mut console.screen, &mut panel_reset, &mut backlight).await;

    let [display_period, input_period, outcome_period] = task_periods();
    let mut display = Task::new(DisplayTask);
    let mut input = Task::new(InputTask::new());
    let mut outcome = Task::new(OutcomeTask);
    let mut scheduler: Scheduler<'_, Board<'_>, 3> = Scheduler::new(gcd_period(&task_periods()).unwrap());
    scheduler.add(display_period, &mut display).unwrap();
    scheduler.add(input_period, &mut input).unwrap();
    scheduler.add(outcome_period, &mut outcome).unwrap();
    let base_ms = scheduler.base_period().to_millis();
    rprintln!("Ticking every {} ms", base_ms);

    let mut samples = [0i16; 2];
    let mut ticker = Ticker::every(Duration::from_millis(base_ms as u64));
    loop {
        adc.sample(&mut samples).await;
        console.controls.latch(samples);
        scheduler.tick_all(&mut console);
        ticker.next().await;
    }
}
