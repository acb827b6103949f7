//! Four player life counter for a Pico board with an SSD1306 display.
//!
//! Five push buttons (Up, Down, Left, Right, Select) move a cursor between the
//! four player panels while Select is held and adjust the selected player's
//! life and commander damage, one step per press.
#![no_std]
#![no_main]

mod config;
mod global_types;
mod input;
mod match_controller;
mod ui;
mod units;

use counter_core::{Button, MatchConfig};
use defmt_or_log as log;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_executor::Executor;
use embassy_rp::gpio::Pull;
use embassy_rp::{
    bind_interrupts,
    i2c::{self, I2c, InterruptHandler as I2cInterruptHandler},
    peripherals::I2C0,
};
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;

use crate::units::FrequencyExt;
use global_types::*;
use input::*;
use match_controller::*;
use ui::*;

// Configure panic behavior based on features
#[cfg(not(any(feature = "defmt", feature = "log")))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};
#[cfg(all(feature = "log", not(feature = "defmt")))]
use panic_rtt_target as _;

// Interrupt handlers
bind_interrupts!(struct I2c0Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

// Static resources
static EXECUTOR0: StaticCell<Executor> = StaticCell::new();
static I2C0_BUS: StaticCell<I2c0Bus> = StaticCell::new();

struct ResourcesCore0 {
    buttons: BoardButtons,
    ui: Ui<'static>,
    config: MatchConfig,
}

fn log_system_frequencies() {
    let sys_freq = embassy_rp::clocks::clk_sys_freq();
    let peri_freq = embassy_rp::clocks::clk_peri_freq();
    let xosc_freq = embassy_rp::clocks::xosc_freq();

    log::info!("=== System Clock Frequencies ===");
    log::info!("System Clock:     {} MHz", sys_freq / 1_000_000);
    log::info!("Peripheral Clock: {} MHz", peri_freq / 1_000_000);
    log::info!("XOSC Clock:       {} MHz", xosc_freq / 1_000_000);
    log::info!("================================");
}

#[cortex_m_rt::entry]
fn main() -> ! {
    // defmt-rtt sets itself up, the `log` facade needs an RTT logger registered
    #[cfg(all(feature = "log", not(feature = "defmt")))]
    rtt_target::rtt_init_log!();

    let p: embassy_rp::Peripherals = embassy_rp::init(Default::default());
    log_system_frequencies();

    // Bind button pins. Buttons short to ground, so pull-ups keep released pins high.
    let mut buttons_builder = GpioButtonsBuilder::new();
    buttons_builder.bind_pin(Button::Up, p.PIN_2, Pull::Up);
    buttons_builder.bind_pin(Button::Down, p.PIN_3, Pull::Up);
    buttons_builder.bind_pin(Button::Left, p.PIN_6, Pull::Up);
    buttons_builder.bind_pin(Button::Right, p.PIN_7, Pull::Up);
    buttons_builder.bind_pin(Button::Select, p.PIN_8, Pull::Up);
    let buttons = buttons_builder.build().unwrap_or_else(|button| {
        core::panic!("No pin bound for the {} button", button.name());
    });

    // Setup I2C0 for the display
    let mut i2c0_cfg = i2c::Config::default();
    i2c0_cfg.frequency = 400.khz();
    let i2c0 = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, I2c0Irqs, i2c0_cfg);
    let i2c0_bus: &'static I2c0Bus = I2C0_BUS.init(Mutex::new(i2c0));

    let ui = UiInterface::new(I2cDevice::new(i2c0_bus), ssd1306::size::DisplaySize128x64);
    let config = config::match_config();

    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(move |spawner| {
        log::debug!("Starting executor on core 0");
        spawner
            .spawn(match_task(ResourcesCore0 {
                buttons,
                ui,
                config,
            }))
            .unwrap();
    });
}

#[embassy_executor::task]
async fn match_task(resources: ResourcesCore0) -> ! {
    log::debug!("Starting match task...");
    let ResourcesCore0 {
        buttons,
        mut ui,
        config,
    } = resources;
    match_controller(buttons, config, &mut ui).await
}
