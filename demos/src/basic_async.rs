//! Embassy Async TC74 Example
//!
//! This example reads a TC74 with Embassy's async runtime on a Raspberry Pi Pico 2.
//! It shows how to:
//! - Wrap an async I2C peripheral in the TC74 bus adapter
//! - Wake the sensor and wait for the first conversion
//! - Continuously read the temperature
//!
//! Hardware Setup:
//! - Connect a TC74A5 to Raspberry Pi Pico 2:
//!   - SDA -> GP14 (with 4.7k pull-up)
//!   - SCL -> GP15 (with 4.7k pull-up)
//!   - VDD -> 3.3V
//!   - GND -> GND

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::{block::ImageDef, config::Config, i2c::InterruptHandler};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tc74::{address::DeviceAddress, bus_async::I2cBus, sensor_async::Tc74};

embassy_rp::bind_interrupts!(struct Irqs {
    I2C1_IRQ => InterruptHandler<embassy_rp::peripherals::I2C1>;
});

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Firmware entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // The TC74 supports standard mode (100 kHz), which is the embassy default
    let sda = p.PIN_14;
    let scl = p.PIN_15;
    let config = embassy_rp::i2c::Config::default();
    let i2c = embassy_rp::i2c::I2c::new_async(p.I2C1, scl, sda, Irqs, config);

    // The bus adapter owns the peripheral, the client only borrows the adapter
    let mut bus = I2cBus::new(i2c, DeviceAddress::A5);
    let mut sensor = Tc74::new(&mut bus);

    // The sensor may have been left in standby by a previous run
    if sensor.wake().await.is_none() {
        warn!("TC74 did not acknowledge, check wiring and part number");
    }

    // DATA_RDY goes high once the first conversion after waking has finished
    while sensor.is_data_ready().await != Some(true) {
        Timer::after_millis(50).await;
    }
    info!("TC74 Initialized");

    // Main loop: the TC74 converts 8 times per second, one reading per second is plenty
    loop {
        match sensor.read_temperature().await {
            Some(temp) => info!("Temperature: {} C", temp.celsius()),
            None => warn!("Temperature read failed"),
        }
        Timer::after_millis(1000).await;
    }
}
