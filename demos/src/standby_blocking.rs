//! Blocking TC74 Standby Example
//!
//! Takes one reading every ten seconds and keeps the TC74 in standby
//! (~5 µA) in between. Uses the blocking I2C driver, so the sensor calls
//! need no executor; Embassy is only used for the timer.
//!
//! Hardware Setup is the same as `basic_async`.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::{block::ImageDef, config::Config};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tc74::{
    address::DeviceAddress,
    bus::I2cBus,
    config::{DataReady, StandbySwitch},
    sensor::Tc74,
};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    let config = embassy_rp::i2c::Config::default();
    let i2c = embassy_rp::i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, config);
    let mut bus = I2cBus::new(i2c, DeviceAddress::A5);
    let mut sensor = Tc74::new(&mut bus);

    loop {
        if sensor.wake().is_none() {
            warn!("Wake failed, skipping this reading");
            Timer::after_secs(10).await;
            continue;
        }

        // One conversion takes up to 250 ms
        Timer::after_millis(250).await;
        match sensor.read_config() {
            Some(config) if config.data_ready() == DataReady::Ready => {
                if let Some(temp) = sensor.read_temperature() {
                    info!("Temperature: {} C", temp.celsius());
                }
            }
            Some(_) => warn!("Conversion not finished yet"),
            None => warn!("Config read failed"),
        }

        if sensor.standby().is_some() {
            if let Some(config) = sensor.read_config() {
                if config.standby_switch() == StandbySwitch::Standby {
                    info!("TC74 in standby");
                }
            }
        }
        Timer::after_secs(10).await;
    }
}
