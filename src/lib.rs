//! Platform agnostic driver for the Microchip TC74 serial digital thermal sensor.
//!
//! The TC74 has two one-byte registers: a signed temperature in whole degrees
//! Celsius, and a configuration register holding a standby switch and a
//! data-ready flag. This crate maps those bytes to typed values on top of a
//! small bus abstraction, [`bus::Tc74Bus`], with ready-made adapters for
//! `embedded-hal` and `embedded-hal-async` I2C peripherals.
//!
//! Every operation returns `None` when its bus transaction fails.
#![cfg_attr(not(test), no_std)]

pub mod address;
pub mod bus;
pub mod bus_async;
pub mod config;
pub mod error;
pub mod registers;
pub mod sensor;
pub mod sensor_async;
pub mod temperature;

#[cfg(test)]
mod test_support;
