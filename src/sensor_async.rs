//! TC74 Asynchronous Driver Implementation
//!
//! Non-blocking counterpart of [`crate::sensor`], for use with async
//! executors such as Embassy. Behavior is identical: one transaction per call,
//! `None` when the transaction fails, no retries.

use crate::{
    bus_async::Tc74Bus,
    config::{Config, DataReady, StandbySwitch},
    registers::{MemoryAddress, Register},
    temperature::Temperature,
};

/// Microchip TC74 Driver
pub struct Tc74<'a, B>
where
    B: Tc74Bus,
{
    bus: &'a mut B,
}

impl<'a, B> Tc74<'a, B>
where
    B: Tc74Bus,
{
    /// Construct a new client on top of a borrowed bus.
    pub fn new(bus: &'a mut B) -> Self {
        Self { bus }
    }

    /// Read the current temperature in whole degrees Celsius.
    pub async fn read_temperature(&mut self) -> Option<Temperature> {
        let raw = self.bus.read(MemoryAddress::Temperature).await?;
        Some(Temperature::from_register(raw))
    }

    /// Read and decode the configuration register.
    pub async fn read_config(&mut self) -> Option<Config> {
        let raw = self.bus.read(MemoryAddress::Config).await?;
        Some(Config::from_register(raw))
    }

    /// Write the configuration register with DATA_RDY cleared.
    /// Returns the byte that was written.
    pub async fn write_config(&mut self, config: Config) -> Option<Register> {
        let encoded = config.writable_register();
        self.bus.write(MemoryAddress::Config, encoded).await?;
        Some(encoded)
    }

    /// Stop temperature conversion. The last reading stays readable.
    pub async fn standby(&mut self) -> Option<Register> {
        self.write_config(Config::new(StandbySwitch::Standby)).await
    }

    /// Resume temperature conversion.
    pub async fn wake(&mut self) -> Option<Register> {
        self.write_config(Config::new(StandbySwitch::Normal)).await
    }

    /// Whether a conversion has completed since power-up or leaving standby.
    pub async fn is_data_ready(&mut self) -> Option<bool> {
        let config = self.read_config().await?;
        Some(config.data_ready() == DataReady::Ready)
    }
}
