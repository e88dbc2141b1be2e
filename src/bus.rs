//! Blocking bus transaction interface.
//!
//! [`Tc74Bus`] is the seam between the sensor client and the hardware. It knows
//! nothing about bus errors: every transaction either completes and yields a
//! byte, or yields `None`.
//!
//! [`I2cBus`] implements it for any `embedded-hal` 1.0 I2C peripheral. Boards
//! without an `embedded-hal` implementation can implement [`Tc74Bus`] directly.

use crate::{
    address::DeviceAddress,
    error::Error,
    registers::{MemoryAddress, Register},
};
use embedded_hal::i2c::I2c;

/// One register transaction against a single, fixed TC74.
pub trait Tc74Bus {
    /// Read one register. Returns `None` if the transaction did not complete.
    fn read(&mut self, memory_address: MemoryAddress) -> Option<Register>;

    /// Write one register. Returns the written byte on success, `None` otherwise.
    fn write(&mut self, memory_address: MemoryAddress, data: Register) -> Option<Register>;
}

/// [`Tc74Bus`] over a blocking `embedded-hal` I2C peripheral.
pub struct I2cBus<I>
where
    I: I2c,
{
    i2c: I,
    address: DeviceAddress,
}

impl<I> I2cBus<I>
where
    I: I2c,
{
    pub fn new(i2c: I, address: DeviceAddress) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Returns the underlying I2C peripheral, consuming this adapter.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Read one register, keeping the bus error.
    pub fn try_read(&mut self, memory_address: MemoryAddress) -> Result<Register, Error<I>> {
        let mut buf = [0; 1];
        self.i2c
            .write_read(self.address.into(), &[memory_address.into()], &mut buf)
            .map_err(Error::WriteReadError)?;
        Ok(buf[0])
    }

    /// Write one register, keeping the bus error.
    pub fn try_write(
        &mut self,
        memory_address: MemoryAddress,
        data: Register,
    ) -> Result<Register, Error<I>> {
        self.i2c
            .write(self.address.into(), &[memory_address.into(), data])
            .map_err(Error::WriteError)?;
        Ok(data)
    }
}

impl<I> Tc74Bus for I2cBus<I>
where
    I: I2c,
{
    fn read(&mut self, memory_address: MemoryAddress) -> Option<Register> {
        match self.try_read(memory_address) {
            Ok(value) => Some(value),
            Err(_e) => {
                #[cfg(feature = "defmt-03")]
                defmt::warn!("TC74 read of {} failed: {}", memory_address, _e);
                None
            }
        }
    }

    fn write(&mut self, memory_address: MemoryAddress, data: Register) -> Option<Register> {
        match self.try_write(memory_address, data) {
            Ok(value) => Some(value),
            Err(_e) => {
                #[cfg(feature = "defmt-03")]
                defmt::warn!("TC74 write of {} to {} failed: {}", data, memory_address, _e);
                None
            }
        }
    }
}
