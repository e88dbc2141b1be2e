//! Asynchronous bus transaction interface.
//!
//! Mirrors [`crate::bus`] for executors such as Embassy: the same two
//! transactions, the same `None`-on-failure contract, awaited instead of blocked on.

use crate::{
    address::DeviceAddress,
    error::Error,
    registers::{MemoryAddress, Register},
};
use embedded_hal_async::i2c::I2c;

/// One async register transaction against a single, fixed TC74.
#[allow(async_fn_in_trait)]
pub trait Tc74Bus {
    /// Read one register. Returns `None` if the transaction did not complete.
    async fn read(&mut self, memory_address: MemoryAddress) -> Option<Register>;

    /// Write one register. Returns the written byte on success, `None` otherwise.
    async fn write(&mut self, memory_address: MemoryAddress, data: Register) -> Option<Register>;
}

/// [`Tc74Bus`] over an async `embedded-hal-async` I2C peripheral.
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

    pub async fn try_read(&mut self, memory_address: MemoryAddress) -> Result<Register, Error<I>> {
        let mut buf = [0; 1];
        self.i2c
            .write_read(self.address.into(), &[memory_address.into()], &mut buf)
            .await
            .map_err(Error::WriteReadError)?;
        Ok(buf[0])
    }

    pub async fn try_write(
        &mut self,
        memory_address: MemoryAddress,
        data: Register,
    ) -> Result<Register, Error<I>> {
        self.i2c
            .write(self.address.into(), &[memory_address.into(), data])
            .await
            .map_err(Error::WriteError)?;
        Ok(data)
    }
}

impl<I> Tc74Bus for I2cBus<I>
where
    I: I2c,
{
    async fn read(&mut self, memory_address: MemoryAddress) -> Option<Register> {
        match self.try_read(memory_address).await {
            Ok(value) => Some(value),
            Err(_e) => {
                #[cfg(feature = "defmt-03")]
                defmt::warn!("TC74 read of {} failed: {}", memory_address, _e);
                None
            }
        }
    }

    async fn write(&mut self, memory_address: MemoryAddress, data: Register) -> Option<Register> {
        match self.try_write(memory_address, data).await {
            Ok(value) => Some(value),
            Err(_e) => {
                #[cfg(feature = "defmt-03")]
                defmt::warn!("TC74 write of {} to {} failed: {}", data, memory_address, _e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cBus, Tc74Bus};
    use crate::{address::DeviceAddress, error::Error, registers::MemoryAddress};
    use embassy_futures::block_on;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    #[test]
    fn test_read_then_write() {
        let expectations = [
            Transaction::write_read(0x4A, vec![0x01], vec![0x40]),
            Transaction::write(0x4A, vec![0x01, 0x80]),
        ];
        let mut bus = I2cBus::new(Mock::new(&expectations), DeviceAddress::A2);

        block_on(async {
            assert_eq!(bus.read(MemoryAddress::Config).await, Some(0x40));
            assert_eq!(bus.write(MemoryAddress::Config, 0x80).await, Some(0x80));
        });
        bus.release().done();
    }

    #[test]
    fn test_bus_errors_become_none() {
        let expectations = [
            Transaction::write_read(0x4D, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
            Transaction::write(0x4D, vec![0x01, 0x00]).with_error(ErrorKind::Other),
        ];
        let mut bus = I2cBus::new(Mock::new(&expectations), DeviceAddress::A5);

        block_on(async {
            assert_eq!(bus.read(MemoryAddress::Temperature).await, None);
            assert_eq!(bus.write(MemoryAddress::Config, 0x00).await, None);
        });
        bus.release().done();
    }

    #[test]
    fn test_try_write_keeps_the_error_kind() {
        let expectations =
            [Transaction::write(0x4D, vec![0x01, 0x80]).with_error(ErrorKind::Bus)];
        let mut bus = I2cBus::new(Mock::new(&expectations), DeviceAddress::A5);

        let result = block_on(bus.try_write(MemoryAddress::Config, 0x80));
        match result {
            Err(e @ Error::WriteError(_)) => assert_eq!(e.kind(), ErrorKind::Bus),
            other => panic!("unexpected result {:?}", other),
        }
        bus.release().done();
    }
}
