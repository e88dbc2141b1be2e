use crate::{
    bus::Tc74Bus,
    config::{Config, DataReady, StandbySwitch},
    registers::{MemoryAddress, Register},
    temperature::Temperature,
};

/// Microchip TC74 Driver
///
/// Borrows a [`Tc74Bus`] for its whole lifetime; the bus must outlive the
/// client, which the borrow checker enforces. Every method performs exactly
/// one bus transaction and returns `None` if that transaction failed.
///
/// The client adds no locking. Sharing one bus between threads needs external
/// synchronization around the bus itself.
///
/// # Example
/// ```
/// # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
/// use tc74::{address::DeviceAddress, bus::I2cBus, sensor::Tc74};
///
/// # let i2c = Mock::new(&[Transaction::write_read(0x4D, vec![0x00], vec![0x19])]);
/// let mut bus = I2cBus::new(i2c, DeviceAddress::A5);
/// let mut sensor = Tc74::new(&mut bus);
///
/// let temp = sensor.read_temperature();
/// assert_eq!(temp.map(|t| t.celsius()), Some(25));
/// # bus.release().done();
/// ```
pub struct Tc74<'a, B>
where
    B: Tc74Bus + ?Sized,
{
    bus: &'a mut B,
}

impl<'a, B> Tc74<'a, B>
where
    B: Tc74Bus + ?Sized,
{
    /// Construct a new client on top of a borrowed bus.
    pub fn new(bus: &'a mut B) -> Self {
        Self { bus }
    }

    /// Read the current temperature in whole degrees Celsius.
    pub fn read_temperature(&mut self) -> Option<Temperature> {
        let raw = self.bus.read(MemoryAddress::Temperature)?;
        Some(Temperature::from_register(raw))
    }

    /// Read and decode the configuration register.
    pub fn read_config(&mut self) -> Option<Config> {
        let raw = self.bus.read(MemoryAddress::Config)?;
        Some(Config::from_register(raw))
    }

    /// Write the configuration register. DATA_RDY is read-only and always
    /// written as zero. Returns the byte that was written.
    pub fn write_config(&mut self, config: Config) -> Option<Register> {
        let encoded = config.writable_register();
        self.bus.write(MemoryAddress::Config, encoded)?;
        Some(encoded)
    }

    /// Stop temperature conversion. The last reading stays readable.
    pub fn standby(&mut self) -> Option<Register> {
        self.write_config(Config::new(StandbySwitch::Standby))
    }

    /// Resume temperature conversion.
    pub fn wake(&mut self) -> Option<Register> {
        self.write_config(Config::new(StandbySwitch::Normal))
    }

    /// Whether a conversion has completed since power-up or leaving standby.
    pub fn is_data_ready(&mut self) -> Option<bool> {
        let config = self.read_config()?;
        Some(config.data_ready() == DataReady::Ready)
    }
}
