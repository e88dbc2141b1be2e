//! TC74 I2C Address Selection
//!
//! The TC74 is not strap-configurable at the board level. Instead, each part
//! number ships with one of eight factory-programmed 7-bit addresses:
//! - TC74A0 through TC74A7
//! - 0b1001_000 (0x48) through 0b1001_111 (0x4F)
//!
//! Up to eight TC74 devices can therefore share one bus, provided each one
//! is a different part variant.

/// Represents a TC74 I2C address.
///
/// Note: These are 7-bit addresses, which is what `embedded-hal` expects.
/// HALs that take an 8-bit address with the R/W bit need the value
/// left-shifted by 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum DeviceAddress {
    A0 = 0b1001_000,
    A1 = 0b1001_001,
    A2 = 0b1001_010,
    A3 = 0b1001_011,
    A4 = 0b1001_100,
    A5 = 0b1001_101,
    A6 = 0b1001_110,
    A7 = 0b1001_111,
}

impl Default for DeviceAddress {
    /// Returns the address of the TC74A5 (0x4D), the default stocked variant.
    fn default() -> Self {
        Self::A5
    }
}

impl From<DeviceAddress> for u8 {
    fn from(addr: DeviceAddress) -> Self {
        addr as u8
    }
}

impl TryFrom<u8> for DeviceAddress {
    type Error = u8;

    /// Accepts a raw 7-bit address in the range 0x48..=0x4F.
    /// Any other value is handed back unchanged as the error.
    fn try_from(addr: u8) -> Result<Self, Self::Error> {
        match addr {
            0x48 => Ok(Self::A0),
            0x49 => Ok(Self::A1),
            0x4A => Ok(Self::A2),
            0x4B => Ok(Self::A3),
            0x4C => Ok(Self::A4),
            0x4D => Ok(Self::A5),
            0x4E => Ok(Self::A6),
            0x4F => Ok(Self::A7),
            other => Err(other),
        }
    }
}
