//! TC74 Register Map
//!
//! The TC74 exposes only two registers, each one byte wide:
//! - TEMP (0x00): read-only temperature in two's-complement whole degrees Celsius
//! - CONFIG (0x01): read/write control, standby switch and data-ready flag
//!
//! Every transfer on the wire is a single byte, so the same 8-bit type is used
//! for both register addresses and register contents.

/// One byte on the wire, either an internal address or register data.
pub type Register = u8;

/// Internal register selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum MemoryAddress {
    /// Temperature register (0x00)
    /// Signed 8-bit value, 1 °C resolution
    Temperature = 0x00,

    /// Configuration register (0x01)
    /// Bit 7 selects standby, bit 6 reports data ready
    Config = 0x01,
}

impl From<MemoryAddress> for Register {
    fn from(addr: MemoryAddress) -> Self {
        addr as Register
    }
}
