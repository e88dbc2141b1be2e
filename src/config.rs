//! TC74 Configuration Register (RWCR, 0x01)
//!
//! | Bit | Field   | Access | Meaning                                   |
//! |-----|---------|--------|-------------------------------------------|
//! | 7   | SHDN    | R/W    | 1 = standby, 0 = normal conversion        |
//! | 6   | DATA_RDY| R      | 1 = a conversion completed since power-up |
//! | 5:0 | -       | -      | reserved, always read as zero             |
//!
//! Both field enums carry their discriminant already shifted into position,
//! so encoding a [`Config`] is a plain OR of the two.

use crate::registers::Register;

const STANDBY_MASK: Register = 0b1000_0000;
const DATA_READY_MASK: Register = 0b0100_0000;

/// Standby switch (SHDN, bit 7).
///
/// In standby the device stops converting and draws ~5 µA, but the serial
/// interface stays active and the last temperature remains readable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum StandbySwitch {
    Standby = 0b1000_0000,
    Normal = 0b0000_0000,
}

/// Data ready flag (DATA_RDY, bit 6). Read-only on the device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum DataReady {
    Ready = 0b0100_0000,
    NotReady = 0b0000_0000,
}

/// Decoded contents of the configuration register.
///
/// # Example
/// ```
/// # use tc74::config::{Config, DataReady, StandbySwitch};
/// let config = Config::new(StandbySwitch::Standby);
/// assert_eq!(config.data_ready(), DataReady::NotReady);
/// assert_eq!(u8::from(config), 0x80);
///
/// let read_back = Config::from_register(0xC0);
/// assert_eq!(read_back.standby_switch(), StandbySwitch::Standby);
/// assert_eq!(read_back.data_ready(), DataReady::Ready);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Config {
    standby_switch: StandbySwitch,
    data_ready: DataReady,
}

impl Config {
    /// Build a configuration to be written to the device.
    /// DATA_RDY has no effect on writes and is left at [`DataReady::NotReady`].
    pub fn new(standby_switch: StandbySwitch) -> Self {
        Self {
            standby_switch,
            data_ready: DataReady::NotReady,
        }
    }

    /// Decode a raw register value read from the device. Reserved bits are dropped.
    pub fn from_register(raw: Register) -> Self {
        let standby_switch = if raw & STANDBY_MASK != 0 {
            StandbySwitch::Standby
        } else {
            StandbySwitch::Normal
        };
        let data_ready = if raw & DATA_READY_MASK != 0 {
            DataReady::Ready
        } else {
            DataReady::NotReady
        };
        Self {
            standby_switch,
            data_ready,
        }
    }

    pub fn standby_switch(&self) -> StandbySwitch {
        self.standby_switch
    }

    pub fn data_ready(&self) -> DataReady {
        self.data_ready
    }

    /// Encode both fields into the raw register value.
    pub fn register(&self) -> Register {
        self.standby_switch as Register | self.data_ready as Register
    }

    /// Encode for a write transaction: the read-only DATA_RDY bit is always cleared.
    pub fn writable_register(&self) -> Register {
        Self::new(self.standby_switch).register()
    }
}

impl From<Register> for Config {
    fn from(raw: Register) -> Self {
        Self::from_register(raw)
    }
}

impl From<Config> for Register {
    fn from(config: Config) -> Self {
        config.register()
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DataReady, StandbySwitch};

    fn config(standby_switch: StandbySwitch, data_ready: DataReady) -> Config {
        Config {
            standby_switch,
            data_ready,
        }
    }

    #[test]
    fn test_register_encoding_of_every_field_combination() {
        let cases = [
            (StandbySwitch::Standby, DataReady::Ready, 0xC0),
            (StandbySwitch::Standby, DataReady::NotReady, 0x80),
            (StandbySwitch::Normal, DataReady::Ready, 0x40),
            (StandbySwitch::Normal, DataReady::NotReady, 0x00),
        ];
        for (standby_switch, data_ready, expected) in cases {
            assert_eq!(config(standby_switch, data_ready).register(), expected);
            assert_eq!(u8::from(config(standby_switch, data_ready)), expected);
        }
    }

    #[test]
    fn test_decode_then_encode_keeps_only_bits_7_and_6() {
        for raw in 0..=u8::MAX {
            assert_eq!(Config::from_register(raw).register(), raw & 0xC0);
        }
    }

    #[test]
    fn test_decode_known_registers() {
        assert_eq!(
            Config::from(0x00),
            config(StandbySwitch::Normal, DataReady::NotReady)
        );
        assert_eq!(
            Config::from(0x40),
            config(StandbySwitch::Normal, DataReady::Ready)
        );
        assert_eq!(
            Config::from(0x80),
            config(StandbySwitch::Standby, DataReady::NotReady)
        );
        assert_eq!(
            Config::from(0xC0),
            config(StandbySwitch::Standby, DataReady::Ready)
        );
        // reserved bits are ignored
        assert_eq!(
            Config::from(0x3F),
            config(StandbySwitch::Normal, DataReady::NotReady)
        );
    }

    #[test]
    fn test_new_defaults_data_ready_to_not_ready() {
        assert_eq!(
            Config::new(StandbySwitch::Standby).data_ready(),
            DataReady::NotReady
        );
        assert_eq!(
            Config::new(StandbySwitch::Normal).data_ready(),
            DataReady::NotReady
        );
    }

    #[test]
    fn test_writable_register_clears_data_ready() {
        assert_eq!(Config::from_register(0xC0).writable_register(), 0x80);
        assert_eq!(Config::from_register(0x40).writable_register(), 0x00);
        assert_eq!(Config::new(StandbySwitch::Standby).writable_register(), 0x80);
    }

    #[test]
    fn test_field_masks_do_not_overlap() {
        assert_eq!(StandbySwitch::Standby as u8 & DataReady::Ready as u8, 0);
    }
}
