use crate::registers::Register;

/// Temperature reading from the TC74's TEMP register.
///
/// The device reports whole degrees Celsius as a two's-complement byte, covering
/// -65 °C to +127 °C. No scaling is applied; the raw byte is simply reinterpreted
/// as signed.
///
/// # Example
/// ```
/// # use tc74::temperature::Temperature;
/// let temp = Temperature::from_register(0xE7);
/// assert_eq!(temp.celsius(), -25);
/// assert_eq!(temp.raw(), 0xE7);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Temperature {
    pub(crate) celsius: i8,
}

impl Temperature {
    pub fn new(celsius: i8) -> Self {
        Self { celsius }
    }

    pub fn from_register(raw: Register) -> Self {
        Self {
            celsius: i8::from_ne_bytes([raw]),
        }
    }

    /// Returns the byte as it appears in the TEMP register.
    pub fn raw(&self) -> Register {
        self.celsius.to_ne_bytes()[0]
    }

    /// Temperature in whole degrees Celsius.
    pub fn celsius(&self) -> i8 {
        self.celsius
    }
}

impl From<Temperature> for i8 {
    fn from(temp: Temperature) -> Self {
        temp.celsius
    }
}
