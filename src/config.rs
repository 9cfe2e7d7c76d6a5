use core::fmt;

use heapless::String;

use crate::intensity::IntensityMap;
use crate::{DEFAULT_ADDRESS, DEFAULT_INTENSITY, MAX_INTENSITY};

pub const MAX_SOURCE_NAME: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidAddress(u8),
    IntensityOutOfRange(u8),
    TooManySteps,
    SourceNameTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAddress(address) => {
                write!(f, "address {:#04x} is outside 0x70..=0x77", address)
            }
            ConfigError::IntensityOutOfRange(level) => {
                write!(f, "intensity {} exceeds {}", level, MAX_INTENSITY)
            }
            ConfigError::TooManySteps => f.write_str("too many intensity steps"),
            ConfigError::SourceNameTooLong => f.write_str("signal source name is too long"),
        }
    }
}

/// Brightness driven by a named signal.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct AutoIntensity {
    pub source: String<MAX_SOURCE_NAME>,
    pub steps: IntensityMap,
}

impl AutoIntensity {
    pub fn new(source: &str, steps: IntensityMap) -> Result<Self, ConfigError> {
        Ok(Self {
            source: source_name(source)?,
            steps,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Config {
    pub address: u8,
    pub intensity: u8,
    pub inverted: bool,
    pub auto_intensity: Option<AutoIntensity>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            intensity: DEFAULT_INTENSITY,
            inverted: false,
            auto_intensity: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address & 0b1111_1000 != DEFAULT_ADDRESS {
            return Err(ConfigError::InvalidAddress(self.address));
        }
        if self.intensity > MAX_INTENSITY {
            return Err(ConfigError::IntensityOutOfRange(self.intensity));
        }
        Ok(())
    }
}

pub(crate) fn source_name(name: &str) -> Result<String<MAX_SOURCE_NAME>, ConfigError> {
    let mut source = String::new();
    source
        .push_str(name)
        .map_err(|_| ConfigError::SourceNameTooLong)?;
    Ok(source)
}
