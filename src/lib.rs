#![no_std]

#[macro_use]
mod fmt;

mod buffer;
pub mod config;
mod constants;
pub mod glyph;
pub mod intensity;
pub mod remap;
pub mod text;

pub use buffer::{DisplayBuffer, Frame, Printed};
pub use config::{AutoIntensity, Config, ConfigError};
pub use constants::*;
pub use intensity::{IntensityMap, NamedSignals, NoSignal, SignalSource};
pub use remap::Orientation;

use core::fmt::Write;

use config::MAX_SOURCE_NAME;
use embedded_hal::i2c::I2c;
use heapless::String;
use num_traits::ToPrimitive;
use time::PrimitiveDateTime;

pub const MIN_VALUE: i32 = -999;
pub const MAX_VALUE: i32 = 9999;
pub const MIN_HEX_VALUE: i32 = -0xFFF;
pub const MAX_HEX_VALUE: i32 = 0xFFFF;

/// 4 digit 7-segment display with a center colon behind an HT16K33.
pub struct HT16K33<I2C, S = NoSignal> {
    pub i2c: I2C,
    pub address: u8,
    orientation: Orientation,
    intensity: u8,
    buffer: DisplayBuffer,
    intensity_map: IntensityMap,
    auto_intensity: Option<String<MAX_SOURCE_NAME>>,
    signals: S,
}

impl<I2C, E> HT16K33<I2C, NoSignal>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            orientation: Orientation::Normal,
            intensity: DEFAULT_INTENSITY,
            buffer: DisplayBuffer::new(),
            intensity_map: IntensityMap::default(),
            auto_intensity: None,
            signals: NoSignal,
        }
    }

    pub fn from_config(i2c: I2C, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("Configuration {}", config);
        let mut display = Self::new(i2c, config.address);
        display.intensity = config.intensity;
        display.orientation = Orientation::from(config.inverted);
        if let Some(auto) = &config.auto_intensity {
            display.intensity_map = auto.steps.clone();
            display.auto_intensity = Some(auto.source.clone());
        }
        Ok(display)
    }
}

impl<I2C, E, S> HT16K33<I2C, S>
where
    I2C: I2c<Error = E>,
    S: SignalSource,
{
    /// Replaces the source consulted by automatic intensity.
    pub fn with_signal_source<T: SignalSource>(self, signals: T) -> HT16K33<I2C, T> {
        HT16K33 {
            i2c: self.i2c,
            address: self.address,
            orientation: self.orientation,
            intensity: self.intensity,
            buffer: self.buffer,
            intensity_map: self.intensity_map,
            auto_intensity: self.auto_intensity,
            signals,
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Starts the oscillator, turns the display on and sends the current frame.
    pub fn setup(&mut self) -> Result<(), HT16K33Error<E>> {
        info!("Setting up HT16K33 at {=u8:#x}", self.address);
        let mut result = Ok(());
        keep_first(
            &mut result,
            self.command(register::system_setup::OSCILLATOR_ON).map(drop),
        );
        keep_first(
            &mut result,
            self.command(register::display_setup::DISPLAY_ON).map(drop),
        );
        keep_first(&mut result, self.display());
        result
    }

    /// Turns the display off and stops the oscillator. Both commands are
    /// sent even if the first fails.
    pub fn shutdown(&mut self) -> Result<(), HT16K33Error<E>> {
        let mut result = Ok(());
        keep_first(
            &mut result,
            self.command(register::display_setup::DISPLAY_OFF).map(drop),
        );
        keep_first(
            &mut result,
            self.command(register::system_setup::OSCILLATOR_OFF).map(drop),
        );
        result
    }

    pub fn log_config(&self) {
        info!("HT16K33:");
        info!("  Address: {=u8:#x}", self.address);
        info!("  Intensity: {}", self.intensity);
        info!("  Inverted: {}", self.orientation.is_inverted());
        if let Some(source) = &self.auto_intensity {
            info!(
                "  Auto intensity: {} ({} steps)",
                source.as_str(),
                self.intensity_map.steps().len()
            );
        }
    }

    /// Runs one refresh cycle: blank the buffer, let `writer` fill it, send
    /// the frame and pick the next intensity.
    pub fn update<F>(&mut self, writer: F) -> Result<(), HT16K33Error<E>>
    where
        F: FnOnce(&mut Self),
    {
        self.buffer.clear();
        writer(self);
        self.display()
    }

    /// Sends the current frame then, with automatic intensity enabled,
    /// computes the intensity for the next one.
    pub fn display(&mut self) -> Result<(), HT16K33Error<E>> {
        let result = self.render();
        self.calculate_new_intensity();
        result
    }

    /// Writes the four cells, the colon and the dimming command.
    ///
    /// Every write is attempted even if an earlier one fails; the first
    /// failure is returned afterwards.
    pub fn render(&mut self) -> Result<(), HT16K33Error<E>> {
        let frame = self.buffer.frame(self.orientation);
        debug!("Display {} colon {}", frame.cells, frame.colon);

        let mut result = Ok(());
        for (register, value) in register::CELLS.into_iter().zip(frame.cells) {
            keep_first(&mut result, self.write_register(register, value));
        }
        keep_first(
            &mut result,
            self.write_register(register::COLON, frame.colon),
        );
        keep_first(
            &mut result,
            self.command(register::DIMMING | self.intensity).map(drop),
        );
        result
    }

    pub fn calculate_new_intensity(&mut self) {
        let Some(source) = &self.auto_intensity else {
            return;
        };
        let signal = match self.signals.resolve_signal(source.as_str()) {
            Some(signal) => {
                debug!("Measured signal value is {}", signal);
                signal
            }
            None => {
                warn!("Signal source {} not found, using minimum intensity", source.as_str());
                0.0
            }
        };
        self.intensity = self.intensity_map.next_level(signal);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Prints `text` from the first cell.
    pub fn print(&mut self, text: &str) -> Result<Printed, HT16K33Error<E>> {
        self.print_at(0, text)
    }

    /// Prints `text` from cell `position`. A colon in `text` lights the
    /// colon until the next [`clear`](Self::clear) or [`update`](Self::update);
    /// later prints in the same cycle do not turn it off.
    pub fn print_at(&mut self, position: u8, text: &str) -> Result<Printed, HT16K33Error<E>> {
        if position as usize >= NUM_CELLS {
            return Err(HT16K33Error::InvalidLocation(position));
        }
        Ok(self.buffer.print(position, text, self.orientation))
    }

    pub fn printf(&mut self, args: core::fmt::Arguments<'_>) -> Result<Printed, HT16K33Error<E>> {
        self.printf_at(0, args)
    }

    pub fn printf_at(
        &mut self,
        position: u8,
        args: core::fmt::Arguments<'_>,
    ) -> Result<Printed, HT16K33Error<E>> {
        let text = text::format(args).map_err(HT16K33Error::from_fmt)?;
        self.print_at(position, &text)
    }

    pub fn strftime(
        &mut self,
        format: &str,
        time: &PrimitiveDateTime,
    ) -> Result<Printed, HT16K33Error<E>> {
        self.strftime_at(0, format, time)
    }

    pub fn strftime_at(
        &mut self,
        position: u8,
        format: &str,
        time: &PrimitiveDateTime,
    ) -> Result<Printed, HT16K33Error<E>> {
        let text = text::strftime(format, time).map_err(HT16K33Error::from_fmt)?;
        self.print_at(position, &text)
    }

    /// Right-aligned decimal in [`MIN_VALUE`]..=[`MAX_VALUE`].
    pub fn print_value<T>(&mut self, value: T) -> Result<Printed, HT16K33Error<E>>
    where
        T: ToPrimitive,
    {
        let value = value.to_i32().ok_or(HT16K33Error::InvalidValue)?;
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(HT16K33Error::InvalidValue);
        }
        self.printf(format_args!("{:>4}", value))
    }

    /// Right-aligned hexadecimal in [`MIN_HEX_VALUE`]..=[`MAX_HEX_VALUE`].
    pub fn print_hex_value<T>(&mut self, value: T) -> Result<Printed, HT16K33Error<E>>
    where
        T: ToPrimitive,
    {
        let value = value.to_i32().ok_or(HT16K33Error::InvalidValue)?;
        if !(MIN_HEX_VALUE..=MAX_HEX_VALUE).contains(&value) {
            return Err(HT16K33Error::InvalidValue);
        }
        let mut digits: String<NUM_CELLS> = String::new();
        if value < 0 {
            digits.push('-').map_err(|_| HT16K33Error::FormatError)?;
        }
        write!(digits, "{:X}", value.unsigned_abs()).map_err(HT16K33Error::from_fmt)?;
        self.printf(format_args!("{:>4}", digits.as_str()))
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), HT16K33Error<E>> {
        if intensity > MAX_INTENSITY {
            return Err(HT16K33Error::InvalidValue);
        }
        self.intensity = intensity;
        Ok(())
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.orientation = Orientation::from(inverted);
    }

    pub fn set_intensity_map(&mut self, map: IntensityMap) {
        self.intensity_map = map;
    }

    /// Derives the intensity from the signal named `source` after every frame.
    pub fn enable_auto_intensity(&mut self, source: &str) -> Result<(), HT16K33Error<E>> {
        let source = config::source_name(source).map_err(|_| HT16K33Error::InvalidValue)?;
        self.auto_intensity = Some(source);
        Ok(())
    }

    pub fn disable_auto_intensity(&mut self) {
        self.auto_intensity = None;
    }

    pub fn auto_intensity(&self) -> Option<&str> {
        self.auto_intensity.as_ref().map(|source| source.as_str())
    }

    fn command(&mut self, command: u8) -> Result<u8, HT16K33Error<E>> {
        let mut buffer = [0; 1];
        if let Err(error) = self.i2c.write_read(self.address, &[command], &mut buffer) {
            warn!("Command {=u8:#x} failed", command);
            return Err(error.into());
        }
        Ok(buffer[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), HT16K33Error<E>> {
        if let Err(error) = self.i2c.write(self.address, &[register, value]) {
            warn!("Writing {=u8:#x} to register {=u8:#x} failed", value, register);
            return Err(error.into());
        }
        Ok(())
    }
}

fn keep_first<E>(result: &mut Result<(), E>, next: Result<(), E>) {
    if result.is_ok() {
        *result = next;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HT16K33Error<E> {
    I2cError(E),
    InvalidValue,
    InvalidLocation(u8),
    FormatError,
}

impl<E> From<E> for HT16K33Error<E> {
    fn from(error: E) -> Self {
        HT16K33Error::I2cError(error)
    }
}

impl<E> HT16K33Error<E> {
    fn from_fmt(_: core::fmt::Error) -> Self {
        HT16K33Error::FormatError
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for HT16K33Error<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            HT16K33Error::I2cError(_e) => defmt::write!(fmt, "I2C error"),
            HT16K33Error::InvalidValue => defmt::write!(fmt, "Invalid value"),
            HT16K33Error::InvalidLocation(position) => {
                defmt::write!(fmt, "Invalid location {}", position)
            }
            HT16K33Error::FormatError => defmt::write!(fmt, "Formatting error"),
        }
    }
}
