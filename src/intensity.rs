//! Automatic brightness from an external signal (typically a light sensor).

use heapless::Vec;

use crate::config::ConfigError;
use crate::{HYSTERESIS_GUARD, MAX_INTENSITY};

pub const MAX_STEPS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct IntensityStep {
    pub threshold: f32,
    pub level: u8,
}

/// Ordered `(threshold, level)` pairs.
///
/// Every step whose guarded threshold the signal exceeds overrides the steps
/// before it, so thresholds are expected in ascending order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "Vec<IntensityStep, MAX_STEPS>")
)]
pub struct IntensityMap {
    steps: Vec<IntensityStep, MAX_STEPS>,
}

impl IntensityMap {
    /// Builds a map from `(threshold, level)` pairs, clamping levels to
    /// [`MAX_INTENSITY`].
    pub fn new(pairs: &[(f32, u8)]) -> Result<Self, ConfigError> {
        let mut steps = Vec::new();
        for &(threshold, level) in pairs {
            steps
                .push(IntensityStep { threshold, level })
                .map_err(|_| ConfigError::TooManySteps)?;
        }
        Ok(Self::from_steps(steps))
    }

    fn from_steps(mut steps: Vec<IntensityStep, MAX_STEPS>) -> Self {
        for step in steps.iter_mut() {
            if step.level > MAX_INTENSITY {
                warn!(
                    "Intensity level {} clamped to {}",
                    step.level,
                    MAX_INTENSITY
                );
                step.level = MAX_INTENSITY;
            }
        }
        if steps.windows(2).any(|w| w[1].threshold < w[0].threshold) {
            warn!("Intensity thresholds are not ascending, later steps take precedence");
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[IntensityStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Selects the dimming level for `signal`.
    ///
    /// A step applies when the signal is strictly above its threshold scaled
    /// by [`HYSTERESIS_GUARD`]. NaN reads as 0.
    pub fn next_level(&self, signal: f32) -> u8 {
        let signal = if signal.is_nan() { 0.0 } else { signal };
        self.steps.iter().fold(0, |level, step| {
            if signal > step.threshold * HYSTERESIS_GUARD {
                step.level
            } else {
                level
            }
        })
    }
}

impl TryFrom<Vec<IntensityStep, MAX_STEPS>> for IntensityMap {
    type Error = ConfigError;

    fn try_from(steps: Vec<IntensityStep, MAX_STEPS>) -> Result<Self, Self::Error> {
        Ok(Self::from_steps(steps))
    }
}

/// Resolves a named signal to its current value.
pub trait SignalSource {
    fn resolve_signal(&mut self, name: &str) -> Option<f32>;
}

impl<S: SignalSource + ?Sized> SignalSource for &mut S {
    fn resolve_signal(&mut self, name: &str) -> Option<f32> {
        (**self).resolve_signal(name)
    }
}

/// Source that never has a value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSignal;

impl SignalSource for NoSignal {
    fn resolve_signal(&mut self, _name: &str) -> Option<f32> {
        None
    }
}

/// A fixed set of `(name, value)` readings.
#[derive(Clone, Copy, Debug)]
pub struct NamedSignals<'a> {
    readings: &'a [(&'a str, f32)],
}

impl<'a> NamedSignals<'a> {
    pub const fn new(readings: &'a [(&'a str, f32)]) -> Self {
        Self { readings }
    }
}

impl SignalSource for NamedSignals<'_> {
    fn resolve_signal(&mut self, name: &str) -> Option<f32> {
        if let Some(&(_, value)) = self.readings.iter().find(|(n, _)| *n == name) {
            return Some(value);
        }
        for (other, _) in self.readings {
            warn!("Signal source {} does not match {}", *other, name);
        }
        None
    }
}

/// Source backed by a closure.
pub struct FromFn<F>(F);

pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(&str) -> Option<f32>,
{
    FromFn(f)
}

impl<F> SignalSource for FromFn<F>
where
    F: FnMut(&str) -> Option<f32>,
{
    fn resolve_signal(&mut self, name: &str) -> Option<f32> {
        (self.0)(name)
    }
}
