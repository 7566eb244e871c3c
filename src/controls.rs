use crate::config::{ADC_CENTER, STICK_HIGH_THRESHOLD, STICK_LOW_THRESHOLD};

/// Analog stick axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Player input hardware as seen by the input task
///
/// All reads are synchronous and return immediately.
pub trait Controls {
    /// Raw 10-bit sample of one stick axis
    fn sample(&mut self, axis: Axis) -> u16;
    /// Stick press button, `true` while held
    fn button_pressed(&mut self) -> bool;
    /// Restart button, `true` while held
    fn reset_pressed(&mut self) -> bool;
}

/// Position band of a filtered stick reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Low,
    Center,
    High,
}

impl Zone {
    pub const fn classify(value: u16) -> Self {
        if value < STICK_LOW_THRESHOLD {
            Zone::Low
        } else if value > STICK_HIGH_THRESHOLD {
            Zone::High
        } else {
            Zone::Center
        }
    }

    /// Cursor step for this band
    pub const fn step(self) -> i8 {
        match self {
            Zone::Low => -1,
            Zone::Center => 0,
            Zone::High => 1,
        }
    }
}

/// Exponential smoothing `(previous * 3 + raw) / 4`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Smoothed {
    value: u16,
}

impl Default for Smoothed {
    fn default() -> Self {
        Self { value: ADC_CENTER }
    }
}

impl Smoothed {
    pub fn update(&mut self, raw: u16) -> u16 {
        self.value = ((self.value as u32 * 3 + raw as u32) / 4) as u16;
        self.value
    }

    pub const fn value(&self) -> u16 {
        self.value
    }
}
