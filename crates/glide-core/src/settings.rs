//! Scroll settings shared by the producers and the step policy
//!
//! Settings are an immutable value. A configuration change builds a new
//! [`ScrollSettings`] and hands it to the session, which swaps it in whole.

use crate::error::SettingsError;
use std::ops::RangeInclusive;

pub const WHEEL_DIVISOR_RANGE: RangeInclusive<u32> = 1..=30;
pub const SPEED_FACTOR_RANGE: RangeInclusive<u32> = 1..=20;

pub const DEFAULT_WHEEL_DIVISOR: u32 = 7;
pub const DEFAULT_LINE_COUNT: u32 = 20;
pub const DEFAULT_SPEED_FACTOR: u32 = 3;

/// Adaptive-mode divisor, guaranteed to lie in `1..=30`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WheelDivisor(u32);

impl WheelDivisor {
    pub fn new(value: u32) -> Result<Self, SettingsError> {
        if WHEEL_DIVISOR_RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(SettingsError::WheelDivisor(value))
        }
    }

    /// Clamp an arbitrary value into range
    pub fn saturating(value: u32) -> Self {
        Self(value.clamp(*WHEEL_DIVISOR_RANGE.start(), *WHEEL_DIVISOR_RANGE.end()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for WheelDivisor {
    fn default() -> Self {
        Self(DEFAULT_WHEEL_DIVISOR)
    }
}

impl TryFrom<u32> for WheelDivisor {
    type Error = SettingsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        WheelDivisor::new(value)
    }
}

/// Validated scroll settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSettings {
    wheel_divisor: WheelDivisor,
    line_count: u32,
    page_speed_factor: u32,
    line_speed_factor: u32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            wheel_divisor: WheelDivisor::default(),
            line_count: DEFAULT_LINE_COUNT,
            page_speed_factor: DEFAULT_SPEED_FACTOR,
            line_speed_factor: DEFAULT_SPEED_FACTOR,
        }
    }
}

impl ScrollSettings {
    /// Validate raw values, rejecting anything outside the documented ranges
    pub fn new(
        wheel_divisor: u32,
        line_count: u32,
        page_speed_factor: u32,
        line_speed_factor: u32,
    ) -> Result<Self, SettingsError> {
        let wheel_divisor = WheelDivisor::new(wheel_divisor)?;
        if line_count == 0 {
            return Err(SettingsError::LineCount(line_count));
        }
        if !SPEED_FACTOR_RANGE.contains(&page_speed_factor) {
            return Err(SettingsError::PageSpeedFactor(page_speed_factor));
        }
        if !SPEED_FACTOR_RANGE.contains(&line_speed_factor) {
            return Err(SettingsError::LineSpeedFactor(line_speed_factor));
        }
        Ok(Self {
            wheel_divisor,
            line_count,
            page_speed_factor,
            line_speed_factor,
        })
    }

    /// Build settings from raw values, clamping each into its range
    pub fn clamped(
        wheel_divisor: u32,
        line_count: u32,
        page_speed_factor: u32,
        line_speed_factor: u32,
    ) -> Self {
        let clamp_speed =
            |v: u32| v.clamp(*SPEED_FACTOR_RANGE.start(), *SPEED_FACTOR_RANGE.end());
        Self {
            wheel_divisor: WheelDivisor::saturating(wheel_divisor),
            line_count: line_count.max(1),
            page_speed_factor: clamp_speed(page_speed_factor),
            line_speed_factor: clamp_speed(line_speed_factor),
        }
    }

    pub fn wheel_divisor(&self) -> WheelDivisor {
        self.wheel_divisor
    }

    /// Lines covered by one line-up/down/left/right command
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    pub fn page_speed_factor(&self) -> u32 {
        self.page_speed_factor
    }

    pub fn line_speed_factor(&self) -> u32 {
        self.line_speed_factor
    }

    pub fn with_wheel_divisor(mut self, divisor: WheelDivisor) -> Self {
        self.wheel_divisor = divisor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ScrollSettings::default();
        assert_eq!(settings.wheel_divisor().get(), 7);
        assert_eq!(settings.line_count(), 20);
        assert_eq!(settings.page_speed_factor(), 3);
        assert_eq!(settings.line_speed_factor(), 3);
    }

    #[test]
    fn test_wheel_divisor_bounds() {
        assert_eq!(WheelDivisor::new(0), Err(SettingsError::WheelDivisor(0)));
        assert_eq!(WheelDivisor::new(31), Err(SettingsError::WheelDivisor(31)));
        assert_eq!(WheelDivisor::new(1).map(WheelDivisor::get), Ok(1));
        assert_eq!(WheelDivisor::try_from(30).map(WheelDivisor::get), Ok(30));
        assert_eq!(WheelDivisor::saturating(0).get(), 1);
        assert_eq!(WheelDivisor::saturating(99).get(), 30);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(ScrollSettings::new(7, 0, 3, 3), Err(SettingsError::LineCount(0)));
        assert_eq!(
            ScrollSettings::new(7, 20, 21, 3),
            Err(SettingsError::PageSpeedFactor(21))
        );
        assert_eq!(
            ScrollSettings::new(7, 20, 3, 0),
            Err(SettingsError::LineSpeedFactor(0))
        );
        assert!(ScrollSettings::new(30, 1, 20, 1).is_ok());
    }

    #[test]
    fn test_clamped() {
        let settings = ScrollSettings::clamped(0, 0, 50, 0);
        assert_eq!(settings.wheel_divisor().get(), 1);
        assert_eq!(settings.line_count(), 1);
        assert_eq!(settings.page_speed_factor(), 20);
        assert_eq!(settings.line_speed_factor(), 1);
        assert_eq!(ScrollSettings::clamped(7, 20, 3, 3), ScrollSettings::default());
    }
}
