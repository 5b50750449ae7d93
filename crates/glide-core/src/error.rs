//! Error types for settings validation and command lookup

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("wheel divisor {0} out of range (1..=30)")]
    WheelDivisor(u32),
    #[error("line count {0} must be at least 1")]
    LineCount(u32),
    #[error("page speed factor {0} out of range (1..=20)")]
    PageSpeedFactor(u32),
    #[error("line speed factor {0} out of range (1..=20)")]
    LineSpeedFactor(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown scroll command: {0}")]
    Unknown(String),
}
