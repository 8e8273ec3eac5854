//! Configuration, CLI argument handling and timing constants

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::services::Language;

/// Boiling duration used when the caller supplies nothing usable
pub const DEFAULT_MINUTES: u64 = 6;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "egg-timer")]
#[command(about = "Egg boiling countdown with gesture control and sound cues")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Boiling duration in minutes (falls back to 6 when zero or invalid)
    #[arg(short, long)]
    pub minutes: Option<String>,

    /// Doneness preset; overrides --minutes
    #[arg(long, value_enum)]
    pub preset: Option<EggPreset>,

    /// Display language
    #[arg(short, long, value_enum, default_value = "en")]
    pub language: Language,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Boiling duration after applying the default fallback
    pub fn minutes(&self) -> u64 {
        match self.preset {
            Some(preset) => preset.minutes(),
            None => DurationInput::parse(self.minutes.as_deref()),
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Resolution of the caller-supplied duration parameter
pub struct DurationInput;

impl DurationInput {
    /// Resolve a raw minutes value, substituting the default for missing or non-positive input
    pub fn resolve(raw: Option<i64>) -> u64 {
        match raw {
            Some(minutes) if minutes > 0 => minutes as u64,
            _ => DEFAULT_MINUTES,
        }
    }

    /// Seconds in `minutes`, or the default duration when that does not fit
    pub fn seconds(minutes: u64) -> u64 {
        minutes.checked_mul(60).unwrap_or(DEFAULT_MINUTES * 60)
    }

    /// Resolve a textual minutes value
    pub fn parse(raw: Option<&str>) -> u64 {
        Self::resolve(raw.and_then(|s| s.trim().parse::<i64>().ok()))
    }
}

/// Doneness presets offered on the preparation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EggPreset {
    SoftBoiled,
    Jammy,
    Medium,
    HardBoiled,
}

impl EggPreset {
    pub const ALL: [EggPreset; 4] = [
        EggPreset::SoftBoiled,
        EggPreset::Jammy,
        EggPreset::Medium,
        EggPreset::HardBoiled,
    ];

    pub fn minutes(self) -> u64 {
        match self {
            EggPreset::SoftBoiled => 6,
            EggPreset::Jammy => 8,
            EggPreset::Medium => 10,
            EggPreset::HardBoiled => 12,
        }
    }
}

/// Intervals and thresholds shared by every timed component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Countdown clock period
    pub clock: Duration,
    /// Frame advance period for both animations
    pub animation: Duration,
    /// Delay before a sound loop starts after focus
    pub settle: Duration,
    /// Hold time that turns a press into a long press
    pub long_press: Duration,
    /// Window after the first release in which a second tap counts as a double tap
    pub double_tap: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            clock: Duration::from_secs(1),
            animation: Duration::from_millis(400),
            settle: Duration::from_millis(500),
            long_press: Duration::from_millis(800),
            double_tap: Duration::from_millis(300),
        }
    }
}
