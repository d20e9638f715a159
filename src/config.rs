use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::PatternError;

// ============================================
// Game of Life
// ============================================

/// Seconds per generation
pub const LIFE_PERIOD: f64 = 1.0;

/// Seconds spent cross-fading from the previous generation after each tick
pub const LIFE_FADE_TIME: f64 = 0.5;

/// Brightness of a live cell (0-100)
pub const ALIVE_BRIGHTNESS: f64 = 100.0;

/// Brightness of a dead cell (0-100)
pub const DEAD_BRIGHTNESS: f64 = 20.0;

/// A seeded cell is alive with probability 1 / SEED_PROBABILITY
pub const SEED_PROBABILITY: u32 = 2;

/// Side length of the square region re-randomized on reseed
pub const SEED_SIZE: usize = 16;

/// Generations before the first reseed
pub const FIRST_RESEED: u32 = 100;

/// Upper bound (exclusive) for the randomized reseed interval
pub const RESEED_INTERVAL_MAX: u32 = 100;

/// Width of the angle-synchronized fade band, in radians
pub const FADE_ANGLE: f64 = 1.0;

// ============================================
// Ripples
// ============================================

/// Acceleration applied to frame time before it reaches the wave simulation
pub const TIME_SCALE: f64 = 5.0;

/// Distance over which brightness halves behind a wavefront
pub const DECAY: f64 = 10_000.0;

/// Brightness floor for unlit points (0-100)
pub const MIN_BRIGHTNESS: f64 = 5.0;

/// Wavefront growth in model units per (scaled) second
pub const WAVE_SPEED: f64 = 500.0;

/// Peak brightness at the leading edge
pub const WAVE_INTENSITY: f64 = 100.0;

/// Depth of the fade-in band right behind the front
pub const FRONT_FADE: f64 = 1500.0;

/// Angular width of the soft edge on each side of a wave, in radians
pub const SIDE_FADE: f64 = 0.2;

/// Minimum angular gap between consecutive wave directions
pub const MIN_WAVE_DIRECTION_OFFSET: f64 = FRAC_PI_2;

/// Radius a new wave starts at (smallest measured point radius is ~3508)
pub const MIN_POSITION: f64 = 1000.0;

/// Radius past which a wave is retired (largest measured point radius is ~28769)
pub const MAX_POSITION: f64 = 100_000.0;

/// Bounds of the randomized wave interarrival time, in scaled seconds
pub const WAVE_INTERVAL: (f64, f64) = (20.0, 30.0);

/// Bounds of the randomized angular width of a wave, in radians
pub const WAVE_WIDTH: (f64, f64) = (1.0, 3.5);

/// Real seconds between stats log lines
pub const STATS_INTERVAL: f64 = 10.0;

// ============================================
// Demo host
// ============================================

/// Petals in the synthetic temple model
pub const TEMPLE_PETALS: usize = 20;

/// Points along each petal of the synthetic temple model
pub const TEMPLE_PETAL_POINTS: usize = 48;

/// Innermost and outermost point radius of the synthetic temple model
pub const TEMPLE_RADII: (f64, f64) = (3508.0, 28769.0);

/// Simulated frame rate of the demo host
pub const DEMO_FPS: f64 = 60.0;

/// How the life pattern blends between generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FadeMode {
    /// Cross-fade over `fade_time` seconds after each tick.
    #[default]
    Time,
    /// Sweep the fade around the temple, keyed on each point's polar angle.
    Angle,
}

/// Tunables for [`crate::simulation::LifePattern`].
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub period: f64,
    pub fade_time: f64,
    pub fade_mode: FadeMode,
    pub fade_angle: f64,
    pub alive_brightness: f64,
    pub dead_brightness: f64,
    pub seed_probability: u32,
    pub seed_size: usize,
    pub first_reseed: u32,
    pub reseed_interval_max: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            period: LIFE_PERIOD,
            fade_time: LIFE_FADE_TIME,
            fade_mode: FadeMode::Time,
            fade_angle: FADE_ANGLE,
            alive_brightness: ALIVE_BRIGHTNESS,
            dead_brightness: DEAD_BRIGHTNESS,
            seed_probability: SEED_PROBABILITY,
            seed_size: SEED_SIZE,
            first_reseed: FIRST_RESEED,
            reseed_interval_max: RESEED_INTERVAL_MAX,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), PatternError> {
        positive("period", self.period)?;
        non_negative("fade_time", self.fade_time)?;
        if !(0.0..=TAU).contains(&self.fade_angle) {
            return Err(PatternError::invalid("fade_angle", "must lie in [0, 2π]"));
        }
        brightness("alive_brightness", self.alive_brightness)?;
        brightness("dead_brightness", self.dead_brightness)?;
        if self.seed_probability == 0 {
            return Err(PatternError::invalid("seed_probability", "must be at least 1"));
        }
        if self.seed_size == 0 {
            return Err(PatternError::invalid("seed_size", "must be at least 1"));
        }
        if self.reseed_interval_max == 0 {
            return Err(PatternError::invalid("reseed_interval_max", "must be at least 1"));
        }
        Ok(())
    }
}

/// Tunables for [`crate::simulation::RipplePattern`].
#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    pub time_scale: f64,
    pub decay: f64,
    pub min_brightness: f64,
    pub speed: f64,
    pub intensity: f64,
    pub front_fade: f64,
    pub side_fade: f64,
    pub min_direction_offset: f64,
    pub min_position: f64,
    pub max_position: f64,
    pub interval: (f64, f64),
    pub width: (f64, f64),
    pub stats_interval: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE,
            decay: DECAY,
            min_brightness: MIN_BRIGHTNESS,
            speed: WAVE_SPEED,
            intensity: WAVE_INTENSITY,
            front_fade: FRONT_FADE,
            side_fade: SIDE_FADE,
            min_direction_offset: MIN_WAVE_DIRECTION_OFFSET,
            min_position: MIN_POSITION,
            max_position: MAX_POSITION,
            interval: WAVE_INTERVAL,
            width: WAVE_WIDTH,
            stats_interval: STATS_INTERVAL,
        }
    }
}

impl RippleConfig {
    pub fn validate(&self) -> Result<(), PatternError> {
        positive("time_scale", self.time_scale)?;
        positive("decay", self.decay)?;
        brightness("min_brightness", self.min_brightness)?;
        positive("speed", self.speed)?;
        brightness("intensity", self.intensity)?;
        positive("front_fade", self.front_fade)?;
        non_negative("side_fade", self.side_fade)?;
        if !(0.0..=std::f64::consts::PI).contains(&self.min_direction_offset) {
            return Err(PatternError::invalid(
                "min_direction_offset",
                "must lie in [0, π]",
            ));
        }
        non_negative("min_position", self.min_position)?;
        if self.max_position <= self.min_position {
            return Err(PatternError::invalid(
                "max_position",
                "must be greater than min_position",
            ));
        }
        range("interval", self.interval)?;
        range("width", self.width)?;
        if self.width.1 > TAU {
            return Err(PatternError::invalid("width", "must not exceed 2π"));
        }
        positive("stats_interval", self.stats_interval)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), PatternError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PatternError::invalid(field, "must be positive and finite"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), PatternError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PatternError::invalid(field, "must be non-negative and finite"))
    }
}

fn brightness(field: &'static str, value: f64) -> Result<(), PatternError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(PatternError::invalid(field, "must lie in [0, 100]"))
    }
}

fn range(field: &'static str, (lo, hi): (f64, f64)) -> Result<(), PatternError> {
    non_negative(field, lo)?;
    if hi.is_finite() && hi >= lo {
        Ok(())
    } else {
        Err(PatternError::invalid(field, "upper bound must be finite and >= lower bound"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LifeConfig::default().validate().is_ok());
        assert!(RippleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_period_rejected() {
        let config = LifeConfig {
            period: 0.0,
            ..LifeConfig::default()
        };
        match config.validate() {
            Err(PatternError::InvalidConfig { field, .. }) => assert_eq!(field, "period"),
            other => panic!("expected invalid period, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_wave_bounds_rejected() {
        let config = RippleConfig {
            max_position: 10.0,
            ..RippleConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RippleConfig {
            width: (3.0, 1.0),
            ..RippleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_seed_probability_rejected() {
        let config = LifeConfig {
            seed_probability: 0,
            ..LifeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
