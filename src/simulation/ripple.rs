use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::wave::{PolarPoint, Wave};
use super::Pattern;
use crate::color::Color;
use crate::config::RippleConfig;
use crate::error::PatternError;
use crate::geometry::{normalize_angle, Geometry};

/// Arcs of light that spawn near the center and sweep outward.
pub struct RipplePattern {
    config: RippleConfig,
    points: Vec<PolarPoint>,
    /// Drawn in spawn order
    waves: Vec<Wave>,
    /// Scaled seconds since the last spawn
    wave_timer: f64,
    next_wave_time: f64,
    last_wave_direction: f64,
    /// Real seconds since stats were last logged
    stat_timer: f64,
    frame_counter: u32,
    buffer_len: usize,
    rng: StdRng,
}

/// `k * (max - min) / steps + min` for a uniform `k` in `0..steps`, clamped to `max`.
fn random_quantized<R: Rng>(rng: &mut R, min: f64, max: f64, steps: u32) -> f64 {
    let k = rng.gen_range(0..steps) as f64;
    (k * (max - min) / steps as f64 + min).min(max)
}

impl RipplePattern {
    pub fn new<G: Geometry + ?Sized>(geometry: &G, config: RippleConfig) -> Result<Self, PatternError> {
        Self::from_polar(
            PolarPoint::from_geometry(geometry),
            config,
            StdRng::from_entropy(),
        )
    }

    pub fn with_rng<G: Geometry + ?Sized>(
        geometry: &G,
        config: RippleConfig,
        rng: StdRng,
    ) -> Result<Self, PatternError> {
        Self::from_polar(PolarPoint::from_geometry(geometry), config, rng)
    }

    /// Build from points already in polar form.
    pub fn from_polar(
        points: Vec<PolarPoint>,
        config: RippleConfig,
        rng: StdRng,
    ) -> Result<Self, PatternError> {
        config.validate()?;
        let buffer_len = match points.iter().map(|p| p.index).max() {
            Some(max) => max + 1,
            None => return Err(PatternError::EmptyGeometry),
        };
        log::info!("Ripples over {} points", points.len());

        Ok(Self {
            config,
            points,
            waves: Vec::new(),
            wave_timer: 0.0,
            // Zero so the first frame spawns a wave
            next_wave_time: 0.0,
            last_wave_direction: 0.0,
            stat_timer: 0.0,
            frame_counter: 0,
            buffer_len,
            rng,
        })
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Add a wave outside the regular schedule. It is drawn after existing waves.
    pub fn push_wave(&mut self, wave: Wave) {
        self.waves.push(wave);
    }

    pub fn last_wave_direction(&self) -> f64 {
        self.last_wave_direction
    }

    pub fn next_wave_time(&self) -> f64 {
        self.next_wave_time
    }

    fn log_stats(&mut self, delta_ms: f64) {
        self.frame_counter += 1;
        self.stat_timer += delta_ms / 1000.0;
        if self.stat_timer > self.config.stats_interval {
            log::info!(
                "Ripple stats: {} waves, {:.1} fps",
                self.waves.len(),
                self.frame_counter as f64 / self.stat_timer
            );
            self.frame_counter = 0;
            self.stat_timer = 0.0;
        }
    }

    fn spawn_wave(&mut self) {
        let (interval_min, interval_max) = self.config.interval;
        let (width_min, width_max) = self.config.width;
        let offset = self.config.min_direction_offset;

        self.wave_timer = 0.0;
        self.next_wave_time = random_quantized(&mut self.rng, interval_min, interval_max, 100);

        // Stay at least `offset` away from the last direction on both sides
        let min_direction = self.last_wave_direction + offset;
        let max_direction = self.last_wave_direction - offset + TAU;
        let direction =
            normalize_angle(random_quantized(&mut self.rng, min_direction, max_direction, 360));
        self.last_wave_direction = direction;

        let width = random_quantized(&mut self.rng, width_min, width_max, 100);
        self.waves.push(Wave::new(
            self.config.min_position,
            self.config.speed,
            width,
            direction,
            self.config.intensity,
        ));
        log::debug!(
            "New wave: direction {:.3}, width {:.2}; next in {:.2}s",
            direction,
            width,
            self.next_wave_time
        );
    }
}

impl Pattern for RipplePattern {
    fn name(&self) -> &'static str {
        "ripple"
    }

    fn advance(&mut self, delta_ms: f64, colors: &mut [Color]) {
        debug_assert!(colors.len() >= self.buffer_len);

        self.log_stats(delta_ms);

        let scaled = delta_ms * self.config.time_scale;
        self.wave_timer += scaled / 1000.0;
        if self.wave_timer > self.next_wave_time {
            self.spawn_wave();
        }

        colors.fill(Color::gray(self.config.min_brightness));

        for wave in self.waves.iter_mut() {
            wave.advance(scaled);
            wave.render(&self.points, colors, &self.config);
        }

        let max_position = self.config.max_position;
        let before = self.waves.len();
        self.waves.retain(|wave| !wave.is_done(max_position));
        if self.waves.len() < before {
            log::debug!(
                "Retired {} waves, {} remaining",
                before - self.waves.len(),
                self.waves.len()
            );
        }
    }
}
