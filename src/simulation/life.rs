use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::LifeGrid;
use super::Pattern;
use crate::color::Color;
use crate::config::{FadeMode, LifeConfig};
use crate::error::PatternError;
use crate::geometry::{linear_interpolate, normalize_angle, point_angle, Geometry};

/// Game of Life on the petal grid, cross-fading between generations.
pub struct LifePattern {
    config: LifeConfig,
    grid: LifeGrid,
    /// Color buffer index for each cell, row-major
    cell_points: Vec<usize>,
    /// Polar angle for each point, used by [`FadeMode::Angle`]
    angles: Vec<f64>,
    /// Sweeps 0..2π once per period; reset on every tick
    angle: f64,
    /// Seconds since the last generation
    timer: f64,
    generation: u64,
    reseed_counter: u32,
    next_reseed: u32,
    rng: StdRng,
}

impl LifePattern {
    pub fn new<G: Geometry + ?Sized>(geometry: &G, config: LifeConfig) -> Result<Self, PatternError> {
        Self::with_rng(geometry, config, StdRng::from_entropy())
    }

    pub fn with_rng<G: Geometry + ?Sized>(
        geometry: &G,
        config: LifeConfig,
        rng: StdRng,
    ) -> Result<Self, PatternError> {
        let mut pattern = Self::unseeded(geometry, config, rng)?;
        let probability = pattern.config.seed_probability;
        pattern.grid.seed_all(&mut pattern.rng, probability);
        log::info!(
            "Life grid {}x{} seeded with {} live cells",
            pattern.grid.rows(),
            pattern.grid.cols(),
            pattern.grid.population()
        );
        Ok(pattern)
    }

    /// Validate and allocate everything, leaving the grid all dead.
    fn unseeded<G: Geometry + ?Sized>(
        geometry: &G,
        config: LifeConfig,
        rng: StdRng,
    ) -> Result<Self, PatternError> {
        config.validate()?;

        let points = geometry.points();
        if points.is_empty() {
            return Err(PatternError::EmptyGeometry);
        }
        let (rows, cols) = (geometry.num_rows(), geometry.num_cols());
        if rows == 0 || cols == 0 {
            return Err(PatternError::EmptyGrid { rows, cols });
        }

        let mut cell_points = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let index = geometry.point_index(row, col);
                if index >= points.len() {
                    return Err(PatternError::PointOutOfRange {
                        row,
                        col,
                        index,
                        len: points.len(),
                    });
                }
                cell_points.push(index);
            }
        }

        let next_reseed = config.first_reseed;
        Ok(Self {
            config,
            grid: LifeGrid::new(rows, cols),
            cell_points,
            angles: points.iter().map(point_angle).collect(),
            angle: 0.0,
            timer: 0.0,
            generation: 0,
            reseed_counter: 0,
            next_reseed,
            rng,
        })
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut LifeGrid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seconds since the last generation.
    pub fn timer(&self) -> f64 {
        self.timer
    }

    fn tick(&mut self) {
        self.timer = 0.0;
        self.angle = 0.0;
        self.grid.step();
        self.generation += 1;
        log::debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.population()
        );

        let due = self.reseed_counter > self.next_reseed;
        self.reseed_counter += 1;
        if due {
            self.reseed_counter = 0;
            self.next_reseed = self.rng.gen_range(0..self.config.reseed_interval_max);
            let row = self.rng.gen_range(0..self.grid.rows());
            let col = self.rng.gen_range(0..self.grid.cols());
            let size = self.config.seed_size;
            self.grid
                .seed(&mut self.rng, row, col, size, size, self.config.seed_probability);
            log::debug!(
                "Reseeded {}x{} block at ({}, {}); next reseed after {} generations",
                size,
                size,
                row,
                col,
                self.next_reseed
            );
        }
    }

    fn cell_brightness(&self, alive: bool) -> f64 {
        if alive {
            self.config.alive_brightness
        } else {
            self.config.dead_brightness
        }
    }

    /// Brightness of cell `(row, col)` at the current point in the fade.
    pub fn brightness(&self, row: usize, col: usize) -> f64 {
        let old = self.cell_brightness(self.grid.was_alive(row, col));
        let new = self.cell_brightness(self.grid.is_alive(row, col));

        match self.config.fade_mode {
            FadeMode::Time => {
                if self.timer < self.config.fade_time {
                    linear_interpolate(self.timer, 0.0, old, self.config.fade_time, new)
                } else {
                    new
                }
            }
            FadeMode::Angle => {
                let point = self.cell_points[row * self.grid.cols() + col];
                let diff = normalize_angle(self.angle - self.angles[point]);
                if diff < self.config.fade_angle && old != new {
                    linear_interpolate(diff, 0.0, old, self.config.fade_angle, new)
                } else {
                    new
                }
            }
        }
    }
}

impl Pattern for LifePattern {
    fn name(&self) -> &'static str {
        "life"
    }

    fn advance(&mut self, delta_ms: f64, colors: &mut [Color]) {
        debug_assert!(colors.len() >= self.angles.len());

        colors.fill(Color::BLACK);

        self.angle += delta_ms / 1000.0 / self.config.period * TAU;
        self.timer += delta_ms / 1000.0;
        if self.timer > self.config.period {
            self.tick();
        }

        let cols = self.grid.cols();
        for row in 0..self.grid.rows() {
            for col in 0..cols {
                let point = self.cell_points[row * cols + col];
                colors[point] = Color::gray(self.brightness(row, col));
            }
        }
    }
}
