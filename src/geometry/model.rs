use std::f64::consts::TAU;

use super::{Geometry, Point};
use crate::config::TEMPLE_RADII;
use crate::error::PatternError;

/// Point cloud grouped into petals of equal length.
#[derive(Clone, Debug)]
pub struct PetalModel {
    points: Vec<Point>,
    /// `petals[col][row]` is a point index
    petals: Vec<Vec<usize>>,
}

impl PetalModel {
    /// Build a model from points and per-petal point indices, checking that
    /// every petal has the same length and every index is in bounds.
    pub fn new(points: Vec<Point>, petals: Vec<Vec<usize>>) -> Result<Self, PatternError> {
        if points.is_empty() {
            return Err(PatternError::EmptyGeometry);
        }
        let rows = petals.first().map_or(0, Vec::len);
        if rows == 0 {
            return Err(PatternError::EmptyGrid {
                rows,
                cols: petals.len(),
            });
        }

        for (col, petal) in petals.iter().enumerate() {
            if petal.len() != rows {
                return Err(PatternError::RaggedPetal {
                    petal: col,
                    expected: rows,
                    found: petal.len(),
                });
            }
            if let Some((row, &index)) = petal.iter().enumerate().find(|&(_, &i)| i >= points.len()) {
                return Err(PatternError::PointOutOfRange {
                    row,
                    col,
                    index,
                    len: points.len(),
                });
            }
        }

        Ok(Self { points, petals })
    }

    /// Synthetic temple: `num_petals` petals fanned evenly around the vertical
    /// axis, each a straight run of `points_per_petal` points from the inner to
    /// the outer radius, rising as it goes out.
    pub fn temple(num_petals: usize, points_per_petal: usize) -> Result<Self, PatternError> {
        let (inner, outer) = TEMPLE_RADII;
        let mut points = Vec::with_capacity(num_petals * points_per_petal);
        let mut petals = Vec::with_capacity(num_petals);

        for col in 0..num_petals {
            // Keep petals off the exact 0/2π seam
            let theta = (col as f64 + 0.5) / num_petals as f64 * TAU;
            let mut petal = Vec::with_capacity(points_per_petal);
            for row in 0..points_per_petal {
                let t = if points_per_petal > 1 {
                    row as f64 / (points_per_petal - 1) as f64
                } else {
                    0.0
                };
                let radius = inner + (outer - inner) * t;
                petal.push(points.len());
                points.push(Point {
                    x: radius * theta.cos(),
                    y: t * 6000.0,
                    z: radius * theta.sin(),
                });
            }
            petals.push(petal);
        }

        Self::new(points, petals)
    }

    pub fn petals(&self) -> &[Vec<usize>] {
        &self.petals
    }
}

impl Geometry for PetalModel {
    fn points(&self) -> &[Point] {
        &self.points
    }

    fn num_rows(&self) -> usize {
        self.petals[0].len()
    }

    fn num_cols(&self) -> usize {
        self.petals.len()
    }

    fn point_index(&self, row: usize, col: usize) -> usize {
        self.petals[col][row]
    }
}
