mod model;
mod polar;

pub use model::PetalModel;
pub use polar::{
    angular_distance, is_angle_in_range, linear_interpolate, normalize_angle, point_angle,
    point_radius,
};

/// A model point. Its index in [`Geometry::points`] is its slot in the color buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Read-only view of the host's point cloud, queried once when a pattern is built.
///
/// Points are grouped into a grid: columns are petals, rows are positions
/// along a petal.
pub trait Geometry {
    fn points(&self) -> &[Point];

    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// Color buffer index of the point at `(row, col)`.
    fn point_index(&self, row: usize, col: usize) -> usize;
}
