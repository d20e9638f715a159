//! Generative light patterns for a petal-shaped point cloud.
//!
//! Two interchangeable engines draw one grayscale color per point each frame:
//! [`LifePattern`] runs a toroidal Game of Life over the petal grid and
//! cross-fades between generations; [`RipplePattern`] sends arcs of light
//! outward from the center and composites them in spawn order.
//!
//! ```
//! use petal_patterns::{Color, LifePattern, LifeConfig, Pattern, PetalModel};
//!
//! let model = PetalModel::temple(8, 12)?;
//! let mut life = LifePattern::new(&model, LifeConfig::default())?;
//! let mut colors = vec![Color::BLACK; 8 * 12];
//! life.advance(16.0, &mut colors);
//! # Ok::<(), petal_patterns::PatternError>(())
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod simulation;

pub use app::App;
pub use color::Color;
pub use config::{FadeMode, LifeConfig, RippleConfig};
pub use error::PatternError;
pub use geometry::{Geometry, PetalModel, Point};
pub use simulation::{LifePattern, Pattern, PatternKind, RipplePattern};
