mod grid;
mod life;
mod ripple;
mod wave;

use std::fmt;
use std::str::FromStr;

pub use grid::{next_state, LifeGrid};
pub use life::LifePattern;
pub use ripple::RipplePattern;
pub use wave::{PolarPoint, Wave};

use crate::color::Color;

/// A per-frame animation over a fixed point cloud.
pub trait Pattern {
    fn name(&self) -> &'static str;

    /// Step the simulation by `delta_ms` and redraw every point into `colors`.
    ///
    /// `colors` is indexed by point and must have a slot for every point of
    /// the geometry the pattern was built from.
    fn advance(&mut self, delta_ms: f64, colors: &mut [Color]);
}

/// The patterns a host can pick between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Life,
    Ripple,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Life => write!(f, "life"),
            PatternKind::Ripple => write!(f, "ripple"),
        }
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "life" | "gameoflife" | "game_of_life" => Ok(PatternKind::Life),
            "ripple" | "wave" | "waves" => Ok(PatternKind::Ripple),
            other => Err(format!("unknown pattern `{}` (expected life or ripple)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("life".parse::<PatternKind>(), Ok(PatternKind::Life));
        assert_eq!("Waves".parse::<PatternKind>(), Ok(PatternKind::Ripple));
        assert!("plasma".parse::<PatternKind>().is_err());
        assert_eq!(PatternKind::Ripple.to_string(), "ripple");
    }
}
