use crate::color::Color;
use crate::config::RippleConfig;
use crate::geometry::{
    is_angle_in_range, linear_interpolate, normalize_angle, point_angle, point_radius, Geometry,
};

/// A model point in polar form, precomputed once per pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarPoint {
    /// Slot in the color buffer
    pub index: usize,
    pub angle: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn from_geometry<G: Geometry + ?Sized>(geometry: &G) -> Vec<PolarPoint> {
        geometry
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| PolarPoint {
                index,
                angle: point_angle(point),
                radius: point_radius(point),
            })
            .collect()
    }
}

/// An expanding circular arc of light.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    /// Center of the arc, in radians
    direction: f64,
    min_angle: f64,
    max_angle: f64,
    /// Growth of `position` per (scaled) second
    speed: f64,
    /// Current radius of the front
    position: f64,
    /// Brightness at the leading edge
    intensity: f64,
}

impl Wave {
    /// `width` is the angular size of the arc, centered on `direction`.
    pub fn new(position: f64, speed: f64, width: f64, direction: f64, intensity: f64) -> Self {
        Self {
            direction,
            min_angle: normalize_angle(direction - width / 2.0),
            max_angle: normalize_angle(direction + width / 2.0),
            speed,
            position,
            intensity,
        }
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn min_angle(&self) -> f64 {
        self.min_angle
    }

    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Grow the front by `speed` over `delta_ms` of scaled time.
    pub fn advance(&mut self, delta_ms: f64) {
        self.position += self.speed * delta_ms / 1000.0;
    }

    pub fn is_done(&self, max_position: f64) -> bool {
        self.position > max_position
    }

    /// Draw this wave over whatever is already in `colors`.
    ///
    /// Fades read the brightness currently in the buffer, so waves drawn
    /// later in a frame blend against the ones drawn earlier.
    pub fn render(&self, points: &[PolarPoint], colors: &mut [Color], config: &RippleConfig) {
        for point in points {
            if !is_angle_in_range(point.angle, self.min_angle, self.max_angle) {
                continue;
            }
            if point.radius > self.position {
                continue;
            }

            let old = colors[point.index].brightness();
            let behind = self.position - point.radius;
            let mut brightness = if behind < config.front_fade {
                linear_interpolate(behind, 0.0, old, config.front_fade, self.intensity).trunc()
            } else {
                let falloff = (point.radius - self.position + config.front_fade) / config.decay;
                (self.intensity * falloff.exp2())
                    .trunc()
                    .max(config.min_brightness)
            };

            // Soften both edges of the arc
            let from_max = normalize_angle(self.max_angle - point.angle);
            if from_max < config.side_fade {
                brightness =
                    linear_interpolate(from_max, 0.0, old, config.side_fade, brightness).trunc();
            }
            let from_min = normalize_angle(point.angle - self.min_angle);
            if from_min < config.side_fade {
                brightness =
                    linear_interpolate(from_min, 0.0, old, config.side_fade, brightness).trunc();
            }

            colors[point.index] = Color::gray(brightness);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn at(index: usize, angle: f64, radius: f64) -> PolarPoint {
        PolarPoint {
            index,
            angle,
            radius,
        }
    }

    fn floor_frame(len: usize) -> Vec<Color> {
        vec![Color::gray(RippleConfig::default().min_brightness); len]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 100.0 / 255.0
    }

    #[test]
    fn test_new_normalizes_arc() {
        let wave = Wave::new(1000.0, 500.0, PI, 0.0, 100.0);
        assert!((wave.min_angle() - 1.5 * PI).abs() < 1e-12);
        assert!((wave.max_angle() - FRAC_PI_2).abs() < 1e-12);
        assert!(wave.min_angle() >= 0.0 && wave.min_angle() < TAU);

        let wave = Wave::new(1000.0, 500.0, 1.0, TAU - 0.1, 100.0);
        assert!(wave.max_angle() < wave.min_angle());
        assert!((wave.max_angle() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_position_grows_linearly() {
        let mut wave = Wave::new(1000.0, 500.0, 1.0, 0.0, 100.0);
        let mut last = wave.position();
        for _ in 0..10 {
            wave.advance(80.0);
            assert!(wave.position() > last);
            last = wave.position();
        }
        assert!((wave.position() - 1400.0).abs() < 1e-9);
        assert!(!wave.is_done(100_000.0));
    }

    #[test]
    fn test_point_at_front_keeps_prior_brightness() {
        let config = RippleConfig::default();
        let points = [at(0, 0.0, 5000.0)];
        let mut wave = Wave::new(1000.0, 500.0, PI, 0.0, 100.0);
        wave.advance(8000.0);
        assert_eq!(wave.position(), 5000.0);

        let mut colors = floor_frame(1);
        let before = colors[0];
        wave.render(&points, &mut colors, &config);
        assert_eq!(colors[0], before);
    }

    #[test]
    fn test_front_fade_ramps_to_intensity() {
        let config = RippleConfig::default();
        let points = [at(0, 0.0, 4250.0), at(1, 0.0, 3500.0)];
        let wave = Wave::new(5000.0, 500.0, PI, 0.0, 100.0);
        let mut colors = floor_frame(2);
        let old = colors[0].brightness();
        wave.render(&points, &mut colors, &config);

        // Half way into the fade band.
        let expected = ((old + 100.0) / 2.0).trunc();
        assert!(close(colors[0].brightness(), expected));
        // Exactly one band behind the front: full intensity.
        assert!(close(colors[1].brightness(), 100.0));
    }

    #[test]
    fn test_exponential_decay_behind_front() {
        let config = RippleConfig::default();
        let points = [at(0, 0.0, 1000.0), at(1, 0.0, 0.0)];
        let wave = Wave::new(20_000.0, 500.0, PI, 0.0, 100.0);
        let mut colors = floor_frame(2);
        wave.render(&points, &mut colors, &config);

        let expected = (100.0 * 2f64.powf(-1.75)).trunc();
        assert!(close(colors[0].brightness(), expected));

        // Far enough behind to hit the floor.
        let far = Wave::new(100_000.0, 500.0, PI, 0.0, 100.0);
        far.render(&points, &mut colors, &config);
        assert!(close(colors[1].brightness(), config.min_brightness));
    }

    #[test]
    fn test_skips_points_outside_arc_or_ahead() {
        let config = RippleConfig::default();
        let points = [at(0, 3.0, 2000.0), at(1, 0.0, 9000.0)];
        let wave = Wave::new(5000.0, 500.0, PI, 0.0, 100.0);
        let mut colors = vec![Color(0x1234_5678); 2];
        wave.render(&points, &mut colors, &config);
        assert_eq!(colors[0], Color(0x1234_5678));
        assert_eq!(colors[1], Color(0x1234_5678));
    }

    #[test]
    fn test_side_fade_softens_edges() {
        let config = RippleConfig::default();
        let wave = Wave::new(20_000.0, 500.0, 2.0, PI, 100.0);
        let edge = wave.max_angle() - 0.1;
        let points = [at(0, PI, 1000.0), at(1, edge, 1000.0)];
        let mut colors = floor_frame(2);
        let old = colors[1].brightness();
        wave.render(&points, &mut colors, &config);

        let full = (100.0 * 2f64.powf(-1.75)).trunc();
        assert!(close(colors[0].brightness(), full));
        let softened = ((old + full) / 2.0).trunc();
        assert!(close(colors[1].brightness(), softened));
    }

    #[test]
    fn test_side_fade_across_seam() {
        let config = RippleConfig::default();
        // Arc [2π - 0.5, 0.5]; the point sits 0.1 inside the max edge.
        let wave = Wave::new(20_000.0, 500.0, 1.0, 0.0, 100.0);
        let points = [at(0, 0.4, 1000.0), at(1, TAU - 0.4, 1000.0)];
        let mut colors = floor_frame(2);
        wave.render(&points, &mut colors, &config);

        let full = (100.0 * 2f64.powf(-1.75)).trunc();
        assert!(colors[0].brightness() < full - 1.0);
        assert!(colors[1].brightness() < full - 1.0);
        assert!(colors[0].brightness() > config.min_brightness);
    }

    #[test]
    fn test_later_wave_blends_over_earlier() {
        let config = RippleConfig::default();
        let points = [at(0, PI, 1000.0)];
        let first = Wave::new(1750.0, 500.0, 2.0, PI, 100.0);
        let second = first.clone();

        let mut colors = floor_frame(1);
        let floor = colors[0].brightness();
        first.render(&points, &mut colors, &config);
        let after_first = colors[0].brightness();
        assert!(close(after_first, ((floor + 100.0) / 2.0).trunc()));

        second.render(&points, &mut colors, &config);
        let expected = ((after_first + 100.0) / 2.0).trunc();
        assert!(close(colors[0].brightness(), expected));
        assert!(colors[0].brightness() > after_first);
    }

    #[test]
    fn test_done_past_max_position() {
        let mut wave = Wave::new(99_990.0, 500.0, 1.0, 0.0, 100.0);
        assert!(!wave.is_done(100_000.0));
        wave.advance(40.0);
        assert!(wave.is_done(100_000.0));
    }
}
