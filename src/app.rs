use std::time::Instant;

use crate::color::{self, Color};
use crate::config::{LifeConfig, RippleConfig};
use crate::error::PatternError;
use crate::geometry::{Geometry, PetalModel};
use crate::simulation::{LifePattern, Pattern, PatternKind, RipplePattern};

/// Shading ramp for text previews, dark to bright
const SHADES: &[u8] = b" .:-=+*#%@";

/// Headless host: owns the model and the color buffer and drives the active
/// pattern once per frame.
pub struct App {
    model: PetalModel,
    kind: PatternKind,
    pattern: Box<dyn Pattern>,
    colors: Vec<Color>,
    frame_number: u64,
    fps_counter: FpsCounter,
}

fn build(model: &PetalModel, kind: PatternKind) -> Result<Box<dyn Pattern>, PatternError> {
    Ok(match kind {
        PatternKind::Life => Box::new(LifePattern::new(model, LifeConfig::default())?),
        PatternKind::Ripple => Box::new(RipplePattern::new(model, RippleConfig::default())?),
    })
}

impl App {
    pub fn new(model: PetalModel, kind: PatternKind) -> Result<Self, PatternError> {
        log::info!(
            "Model: {} points, {} petals x {} rows",
            model.points().len(),
            model.num_cols(),
            model.num_rows()
        );
        let pattern = build(&model, kind)?;
        log::info!("Active pattern: {}", pattern.name());
        let colors = vec![Color::BLACK; model.points().len()];

        Ok(Self {
            model,
            kind,
            pattern,
            colors,
            frame_number: 0,
            fps_counter: FpsCounter::new(),
        })
    }

    /// Replace the active pattern with a freshly built one.
    pub fn switch(&mut self, kind: PatternKind) -> Result<(), PatternError> {
        self.pattern = build(&self.model, kind)?;
        self.kind = kind;
        log::info!("Switched to {}", self.pattern.name());
        Ok(())
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn model(&self) -> &PetalModel {
        &self.model
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The current frame as raw packed bytes, ready for an output sink.
    pub fn frame_bytes(&self) -> &[u8] {
        color::as_bytes(&self.colors)
    }

    /// Advance the active pattern by `delta_ms` and redraw.
    pub fn frame(&mut self, delta_ms: f64) {
        self.pattern.advance(delta_ms, &mut self.colors);
        self.frame_number = self.frame_number.wrapping_add(1);

        if let Some(fps) = self.fps_counter.tick() {
            log::debug!("{} frames/s (frame {})", fps.round(), self.frame_number);
        }
    }

    pub fn mean_brightness(&self) -> f64 {
        let total: f64 = self.colors.iter().map(|c| c.brightness()).sum();
        total / self.colors.len() as f64
    }

    /// One character per point along a petal, inner end first.
    pub fn petal_preview(&self, petal: usize) -> String {
        self.model.petals()[petal]
            .iter()
            .map(|&i| {
                let b = self.colors[i].brightness() / 100.0;
                let shade = (b * (SHADES.len() - 1) as f64).round() as usize;
                SHADES[shade.min(SHADES.len() - 1)] as char
            })
            .collect()
    }
}

/// Frame throughput counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_frame_fills_buffer() {
        let model = PetalModel::temple(6, 8).unwrap();
        let mut app = App::new(model, PatternKind::Life).unwrap();
        // Past the cross-fade window, before the first generation.
        app.frame(600.0);
        assert_eq!(app.frame_number(), 1);
        assert!(app.colors().iter().all(|c| {
            let b = c.brightness();
            (b - 20.0).abs() < 1.0 || (b - 100.0).abs() < 1.0
        }));
        assert_eq!(app.frame_bytes().len(), 6 * 8 * 4);
    }

    #[test]
    fn test_switch_pattern() {
        let model = PetalModel::temple(6, 8).unwrap();
        let mut app = App::new(model, PatternKind::Life).unwrap();
        app.switch(PatternKind::Ripple).unwrap();
        assert_eq!(app.kind(), PatternKind::Ripple);
        app.frame(16.0);
        // Waves start well inside the innermost point, so everything is at the floor.
        assert!((app.mean_brightness() - Color::gray(5.0).brightness()).abs() < 1e-9);
    }

    #[test]
    fn test_petal_preview_length() {
        let model = PetalModel::temple(3, 12).unwrap();
        let mut app = App::new(model, PatternKind::Life).unwrap();
        app.frame(16.0);
        let preview = app.petal_preview(1);
        assert_eq!(preview.chars().count(), 12);
        assert!(preview.chars().all(|c| SHADES.contains(&(c as u8))));
    }
}
