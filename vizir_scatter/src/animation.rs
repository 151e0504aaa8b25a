// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated rendering.
//!
//! The crate does not interpolate or schedule frames itself. A host supplies an
//! [`Interpolator`] that, for each frame, turns the target configuration into the
//! configuration to draw now. [`AnimatedScatter`] is the outer layer: it asks for a frame,
//! strips the animation settings from it, and hands it to the plain renderer. The plain
//! renderer never sees `animate`, so a frame can never start another animation.

extern crate alloc;

use alloc::sync::Arc;
use core::fmt;

use crate::error::ScatterError;
use crate::scatter_chart::{RenderOutput, ScatterChartSpec};

/// Animation settings.
#[derive(Clone, Default)]
pub struct AnimationConfig {
    /// Delay before the animation starts, in milliseconds.
    pub delay: f64,
    /// Total duration, in milliseconds.
    pub duration: Option<f64>,
    /// Speed of the interpolation, as an alternative to `duration`.
    pub velocity: Option<f64>,
    /// Called once when an animation reaches its target.
    pub on_end: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl AnimationConfig {
    /// Creates settings with no delay and interpolator-chosen timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start delay.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the velocity.
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Sets the completion callback.
    pub fn with_on_end(mut self, on_end: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_end = Some(Arc::new(on_end));
        self
    }
}

impl fmt::Debug for AnimationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationConfig")
            .field("delay", &self.delay)
            .field("duration", &self.duration)
            .field("velocity", &self.velocity)
            .field("on_end", &self.on_end.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Produces per-frame configurations converging on a target.
pub trait Interpolator {
    /// Returns the configuration to draw for the next frame.
    ///
    /// `target` is always the latest configuration; it replaces whatever target earlier frames
    /// were heading for.
    fn frame(&mut self, target: &ScatterChartSpec, config: &AnimationConfig) -> ScatterChartSpec;

    /// Returns `true` once the last frame produced was the target itself.
    fn is_finished(&self) -> bool;
}

/// An interpolator that jumps straight to the target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl Interpolator for Immediate {
    fn frame(&mut self, target: &ScatterChartSpec, _config: &AnimationConfig) -> ScatterChartSpec {
        target.clone()
    }

    fn is_finished(&self) -> bool {
        true
    }
}

/// Renders a chart through an [`Interpolator`] when it asks to be animated.
#[derive(Debug)]
pub struct AnimatedScatter<I> {
    interpolator: I,
    ended: bool,
}

impl<I: Interpolator> AnimatedScatter<I> {
    /// Wraps `interpolator`.
    pub fn new(interpolator: I) -> Self {
        Self {
            interpolator,
            ended: false,
        }
    }

    /// The wrapped interpolator.
    pub fn interpolator(&self) -> &I {
        &self.interpolator
    }

    /// Renders one frame heading toward `target`.
    ///
    /// Without `target.animate` this is a plain render of `target`. Otherwise the frame comes
    /// from the interpolator; `on_end` runs the first time the interpolator reports it is done.
    pub fn render(&mut self, target: &ScatterChartSpec) -> Result<RenderOutput, ScatterError> {
        let Some(config) = &target.animate else {
            return target.render();
        };
        let mut frame = self.interpolator.frame(target, config);
        frame.animate = None;
        let out = frame.render()?;

        if !self.interpolator.is_finished() {
            self.ended = false;
        } else if !self.ended {
            self.ended = true;
            log::debug!("animation finished");
            if let Some(on_end) = &config.on_end {
                on_end();
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::datum::Datum;

    /// Grows the constant point size from 1 to the target's in `steps` frames.
    struct GrowSize {
        step: usize,
        steps: usize,
    }

    impl Interpolator for GrowSize {
        fn frame(&mut self, target: &ScatterChartSpec, _: &AnimationConfig) -> ScatterChartSpec {
            self.step = (self.step + 1).min(self.steps);
            let goal = target.size.as_const().copied().unwrap_or(1.0);
            let t = self.step as f64 / self.steps as f64;
            target.clone().with_size(1.0 + (goal - 1.0) * t)
        }

        fn is_finished(&self) -> bool {
            self.step == self.steps
        }
    }

    fn first_size(out: &RenderOutput) -> f64 {
        out.tree
            .points()
            .next()
            .and_then(|p| p.path())
            .map(|p| p.size)
            .expect("one point")
    }

    #[test]
    fn frames_converge_and_on_end_runs_once() {
        static ENDED: AtomicUsize = AtomicUsize::new(0);
        let target = ScatterChartSpec::new()
            .with_data(vec![Datum::new(0.0, 0.0)])
            .with_size(9.0)
            .with_animate(AnimationConfig::new().with_duration(300.0).with_on_end(|| {
                ENDED.fetch_add(1, Ordering::SeqCst);
            }));
        let mut animated = AnimatedScatter::new(GrowSize { step: 0, steps: 4 });

        let sizes: std::vec::Vec<_> = (0..6)
            .map(|_| first_size(&animated.render(&target).expect("valid")))
            .collect();
        assert_eq!(sizes, vec![3.0, 5.0, 7.0, 9.0, 9.0, 9.0]);
        assert_eq!(ENDED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn without_animate_it_is_a_plain_render() {
        let target = ScatterChartSpec::new()
            .with_data(vec![Datum::new(0.0, 0.0)])
            .with_size(9.0);
        let mut animated = AnimatedScatter::new(GrowSize { step: 0, steps: 4 });
        assert_eq!(first_size(&animated.render(&target).expect("valid")), 9.0);
        assert_eq!(animated.interpolator().step, 0);
    }

    #[test]
    fn immediate_draws_the_target() {
        let target = ScatterChartSpec::new()
            .with_data(vec![Datum::new(0.0, 0.0)])
            .with_size(4.0)
            .with_animate(AnimationConfig::new());
        let mut animated = AnimatedScatter::new(Immediate);
        assert_eq!(first_size(&animated.render(&target).expect("valid")), 4.0);
    }
}
