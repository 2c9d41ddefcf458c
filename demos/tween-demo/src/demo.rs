// demo.rs
//
// Controller behind the demo window: owns the ball, the active tween and the
// easer selection, and computes what the renderer should draw. No windowing.

use glam::Vec2;
use log::info;
use tween_engine::{EaserCursor, EaserRegistry, Easing, Tween, TweenError};

use crate::clock::FrameClock;
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::input::{InputEvent, InputQueue, Key};

pub const INSTRUCTIONS: &str = "Click to move globe, press left and right to change easer";

/// Axis stub length past the graph's corner, in pixels.
const AXIS_OVERHANG: f32 = 20.0;

/// Screen rectangle the curve graph occupies. Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl GraphLayout {
    /// Middle 60% of the window, bottom edge at 80% of the height.
    pub fn for_window(width: f32, height: f32) -> Self {
        let left = width * 0.2;
        let bottom = height * 0.8;
        Self {
            left,
            right: left + width * 0.6,
            top: bottom - height * 0.6,
            bottom,
        }
    }
}

/// Everything needed to draw the graph: two axes and the sampled curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub y_axis: (Vec2, Vec2),
    pub x_axis: (Vec2, Vec2),
    /// `samples + 1` points from the curve's start to its end.
    pub curve: Vec<Vec2>,
}

impl Graph {
    /// Consecutive point pairs of the curve, ready for line drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.curve.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

pub struct TweenDemo {
    config: DemoConfig,
    registry: EaserRegistry,
    selection: EaserCursor,
    clock: FrameClock,
    ball: Vec2,
    tween: Option<Tween>,
    close_requested: bool,
}

impl TweenDemo {
    /// Ball centred, initial easing selected, clock started at `start_ms`.
    pub fn new(config: DemoConfig, start_ms: u64) -> Result<Self, DemoError> {
        if !(config.tween_duration > 0.0 && config.tween_duration.is_finite()) {
            return Err(TweenError::InvalidDuration(config.tween_duration).into());
        }
        if config.graph_samples == 0 {
            return Err(DemoError::NoGraphSamples);
        }
        let registry = EaserRegistry::standard();
        let selection = EaserCursor::at(&registry, config.initial_easing)?;
        let ball = Vec2::new(config.width / 2.0, config.height / 2.0);
        info!("{}: {}x{}, easer {}", config.title, config.width, config.height, config.initial_easing);
        Ok(Self {
            config,
            registry,
            selection,
            clock: FrameClock::new(start_ms),
            ball,
            tween: None,
            close_requested: false,
        })
    }

    /// One host frame: react to queued input, then advance time to `now_ms`.
    pub fn frame(&mut self, now_ms: u64, input: &mut InputQueue) -> Result<(), TweenError> {
        for event in input.drain() {
            self.handle(event)?;
        }
        let delta = self.clock.tick(now_ms);
        self.tick(delta)
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<(), TweenError> {
        match event {
            InputEvent::PointerDown { x, y } => self.move_to(Vec2::new(x, y))?,
            InputEvent::KeyDown(Key::Right) => {
                let easing = self.selection.select_next(&self.registry)?;
                info!("easer: {easing}");
            }
            InputEvent::KeyDown(Key::Left) => {
                let easing = self.selection.select_previous(&self.registry)?;
                info!("easer: {easing}");
            }
            InputEvent::KeyDown(Key::Escape) => {
                info!("close requested");
                self.close_requested = true;
            }
            InputEvent::KeyDown(Key::Other(_)) => {}
        }
        Ok(())
    }

    /// Start a fresh tween from the ball's position; any running one is dropped.
    pub fn move_to(&mut self, target: Vec2) -> Result<(), TweenError> {
        let tween = Tween::new(self.ball, target, self.easing()?, self.config.tween_duration)?;
        self.tween = Some(tween);
        Ok(())
    }

    /// Advance the active tween and move the ball along with it.
    pub fn tick(&mut self, delta: f32) -> Result<(), TweenError> {
        if let Some(tween) = self.tween.as_mut().filter(|tween| !tween.done()) {
            tween.update(delta)?;
            self.ball = tween.current();
        }
        Ok(())
    }

    pub fn easing(&self) -> Result<Easing, TweenError> {
        self.selection.current(&self.registry)
    }

    pub fn ball(&self) -> Vec2 {
        self.ball
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.as_ref().is_some_and(|tween| !tween.done())
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Name of the selected easing, shown in the corner.
    pub fn caption(&self) -> Result<&'static str, TweenError> {
        Ok(self.easing()?.name())
    }

    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    pub fn layout(&self) -> GraphLayout {
        GraphLayout::for_window(self.config.width, self.config.height)
    }

    /// Axes plus the selected curve, sampled at `graph_samples` intervals.
    /// X is spread linearly across the graph; Y runs from bottom to top.
    pub fn graph(&self) -> Result<Graph, TweenError> {
        let easing = self.easing()?;
        let layout = self.layout();
        let samples = self.config.graph_samples as f32;
        let width = layout.right - layout.left;

        let curve = (0..=self.config.graph_samples)
            .map(|i| -> Result<Vec2, TweenError> {
                let i = i as f32;
                Ok(Vec2::new(
                    layout.left + Easing::Linear.try_ease(i, 0.0, width, samples)?,
                    easing.try_ease(i, layout.bottom, layout.top - layout.bottom, samples)?,
                ))
            })
            .collect::<Result<Vec<_>, TweenError>>()?;

        Ok(Graph {
            y_axis: (
                Vec2::new(layout.left, layout.top),
                Vec2::new(layout.left, layout.bottom + AXIS_OVERHANG),
            ),
            x_axis: (
                Vec2::new(layout.left - AXIS_OVERHANG, layout.bottom),
                Vec2::new(layout.right, layout.bottom),
            ),
            curve,
        })
    }
}
