//! Headless version of the tween demo window: click to send the globe to the
//! pointer, left and right arrows to cycle the easing curve. The host owns
//! the window, the clock and drawing; this crate decides what to draw.

pub mod clock;
pub mod config;
pub mod demo;
pub mod error;
pub mod input;

pub use clock::FrameClock;
pub use config::DemoConfig;
pub use demo::{Graph, GraphLayout, TweenDemo, INSTRUCTIONS};
pub use error::DemoError;
pub use input::{InputEvent, InputQueue, Key};
