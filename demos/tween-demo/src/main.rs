//! Runs a scripted demo session at 60 fps and logs what a renderer would draw.
//!
//! Set `RUST_LOG=debug` to see engine logs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tween_demo::{DemoConfig, InputEvent, InputQueue, Key, TweenDemo};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file (defaults apply to missing fields)
    config: Option<PathBuf>,

    /// Milliseconds between simulated frames
    #[arg(long, default_value = "16")]
    frame_ms: u64,
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            DemoConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(DemoConfig::default()),
    }
}

/// Input injected at a given frame.
fn scripted(frame: u64) -> Option<InputEvent> {
    match frame {
        0 => Some(InputEvent::PointerDown { x: 80.0, y: 60.0 }),
        40 => Some(InputEvent::KeyDown(Key::Right)),
        45 => Some(InputEvent::PointerDown { x: 560.0, y: 400.0 }),
        100 => Some(InputEvent::KeyDown(Key::Left)),
        105 => Some(InputEvent::KeyDown(Key::Left)),
        110 => Some(InputEvent::PointerDown { x: 320.0, y: 240.0 }),
        200 => Some(InputEvent::KeyDown(Key::Escape)),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let mut demo = TweenDemo::new(config, 0)?;
    let mut input = InputQueue::new();
    info!("{}", demo.instructions());

    let mut frame = 0;
    while !demo.close_requested() {
        if let Some(event) = scripted(frame) {
            input.push(event);
        }
        demo.frame(frame * args.frame_ms, &mut input)?;

        if frame % 10 == 0 {
            let graph = demo.graph()?;
            let ball = demo.ball();
            info!(
                "frame {frame:>3}: {:<14} ball ({:6.1}, {:6.1}) graph {} segments",
                demo.caption()?,
                ball.x,
                ball.y,
                graph.segments().count(),
            );
        }
        frame += 1;
    }

    info!("{} closed after {frame} frames", demo.title());
    Ok(())
}
