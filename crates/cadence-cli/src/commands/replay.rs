//! Trace replay command

use std::path::Path;

use anyhow::{Context, Result};
use cadence_core::Vec2;
use cadence_runtime::{FrameLoop, InputEvent, Key, RuntimeConfig};
use serde::{Deserialize, Serialize};

pub struct ReplayArgs {
    pub trace: String,
    pub config: Option<String>,
    pub format: String,
}

/// A recorded sequence of frames
#[derive(Debug, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub frames: Vec<TraceFrame>,
}

/// One frame: raw wall delta in seconds and the events drained that frame
#[derive(Debug, Deserialize)]
pub struct TraceFrame {
    pub delta: f64,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// State observed after a frame's events were applied
#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub time: f64,
    pub unscaled_time: f64,
    pub delta: f64,
    pub fixed_steps: u64,
    pub fixed_alpha: f64,
    pub smooth_fps: f64,
    pub held: Vec<Key>,
    pub pressed: Vec<Key>,
    pub released: Vec<Key>,
    pub mouse_position: Vec2,
    pub mouse_delta: Vec2,
    pub scroll: Vec2,
    pub actions: Vec<String>,
}

pub fn run(args: ReplayArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => RuntimeConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config {}", path))?,
        None => RuntimeConfig::default(),
    };

    let content = std::fs::read_to_string(&args.trace)
        .with_context(|| format!("Failed to read trace {}", args.trace))?;
    let trace = parse_trace(&content)?;
    log::info!("replaying {} frame(s) from {}", trace.frames.len(), args.trace);

    let reports = replay(&config, trace)?;

    match args.format.as_str() {
        "text" => {
            for report in &reports {
                println!("{}", format_text(report));
            }
        }
        "json" => {
            for report in &reports {
                println!("{}", serde_json::to_string(report)?);
            }
        }
        other => anyhow::bail!("Unknown format: {}", other),
    }

    Ok(())
}

pub fn parse_trace(content: &str) -> Result<Trace> {
    toml::from_str(content).context("Failed to parse trace")
}

/// Run every frame of `trace` through a fresh frame loop
pub fn replay(config: &RuntimeConfig, trace: Trace) -> Result<Vec<FrameReport>> {
    let mut frame_loop = FrameLoop::from_config(config).context("Invalid runtime config")?;
    let mut reports = Vec::with_capacity(trace.frames.len());

    for (index, frame) in trace.frames.into_iter().enumerate() {
        frame_loop
            .begin_frame_secs(frame.delta, frame.events)
            .with_context(|| format!("Frame {} has invalid delta {}", index, frame.delta))?;
        reports.push(report(&frame_loop));
    }

    Ok(reports)
}

fn report(frame_loop: &FrameLoop) -> FrameReport {
    let clock = &frame_loop.clock;
    let input = &frame_loop.input;
    FrameReport {
        frame: clock.frame_count(),
        time: clock.time(),
        unscaled_time: clock.unscaled_time(),
        delta: clock.delta_time(),
        fixed_steps: clock.fixed_steps_this_frame(),
        fixed_alpha: clock.fixed_alpha(),
        smooth_fps: clock.smooth_fps(),
        held: input.held_keys().collect(),
        pressed: input.keys_just_pressed().collect(),
        released: input.keys_just_released().collect(),
        mouse_position: input.mouse_position(),
        mouse_delta: input.mouse_delta(),
        scroll: input.mouse_scroll_delta(),
        actions: frame_loop.actions.actions_just_pressed(input),
    }
}

fn format_text(report: &FrameReport) -> String {
    let mut line = format!(
        "#{:<4} t={:.4} dt={:.4} fixed={} alpha={:.2} fps~{:.1}",
        report.frame,
        report.time,
        report.delta,
        report.fixed_steps,
        report.fixed_alpha,
        report.smooth_fps
    );
    if !report.held.is_empty() {
        line.push_str(&format!(" held={:?}", report.held));
    }
    if !report.pressed.is_empty() {
        line.push_str(&format!(" down={:?}", report.pressed));
    }
    if !report.released.is_empty() {
        line.push_str(&format!(" up={:?}", report.released));
    }
    if !report.mouse_delta.is_zero() {
        line.push_str(&format!(
            " mouse={} d={}",
            report.mouse_position, report.mouse_delta
        ));
    }
    if !report.scroll.is_zero() {
        line.push_str(&format!(" scroll={}", report.scroll));
    }
    if !report.actions.is_empty() {
        line.push_str(&format!(" actions={:?}", report.actions));
    }
    line
}
