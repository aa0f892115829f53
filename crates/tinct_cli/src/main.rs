//! Tinct CLI
//!
//! Preview color and gradient motions without a rendering surface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tinct_core::Color;
use tinct_motion::{lerp_color, AnyMotion, MemoryTarget, MotionParams};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::{TinctConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "tinct")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Color and gradient motion previewer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a motion through its start, intermediate and end frames
    Preview {
        /// Config file, or a directory containing tinct.toml
        #[arg(default_value = ".")]
        source: PathBuf,

        /// Number of intermediate frames (overrides the config)
        #[arg(short, long, value_parser = clap::value_parser!(u16))]
        frames: Option<u16>,

        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interpolate between two colors
    Lerp {
        from: String,
        to: String,
        /// Progress between 0 and 1
        delta: f64,
    },

    /// Write a sample tinct.toml into a directory
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Preview {
            source,
            frames,
            json,
        } => cmd_preview(&source, frames, json),

        Commands::Lerp { from, to, delta } => cmd_lerp(&from, &to, delta),

        Commands::Init { path } => cmd_init(&path),
    }
}

/// Target state captured after one step
#[derive(Debug, Serialize)]
struct Frame {
    phase: &'static str,
    delta: f64,
    target: MemoryTarget,
}

/// Evenly spaced deltas strictly between 0 and 1
fn interior_deltas(frames: usize) -> Vec<f64> {
    (1..=frames)
        .map(|i| i as f64 / frames.saturating_add(1) as f64)
        .collect()
}

fn run_frames(motion: &AnyMotion, frames: usize) -> Vec<Frame> {
    let mut target = MemoryTarget::new();
    let mut recorded = Vec::with_capacity(frames.saturating_add(3));

    motion.on_start(MotionParams::new(&mut target, 0.0));
    recorded.push(Frame {
        phase: "start",
        delta: 0.0,
        target: target.clone(),
    });

    for delta in interior_deltas(frames) {
        motion.on_update(MotionParams::new(&mut target, delta));
        recorded.push(Frame {
            phase: "update",
            delta,
            target: target.clone(),
        });
    }

    motion.on_end(MotionParams::new(&mut target, 1.0));
    recorded.push(Frame {
        phase: "end",
        delta: 1.0,
        target: target.clone(),
    });

    motion.turn_off(&mut target);
    recorded.push(Frame {
        phase: "off",
        delta: 1.0,
        target,
    });

    recorded
}

fn describe(target: &MemoryTarget) -> String {
    let mut parts: Vec<String> = target
        .styles
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect();
    parts.extend(
        target
            .attributes
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value)),
    );
    for child in &target.children {
        let attributes: Vec<String> = child
            .attributes
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect();
        parts.push(format!("<{} {}/>", child.tag, attributes.join(" ")));
    }

    if parts.is_empty() {
        "(nothing set)".to_string()
    } else {
        parts.join("  ")
    }
}

fn cmd_preview(source: &std::path::Path, frames: Option<u16>, json: bool) -> Result<()> {
    let config = TinctConfig::load(source)?;
    let frames = usize::from(frames.unwrap_or(config.preview.frames));

    let motion = config
        .motion
        .build()
        .with_context(|| format!("Invalid motion in {}", source.display()))?;

    info!("Previewing {} over {} intermediate frames", motion.name(), frames);

    let recorded = run_frames(&motion, frames);

    if json {
        println!("{}", serde_json::to_string_pretty(&recorded)?);
    } else {
        for frame in &recorded {
            println!(
                "{:<6} {:<8.4} {}",
                frame.phase,
                frame.delta,
                describe(&frame.target)
            );
        }
    }

    Ok(())
}

fn cmd_lerp(from: &str, to: &str, delta: f64) -> Result<()> {
    let start = Color::parse(from).with_context(|| format!("Invalid start color '{}'", from))?;
    let end = Color::parse(to).with_context(|| format!("Invalid end color '{}'", to))?;

    debug!("lerp {} -> {} at {}", start, end, delta);
    println!("{}", lerp_color(&start, &end, delta));

    Ok(())
}

fn cmd_init(path: &std::path::Path) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    fs::create_dir_all(path)?;
    fs::write(&config_path, TinctConfig::sample().to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Created {}", config_path.display());
    info!("Run `tinct preview {}` to try it", path.display());

    Ok(())
}
