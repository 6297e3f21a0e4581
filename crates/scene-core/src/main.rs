//! Headless showroom runner.
//!
//! Drives a straight-line agent through the procedurally laid-out world and
//! reports every zone crossing, the resulting camera presets, and the blur
//! fade state. Useful for tuning layout constants and for producing a
//! transition log that external tools can replay.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use scene_core::fixtures::{RecordingRig, RecordingSink, StraightLineDriver};
use scene_core::{
    default_sections, Scene, SceneConfig, TransitionLog, BLUR_X_UNIFORM, BLUR_Y_UNIFORM,
};
use scene_events::Vec2;

/// Command line arguments for the headless runner
#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(about = "Headless driver for the showroom scene core")]
struct Args {
    /// Random seed for reproducible layout jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Logical tick rate in ticks per second
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,

    /// Agent speed in world units per second
    #[arg(long, default_value_t = 12.0)]
    speed: f32,

    /// Distance before the first section at which the drive starts
    #[arg(long, default_value_t = 20.0)]
    lead_in: f32,

    /// Path to a TOML scene configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the transition stream as JSONL to this path
    #[arg(long)]
    events_out: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => SceneConfig::from_file(path)?,
        None => SceneConfig::default(),
    };

    println!("Showroom headless runner");
    println!("========================");
    println!("Seed: {}", args.seed);
    println!("Ticks: {} at {} Hz", args.ticks, args.tick_rate);
    println!("Speed: {} units/s", args.speed);
    println!();

    let sections = default_sections();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let start = Vec2::new(config.layout.base_x - args.lead_in, config.layout.base_y);
    let delta = 1.0 / args.tick_rate;
    let driver = StraightLineDriver::new(start, args.speed * delta);
    let sink = RecordingSink::new();

    let mut scene = Scene::new(
        config,
        &sections,
        &mut rng,
        Box::new(driver),
        Box::new(RecordingRig::new()),
        Box::new(sink.clone()),
    )?;

    println!("World layout:");
    for section in &scene.layout().sections {
        println!("  {} at {}", section.name, section.position);
    }
    println!("  {} connecting tiles", scene.layout().tiles.len());
    println!();

    let log = TransitionLog::new();
    log.attach(&scene.registry());

    for tick in 1..=args.ticks {
        log.set_tick(tick);
        scene.step(delta)?;
    }

    let records = log.records();
    println!("Drive complete:");
    println!("  Transitions: {}", records.len());
    for record in &records {
        println!("    tick {:>5}  {}:{}", record.tick, record.label, record.kind);
    }
    println!("  Final camera preset: {}", scene.active_preset());
    println!(
        "  Blur: x={:.3} y={:.3}",
        sink.value(BLUR_X_UNIFORM).unwrap_or_default(),
        sink.value(BLUR_Y_UNIFORM).unwrap_or_default()
    );
    println!("  Traveled: {:.1} units", scene.journey().traveled());
    println!("  Journey prompt shown: {}", scene.journey().shown());
    println!("  Title: {}", scene.marquee().render());

    if let Some(path) = &args.events_out {
        let mut file = fs::File::create(path)?;
        for record in &records {
            serde_json::to_writer(&mut file, record)?;
            writeln!(file)?;
        }
        println!();
        println!(
            "Wrote {} transition records to {}",
            records.len(),
            path.display()
        );
    }

    scene.teardown();
    Ok(())
}
