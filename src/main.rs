//! Aberred Camera main entry point.
//!
//! Headless driver for the 2D camera controller. It builds the same ECS world
//! a windowed front-end would use and feeds it scripted commands instead of
//! polled keys, printing what a renderer would read back.
//!
//! # Main Loop
//!
//! 1. Load `camera.ini` (defaults when missing)
//! 2. Build the world and trigger the initial viewport resize
//! 3. Run each frame: update time, set held commands, advance the camera
//! 4. Print per-frame JSON snapshots or the final status text
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 120 --hold zoom_in --hold pan_right
//! cargo run --release -- --script demo.txt --seed 7 --json
//! ```

use aberredcamera::app::CameraApp;
use aberredcamera::resources::camera2d::CONTROLS_HELP;
use aberredcamera::resources::cameraconfig::CameraConfig;
use aberredcamera::resources::input::CameraCommand;
use aberredcamera::resources::shakerandom::FastShakeRandom;
use aberredcamera::script::{ScriptStep, load_script, parse_size};
use clap::Parser;
use std::path::PathBuf;

/// Aberred Camera 2D
#[derive(Parser)]
#[command(version, about = "Headless driver for the Aberred 2D camera controller")]
struct Cli {
    /// INI file with world, zoom, rotate, pan and shake settings.
    #[arg(long, value_name = "PATH", default_value = "./camera.ini")]
    config: PathBuf,

    /// Initial viewport size, e.g. 1024x768.
    #[arg(long, value_name = "WxH", default_value = "1024x768")]
    viewport: String,

    /// Fixed frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Seed for the shake generator (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Frame script to play. Overrides --frames/--hold.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Number of frames to run without a script.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Command held on every frame without a script (repeatable).
    #[arg(long = "hold", value_name = "COMMAND")]
    hold: Vec<String>,

    /// Print a JSON snapshot after every frame.
    #[arg(long)]
    json: bool,

    /// Write the default configuration and exit.
    /// Optionally provide a path (default: ./camera.ini).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write default config and quit
    if let Some(maybe_path) = cli.write_config {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from("./camera.ini"));
        if let Err(e) = CameraConfig::with_path(&path).save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", path.display());
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = CameraConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    let (width, height) = parse_size(&cli.viewport).map_err(|e| format!("--viewport: {e}"))?;

    let steps = match &cli.script {
        Some(path) => load_script(path)?,
        None => {
            let mut commands = Vec::new();
            for name in &cli.hold {
                match name.parse::<CameraCommand>() {
                    Ok(cmd) => commands.push(cmd),
                    Err(e) => log::warn!("{}, ignoring", e),
                }
            }
            vec![ScriptStep::Hold {
                frames: cli.frames,
                commands,
            }]
        }
    };

    let rng = match cli.seed {
        Some(seed) => FastShakeRandom::with_seed(seed),
        None => FastShakeRandom::new(),
    };

    log::info!("Hello, world! This is the Aberred Camera!");
    let mut app = CameraApp::new(config, rng);
    app.resize(width, height);

    let json = cli.json;
    app.run_script(&steps, cli.dt, |frame, camera| {
        if json {
            let line = serde_json::json!({ "frame": frame, "camera": camera.snapshot() });
            println!("{}", line);
        }
    });

    if !json {
        println!("{}", CONTROLS_HELP);
        println!("{}", app.camera().status_text());
    }

    Ok(())
}
