/* Modules */
#[macro_use]
mod shared;
mod building;
mod config;
mod config_tests;
mod coordinator;
mod elevator;
mod ui;

/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{Builder, JoinHandle};

/* Custom libraries */
use building::Building;
use config::{Config, Mode, Overrides};
use coordinator::{Coordinator, UiEvent, Update};
use elevator::{AnimationCommand, AnimationDriver, TransitionEnd};
use shared::Timing;

/// Terminal elevator simulator: a building with floors, cars and floor controls.
#[derive(Parser, Debug)]
#[clap(name = "elevator-house", version, about)]
struct Args {
    /// Configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of floors (overrides the configuration file)
    #[clap(long)]
    floors: Option<u32>,

    /// Number of elevator cars (overrides the configuration file)
    #[clap(long)]
    cars: Option<usize>,

    /// Floor controls: `single` (numbered buttons) or `hall` (Up/Down buttons)
    #[clap(long)]
    mode: Option<Mode>,

    /// Title shown above the building
    #[clap(long)]
    title: Option<String>,

    /// Read commands from this file instead of stdin
    #[clap(long)]
    script: Option<PathBuf>,

    /// Print every snapshot as a JSON line instead of drawing the building
    #[clap(long)]
    json: bool,
}

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration
    let mut config = load_or_default(&args.config);
    config.apply(Overrides {
        title: args.title.clone(),
        n_floors: args.floors,
        n_cars: args.cars,
        mode: args.mode,
    });
    let mode = config.building.mode;
    info!(
        "{}: {} floors, {} cars, {} controls",
        config.building.title, config.building.n_floors, config.building.n_cars, mode
    );
    if config.building.n_cars == 0 {
        warn!("The building has no elevator cars, every call will be rejected");
    }

    // Initialize channels
    let (ui_event_tx, ui_event_rx) = cbc::unbounded::<UiEvent>();
    let (update_tx, update_rx) = cbc::unbounded::<Update>();
    let (animation_tx, animation_rx) = cbc::unbounded::<AnimationCommand>();
    let (transition_end_tx, transition_end_rx) = cbc::unbounded::<TransitionEnd>();
    let (_coordinator_terminate_tx, coordinator_terminate_rx) = cbc::unbounded::<()>();
    let (_driver_terminate_tx, driver_terminate_rx) = cbc::unbounded::<()>();

    // Start the animation driver
    let timing = Timing::default();
    let driver = AnimationDriver::new(timing, animation_rx, transition_end_tx, driver_terminate_rx);
    let driver_thread = Builder::new()
        .name("animation_driver".into())
        .spawn(move || driver.run())?;

    // Start the coordinator
    let building = Building::new(
        &config.building.title,
        config.building.n_floors,
        config.building.n_cars,
        timing,
    );
    let coordinator = Coordinator::new(
        building,
        ui_event_rx,
        update_tx,
        animation_tx,
        transition_end_rx,
        coordinator_terminate_rx,
    );
    let coordinator_thread = Builder::new()
        .name("coordinator".into())
        .spawn(move || coordinator.run())?;

    // Start the input reader
    let script = args.script.clone();
    Builder::new().name("input".into()).spawn(move || match script {
        Some(path) => {
            let file = unwrap_or_exit!(std::fs::File::open(&path));
            ui::read_commands(io::BufReader::new(file), mode, ui_event_tx);
        }
        None => ui::read_commands(io::stdin().lock(), mode, ui_event_tx),
    })?;

    // Draw until the coordinator stops
    for update in update_rx.iter() {
        match update {
            Update::Snapshot(snapshot) if args.json => {
                println!("{}", unwrap_or_exit!(ui::render_json(&snapshot)));
            }
            Update::Snapshot(snapshot) => println!("{}", ui::render_text(&snapshot, mode)),
            Update::Rejected(e) => eprintln!("{}", e),
        }
    }

    // Join both before deciding, so a driver panic is logged too
    let coordinator_ok = join_thread("coordinator", coordinator_thread);
    let driver_ok = join_thread("animation driver", driver_thread);
    if !(coordinator_ok && driver_ok) {
        std::process::exit(1);
    }
    Ok(())
}

// Returns false if the thread panicked
fn join_thread(name: &str, handle: JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(e) => {
            let reason = e
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| e.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown cause".to_string());
            error!("The {} thread panicked: {}", name, reason);
            false
        }
    }
}

fn load_or_default(path: &Path) -> Config {
    if path.exists() {
        return unwrap_or_exit!(config::load_config(path));
    }
    info!("No configuration file at {}, using defaults", path.display());
    Config::default()
}
