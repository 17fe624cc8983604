//! patrol-harness: headless runner for SENTINEL scenarios.
//!
//! Usage:
//!   patrol-harness run --scenario lobby.json --ticks 900 --seed 7
//!   patrol-harness demo --ticks 600
//!   patrol-harness mesh --fov 60 --range 10 --segments 10
//!   patrol-harness template > corridor.json

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use log::info;

use sentinel_core::config::SentryConfig;
use sentinel_core::events::SentryEvent;
use sentinel_sim::{ConeMesh, Scenario, SentryEngine, SimConfig};

const DEFAULT_TICKS: u64 = 900;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "demo" => cmd_demo(&args[2..]),
        "mesh" => cmd_mesh(&args[2..]),
        "template" => cmd_template(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "patrol-harness: SENTINEL sentry simulation runner\n\
         \n\
         Commands:\n\
         \n\
         run       Run a scenario file headless and report detections\n\
         \n\
           --scenario <path>  Scenario JSON file\n\
           --ticks <N>        Ticks to simulate at 30 Hz (default: 900)\n\
           --seed <N>         RNG seed for wandering intruders (default: 42)\n\
           --json             Print every snapshot as a JSON line instead\n\
         \n\
         demo      Run the built-in corridor scenario (same options minus --scenario)\n\
         \n\
         mesh      Print a vision cone mesh as JSON\n\
         \n\
           --fov <deg>        Field of view (default: 60)\n\
           --range <units>    Detection range (default: 10)\n\
           --segments <N>     Fan segments (default: 10)\n\
         \n\
         template  Print the corridor scenario as JSON, as a starting point\n\
         \n\
         Set RUST_LOG=debug to trace every sweep.\n"
    );
}

/// Value following `--name`, if present.
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Parse `--name <value>`, falling back to `default` when absent.
fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str, default: T) -> Result<T> {
    match flag_value(args, name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid value for {name}: {raw}")),
        None => Ok(default),
    }
}

fn cmd_run(args: &[String]) -> Result<()> {
    let Some(path) = flag_value(args, "--scenario") else {
        bail!("--scenario <path> is required");
    };
    let path = PathBuf::from(path);
    let scenario = Scenario::load(&path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    simulate(&scenario, args)
}

fn cmd_demo(args: &[String]) -> Result<()> {
    simulate(&Scenario::corridor(), args)
}

fn simulate(scenario: &Scenario, args: &[String]) -> Result<()> {
    let ticks: u64 = parse_flag(args, "--ticks", DEFAULT_TICKS)?;
    let seed: u64 = parse_flag(args, "--seed", 42)?;
    let json = args.iter().any(|a| a == "--json");

    let mut engine = SentryEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    let ids = engine.load_scenario(scenario)?;
    info!(
        "scenario '{}': {} sentries, {} players, {} obstacles",
        scenario.name,
        ids.len(),
        scenario.players.len(),
        scenario.obstacles.len()
    );

    let mut detections = 0u64;
    for _ in 0..ticks {
        let snapshot = engine.tick();
        if json {
            println!("{}", serde_json::to_string(&snapshot)?);
            continue;
        }
        for event in &snapshot.events {
            if let SentryEvent::PlayerDetected(d) = event {
                detections += 1;
                println!(
                    "t={:7.3}s sentry {} saw player at ({:.2}, {:.2}, {:.2}) range {:.2}",
                    snapshot.time.elapsed_secs, d.sentry_id, d.point.x, d.point.y, d.point.z, d.distance
                );
            }
        }
    }

    if !json {
        println!(
            "{} detections over {:.1}s",
            detections,
            engine.time().elapsed_secs
        );
    }
    Ok(())
}

fn cmd_mesh(args: &[String]) -> Result<()> {
    let defaults = SentryConfig::default();
    let config = SentryConfig {
        field_of_view_deg: parse_flag(args, "--fov", defaults.field_of_view_deg)?,
        detection_range: parse_flag(args, "--range", defaults.detection_range)?,
        fov_mesh_segments: parse_flag(args, "--segments", defaults.fov_mesh_segments)?,
        ..defaults
    };
    config.validate()?;

    let mesh = ConeMesh::from_config(&config);
    println!("{}", serde_json::to_string_pretty(&mesh)?);
    Ok(())
}

fn cmd_template() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Scenario::corridor())?);
    Ok(())
}
