//! intercept-cli: headless scenario runner and one-shot solver frontend.
//!
//! Usage:
//!   intercept-cli run --seed 42 --targets 3 --ticks 1200 --snapshot-every 60
//!   intercept-cli solve --target "10,0,0;1,0,0" --order 1 --fallback 5

use std::process;

use glam::DVec3;

use intercept_core::commands::SimCommand;
use intercept_core::constants::{
    DEFAULT_EXPIRY_LIFETIME, DEFAULT_FALLBACK_TIME, DEFAULT_ORDER_TO_MINIMIZE,
};
use intercept_sim::{SimConfig, SimEngine};
use intercept_solver::{solve_intercept_derivative, ScaledSeries};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "solve" => cmd_solve(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "intercept-cli: headless ballistic-intercept simulation runner\n\
         \n\
         Commands:\n\
         \n\
         run       Run a seeded scenario and print snapshots as JSON lines\n\
         \n\
           --seed <N>            RNG seed (default: 42)\n\
           --targets <N>         Random targets to spawn at start (default: 1)\n\
           --ticks <N>           Ticks to simulate (default: 1200)\n\
           --snapshot-every <N>  Print every Nth snapshot (default: 60)\n\
           --order <N>           Derivative order to solve for (default: 1)\n\
           --fallback <T>        Fallback intercept time in seconds (default: 5)\n\
         \n\
         solve     Solve one intercept and print the solution as JSON\n\
         \n\
           --target <series>     Target derivatives, e.g. \"10,0,0;1,0,0\"\n\
           --origin <series>     Shooter derivatives (default: stationary origin)\n\
           --elapsed <T>         Seconds the target has already flown (default: 0)\n\
           --order <N>           Derivative order to solve for (default: 1)\n\
           --fallback <T>        Fallback intercept time in seconds (default: 5)\n\
           --expiry <T>          Projectile expiry lifetime in seconds (default: 20)\n\
         \n\
         Examples:\n\
         \n\
           intercept-cli run --seed 7 --targets 3 --ticks 600\n\
           intercept-cli solve --target \"100,0,0;-10,0,0\" --order 2\n"
    );
}

fn cmd_run(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let targets = parse_u64(args, "--targets", 1);
    let ticks = parse_u64(args, "--ticks", 1200);
    let snapshot_every = parse_u64(args, "--snapshot-every", 60).max(1);
    let order_to_minimize = parse_u64(args, "--order", DEFAULT_ORDER_TO_MINIMIZE as u64) as u32;
    let fallback_time = parse_f64(args, "--fallback", DEFAULT_FALLBACK_TIME);

    let mut engine = SimEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    for _ in 0..targets {
        engine.queue_command(SimCommand::SpawnRandomTarget);
        engine.queue_command(SimCommand::FireProjectile {
            derivatives: Vec::new(),
            order_to_minimize,
            fallback_time,
        });
    }

    for tick in 0..ticks {
        let snapshot = engine.tick();
        if tick % snapshot_every == 0 || !snapshot.events.is_empty() {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{line}"),
                Err(error) => {
                    eprintln!("Failed to serialize snapshot: {error}");
                    process::exit(1);
                }
            }
        }
    }

    let score = engine.score();
    eprintln!(
        "done: {} targets, {} projectiles, {} hits, {} targets expired, {} projectiles expired",
        score.targets_spawned,
        score.projectiles_fired,
        score.hits,
        score.targets_expired,
        score.projectiles_expired
    );
}

fn cmd_solve(args: &[String]) {
    let Some(target_raw) = parse_series(args, "--target") else {
        eprintln!("solve requires --target <series>");
        print_usage();
        process::exit(1);
    };
    let origin_raw = parse_series(args, "--origin").unwrap_or_else(|| vec![DVec3::ZERO]);
    let elapsed = parse_f64(args, "--elapsed", 0.0);
    let order = parse_u64(args, "--order", DEFAULT_ORDER_TO_MINIMIZE as u64) as u32;
    let fallback_time = parse_f64(args, "--fallback", DEFAULT_FALLBACK_TIME);
    let expiry = parse_f64(args, "--expiry", DEFAULT_EXPIRY_LIFETIME);

    let target = ScaledSeries::from_derivatives(&target_raw);
    let origin = ScaledSeries::from_derivatives(&origin_raw);

    match solve_intercept_derivative(&target, &origin, elapsed, order, fallback_time, expiry) {
        Ok(solution) => {
            let json = serde_json::json!({
                "derivative": [solution.derivative.x, solution.derivative.y, solution.derivative.z],
                "intercept_time": solution.intercept_time,
                "used_fallback": solution.used_fallback,
            });
            println!("{json}");
        }
        Err(error) => {
            eprintln!("Solve failed: {error}");
            process::exit(1);
        }
    }
}

/// Parse a semicolon-separated list of comma-separated vectors:
/// `"10,0,0;1,0,0"` is position (10,0,0) with velocity (1,0,0).
fn parse_series(args: &[String], flag: &str) -> Option<Vec<DVec3>> {
    let raw = flag_value(args, flag)?;
    let mut series = Vec::new();
    for part in raw.split(';') {
        let components: Vec<&str> = part.split(',').collect();
        if components.len() != 3 {
            eprintln!("Bad vector in {flag}: {part} (expected x,y,z)");
            process::exit(1);
        }
        let mut v = [0.0f64; 3];
        for (slot, text) in v.iter_mut().zip(&components) {
            match text.trim().parse() {
                Ok(value) => *slot = value,
                Err(_) => {
                    eprintln!("Bad number in {flag}: {text}");
                    process::exit(1);
                }
            }
        }
        series.push(DVec3::new(v[0], v[1], v[2]));
    }
    Some(series)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    match flag_value(args, flag) {
        Some(text) => match text.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Bad value for {flag}: {text}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn parse_f64(args: &[String], flag: &str, default: f64) -> f64 {
    match flag_value(args, flag) {
        Some(text) => match text.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Bad value for {flag}: {text}");
                process::exit(1);
            }
        },
        None => default,
    }
}
