//! Pot/bet parameter sweep.
//!
//! Evaluates the EV grid for every integer pot/bet combination in a
//! range (default [1,10] x [1,10], the reference UI input bounds) and
//! reports which combinations have an on-grid equilibrium. Grids are
//! independent, so the sweep fans out across cores.
//!
//! Usage:
//!   cargo run --release --bin sweep -- [OPTIONS]
//!
//! Options:
//!   --max <N>        Upper stake bound, inclusive (default: 10)
//!   --step <F>       Threshold step as a fraction (default: 0.05)
//!   --output <FILE>  JSON output file (default: sweep.json)

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use nash_grid::grid::{compute_ev_grid_with, GridConfig, GridError};

/// Sweep result for one pot/bet combination.
#[derive(Debug, Clone, Serialize)]
struct SweepEntry {
    pot_size: f64,
    bet_size: f64,
    nash_cells: Vec<(usize, usize)>,
    nash_thresholds: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
struct SweepReport {
    step: f64,
    max_stake: u32,
    entries: Vec<SweepEntry>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut max_stake: u32 = 10;
    let mut step = 0.05;
    let mut output_file = "sweep.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max" | "-m" => {
                i += 1;
                if i < args.len() {
                    max_stake = args[i].parse().unwrap_or(max_stake);
                }
            }
            "--step" | "-s" => {
                i += 1;
                if i < args.len() {
                    step = args[i].parse().unwrap_or(step);
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = args[i].clone();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    let config = GridConfig::new().with_step(step);
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return;
    }

    let combos: Vec<(u32, u32)> = (1..=max_stake)
        .flat_map(|pot| (1..=max_stake).map(move |bet| (pot, bet)))
        .collect();

    println!("=================================================");
    println!("  Threshold Game Pot/Bet Sweep");
    println!("=================================================");
    println!();
    println!(
        "Stakes: [1, {}] x [1, {}] | Step: {} | {} grids",
        max_stake,
        max_stake,
        step,
        combos.len()
    );
    println!();

    let bar = ProgressBar::new(combos.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} grids ({elapsed})") {
        bar.set_style(style);
    }

    let start = Instant::now();

    let entries: Result<Vec<SweepEntry>, GridError> = combos
        .par_iter()
        .map(|&(pot, bet)| {
            let grid = compute_ev_grid_with(pot as f64, bet as f64, &config)?;
            bar.inc(1);
            let mut nash_cells: Vec<(usize, usize)> = grid.nash.iter().copied().collect();
            nash_cells.sort();
            Ok(SweepEntry {
                pot_size: pot as f64,
                bet_size: bet as f64,
                nash_thresholds: grid.nash_thresholds(),
                nash_cells,
            })
        })
        .collect();

    bar.finish_and_clear();

    let entries = match entries {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Sweep failed: {}", e);
            return;
        }
    };

    let with_nash = entries.iter().filter(|e| !e.nash_cells.is_empty()).count();

    println!(
        "Swept {} grids in {:.2}s; {} have an on-grid equilibrium:",
        entries.len(),
        start.elapsed().as_secs_f64(),
        with_nash
    );
    println!();

    for entry in entries.iter().filter(|e| !e.nash_cells.is_empty()) {
        let points: Vec<String> = entry
            .nash_thresholds
            .iter()
            .map(|(opener, caller)| format!("({:.2}, {:.2})", opener, caller))
            .collect();
        println!(
            "  pot {:>2} bet {:>2} -> {}",
            entry.pot_size,
            entry.bet_size,
            points.join(", ")
        );
    }
    println!();
    println!("Combinations without a listed equilibrium have one strictly between grid points.");

    let report = SweepReport {
        step,
        max_stake,
        entries,
    };

    match serde_json::to_string_pretty(&report)
        .map_err(std::io::Error::from)
        .and_then(|json| File::create(&output_file).and_then(|mut f| f.write_all(json.as_bytes())))
    {
        Ok(_) => println!("Saved JSON: {}", output_file),
        Err(e) => eprintln!("Error saving JSON: {}", e),
    }
}

fn print_help() {
    println!("Usage: sweep [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --max, -m <N>        Upper stake bound, inclusive (default: 10)");
    println!("  --step, -s <F>       Threshold step as a fraction (default: 0.05)");
    println!("  --output, -o <FILE>  JSON output file (default: sweep.json)");
    println!("  --help, -h           Show this help");
}
