//! Single-grid EV and equilibrium report.
//!
//! Usage:
//!   cargo run --release --bin ev_grid -- [OPTIONS]
//!
//! Options:
//!   --pot <N>        Pot size in chips (default: 1)
//!   --bet <N>        Bet size in chips (default: 1)
//!   --step <F>       Threshold step as a fraction (default: 0.05)
//!   --output <FILE>  JSON output file (default: ev_grid.json)
//!   --csv <FILE>     Also export per-cell CSV (optional)

use std::env;
use std::time::Instant;

use nash_grid::grid::{compute_ev_grid_with, export_csv, render_ascii, GridConfig, GridExport};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut pot_size = 1.0;
    let mut bet_size = 1.0;
    let mut step = 0.05;
    let mut output_file = "ev_grid.json".to_string();
    let mut csv_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pot" | "-p" => {
                i += 1;
                if i < args.len() {
                    pot_size = args[i].parse().unwrap_or(pot_size);
                }
            }
            "--bet" | "-b" => {
                i += 1;
                if i < args.len() {
                    bet_size = args[i].parse().unwrap_or(bet_size);
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
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_file = Some(args[i].clone());
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

    println!("=================================================");
    println!("  Threshold Game EV Grid");
    println!("=================================================");
    println!();
    println!("Pot: {} | Bet: {} | Step: {}", pot_size, bet_size, step);
    println!();

    let config = GridConfig::new().with_step(step);
    let start = Instant::now();

    let grid = match compute_ev_grid_with(pot_size, bet_size, &config) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error computing grid: {}", e);
            return;
        }
    };

    println!("{}", render_ascii(&grid));
    println!(
        "Computed {}x{} cells in {:.3}s",
        grid.size(),
        grid.size(),
        start.elapsed().as_secs_f64()
    );

    if grid.nash.is_empty() {
        println!("No on-grid equilibrium: the continuous equilibrium falls between grid points.");
        println!("Try a finer --step.");
    } else {
        for (opener, caller) in grid.nash_thresholds() {
            println!(
                "Nash cell: opener continues with {:.2}+, caller with {:.2}+",
                opener, caller
            );
        }
    }

    let export = GridExport::from_grid(&grid, &config);
    match export.save_json(&output_file) {
        Ok(_) => println!("Saved JSON: {}", output_file),
        Err(e) => eprintln!("Error saving JSON: {}", e),
    }

    if let Some(path) = csv_file {
        match export_csv(&grid, &path) {
            Ok(_) => println!("Saved CSV: {}", path),
            Err(e) => eprintln!("Error saving CSV: {}", e),
        }
    }
}

fn print_help() {
    println!("Usage: ev_grid [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --pot, -p <N>        Pot size in chips (default: 1)");
    println!("  --bet, -b <N>        Bet size in chips (default: 1)");
    println!("  --step, -s <F>       Threshold step as a fraction (default: 0.05)");
    println!("  --output, -o <FILE>  JSON output file (default: ev_grid.json)");
    println!("  --csv <FILE>         Also export per-cell CSV");
    println!("  --help, -h           Show this help");
}
