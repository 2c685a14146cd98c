//! # Nash Grid
//!
//! Exact EV grids and grid-approximate Nash equilibria for a simplified
//! two-player threshold-betting poker game.
//!
//! Hands are numbers in [0, 1]; a strategy is the minimum hand a player
//! continues with. For every pair of discretized thresholds the crate
//! evaluates the caller's exact expected value from the closed-form
//! showdown win probability, then scans the resulting payoff matrix for
//! cells that are simultaneously a row maximum and a column minimum:
//! the strategy pairs where neither player gains by deviating.
//!
//! ## Quick Start
//!
//! ```
//! use nash_grid::compute_ev_grid;
//!
//! // Pot of 1 chip, bets of 1 chip, thresholds every 5%.
//! let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
//!
//! assert_eq!(grid.size(), 20);
//! for &(row, col) in &grid.nash {
//!     println!(
//!         "equilibrium: opener plays {:.2}+, caller plays {:.2}+",
//!         grid.thresholds[row], grid.thresholds[col]
//!     );
//! }
//! ```
//!
//! ## Modules
//!
//! - [`games`]: the threshold game model (win probability, branch
//!   probabilities, EV evaluators, Monte Carlo cross-check)
//! - [`grid`]: discretization config, matrix builder, best-response and
//!   equilibrium scans, JSON/CSV/ASCII export
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │               Grid & Equilibrium Builder             │
//! │  - threshold discretization   - row-max/col-min scan │
//! │  - EV matrix construction     - Nash intersection    │
//! └──────────────────────────────────────────────────────┘
//!                           │
//!                           │ evaluates per cell
//!                           ▼
//! ┌──────────────────────────────────────────────────────┐
//! │                 Threshold Game Model                 │
//! │  - fold/bet/call branch weights                      │
//! │  - closed-form showdown win probability              │
//! │  - opener/caller expected values                     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Presentation concerns (heatmaps, diagrams, input widgets) live in
//! external consumers; they call [`compute_ev_grid`] with two scalars
//! and receive plain data back.

#![warn(missing_docs)]

/// Game model implementations.
pub mod games;

/// Grid construction and equilibrium detection.
pub mod grid;

// Re-export commonly used types at crate root for convenience
pub use games::threshold::{win_prob, GameError, ThresholdGame};
pub use grid::{compute_ev_grid, compute_ev_grid_with, EvGrid, GridConfig, GridError};
