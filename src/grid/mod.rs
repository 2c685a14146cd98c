//! Strategy-grid construction and equilibrium detection.
//!
//! # Overview
//!
//! The strategy space of the threshold game is continuous, but a pair of
//! threshold strategies is just two numbers, so the space discretizes
//! cleanly: pick a step, enumerate every multiple below 1, and evaluate
//! the caller's exact EV at every strategy pair. That yields a square
//! payoff matrix over which best responses are a scan, not a search:
//!
//! 1. For each opener strategy (row), the caller's best responses are
//!    the row maxima.
//! 2. For each caller strategy (column), the opener's best responses are
//!    the column minima (the matrix holds caller EV; the game is
//!    zero-sum over the pot, so the opener minimizes it).
//! 3. A cell that is both at once is a Nash equilibrium of the
//!    discretized game: neither player gains by deviating to any other
//!    grid strategy.
//!
//! Max/min comparisons use an absolute tie tolerance
//! ([`TIE_TOLERANCE`]) rather than exact float equality, so near-ties
//! surface as multiple candidate best responses.
//!
//! The true equilibrium of the continuous game can fall strictly between
//! grid points; the intersection is then empty. That is a resolution
//! artifact, and a finer step recovers the point.
//!
//! # Usage
//!
//! ```
//! use nash_grid::grid::compute_ev_grid;
//!
//! let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
//! for &(row, col) in &grid.nash {
//!     println!(
//!         "equilibrium: opener {:.2}, caller {:.2}",
//!         grid.thresholds[row], grid.thresholds[col]
//!     );
//! }
//! ```

pub mod builder;
pub mod config;
pub mod output;

// Re-export main types for convenient access
pub use builder::{compute_ev_grid, compute_ev_grid_with, EvGrid, GridError};
pub use config::{ConfigError, GridConfig, DEFAULT_STEP, TIE_TOLERANCE};
pub use output::{export_csv, render_ascii, GridExport, GridMetadata};
