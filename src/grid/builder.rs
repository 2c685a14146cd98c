//! Payoff matrix construction and equilibrium detection.
//!
//! The builder sweeps the threshold game over every pair of discretized
//! strategies, records the caller's EV per cell, then scans for candidate
//! best responses: the caller's best response to a fixed opener strategy
//! is a row maximum, the opener's best response to a fixed caller
//! strategy is a column minimum (the matrix holds *caller* EV, which the
//! opener wants small). Cells that are both at once are grid-approximate
//! Nash equilibria.
//!
//! Everything is recomputed from scratch per call; there is no caching
//! and no shared state, so concurrent calls from independent callers are
//! safe.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::games::threshold::{GameError, ThresholdGame};
use crate::grid::config::{ConfigError, GridConfig};

/// A fully evaluated strategy grid for one (pot, bet) parameterization.
///
/// `matrix[i][j]` is the caller's EV when the opener plays
/// `thresholds[i]` and the caller plays `thresholds[j]`. The opener's EV
/// is not stored; it is `pot_size - matrix[i][j]` (see
/// [`Self::opener_ev_at`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvGrid {
    /// Chips in the pot before the betting round.
    pub pot_size: f64,

    /// Chips wagered on a bet or call.
    pub bet_size: f64,

    /// The discretized threshold list shared by both axes.
    pub thresholds: Vec<f64>,

    /// Square matrix of caller EVs, row-major, rows indexed by opener
    /// threshold and columns by caller threshold.
    pub matrix: Vec<Vec<f64>>,

    /// Per-row maxima: the caller's candidate best responses to each
    /// opener strategy. Ties within the tie tolerance all appear.
    pub caller_best: FxHashSet<(usize, usize)>,

    /// Per-column minima: the opener's candidate best responses to each
    /// caller strategy.
    pub opener_best: FxHashSet<(usize, usize)>,

    /// Grid-approximate Nash equilibria: cells that are simultaneously a
    /// row maximum and a column minimum. May be empty when the true
    /// continuous equilibrium falls strictly between grid points, a
    /// known false negative of the discretization, not an error.
    pub nash: FxHashSet<(usize, usize)>,
}

impl EvGrid {
    /// Number of thresholds per axis (the matrix is `size × size`).
    pub fn size(&self) -> usize {
        self.thresholds.len()
    }

    /// The opener's EV at a cell, derived from the zero-sum-plus-pot
    /// invariant `opener_ev + caller_ev == pot_size`.
    pub fn opener_ev_at(&self, row: usize, col: usize) -> f64 {
        self.pot_size - self.matrix[row][col]
    }

    /// Nash cells mapped back to threshold values, sorted by index pair.
    pub fn nash_thresholds(&self) -> Vec<(f64, f64)> {
        let mut cells: Vec<&(usize, usize)> = self.nash.iter().collect();
        cells.sort();
        cells
            .into_iter()
            .map(|&(row, col)| (self.thresholds[row], self.thresholds[col]))
            .collect()
    }
}

/// Errors from building a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The discretization config failed validation.
    Config(ConfigError),
    /// The game model rejected its inputs.
    Game(GameError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Config(err) => write!(f, "invalid grid config: {}", err),
            GridError::Game(err) => write!(f, "invalid game parameters: {}", err),
        }
    }
}

impl std::error::Error for GridError {}

impl From<ConfigError> for GridError {
    fn from(err: ConfigError) -> Self {
        GridError::Config(err)
    }
}

impl From<GameError> for GridError {
    fn from(err: GameError) -> Self {
        GridError::Game(err)
    }
}

/// Build the EV grid for the given stakes and discretization step,
/// using the default tie tolerance.
///
/// This is the single entry point for presentation-layer consumers: two
/// scalars in, a matrix plus three point sets out. Output is exactly
/// reproducible for fixed inputs.
///
/// # Errors
/// [`GridError::Game`] for non-positive stakes, [`GridError::Config`]
/// for a step outside (0, 1). A failed cell aborts the whole grid; there
/// are no partial results.
///
/// # Example
/// ```
/// use nash_grid::compute_ev_grid;
///
/// let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
/// assert_eq!(grid.size(), 20);
/// assert_eq!(grid.matrix[0][0], 0.5);
/// ```
pub fn compute_ev_grid(pot_size: f64, bet_size: f64, step: f64) -> Result<EvGrid, GridError> {
    let config = GridConfig::new().with_step(step);
    compute_ev_grid_with(pot_size, bet_size, &config)
}

/// Build the EV grid with an explicit [`GridConfig`].
///
/// # Errors
/// Same as [`compute_ev_grid`].
pub fn compute_ev_grid_with(
    pot_size: f64,
    bet_size: f64,
    config: &GridConfig,
) -> Result<EvGrid, GridError> {
    config.validate()?;
    let game = ThresholdGame::new(pot_size, bet_size)?;
    let thresholds = config.thresholds();

    let mut matrix = Vec::with_capacity(thresholds.len());
    for &opener in &thresholds {
        let mut row = Vec::with_capacity(thresholds.len());
        for &caller in &thresholds {
            row.push(game.caller_ev(opener, caller)?);
        }
        matrix.push(row);
    }

    let caller_best = row_max_points(&matrix, config.tie_tolerance);
    let opener_best = col_min_points(&matrix, config.tie_tolerance);
    let nash = caller_best.intersection(&opener_best).copied().collect();

    Ok(EvGrid {
        pot_size,
        bet_size,
        thresholds,
        matrix,
        caller_best,
        opener_best,
        nash,
    })
}

/// Cells attaining each row's maximum within `tolerance`.
///
/// A value within `tolerance` of the running best joins the candidate
/// list; a strictly larger value outside it resets the list. Near-ties
/// therefore produce multiple points per row.
fn row_max_points(matrix: &[Vec<f64>], tolerance: f64) -> FxHashSet<(usize, usize)> {
    let mut points = FxHashSet::default();
    for (row, values) in matrix.iter().enumerate() {
        let mut best = f64::NEG_INFINITY;
        let mut ties: Vec<usize> = Vec::new();
        for (col, &value) in values.iter().enumerate() {
            if (value - best).abs() < tolerance {
                ties.push(col);
            } else if value > best {
                best = value;
                ties.clear();
                ties.push(col);
            }
        }
        for col in ties {
            points.insert((row, col));
        }
    }
    points
}

/// Cells attaining each column's minimum within `tolerance`.
fn col_min_points(matrix: &[Vec<f64>], tolerance: f64) -> FxHashSet<(usize, usize)> {
    let mut points = FxHashSet::default();
    let size = matrix.len();
    for col in 0..size {
        let mut best = f64::INFINITY;
        let mut ties: Vec<usize> = Vec::new();
        for (row, values) in matrix.iter().enumerate() {
            let value = values[col];
            if (value - best).abs() < tolerance {
                ties.push(row);
            } else if value < best {
                best = value;
                ties.clear();
                ties.push(row);
            }
        }
        for row in ties {
            points.insert((row, col));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_and_known_corner() {
        let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
        assert_eq!(grid.size(), 20);
        assert_eq!(grid.matrix.len(), 20);
        assert!(grid.matrix.iter().all(|row| row.len() == 20));

        // Both thresholds 0: the bet and call always happen, showdown is
        // a coin flip, so the caller's EV is 0.5 * (-1) + 0.5 * 2 = 0.5.
        assert_eq!(grid.matrix[0][0], 0.5);
    }

    #[test]
    fn test_all_cells_finite() {
        let grid = compute_ev_grid(10.0, 3.0, 0.05).unwrap();
        assert!(grid
            .matrix
            .iter()
            .all(|row| row.iter().all(|v| v.is_finite())));
    }

    #[test]
    fn test_every_row_and_column_has_a_best_response() {
        let grid = compute_ev_grid(2.0, 3.0, 0.05).unwrap();
        for i in 0..grid.size() {
            assert!(
                grid.caller_best.iter().any(|&(row, _)| row == i),
                "row {} has no caller best response",
                i
            );
            assert!(
                grid.opener_best.iter().any(|&(_, col)| col == i),
                "column {} has no opener best response",
                i
            );
        }
    }

    #[test]
    fn test_nash_point_pot_one_bet_one() {
        let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
        let expected: FxHashSet<(usize, usize)> = [(5, 10)].into_iter().collect();
        assert_eq!(grid.nash, expected);
        assert_eq!(grid.nash_thresholds(), vec![(0.25, 0.5)]);
    }

    #[test]
    fn test_nash_point_pot_three_bet_two() {
        let grid = compute_ev_grid(3.0, 2.0, 0.05).unwrap();
        let expected: FxHashSet<(usize, usize)> = [(3, 8)].into_iter().collect();
        assert_eq!(grid.nash, expected);
    }

    #[test]
    fn test_nash_set_empty_between_grid_points() {
        // For these stakes the continuous equilibrium falls strictly
        // between 5% grid points, so no cell is simultaneously a row
        // maximum and a column minimum.
        for &(pot, bet) in &[(2.0, 1.0), (1.0, 2.0)] {
            let grid = compute_ev_grid(pot, bet, 0.05).unwrap();
            assert!(
                grid.nash.is_empty(),
                "pot {} bet {} unexpectedly has nash cells {:?}",
                pot,
                bet,
                grid.nash
            );
        }
    }

    #[test]
    fn test_nash_is_intersection_of_best_responses() {
        let grid = compute_ev_grid(3.0, 2.0, 0.05).unwrap();
        for point in &grid.nash {
            assert!(grid.caller_best.contains(point));
            assert!(grid.opener_best.contains(point));
        }
    }

    #[test]
    fn test_opener_ev_derivation() {
        let grid = compute_ev_grid(3.0, 2.0, 0.05).unwrap();
        let game = ThresholdGame::new(3.0, 2.0).unwrap();
        for &(i, j) in &[(0, 0), (5, 10), (19, 19), (7, 2)] {
            let direct = game
                .opener_ev(grid.thresholds[i], grid.thresholds[j])
                .unwrap();
            assert!((grid.opener_ev_at(i, j) - direct).abs() < 1e-12);
        }
    }

    #[test]
    fn test_repeated_calls_bit_identical() {
        let a = compute_ev_grid(3.0, 2.0, 0.05).unwrap();
        let b = compute_ev_grid(3.0, 2.0, 0.05).unwrap();
        for (row_a, row_b) in a.matrix.iter().zip(&b.matrix) {
            for (va, vb) in row_a.iter().zip(row_b) {
                assert_eq!(va.to_bits(), vb.to_bits());
            }
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_inputs_abort_whole_grid() {
        assert!(matches!(
            compute_ev_grid(0.0, 1.0, 0.05),
            Err(GridError::Game(_))
        ));
        assert!(matches!(
            compute_ev_grid(1.0, -1.0, 0.05),
            Err(GridError::Game(_))
        ));
        assert!(matches!(
            compute_ev_grid(1.0, 1.0, 0.0),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            compute_ev_grid(1.0, 1.0, 1.0),
            Err(GridError::Config(_))
        ));
    }

    #[test]
    fn test_row_scan_tie_handling() {
        // A value within tolerance of the running best joins the ties; a
        // strictly larger one outside tolerance resets them.
        let matrix = vec![vec![1.0, 1.0 + 5e-7, 0.0], vec![0.0, 1.0, 1.0 - 5e-7]];
        let points = row_max_points(&matrix, 1e-6);
        let expected: FxHashSet<(usize, usize)> =
            [(0, 0), (0, 1), (1, 1), (1, 2)].into_iter().collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_col_scan_tie_handling() {
        let matrix = vec![
            vec![2.0, 5.0],
            vec![2.0 + 5e-7, 1.0],
            vec![3.0, 1.0 + 2e-6],
        ];
        let points = col_min_points(&matrix, 1e-6);
        let expected: FxHashSet<(usize, usize)> = [(0, 0), (1, 0), (1, 1)].into_iter().collect();
        assert_eq!(points, expected);
    }
}
