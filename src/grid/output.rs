//! Export and rendering for presentation-layer consumers.
//!
//! The core hands a consumer a matrix plus point sets; this module turns
//! that into stable artifacts: pretty JSON, CSV rows, and a plain-text
//! table with best-response and equilibrium markers for terminal use.
//! Point sets are sorted on the way out so exports are byte-stable.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::grid::builder::EvGrid;
use crate::grid::config::GridConfig;

/// A serializable snapshot of one grid computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridExport {
    /// Parameters and provenance.
    pub metadata: GridMetadata,
    /// Axis labels, one per threshold, shared by both axes.
    pub axis_labels: Vec<String>,
    /// Caller EV matrix, row-major.
    pub matrix: Vec<Vec<f64>>,
    /// Per-row maxima as sorted (row, col) pairs.
    pub caller_best: Vec<(usize, usize)>,
    /// Per-column minima as sorted (row, col) pairs.
    pub opener_best: Vec<(usize, usize)>,
    /// Equilibrium cells as sorted (row, col) pairs.
    pub nash: Vec<(usize, usize)>,
}

/// Parameters the grid was computed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMetadata {
    /// Chips in the pot.
    pub pot_size: f64,
    /// Chips per bet/call.
    pub bet_size: f64,
    /// Discretization step.
    pub step: f64,
    /// EV tie tolerance used by the scans.
    pub tie_tolerance: f64,
    /// Unix timestamp of the export.
    pub timestamp: String,
}

impl GridExport {
    /// Build an export from a computed grid and the config it used.
    pub fn from_grid(grid: &EvGrid, config: &GridConfig) -> Self {
        Self {
            metadata: GridMetadata {
                pot_size: grid.pot_size,
                bet_size: grid.bet_size,
                step: config.step,
                tie_tolerance: config.tie_tolerance,
                timestamp: chrono_lite_timestamp(),
            },
            axis_labels: grid.thresholds.iter().map(|t| format!("{:.2}", t)).collect(),
            matrix: grid.matrix.clone(),
            caller_best: sorted_points(&grid.caller_best),
            opener_best: sorted_points(&grid.opener_best),
            nash: sorted_points(&grid.nash),
        }
    }

    /// Save to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

fn sorted_points(points: &rustc_hash::FxHashSet<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut sorted: Vec<(usize, usize)> = points.iter().copied().collect();
    sorted.sort();
    sorted
}

/// Simple timestamp without external dependencies.
fn chrono_lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", duration.as_secs())
}

/// Export one row per cell to CSV.
pub fn export_csv<P: AsRef<Path>>(grid: &EvGrid, path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "opener_threshold,caller_threshold,caller_ev,caller_best,opener_best,nash"
    )?;

    for (row, values) in grid.matrix.iter().enumerate() {
        for (col, &ev) in values.iter().enumerate() {
            let cell = (row, col);
            writeln!(
                file,
                "{:.4},{:.4},{:.6},{},{},{}",
                grid.thresholds[row],
                grid.thresholds[col],
                ev,
                grid.caller_best.contains(&cell),
                grid.opener_best.contains(&cell),
                grid.nash.contains(&cell)
            )?;
        }
    }

    Ok(())
}

/// Render the grid as a plain-text table.
///
/// Cell markers stand in for the reference heatmap's colored circles:
/// `*` a caller best response (row maximum), `+` an opener best response
/// (column minimum), `#` both at once (a Nash cell).
pub fn render_ascii(grid: &EvGrid) -> String {
    let mut out = String::new();

    let _ = write!(out, "opener\\caller");
    for t in &grid.thresholds {
        let _ = write!(out, " {:>8}", format!("{:.2}", t));
    }
    let _ = writeln!(out);

    for (row, values) in grid.matrix.iter().enumerate() {
        let _ = write!(out, "{:>13}", format!("{:.2}", grid.thresholds[row]));
        for (col, &ev) in values.iter().enumerate() {
            let cell = (row, col);
            let marker = if grid.nash.contains(&cell) {
                '#'
            } else if grid.caller_best.contains(&cell) {
                '*'
            } else if grid.opener_best.contains(&cell) {
                '+'
            } else {
                ' '
            };
            let _ = write!(out, " {:>7.3}{}", ev, marker);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "markers: * caller best response, + opener best response, # Nash cell"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::builder::compute_ev_grid;

    #[test]
    fn test_export_points_sorted() {
        let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
        let export = GridExport::from_grid(&grid, &GridConfig::default());

        assert_eq!(export.nash, vec![(5, 10)]);
        for pairs in [&export.caller_best, &export.opener_best] {
            for window in pairs.windows(2) {
                assert!(window[0] < window[1]);
            }
        }
    }

    #[test]
    fn test_export_axis_labels_match_thresholds() {
        let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
        let export = GridExport::from_grid(&grid, &GridConfig::default());

        assert_eq!(export.axis_labels.len(), 20);
        assert_eq!(export.axis_labels[0], "0.00");
        assert_eq!(export.axis_labels[19], "0.95");
    }

    #[test]
    fn test_render_ascii_marks_nash() {
        let grid = compute_ev_grid(1.0, 1.0, 0.05).unwrap();
        let rendered = render_ascii(&grid);

        assert!(rendered.contains('#'));
        assert!(rendered.contains('*'));
        assert!(rendered.contains("markers:"));
        // One line per row, plus header and legend.
        assert!(rendered.lines().count() >= grid.size() + 2);
    }
}
