//! Pure layout-geometry helpers: ring-progress grid placement and
//! parallel-axis range inference. No I/O, no state.

use indexmap::IndexSet;
use serde_json::Value;
use smallvec::SmallVec;

use crate::merge::{label_string, lenient_f64};

/// Chosen (columns, rows) pair for a count of independent sub-charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
}

/// Fixed lookup table mapping sub-chart count to grid shape.
#[must_use]
pub fn grid_for(count: usize) -> GridSpec {
    let (cols, rows) = match count {
        0 | 1 => (1, 1),
        2 => (2, 1),
        3..=4 => (2, 2),
        5..=6 => (3, 2),
        7..=9 => (3, 3),
        10..=12 => (4, 3),
        n => (4, n.div_ceil(4)),
    };
    GridSpec { cols, rows }
}

/// Placement of one ring sub-chart: cell-midpoint center and ring radii,
/// all in percent of the chart area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingCell {
    pub center_x_pct: f64,
    pub center_y_pct: f64,
    pub inner_radius_pct: f64,
    pub outer_radius_pct: f64,
}

/// Radii shrink as the grid gets denser, keyed by `max(cols, rows)`.
fn ring_radii(density: usize) -> (f64, f64) {
    match density {
        0 | 1 => (50.0, 65.0),
        2 => (34.0, 45.0),
        3 => (22.0, 30.0),
        _ => (16.0, 22.0),
    }
}

/// Computes one cell per sub-chart, row-major, centers at cell midpoints.
#[must_use]
pub fn ring_cells(count: usize) -> SmallVec<[RingCell; 12]> {
    let grid = grid_for(count);
    let (inner, outer) = ring_radii(grid.cols.max(grid.rows));
    (0..count)
        .map(|i| {
            let col = i % grid.cols;
            let row = i / grid.cols;
            RingCell {
                center_x_pct: (col as f64 + 0.5) / grid.cols as f64 * 100.0,
                center_y_pct: (row as f64 + 0.5) / grid.rows as f64 * 100.0,
                inner_radius_pct: inner,
                outer_radius_pct: outer,
            }
        })
        .collect()
}

/// Inferred configuration for one parallel-coordinates axis.
#[derive(Debug, Clone, PartialEq)]
pub enum ParallelAxis {
    /// Every observed value was numeric; range padded by 10%.
    Numeric { min: f64, max: f64 },
    /// Distinct string forms in first-seen order; labels rotate once the
    /// distinct count exceeds 5.
    Categorical {
        values: Vec<String>,
        rotate_labels: bool,
    },
}

/// Infers one axis per dimension, taking the first row's arity as the
/// dimension count. A dimension is numeric iff every observed value for it
/// parses as a number; otherwise it is categorical.
#[must_use]
pub fn infer_parallel_axes(rows: &[Vec<Value>]) -> Vec<ParallelAxis> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    (0..first.len())
        .map(|dim| {
            let observed: Vec<&Value> = rows.iter().filter_map(|row| row.get(dim)).collect();
            let numeric: Option<Vec<f64>> = observed.iter().map(|v| lenient_f64(v)).collect();
            match numeric {
                Some(values) if !values.is_empty() => {
                    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    let pad = if max > min { (max - min) * 0.1 } else { 1.0 };
                    ParallelAxis::Numeric {
                        min: min - pad,
                        max: max + pad,
                    }
                }
                _ => {
                    let mut distinct: IndexSet<String> = IndexSet::new();
                    for value in observed {
                        let form = label_string(value).unwrap_or_else(|| value.to_string());
                        distinct.insert(form);
                    }
                    let rotate_labels = distinct.len() > 5;
                    ParallelAxis::Categorical {
                        values: distinct.into_iter().collect(),
                        rotate_labels,
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn grid_table_matches_fixed_lookup() {
        assert_eq!(grid_for(1), GridSpec { cols: 1, rows: 1 });
        assert_eq!(grid_for(2), GridSpec { cols: 2, rows: 1 });
        assert_eq!(grid_for(4), GridSpec { cols: 2, rows: 2 });
        assert_eq!(grid_for(5), GridSpec { cols: 3, rows: 2 });
        assert_eq!(grid_for(9), GridSpec { cols: 3, rows: 3 });
        assert_eq!(grid_for(12), GridSpec { cols: 4, rows: 3 });
        assert_eq!(grid_for(14), GridSpec { cols: 4, rows: 4 });
    }

    #[test]
    fn five_rings_use_three_by_two_with_midpoint_centers() {
        let cells = ring_cells(5);
        assert_eq!(cells.len(), 5);
        assert_relative_eq!(cells[0].center_x_pct, 100.0 / 6.0);
        assert_relative_eq!(cells[0].center_y_pct, 25.0);
        // density 3 radii
        assert_relative_eq!(cells[0].outer_radius_pct, 30.0);
        // second row starts at index 3
        assert_relative_eq!(cells[3].center_y_pct, 75.0);
    }

    #[test]
    fn numeric_axis_is_padded_ten_percent() {
        let rows = vec![vec![json!(10), json!("a")], vec![json!(30), json!("b")]];
        let axes = infer_parallel_axes(&rows);
        assert_eq!(axes.len(), 2);
        match &axes[0] {
            ParallelAxis::Numeric { min, max } => {
                assert_relative_eq!(*min, 8.0);
                assert_relative_eq!(*max, 32.0);
            }
            other => panic!("expected numeric axis, got {other:?}"),
        }
    }

    #[test]
    fn mixed_values_force_categorical_with_first_seen_order() {
        let rows = vec![
            vec![json!("x")],
            vec![json!(3)],
            vec![json!("x")],
            vec![json!("y")],
        ];
        let axes = infer_parallel_axes(&rows);
        match &axes[0] {
            ParallelAxis::Categorical {
                values,
                rotate_labels,
            } => {
                assert_eq!(values, &["x".to_owned(), "3".to_owned(), "y".to_owned()]);
                assert!(!rotate_labels);
            }
            other => panic!("expected categorical axis, got {other:?}"),
        }
    }

    #[test]
    fn labels_rotate_past_five_distinct_values() {
        let rows: Vec<Vec<Value>> = (0..7).map(|i| vec![json!(format!("c{i}"))]).collect();
        let axes = infer_parallel_axes(&rows);
        match &axes[0] {
            ParallelAxis::Categorical { rotate_labels, .. } => assert!(rotate_labels),
            other => panic!("expected categorical axis, got {other:?}"),
        }
    }
}
