//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - true CFR reference: `-` horizontal line
//! - estimated ratios: one glyph per scenario (`a`, `b`, `c`, ...)
//!
//! Scenarios with small case counts scatter far from the reference line;
//! large ones hug it, which is the whole point of the picture.

use crate::domain::SimulationSet;

/// Glyph assigned to each scenario, in scenario order. Wraps if a run has
/// more scenarios than glyphs.
const SCENARIO_GLYPHS: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Render the estimated-ratio time series for every scenario in `set`.
///
/// `cfr` is the true ratio the estimates fluctuate around; it is drawn as a
/// horizontal reference line across the full width.
pub fn render_ascii_plot(set: &SimulationSet, cfr: f64, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let period_max = set
        .records
        .iter()
        .map(|r| r.period_index)
        .max()
        .unwrap_or(1);

    // y-range covers every observed ratio plus the reference line.
    let (y_min, y_max) = ratio_range(set, cfr);
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Reference line first so points can overlay it.
    let ref_row = map_y(cfr, y_min, y_max, height);
    for cell in &mut grid[ref_row] {
        *cell = '-';
    }

    // Split positionally rather than by label so duplicate case counts keep
    // their own glyph; every scenario contributes the same record count.
    let scenario_count = set.scenario_order.len().max(1);
    let per_scenario = set.records.len() / scenario_count;
    for (i, chunk) in set.records.chunks(per_scenario.max(1)).enumerate() {
        let ch = SCENARIO_GLYPHS[i % SCENARIO_GLYPHS.len()];
        for r in chunk {
            let x = map_x(r.period_index, period_max, width);
            let y = map_y(r.outcome.estimated_ratio, y_min, y_max, height);
            grid[y][x] = ch;
        }
    }

    // Build final string. We include a small header with ranges and legend.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: period=[1, {period_max}] | ratio=[{y_min:.3}, {y_max:.3}] | true CFR={cfr:.3}\n"
    ));
    out.push_str(&format!("Legend: {}\n", legend(set)));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn legend(set: &SimulationSet) -> String {
    let parts: Vec<String> = set
        .scenario_order
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let ch = SCENARIO_GLYPHS[i % SCENARIO_GLYPHS.len()];
            format!("{ch}={label} cases/day")
        })
        .collect();
    parts.join(" | ")
}

fn ratio_range(set: &SimulationSet, cfr: f64) -> (f64, f64) {
    let mut min_y = cfr;
    let mut max_y = cfr;
    for r in &set.records {
        min_y = min_y.min(r.outcome.estimated_ratio);
        max_y = max_y.max(r.outcome.estimated_ratio);
    }
    (min_y, max_y)
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-3);
    (min - pad, max + pad)
}

fn map_x(period: usize, period_max: usize, width: usize) -> usize {
    let width = width.max(2);
    if period_max <= 1 {
        return 0;
    }
    let u = ((period as f64 - 1.0) / (period_max as f64 - 1.0)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutcomeRecord, SimRecord};

    fn record(label: u64, period: usize, deaths: u64) -> SimRecord {
        SimRecord {
            scenario_label: label,
            period_index: period,
            outcome: OutcomeRecord::from_draw(label, deaths),
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let set = SimulationSet {
            records: vec![
                record(10, 1, 0),  // ratio 0.0
                record(10, 3, 10), // ratio 1.0
            ],
            scenario_order: vec![10],
        };

        let txt = render_ascii_plot(&set, 0.5, 10, 5);
        let expected = concat!(
            "Plot: period=[1, 3] | ratio=[-0.050, 1.050] | true CFR=0.500\n",
            "Legend: a=10 cases/day\n",
            "         a\n",
            "          \n",
            "----------\n",
            "          \n",
            "a         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn glyphs_follow_scenario_order() {
        let set = SimulationSet {
            records: vec![record(5, 1, 1), record(50, 1, 10)],
            scenario_order: vec![5, 50],
        };
        let txt = render_ascii_plot(&set, 0.2, 20, 8);
        assert!(txt.contains("a=5 cases/day | b=50 cases/day"));
        assert!(txt.contains('a'));
        assert!(txt.contains('b'));
    }

    #[test]
    fn reference_line_spans_full_width() {
        let set = SimulationSet {
            records: vec![record(10, 1, 2)],
            scenario_order: vec![10],
        };
        let txt = render_ascii_plot(&set, 0.2, 12, 6);
        assert!(txt.lines().any(|l| l.chars().filter(|&c| c == '-').count() >= 11));
    }
}
