//! Chart rendering
//!
//! Draws the two derivation views as SVG files: the running balance as a
//! line chart with point markers and the grouping summary as a bar chart.
//! SVG keeps rendering self-contained (no system fonts) and the files
//! embed directly into the exported report.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{GridError, GridResult};
use crate::reports::{BalanceReport, GroupingReport};

/// Pixel size of the balance chart
pub const BALANCE_CHART_SIZE: (u32, u32) = (900, 500);

/// Pixel size of the grouping chart
pub const GROUPING_CHART_SIZE: (u32, u32) = (700, 520);

const SERIES_COLOR: RGBColor = RGBColor(102, 126, 234);
const AXIS_COLOR: RGBColor = RGBColor(230, 230, 230);
const GRID_COLOR: RGBColor = RGBColor(245, 245, 245);

fn chart_err<E: std::fmt::Display>(err: E) -> GridError {
    GridError::Chart(err.to_string())
}

/// Render the balance-over-time line chart
///
/// An all-unparseable-dates series still renders, as empty axes; the
/// caller has already decided the dataset itself is non-empty.
pub fn render_balance_chart(report: &BalanceReport, path: &Path) -> GridResult<()> {
    let root = SVGBackend::new(path, BALANCE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let (min_date, max_date) = match report.date_span() {
        Some((first, last)) if first == last => (first, last + chrono::Duration::days(1)),
        Some(span) => span,
        None => {
            let start = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
            (start, start + chrono::Duration::days(1))
        }
    };

    let balances: Vec<f64> = report.points.iter().map(|p| p.balance.to_f64()).collect();
    let min_balance = balances.iter().copied().fold(f64::INFINITY, f64::min);
    let max_balance = balances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (min_balance, max_balance) = if balances.is_empty() {
        (0.0, 1.0)
    } else {
        (min_balance, max_balance)
    };

    // Pad the y range and keep zero in view
    let span = (max_balance - min_balance).max(1.0);
    let padding = span * 0.1;
    let y_min = 0.0_f64.min(min_balance - padding);
    let y_max = max_balance + padding;

    let mut chart = ChartBuilder::on(&root)
        .caption("Money Over Time", ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(min_date..max_date, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .y_desc("Balance ($)")
        .x_desc("Date")
        .y_label_formatter(&|v| format!("${:.2}", v))
        .x_label_formatter(&|d| d.format("%m/%d").to_string())
        .label_style(("sans-serif", 12))
        .axis_style(AXIS_COLOR)
        .bold_line_style(GRID_COLOR)
        .x_labels(6)
        .y_labels(8)
        .draw()
        .map_err(chart_err)?;

    // Zero reference line
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(min_date, 0.0), (max_date, 0.0)],
            RGBColor(200, 200, 200).stroke_width(1),
        )))
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            report
                .points
                .iter()
                .map(|point| (point.date, point.balance.to_f64())),
            SERIES_COLOR.stroke_width(3),
        ))
        .map_err(chart_err)?;

    for point in &report.points {
        let coord = (point.date, point.balance.to_f64());
        chart
            .draw_series(std::iter::once(Circle::new(coord, 4, SERIES_COLOR.filled())))
            .map_err(chart_err)?;
        chart
            .draw_series(std::iter::once(Circle::new(coord, 4, WHITE.stroke_width(2))))
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Render the grouping summary bar chart
pub fn render_grouping_chart(report: &GroupingReport, path: &Path) -> GridResult<()> {
    let root = SVGBackend::new(path, GROUPING_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let group_count = report.groups.len().max(1);
    let y_max = report
        .groups
        .iter()
        .map(|g| g.total.to_f64())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;

    let title = format!("Top {} Expenses/Incomes per Description", report.groups.len());
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d((0..group_count).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .y_desc("Amount ($)")
        .y_label_formatter(&|v| format!("${:.2}", v))
        .x_label_formatter(&|x| {
            let index = match x {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => *i,
                SegmentValue::Last => return String::new(),
            };
            report
                .groups
                .get(index)
                .map(|g| truncate_label(&g.description, 14))
                .unwrap_or_default()
        })
        .label_style(("sans-serif", 12))
        .axis_style(AXIS_COLOR)
        .bold_line_style(GRID_COLOR)
        .x_labels(group_count)
        .disable_x_mesh()
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(SERIES_COLOR.mix(0.7).filled())
                .margin(8)
                .data(
                    report
                        .groups
                        .iter()
                        .enumerate()
                        .map(|(i, g)| (i, g.total.to_f64())),
                ),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Shorten long descriptions for axis labels
fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerEntry, Money};
    use tempfile::TempDir;

    fn entry(description: &str, date: &str, kind: &str, cents: i64) -> LedgerEntry {
        LedgerEntry::new(description, date, kind, Money::from_cents(cents))
    }

    fn sample_entries() -> Vec<LedgerEntry> {
        vec![
            entry("Salary", "2024-01-01", "Income", 100000),
            entry("Rent", "2024-01-02", "Expense", 60000),
            entry("Groceries", "2024-01-05", "Expense", 12000),
        ]
    }

    #[test]
    fn test_render_balance_chart_writes_svg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("balance.svg");
        let report = BalanceReport::generate(&sample_entries(), "%Y-%m-%d");

        render_balance_chart(&report, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.len() > 500);
    }

    #[test]
    fn test_render_balance_chart_with_single_point() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("single.svg");
        let entries = vec![entry("Salary", "2024-01-01", "Income", 5000)];
        let report = BalanceReport::generate(&entries, "%Y-%m-%d");

        render_balance_chart(&report, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_balance_chart_with_no_dated_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.svg");
        let entries = vec![entry("Mystery", "soon", "Expense", 5000)];
        let report = BalanceReport::generate(&entries, "%Y-%m-%d");

        // Renders empty axes rather than failing
        render_balance_chart(&report, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_grouping_chart_writes_svg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.svg");
        let report = GroupingReport::generate(&sample_entries(), 10);

        render_grouping_chart(&report, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Groceries", 14), "Groceries");
        assert_eq!(truncate_label("A very long description", 6), "A ver…");
    }
}
