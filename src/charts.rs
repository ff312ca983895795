//! Chart rendering.
//!
//! Each chart is drawn to a PNG in the working directory and the path is
//! returned so the caller can hand it to the system image viewer. Render
//! failures are reported to the menu, never fatal.

use crate::util::MONTH_NAMES;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::error::Error;
use std::path::PathBuf;

pub const MONTHLY_TREND_FILE: &str = "monthly_trend.png";
pub const VEHICLE_RANKING_FILE: &str = "vehicle_types.png";
pub const TOP_VEHICLES_FILE: &str = "top_vehicles.png";

const CRIMSON: RGBColor = RGBColor(220, 20, 60);
const NAVY: RGBColor = RGBColor(0, 0, 128);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const GRID: RGBColor = RGBColor(213, 213, 213);

/// Label for an x tick. Category axes put category `k` at coordinate
/// `k as f64`, so only (near-)integer positions inside the label range
/// get text.
fn tick_label(x: f64, labels: &[&str]) -> String {
    let k = x.round();
    if (x - k).abs() > 1e-6 || k < 1.0 {
        return String::new();
    }
    labels
        .get(k as usize - 1)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Line chart of collisions per calendar month, all twelve months on the
/// axis whether or not they saw any.
pub fn render_monthly_trend(monthly_counts: &[u64; 12]) -> Result<PathBuf, Box<dyn Error>> {
    let y_max = monthly_counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    let root = BitMapBackend::new(MONTHLY_TREND_FILE, (960, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Monthly Motor Vehicle Collisions in NYC (2024)",
            ("sans-serif", 22),
        )
        .margin(16)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5f64..12.5f64, 0f64..y_max * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Number of Accidents")
        .x_labels(12)
        .x_label_formatter(&|x| tick_label(*x, &MONTH_NAMES))
        .x_label_style(
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .light_line_style(GRID.mix(0.5))
        .draw()?;

    let points: Vec<(f64, f64)> = monthly_counts
        .iter()
        .enumerate()
        .map(|(i, &n)| (i as f64 + 1.0, n as f64))
        .collect();
    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        CRIMSON.stroke_width(2),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, CRIMSON.filled())),
    )?;
    root.present()?;
    Ok(PathBuf::from(MONTHLY_TREND_FILE))
}

/// Line chart over every vehicle type, ranked by collision count.
pub fn render_vehicle_ranking(ranking: &[(String, u64)]) -> Result<PathBuf, Box<dyn Error>> {
    let n = ranking.len().max(1);
    let labels: Vec<&str> = ranking.iter().map(|(name, _)| name.as_str()).collect();
    let y_max = ranking.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as f64;

    let root = BitMapBackend::new(VEHICLE_RANKING_FILE, (1100, 560)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Vehicle Types Involved in NYC Collisions (2024)",
            ("sans-serif", 22),
        )
        .margin(16)
        .x_label_area_size(130)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5f64..n as f64 + 0.5, 0f64..y_max * 1.1)?;
    chart
        .configure_mesh()
        .x_desc("Vehicle Type")
        .y_desc("Number of Collisions")
        .x_labels(n)
        .x_label_formatter(&|x| tick_label(*x, &labels))
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .light_line_style(GRID.mix(0.5))
        .draw()?;

    let points: Vec<(f64, f64)> = ranking
        .iter()
        .enumerate()
        .map(|(i, (_, c))| (i as f64 + 1.0, *c as f64))
        .collect();
    chart.draw_series(LineSeries::new(points.iter().copied(), NAVY.stroke_width(2)))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, NAVY.filled())),
    )?;
    root.present()?;
    Ok(PathBuf::from(VEHICLE_RANKING_FILE))
}

/// Bar chart of the top vehicle types.
pub fn render_top_vehicles_bar(top: &[(String, u64)]) -> Result<PathBuf, Box<dyn Error>> {
    let n = top.len().max(1);
    let labels: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
    let y_max = top.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as f64;

    let root = BitMapBackend::new(TOP_VEHICLES_FILE, (720, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Top 3 Vehicle Types in NYC Collisions (2024)",
            ("sans-serif", 22),
        )
        .margin(16)
        .x_label_area_size(110)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5f64..n as f64 + 0.5, 0f64..y_max * 1.15)?;
    chart
        .configure_mesh()
        .x_desc("Vehicle Type")
        .y_desc("Number of Collisions")
        .x_labels(n)
        .x_label_formatter(&|x| tick_label(*x, &labels))
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .light_line_style(GRID.mix(0.5))
        .draw()?;

    chart.draw_series(top.iter().enumerate().map(|(i, (_, c))| {
        let center = i as f64 + 1.0;
        Rectangle::new(
            [(center - 0.3, 0.0), (center + 0.3, *c as f64)],
            ORANGE.filled(),
        )
    }))?;
    root.present()?;
    Ok(PathBuf::from(TOP_VEHICLES_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_labels_only_land_on_categories() {
        let labels = ["January", "February", "March"];
        assert_eq!(tick_label(1.0, &labels), "January");
        assert_eq!(tick_label(3.0, &labels), "March");
        assert_eq!(tick_label(0.0, &labels), "");
        assert_eq!(tick_label(4.0, &labels), "");
        assert_eq!(tick_label(1.5, &labels), "");
    }
}
