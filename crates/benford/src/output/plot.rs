//! Bar chart of observed first-digit proportions against Benford's Law.
//!
//! Charts are drawn with the [`plotters`] bitmap backend and saved as PNG
//! files at a fixed 1000x700 resolution.

use std::path::{Path, PathBuf};

use benford_core::{BENFORD_PROPORTIONS, DIGITS, DIGIT_COUNT};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

/// Chart title.
pub const CHART_TITLE: &str = "First Digit Proportion vs. Benford Proportions";

const CHART_SIZE: (u32, u32) = (1000, 700);

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    /// The bitmap could not be created or cleared.
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    /// Axes or coordinates could not be set up.
    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    /// Drawing or saving failed.
    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    /// The output directory could not be created.
    #[error("Failed to create output directory: {0}")]
    OutputDir(#[from] std::io::Error),

    /// Proportions outside `[0, 1]`.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Path of the chart written for `input` inside `plot_dir`.
///
/// `data/sales.csv` becomes `<plot_dir>/sales.png`.
pub fn chart_path(plot_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "benford".to_string());
    plot_dir.join(format!("{}.png", stem))
}

/// Draw observed proportions as black bars with the Benford proportions as
/// a red line, and save the chart as PNG.
///
/// Each bar is labelled with its proportion to two decimals. The parent
/// directory of `output_path` is created if missing.
///
/// # Errors
/// * `PlotError::InvalidData` - a proportion is outside `[0, 1]`
/// * any drawing or IO failure
pub fn write_chart(proportions: &[f64; DIGIT_COUNT], output_path: &Path) -> Result<()> {
    if let Some(p) = proportions.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(PlotError::InvalidData(format!(
            "proportion {} is outside 0-1",
            p
        )));
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let drawing_area = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Headroom for the bar labels
    let y_max = proportions
        .iter()
        .chain(BENFORD_PROPORTIONS.iter())
        .copied()
        .fold(0.0, f64::max)
        * 1.15;

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption(CHART_TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((1u32..10u32).into_segmented(), 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("First Digit")
        .y_desc("Proportion")
        .x_label_formatter(&digit_label)
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLACK.filled())
                .margin(3)
                .data(
                    DIGITS
                        .iter()
                        .zip(proportions.iter())
                        .map(|(&d, &p)| (u32::from(d), p)),
                ),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label("Actual Proportions")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], BLACK.filled()));

    let label_style = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(DIGITS.iter().zip(proportions.iter()).map(|(&d, &p)| {
            Text::new(
                format!("{:.2}", p),
                (SegmentValue::CenterOf(u32::from(d)), p),
                label_style.clone(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            DIGITS
                .iter()
                .zip(BENFORD_PROPORTIONS.iter())
                .map(|(&d, &p)| (SegmentValue::CenterOf(u32::from(d)), p)),
            RED.stroke_width(3),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label("Benford Proportions")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(3)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    tracing::debug!(path = %output_path.display(), "wrote chart");
    Ok(())
}

fn digit_label(value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::Exact(d) | SegmentValue::CenterOf(d) => d.to_string(),
        SegmentValue::Last => String::new(),
    }
}
