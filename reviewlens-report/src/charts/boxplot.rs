//! Review length by star rating

use super::ChartKind;
use super::canvas::{Axes, Canvas, to_pixel};
use super::theme;
use reviewlens_core::{ReviewSeries, STAR_COUNT};
use reviewlens_stats::{compute_quartiles, iqr_whiskers};
use serde::{Deserialize, Serialize};

const BOX_HALF_WIDTH: f64 = 0.25;
const CAP_HALF_WIDTH: f64 = 0.125;

/// Five-number summary of one box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    /// Lower quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Upper quartile
    pub q3: f64,
    /// Lowest value within 1.5 IQR of the box
    pub whisker_low: f64,
    /// Highest value within 1.5 IQR of the box
    pub whisker_high: f64,
    /// Values beyond the whiskers
    pub fliers: Vec<f64>,
}

/// One star slot of the box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarBox {
    /// Star rating, 1 through 5
    pub star: u8,
    /// Number of reviews in the slot
    pub count: usize,
    /// Box summary, `None` for an empty slot
    pub stats: Option<BoxStats>,
}

/// Box-plot dataset, always five slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotChart {
    /// Slots for 1★ through 5★
    pub boxes: Vec<StarBox>,
}

impl BoxPlotChart {
    fn max_value(&self) -> f64 {
        self.boxes
            .iter()
            .filter_map(|b| b.stats.as_ref())
            .flat_map(|s| s.fliers.iter().copied().chain([s.whisker_high]))
            .fold(0.0, f64::max)
    }
}

/// Summarise one slot's samples
pub fn box_stats(samples: &[f64]) -> Option<BoxStats> {
    if samples.is_empty() {
        return None;
    }
    let quartiles = compute_quartiles(samples);
    let whiskers = iqr_whiskers(samples, &quartiles);
    Some(BoxStats {
        q1: quartiles.q1,
        median: quartiles.median,
        q3: quartiles.q3,
        whisker_low: whiskers.low,
        whisker_high: whiskers.high,
        fliers: whiskers.fliers,
    })
}

/// Text length per truncated star rating; `None` when every slot is empty
pub fn length_by_rating(series: &ReviewSeries) -> Option<BoxPlotChart> {
    if !series.has_lengths_by_star() {
        return None;
    }
    let boxes = (0..STAR_COUNT)
        .map(|i| {
            let samples = &series.lengths_by_star[i];
            StarBox {
                star: (i + 1) as u8,
                count: samples.len(),
                stats: box_stats(samples),
            }
        })
        .collect();
    Some(BoxPlotChart { boxes })
}

pub(crate) fn draw(canvas: &mut Canvas, kind: ChartKind, chart: &BoxPlotChart) {
    let xr = (0.5, STAR_COUNT as f64 + 0.5);
    let yr = (0.0, chart.max_value().max(1.0) * 1.05);
    let area = canvas.plot_area();

    let axes = Axes {
        title: kind.title(),
        x_label: kind.x_label(),
        y_label: kind.y_label(),
        xr,
        yr,
    };
    let star_ticks: Vec<(f64, String)> = chart
        .boxes
        .iter()
        .map(|slot| (slot.star as f64, format!("{} Star", slot.star)))
        .collect();
    canvas.draw_axes(&axes, &star_ticks);
    for slot in &chart.boxes {
        let Some(stats) = &slot.stats else {
            continue;
        };
        let x = slot.star as f64;

        let (bx0, by_q3) = to_pixel(x - BOX_HALF_WIDTH, stats.q3, xr, yr, area);
        let (bx1, by_q1) = to_pixel(x + BOX_HALF_WIDTH, stats.q1, xr, yr, area);
        canvas.fill_rect(bx0, by_q3, bx1, by_q1, theme::BOX_FILL);
        canvas.stroke_rect(bx0, by_q3, bx1, by_q1, theme::LENGTH_BAR);

        let (cx, y_low) = to_pixel(x, stats.whisker_low, xr, yr, area);
        let (_, y_high) = to_pixel(x, stats.whisker_high, xr, yr, area);
        canvas.draw_line(cx, by_q1, cx, y_low, theme::TEXT);
        canvas.draw_line(cx, by_q3, cx, y_high, theme::TEXT);

        let (cap0, _) = to_pixel(x - CAP_HALF_WIDTH, 0.0, xr, yr, area);
        let (cap1, _) = to_pixel(x + CAP_HALF_WIDTH, 0.0, xr, yr, area);
        canvas.draw_line(cap0, y_low, cap1, y_low, theme::TEXT);
        canvas.draw_line(cap0, y_high, cap1, y_high, theme::TEXT);

        let (_, y_med) = to_pixel(x, stats.median, xr, yr, area);
        canvas.draw_thick_line(bx0, y_med, bx1, y_med, 2, theme::MARKER);

        for &flier in &stats.fliers {
            let (_, fy) = to_pixel(x, flier, xr, yr, area);
            canvas.draw_ring(cx, fy, 4, theme::MARKER);
        }
    }
}
