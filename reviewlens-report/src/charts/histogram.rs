//! Length and polarity histograms

use super::ChartKind;
use super::canvas::{Axes, Canvas, even_ticks, to_pixel};
use super::theme;
use reviewlens_core::ReviewSeries;
use reviewlens_stats::{Histogram, compute_histogram};
use serde::{Deserialize, Serialize};

/// Fixed polarity axis
pub const POLARITY_RANGE: (f64, f64) = (-1.0, 1.0);

/// Histogram dataset with an optional vertical reference line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramChart {
    /// Binned counts
    pub histogram: Histogram,
    /// X position of the dashed reference marker
    pub reference: Option<f64>,
}

/// Review text lengths over the observed range
pub fn length_histogram(series: &ReviewSeries, bins: usize) -> Option<HistogramChart> {
    if series.text_lengths.is_empty() {
        return None;
    }
    Some(HistogramChart {
        histogram: compute_histogram(&series.text_lengths, bins, None),
        reference: None,
    })
}

/// Polarity scores over [-1, 1] with a neutral marker at 0
pub fn polarity_histogram(series: &ReviewSeries, bins: usize) -> Option<HistogramChart> {
    if series.polarities.is_empty() {
        return None;
    }
    Some(HistogramChart {
        histogram: compute_histogram(&series.polarities, bins, Some(POLARITY_RANGE)),
        reference: Some(0.0),
    })
}

pub(crate) fn draw(canvas: &mut Canvas, kind: ChartKind, chart: &HistogramChart) {
    let hist = &chart.histogram;
    let xr = (hist.min, hist.max);
    let yr = (0.0, (hist.max_count().max(1) as f64) * 1.05);
    let area = canvas.plot_area();
    let bar = match kind {
        ChartKind::SentimentPolarity => theme::POLARITY_BAR,
        _ => theme::LENGTH_BAR,
    };

    let axes = Axes {
        title: kind.title(),
        x_label: kind.x_label(),
        y_label: kind.y_label(),
        xr,
        yr,
    };
    canvas.draw_axes(&axes, &even_ticks(xr, 5));
    for bin in &hist.bins {
        if bin.count == 0 {
            continue;
        }
        let (x0, y0) = to_pixel(bin.lower, 0.0, xr, yr, area);
        let (x1, y1) = to_pixel(bin.upper, bin.count as f64, xr, yr, area);
        canvas.fill_rect(x0, y1, x1, y0, bar);
        canvas.stroke_rect(x0, y1, x1, y0, theme::EDGE);
    }

    if let Some(reference) = chart.reference {
        let (x, _) = to_pixel(reference, 0.0, xr, yr, area);
        canvas.draw_dashed_vline(x, 2, theme::MARKER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_core::ReviewRecord;

    #[test]
    fn test_polarity_histogram_fixed_range() {
        let records = vec![
            ReviewRecord::default().with_polarity(0.8),
            ReviewRecord::default().with_polarity(-0.6),
            ReviewRecord::default(),
        ];
        let series = ReviewSeries::from_records(&records);
        let chart = polarity_histogram(&series, 20).unwrap();

        assert_eq!(chart.histogram.min, -1.0);
        assert_eq!(chart.histogram.max, 1.0);
        // Absent polarity is not plotted
        assert_eq!(chart.histogram.total(), 2);
        assert_eq!(chart.reference, Some(0.0));
    }

    #[test]
    fn test_length_histogram_skips_empty_text() {
        let records = vec![
            ReviewRecord::default().with_text("abc"),
            ReviewRecord::default().with_text(""),
            ReviewRecord::default(),
        ];
        let series = ReviewSeries::from_records(&records);
        let chart = length_histogram(&series, 20).unwrap();
        assert_eq!(chart.histogram.total(), 1);
        assert!(chart.reference.is_none());

        assert!(length_histogram(&ReviewSeries::default(), 20).is_none());
    }
}
