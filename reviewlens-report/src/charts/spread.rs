//! Rating spread: centred star bins, mean and standard-deviation markers,
//! and a density curve scaled to bin counts

use super::ChartKind;
use super::canvas::{Axes, Canvas, to_pixel};
use super::theme;
use reviewlens_core::{MAX_STAR, MIN_STAR, ReviewSeries, STAR_COUNT, mean};
use reviewlens_stats::{Histogram, compute_histogram, compute_moments, gaussian_kde, linspace};
use serde::{Deserialize, Serialize};

/// Histogram range placing one bin on each star value
pub const RATING_RANGE: (f64, f64) = (MIN_STAR as f64 - 0.5, MAX_STAR as f64 + 0.5);

/// Density curve sampled on an evenly spaced grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    /// Grid positions
    pub x: Vec<f64>,
    /// Density scaled to histogram counts
    pub y: Vec<f64>,
}

/// Rating-spread dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSpreadChart {
    /// Star bins over [0.5, 5.5]
    pub histogram: Histogram,
    /// Mean rating (vertical marker)
    pub mean: f64,
    /// Sample standard deviation, 0 for fewer than two ratings
    pub std: f64,
    /// `mean - std` and `mean + std`, only when `std > 0`
    pub std_markers: Option<(f64, f64)>,
    /// Only when more than one distinct rating exists
    pub density: Option<DensityCurve>,
}

/// Fewest grid points a density curve is drawn with
pub const MIN_DENSITY_POINTS: usize = 2;

/// Build the rating-spread dataset
///
/// Bins, mean, std and density all come from the ratings inside
/// [`RATING_RANGE`]; `None` when no rating falls there.
pub fn rating_spread(series: &ReviewSeries, density_points: usize) -> Option<RatingSpreadChart> {
    let ratings: Vec<f64> = series
        .ratings
        .iter()
        .copied()
        .filter(|r| (RATING_RANGE.0..=RATING_RANGE.1).contains(r))
        .collect();
    let excluded = series.ratings.len() - ratings.len();
    if excluded > 0 {
        tracing::debug!(excluded, "ratings outside the star axis left out of the spread chart");
    }
    if ratings.is_empty() {
        return None;
    }

    let histogram = compute_histogram(&ratings, STAR_COUNT, Some(RATING_RANGE));
    let mean = mean(&ratings);
    let std = compute_moments(&ratings).std;
    let std_markers = (std > 0.0).then(|| (mean - std, mean + std));

    let grid = linspace(
        RATING_RANGE.0,
        RATING_RANGE.1,
        density_points.max(MIN_DENSITY_POINTS),
    );
    let scale = ratings.len() as f64 * histogram.bin_width();
    let density = gaussian_kde(&ratings, &grid).map(|y| DensityCurve {
        y: y.into_iter().map(|d| d * scale).collect(),
        x: grid,
    });

    Some(RatingSpreadChart {
        histogram,
        mean,
        std,
        std_markers,
        density,
    })
}

pub(crate) fn draw(canvas: &mut Canvas, kind: ChartKind, chart: &RatingSpreadChart) {
    let hist = &chart.histogram;
    let peak_density = chart
        .density
        .as_ref()
        .map(|d| d.y.iter().copied().fold(0.0, f64::max))
        .unwrap_or(0.0);
    let xr = RATING_RANGE;
    let yr = (0.0, (hist.max_count() as f64).max(peak_density).max(1.0) * 1.1);
    let area = canvas.plot_area();

    let axes = Axes {
        title: kind.title(),
        x_label: kind.x_label(),
        y_label: kind.y_label(),
        xr,
        yr,
    };
    let star_ticks: Vec<(f64, String)> = (MIN_STAR..=MAX_STAR)
        .map(|star| (star as f64, star.to_string()))
        .collect();
    canvas.draw_axes(&axes, &star_ticks);
    for bin in &hist.bins {
        if bin.count == 0 {
            continue;
        }
        let (x0, y0) = to_pixel(bin.lower, 0.0, xr, yr, area);
        let (x1, y1) = to_pixel(bin.upper, bin.count as f64, xr, yr, area);
        canvas.fill_rect(x0, y1, x1, y0, theme::LENGTH_BAR);
        canvas.stroke_rect(x0, y1, x1, y0, theme::EDGE);
    }

    if let Some(density) = &chart.density {
        let points: Vec<(i32, i32)> = density
            .x
            .iter()
            .zip(&density.y)
            .map(|(&x, &y)| to_pixel(x, y, xr, yr, area))
            .collect();
        canvas.draw_polyline(&points, 2, theme::DENSITY);
    }

    let (mean_x, _) = to_pixel(chart.mean, 0.0, xr, yr, area);
    canvas.draw_dashed_vline(mean_x, 2, theme::MARKER);

    if let Some((low, high)) = chart.std_markers {
        for value in [low, high] {
            let (x, _) = to_pixel(value, 0.0, xr, yr, area);
            canvas.draw_dashed_vline(x, 1, theme::STD_MARKER);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_core::ReviewRecord;

    fn series(ratings: &[f64]) -> ReviewSeries {
        let records: Vec<ReviewRecord> = ratings
            .iter()
            .map(|&r| ReviewRecord::default().with_rating(r))
            .collect();
        ReviewSeries::from_records(&records)
    }

    #[test]
    fn test_constant_ratings_have_no_density_or_std() {
        let chart = rating_spread(&series(&[4.0, 4.0, 4.0]), 100).unwrap();
        assert_eq!(chart.mean, 4.0);
        assert_eq!(chart.std, 0.0);
        assert!(chart.std_markers.is_none());
        assert!(chart.density.is_none());
        assert_eq!(chart.histogram.bins[3].count, 3);
    }

    #[test]
    fn test_spread_with_variation() {
        let chart = rating_spread(&series(&[5.0, 1.0, 3.0]), 100).unwrap();
        assert!((chart.mean - 3.0).abs() < 1e-12);
        assert!((chart.std - 2.0).abs() < 1e-12);
        let (low, high) = chart.std_markers.unwrap();
        assert!((low - 1.0).abs() < 1e-12);
        assert!((high - 5.0).abs() < 1e-12);

        let density = chart.density.unwrap();
        assert_eq!(density.x.len(), 100);
        assert_eq!(density.y.len(), 100);
        assert!(density.y.iter().all(|&d| d >= 0.0));

        let counts: Vec<usize> = chart.histogram.bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_single_rating_has_mean_only() {
        let chart = rating_spread(&series(&[2.0]), 100).unwrap();
        assert_eq!(chart.mean, 2.0);
        assert!(chart.std_markers.is_none());
        assert!(chart.density.is_none());
    }

    #[test]
    fn test_out_of_axis_ratings_are_left_out() {
        let chart = rating_spread(&series(&[4.0, 5.0, 9.0]), 100).unwrap();
        assert_eq!(chart.histogram.total(), 2);
        assert!((chart.mean - 4.5).abs() < 1e-12);
        let (_, high) = chart.std_markers.unwrap();
        assert!(high <= RATING_RANGE.1);

        assert!(rating_spread(&series(&[9.0, 0.0]), 100).is_none());
    }

    #[test]
    fn test_tiny_density_grid_is_clamped() {
        for points in [0, 1] {
            let chart = rating_spread(&series(&[1.0, 3.0, 5.0]), points).unwrap();
            let density = chart.density.unwrap();
            assert_eq!(density.x.len(), MIN_DENSITY_POINTS);
            assert_eq!(density.y.len(), MIN_DENSITY_POINTS);
        }
    }

    #[test]
    fn test_no_ratings() {
        assert!(rating_spread(&ReviewSeries::default(), 100).is_none());
    }
}
