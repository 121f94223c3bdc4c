//! Chart Rendering
//!
//! The four charts are independent, so they are rasterized in parallel on
//! the rayon pool and written as PNG files afterwards.

use reviewlens_core::ReviewSeries;
use reviewlens_report::{ChartArtifact, ChartKind, ChartOptions, RenderError, render_chart};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Render every chart, in dashboard order
pub fn render_charts(
    series: &ReviewSeries,
    options: &ChartOptions,
) -> Result<Vec<ChartArtifact>, RenderError> {
    ChartKind::ALL
        .par_iter()
        .map(|&kind| render_chart(kind, series, options))
        .collect()
}

/// Write each artifact's PNG into `dir`, returning the written paths
pub fn write_charts(artifacts: &[ChartArtifact], dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    artifacts
        .iter()
        .map(|artifact| {
            let path = dir.join(artifact.kind.file_name());
            std::fs::write(&path, &artifact.png)?;
            tracing::debug!(chart = %artifact.kind, path = %path.display(), "wrote chart");
            Ok(path)
        })
        .collect()
}
