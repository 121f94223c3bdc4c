//! Minimal RGBA raster with a fixed plot area, anti-aliased labels and PNG encoding

use super::theme;
use crate::RenderError;
use ab_glyph::{Font, FontRef, Glyph, GlyphId, PxScale, ScaleFont, point};
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// DejaVu Sans, see `assets/DejaVuSans-LICENSE.txt`
static FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

const MARGIN_LEFT: u32 = 80;
const MARGIN_RIGHT: u32 = 24;
const MARGIN_TOP: u32 = 44;
const MARGIN_BOTTOM: u32 = 64;

const TITLE_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 11.0;
const MESSAGE_SIZE: f32 = 19.0;

/// Dash and gap length, in pixels, of dashed marker lines
const DASH: i32 = 8;

/// Plot-area bounds in pixels: left, top, right, bottom
pub type PlotArea = (u32, u32, u32, u32);

/// Horizontal anchoring of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    Right,
}

/// Labels and data ranges of one chart's axes
pub struct Axes<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub xr: (f64, f64),
    pub yr: (f64, f64),
}

/// Drawing surface for one chart
pub struct Canvas {
    img: RgbaImage,
    w: u32,
    h: u32,
    font: FontRef<'static>,
}

impl Canvas {
    /// Create a canvas filled with the theme background
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width <= MARGIN_LEFT + MARGIN_RIGHT || height <= MARGIN_TOP + MARGIN_BOTTOM {
            return Err(RenderError::CanvasTooSmall { width, height });
        }
        Ok(Canvas {
            img: RgbaImage::from_pixel(width, height, theme::BACKGROUND),
            w: width,
            h: height,
            font: FontRef::try_from_slice(FONT_DATA)?,
        })
    }

    pub fn plot_area(&self) -> PlotArea {
        (
            MARGIN_LEFT,
            MARGIN_TOP,
            self.w - MARGIN_RIGHT,
            self.h - MARGIN_BOTTOM,
        )
    }

    fn put_px(&mut self, x: i32, y: i32, c: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.w && (y as u32) < self.h {
            self.img.put_pixel(x as u32, y as u32, c);
        }
    }

    /// Mix `c` into the pixel at `coverage` opacity
    fn blend_px(&mut self, x: i32, y: i32, c: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.w || y as u32 >= self.h {
            return;
        }
        let a = coverage.clamp(0.0, 1.0);
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        for i in 0..3 {
            dst.0[i] = (c.0[i] as f32 * a + dst.0[i] as f32 * (1.0 - a)).round() as u8;
        }
    }

    /// Bresenham line
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgba<u8>) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put_px(x0, y0, c);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Line `width` pixels thick, widened horizontally for vertical lines
    /// and vertically otherwise
    pub fn draw_thick_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, c: Rgba<u8>) {
        let vertical = (x1 - x0).abs() < (y1 - y0).abs();
        for off in -(width / 2)..=((width - 1) / 2) {
            if vertical {
                self.draw_line(x0 + off, y0, x1 + off, y1, c);
            } else {
                self.draw_line(x0, y0 + off, x1, y1 + off, c);
            }
        }
    }

    /// Dashed vertical line spanning the plot area at pixel column `x`
    pub fn draw_dashed_vline(&mut self, x: i32, width: i32, c: Rgba<u8>) {
        let (_, t, _, b) = self.plot_area();
        let mut y = t as i32;
        while y < b as i32 {
            let end = (y + DASH).min(b as i32);
            self.draw_thick_line(x, y, x, end, width, c);
            y += 2 * DASH;
        }
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgba<u8>) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
        }
        if y0 > y1 {
            std::mem::swap(&mut y0, &mut y1);
        }
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.w as i32 - 1);
        let y1 = y1.min(self.h as i32 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put_px(x, y, c);
            }
        }
    }

    pub fn stroke_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgba<u8>) {
        self.draw_line(x0, y0, x1, y0, c);
        self.draw_line(x1, y0, x1, y1, c);
        self.draw_line(x1, y1, x0, y1, c);
        self.draw_line(x0, y1, x0, y0, c);
    }

    /// Hollow circle marker (box-plot fliers)
    pub fn draw_ring(&mut self, xc: i32, yc: i32, radius: i32, c: Rgba<u8>) {
        let r2_outer = radius * radius;
        let r2_inner = (radius - 1).max(0).pow(2);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = dx * dx + dy * dy;
                if d2 <= r2_outer && d2 >= r2_inner {
                    self.put_px(xc + dx, yc + dy, c);
                }
            }
        }
    }

    /// Connect consecutive points with straight segments
    pub fn draw_polyline(&mut self, points: &[(i32, i32)], width: i32, c: Rgba<u8>) {
        for pair in points.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            self.draw_thick_line(x0, y0, x1, y1, width, c);
        }
    }

    /// Glyphs of `text` on a baseline at y = 0, and the advance width
    fn layout(&self, text: &str, size: f32) -> (Vec<Glyph>, f32) {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let mut caret = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, 0.0)));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        (glyphs, caret)
    }

    /// Offset from a run's vertical centre down to its baseline
    fn baseline_offset(&self, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        (scaled.ascent() + scaled.descent()) / 2.0
    }

    /// Rasterize laid-out glyphs; `place` maps run coordinates to pixels
    fn rasterize(&mut self, glyphs: Vec<Glyph>, c: Rgba<u8>, place: impl Fn(f32, f32) -> (i32, i32)) {
        let font = self.font.clone();
        for glyph in glyphs {
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let (px, py) = place(bounds.min.x + gx as f32, bounds.min.y + gy as f32);
                self.blend_px(px, py, c, coverage);
            });
        }
    }

    /// Advance width of `text` in pixels
    #[cfg(test)]
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size).1
    }

    /// Horizontal text, vertically centred on `y`
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, size: f32, align: Align, c: Rgba<u8>) {
        let (glyphs, width) = self.layout(text, size);
        let left = match align {
            Align::Center => x as f32 - width / 2.0,
            Align::Right => x as f32 - width,
        };
        let baseline = y as f32 + self.baseline_offset(size);
        self.rasterize(glyphs, c, |gx, gy| {
            ((left + gx).round() as i32, (baseline + gy).round() as i32)
        });
    }

    /// Text rotated a quarter turn counter-clockwise, centred on (`x`, `y`)
    pub fn draw_vertical_text(&mut self, text: &str, x: i32, y: i32, size: f32, c: Rgba<u8>) {
        let (glyphs, width) = self.layout(text, size);
        let centre_u = width / 2.0;
        let centre_v = -self.baseline_offset(size);
        self.rasterize(glyphs, c, |u, v| {
            (
                (x as f32 + (v - centre_v)).round() as i32,
                (y as f32 - (u - centre_u)).round() as i32,
            )
        });
    }

    /// Title, spines, grid, labelled ticks and axis descriptions
    ///
    /// Y ticks are whole numbers from zero; `x_ticks` are placed as given.
    pub fn draw_axes(&mut self, axes: &Axes<'_>, x_ticks: &[(f64, String)]) {
        let area = self.plot_area();
        let (l, t, r, b) = (area.0 as i32, area.1 as i32, area.2 as i32, area.3 as i32);

        for (value, label) in integer_ticks(axes.yr.1) {
            let (_, y) = to_pixel(axes.xr.0, value, axes.xr, axes.yr, area);
            if y > t && y < b {
                self.draw_line(l + 1, y, r - 1, y, theme::GRID);
            }
            self.draw_line(l - 4, y, l, y, theme::TEXT);
            self.draw_text(&label, l - 7, y, TICK_SIZE, Align::Right, theme::TEXT);
        }
        for (value, label) in x_ticks {
            let (x, _) = to_pixel(*value, 0.0, axes.xr, axes.yr, area);
            self.draw_line(x, b, x, b + 4, theme::TEXT);
            self.draw_text(label, x, b + 14, TICK_SIZE, Align::Center, theme::TEXT);
        }
        self.stroke_rect(l, t, r, b, theme::SPINE);

        let centre_x = (l + r) / 2;
        self.draw_text(axes.title, centre_x, t / 2, TITLE_SIZE, Align::Center, theme::TEXT);
        self.draw_text(axes.x_label, centre_x, b + 40, LABEL_SIZE, Align::Center, theme::TEXT);
        self.draw_vertical_text(axes.y_label, 16, (t + b) / 2, LABEL_SIZE, theme::TEXT);
    }

    /// Empty-state message in the centre of the canvas
    pub fn draw_placeholder(&mut self, message: &str) {
        let (cx, cy) = ((self.w / 2) as i32, (self.h / 2) as i32);
        self.draw_text(message, cx, cy, MESSAGE_SIZE, Align::Center, theme::MUTED);
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    /// Bounding box of every pixel that differs from the background
    #[cfg(test)]
    pub fn painted_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        self.img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != theme::BACKGROUND)
            .fold(None, |acc, (x, y, _)| match acc {
                None => Some((x, y, x, y)),
                Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
            })
    }

    /// Encode the canvas as PNG
    pub fn encode_png(self) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(self.img)
            .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)?;
        Ok(buf)
    }
}

/// Map data coordinates into the plot area
pub fn to_pixel(x: f64, y: f64, xr: (f64, f64), yr: (f64, f64), area: PlotArea) -> (i32, i32) {
    let (xmin, xmax) = xr;
    let (ymin, ymax) = yr;
    let (l, t, r, b) = area;
    let px = if xmax != xmin {
        l as f64 + (x - xmin) / (xmax - xmin) * (r - l) as f64
    } else {
        l as f64
    };
    let py = if ymax != ymin {
        b as f64 - (y - ymin) / (ymax - ymin) * (b - t) as f64
    } else {
        b as f64
    };
    (px.round() as i32, py.round() as i32)
}

/// Whole-number ticks from 0 up to `max`, about four intervals
pub fn integer_ticks(max: f64) -> Vec<(f64, String)> {
    let step = (max / 4.0).ceil().max(1.0);
    let mut ticks = Vec::new();
    let mut value = 0.0;
    while value <= max {
        ticks.push((value, format!("{value:.0}")));
        value += step;
    }
    ticks
}

/// `count` evenly spaced ticks across `range`, with precision chosen from its span
pub fn even_ticks(range: (f64, f64), count: usize) -> Vec<(f64, String)> {
    let span = (range.1 - range.0).abs();
    let decimals = if span >= 10.0 {
        0
    } else if span >= 1.0 {
        1
    } else {
        2
    };
    reviewlens_stats::linspace(range.0, range.1, count)
        .into_iter()
        .map(|v| {
            let v = if v.abs() < 1e-12 { 0.0 } else { v };
            (v, format!("{v:.decimals$}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_tiny_canvas() {
        assert!(matches!(
            Canvas::new(0, 600),
            Err(RenderError::CanvasTooSmall { width: 0, height: 600 })
        ));
        assert!(Canvas::new(100, 600).is_err());
        assert!(Canvas::new(600, 100).is_err());
        assert!(Canvas::new(200, 120).is_ok());
    }

    #[test]
    fn test_to_pixel_corners() {
        let area = (60, 30, 970, 550);
        assert_eq!(to_pixel(0.0, 0.0, (0.0, 1.0), (0.0, 1.0), area), (60, 550));
        assert_eq!(to_pixel(1.0, 1.0, (0.0, 1.0), (0.0, 1.0), area), (970, 30));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut c = Canvas::new(200, 120).unwrap();
        c.fill_rect(-10, -10, 5, 5, theme::MARKER);
        assert_eq!(c.pixel(0, 0), theme::MARKER);
        assert_eq!(c.pixel(6, 6), theme::BACKGROUND);
    }

    #[test]
    fn test_text_is_rasterized_around_anchor() {
        let mut c = Canvas::new(400, 200).unwrap();
        assert!(c.painted_bounds().is_none());

        c.draw_text("No Data Available", 200, 100, 19.0, Align::Center, theme::MUTED);
        let (x0, y0, x1, y1) = c.painted_bounds().unwrap();
        let width = c.text_width("No Data Available", 19.0);
        assert!(x0 < 200 && x1 > 200);
        assert!(y0 < 100 && y1 > 100);
        assert!(((x1 - x0) as f32 - width).abs() < 6.0);
        assert!(y1 - y0 < 30);
    }

    #[test]
    fn test_vertical_text_runs_upward() {
        let mut c = Canvas::new(400, 200).unwrap();
        c.draw_vertical_text("Number of Reviews", 30, 100, 14.0, theme::TEXT);
        let (x0, y0, x1, y1) = c.painted_bounds().unwrap();
        assert!(y1 - y0 > x1 - x0);
        assert!(x0 >= 20 && x1 <= 40);
    }

    #[test]
    fn test_text_width_grows_with_text() {
        let c = Canvas::new(200, 120).unwrap();
        assert_eq!(c.text_width("", 14.0), 0.0);
        assert!(c.text_width("Rating", 14.0) < c.text_width("Rating Spread", 14.0));
        assert!(c.text_width("Rating", 11.0) < c.text_width("Rating", 20.0));
    }

    #[test]
    fn test_integer_ticks() {
        let labels: Vec<String> = integer_ticks(10.5).into_iter().map(|t| t.1).collect();
        assert_eq!(labels, vec!["0", "3", "6", "9"]);
        assert_eq!(integer_ticks(1.05).len(), 2);
        assert!(integer_ticks(f64::NAN).is_empty());
    }

    #[test]
    fn test_even_ticks_precision() {
        let labels: Vec<String> = even_ticks((-1.0, 1.0), 5).into_iter().map(|t| t.1).collect();
        assert_eq!(labels, vec!["-1.0", "-0.5", "0.0", "0.5", "1.0"]);
        let labels: Vec<String> = even_ticks((3.0, 403.0), 3).into_iter().map(|t| t.1).collect();
        assert_eq!(labels, vec!["3", "203", "403"]);
    }

    #[test]
    fn test_png_signature() {
        let png = Canvas::new(200, 120).unwrap().encode_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }
}
