//! Dark dashboard palette shared by every chart

use image::Rgba;

/// Figure and plot-area background
pub const BACKGROUND: Rgba<u8> = Rgba([0x30, 0x31, 0x34, 0xff]);
/// Axis spines
pub const SPINE: Rgba<u8> = Rgba([0x5f, 0x63, 0x68, 0xff]);
/// Ticks, whiskers and caps
pub const TEXT: Rgba<u8> = Rgba([0xe8, 0xea, 0xed, 0xff]);
/// Horizontal grid lines (text colour at low opacity over the background)
pub const GRID: Rgba<u8> = Rgba([0x3e, 0x3f, 0x42, 0xff]);
/// Placeholder glyph
pub const MUTED: Rgba<u8> = Rgba([0x9a, 0xa0, 0xa6, 0xff]);
/// Bar outlines
pub const EDGE: Rgba<u8> = Rgba([0x20, 0x21, 0x24, 0xff]);

/// Length histogram and rating-spread bars
pub const LENGTH_BAR: Rgba<u8> = Rgba([0x8a, 0xb4, 0xf8, 0xff]);
/// Polarity histogram bars
pub const POLARITY_BAR: Rgba<u8> = Rgba([0x34, 0xa8, 0x53, 0xff]);
/// Reference, mean and median markers; box-plot fliers
pub const MARKER: Rgba<u8> = Rgba([0xf2, 0x8b, 0x82, 0xff]);
/// Box-plot box fill (length bar colour at 40% over the background)
pub const BOX_FILL: Rgba<u8> = Rgba([0x54, 0x65, 0x82, 0xff]);
/// Rating density curve
pub const DENSITY: Rgba<u8> = Rgba([0x34, 0xa8, 0x53, 0xff]);
/// Standard-deviation markers
pub const STD_MARKER: Rgba<u8> = Rgba([0xfd, 0xd6, 0x63, 0xff]);
