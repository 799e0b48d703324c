//! Label font loading and text stamping.
//!
//! A run loads exactly one font: the primary path if it can be read and
//! parsed, otherwise the fallback path. Sizes are em sizes in pixels.

use crate::canvas::Canvas;
use image::Rgb;
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_PRIMARY_FONT: &str = r"C:\Windows\Fonts\JetBrainsMono-Bold.ttf";
pub const DEFAULT_FALLBACK_FONT: &str = r"C:\Windows\Fonts\arialbd.ttf";

#[derive(Debug, Error)]
pub enum FontError {
    #[error(
        "no usable font: neither {} nor {} could be loaded",
        .primary.display(),
        .fallback.display()
    )]
    Missing { primary: PathBuf, fallback: PathBuf },

    #[error("{} is not a valid TrueType/OpenType font", .0.display())]
    Parse(PathBuf),

    #[error("failed to read font {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ink bounding box of a piece of text laid out at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl TextBox {
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }
}

/// The font every label in a run is drawn with.
pub struct LabelFont {
    font: Font<'static>,
    path: PathBuf,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont").field("path", &self.path).finish()
    }
}

impl LabelFont {
    /// Load `primary`, falling back to `fallback` once. There is no further
    /// discovery: if the fallback is unreadable too the load fails with
    /// `Missing`, whatever kept the primary from loading.
    pub fn load(primary: &Path, fallback: &Path) -> Result<Self, FontError> {
        match Self::from_file(primary) {
            Ok(font) => Ok(font),
            Err(err) => {
                warn!(error = %err, fallback = %fallback.display(), "primary font unavailable");
                match Self::from_file(fallback) {
                    Ok(font) => Ok(font),
                    Err(FontError::Io { .. }) => Err(FontError::Missing {
                        primary: primary.to_path_buf(),
                        fallback: fallback.to_path_buf(),
                    }),
                    Err(other) => Err(other),
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::try_from_vec(data).ok_or_else(|| FontError::Parse(path.to_path_buf()))?;
        debug!(path = %path.display(), glyphs = font.glyph_count(), "loaded label font");
        Ok(Self {
            font,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// rusttype scales by ascent-to-descent height; convert from an em size.
    fn scale(&self, em_px: u32) -> Scale {
        let metrics = self.font.v_metrics_unscaled();
        let height_units = metrics.ascent - metrics.descent;
        let units_per_em = self.font.units_per_em().max(1) as f32;
        Scale::uniform(em_px as f32 * height_units / units_per_em)
    }

    /// Lay out `text` so the top of the ascender sits at `y`.
    fn layout(&self, text: &str, em_px: u32, x: i64, y: i64) -> Vec<PositionedGlyph<'_>> {
        let scale = self.scale(em_px);
        let ascent = self.font.v_metrics(scale).ascent;
        self.font
            .layout(text, scale, point(x as f32, y as f32 + ascent))
            .collect()
    }

    pub fn text_bbox(&self, text: &str, em_px: u32) -> TextBox {
        let mut bbox: Option<TextBox> = None;
        for glyph in self.layout(text, em_px, 0, 0) {
            let Some(rect) = glyph.pixel_bounding_box() else {
                continue;
            };
            let glyph_box = TextBox {
                left: rect.min.x as i64,
                top: rect.min.y as i64,
                right: rect.max.x as i64,
                bottom: rect.max.y as i64,
            };
            bbox = Some(match bbox {
                None => glyph_box,
                Some(b) => TextBox {
                    left: b.left.min(glyph_box.left),
                    top: b.top.min(glyph_box.top),
                    right: b.right.max(glyph_box.right),
                    bottom: b.bottom.max(glyph_box.bottom),
                },
            });
        }
        bbox.unwrap_or_default()
    }

    /// Origin that centres the ink box of `text` on a `size`×`size` canvas.
    pub fn centered_origin(&self, size: u32, text: &str, em_px: u32) -> (i64, i64) {
        let bbox = self.text_bbox(text, em_px);
        let size = size as i64;
        (
            (size - bbox.right + bbox.left).div_euclid(2),
            (size - bbox.bottom + bbox.top).div_euclid(2),
        )
    }

    /// Draw anti-aliased `text` with its layout origin at `(x, y)`.
    pub fn draw_text(
        &self,
        canvas: &mut Canvas,
        x: i64,
        y: i64,
        text: &str,
        em_px: u32,
        color: Rgb<u8>,
    ) {
        for glyph in self.layout(text, em_px, x, y) {
            let Some(rect) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                canvas.blend(
                    rect.min.x as i64 + gx as i64,
                    rect.min.y as i64 + gy as i64,
                    color,
                    coverage,
                );
            });
        }
    }

    /// Stamp `text` at every offset in `[-radius, radius]²`, then once more at
    /// the origin.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_glow(
        &self,
        canvas: &mut Canvas,
        x: i64,
        y: i64,
        text: &str,
        em_px: u32,
        color: Rgb<u8>,
        radius: i64,
    ) {
        for ox in -radius..=radius {
            for oy in -radius..=radius {
                self.draw_text(canvas, x + ox, y + oy, text, em_px, color);
            }
        }
        self.draw_text(canvas, x, y, text, em_px, color);
    }
}

/// Well-known locations of a bold TrueType font, used by tests that need ink.
#[cfg(test)]
pub(crate) fn system_test_font() -> Option<LabelFont> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/Library/Fonts/Arial Bold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        r"C:\Windows\Fonts\arialbd.ttf",
    ];
    CANDIDATES
        .iter()
        .find_map(|path| LabelFont::from_file(Path::new(path)).ok())
}
