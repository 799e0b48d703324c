//! Square RGB raster and the drawing primitives the icon options are built from.
//!
//! Coordinates follow the usual 2D drawing-library conventions: rectangles are
//! given by inclusive corners and everything is clipped to the canvas, so
//! callers can pass shapes that hang off an edge.

use image::{Rgb, RgbImage};

/// Background every icon starts from.
pub const DARK: Rgb<u8> = Rgb([0x0d, 0x0d, 0x0d]);
pub const BLUE: Rgb<u8> = Rgb([0x3b, 0x82, 0xf6]);
pub const COPPER: Rgb<u8> = Rgb([0xc9, 0xa2, 0x27]);
pub const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// A fixed-size square canvas mutated in place by drawing calls.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: u32,
    pixels: RgbImage,
}

impl Canvas {
    /// Allocate a `size`×`size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgb<u8>) -> Self {
        Self {
            size,
            pixels: RgbImage::from_pixel(size, size, background),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }

    /// Set a pixel, silently ignoring coordinates outside the canvas.
    pub fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if self.contains(x, y) {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Blend `color` over the existing pixel with the given coverage in `0.0..=1.0`.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
        if !self.contains(x, y) || coverage <= 0.0 {
            return;
        }
        let coverage = coverage.min(1.0);
        let pixel = self.pixels.get_pixel_mut(x as u32, y as u32);
        for channel in 0..3 {
            let under = pixel[channel] as f32;
            let over = color[channel] as f32;
            pixel[channel] = (under + (over - under) * coverage).round() as u8;
        }
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.size as i64 && y < self.size as i64
    }

    /// Paint one full-width row.
    pub fn fill_row(&mut self, y: u32, color: Rgb<u8>) {
        if y >= self.size {
            return;
        }
        for x in 0..self.size {
            self.pixels.put_pixel(x, y, color);
        }
    }

    /// Fill the rectangle with inclusive corners `(x0, y0)` and `(x1, y1)`.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
        let last = self.size as i64 - 1;
        let (x0, x1) = (x0.max(0), x1.min(last));
        let (y0, y1) = (y0.max(0), y1.min(last));
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.pixels.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Stroke a rectangle outline `width` pixels thick, growing inward from the
    /// inclusive bounds.
    pub fn stroke_rect(
        &mut self,
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
        width: u32,
        color: Rgb<u8>,
    ) {
        for i in 0..width as i64 {
            let (left, top, right, bottom) = (x0 + i, y0 + i, x1 - i, y1 - i);
            if left > right || top > bottom {
                break;
            }
            self.fill_rect(left, top, right, top, color);
            self.fill_rect(left, bottom, right, bottom, color);
            self.fill_rect(left, top, left, bottom, color);
            self.fill_rect(right, top, right, bottom, color);
        }
    }

    /// Fill the ellipse inscribed in the inclusive bounding box.
    pub fn fill_ellipse(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        // The inclusive box spans one extra pixel on each axis.
        let (cx, cy) = ((x0 + x1 + 1.0) / 2.0, (y0 + y1 + 1.0) / 2.0);
        let (rx, ry) = ((x1 - x0 + 1.0) / 2.0, (y1 - y0 + 1.0) / 2.0);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        for y in y0.floor() as i64..=y1.ceil() as i64 {
            for x in x0.floor() as i64..=x1.ceil() as i64 {
                let dx = (x as f64 + 0.5 - cx) / rx;
                let dy = (y as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Fill a polygon, testing each pixel centre with the even-odd rule.
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgb<u8>) {
        if points.len() < 3 {
            return;
        }
        let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        for y in min_y.floor() as i64..=max_y.ceil() as i64 {
            for x in min_x.floor() as i64..=max_x.ceil() as i64 {
                if point_in_polygon(x as f64 + 0.5, y as f64 + 0.5, points) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Paint each row with the colour `color_at(y)` returns.
    pub fn vertical_gradient<F>(&mut self, color_at: F)
    where
        F: Fn(u32) -> Rgb<u8>,
    {
        for y in 0..self.size {
            self.fill_row(y, color_at(y));
        }
    }

    /// Top-left to bottom-right gradient with `t = (x + y) / (2 * size)`.
    pub fn diagonal_gradient(&mut self, from: Rgb<u8>, to: Rgb<u8>) {
        let span = (self.size * 2) as f64;
        for y in 0..self.size {
            for x in 0..self.size {
                let t = (x + y) as f64 / span;
                self.pixels.put_pixel(x, y, lerp_color(from, to, t));
            }
        }
    }
}

/// `int(a + (b - a) * t)` per channel.
pub fn lerp_color(from: Rgb<u8>, to: Rgb<u8>, t: f64) -> Rgb<u8> {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
    Rgb([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ])
}

fn point_in_polygon(px: f64, py: f64, points: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
