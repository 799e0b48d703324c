//! The ten icon designs.
//!
//! Every design is painted in three passes: the background (gradients and
//! patterns the label sits on), the label itself, then decorations drawn over
//! the label (borders and accent dots).

use crate::canvas::{lerp_color, Canvas, BLUE, COPPER, DARK, WHITE};
use crate::font::LabelFont;
use image::Rgb;
use std::fmt;
use std::str::FromStr;

const NAVY: Rgb<u8> = Rgb([0x1e, 0x3a, 0x8a]);
const SLATE: Rgb<u8> = Rgb([0x0f, 0x17, 0x2a]);

const BAR_COLORS: [Rgb<u8>; 6] = [
    Rgb([0x1e, 0x3a, 0x8a]),
    Rgb([0x1e, 0x40, 0xaf]),
    Rgb([0x25, 0x63, 0xeb]),
    Rgb([0x3b, 0x82, 0xf6]),
    Rgb([0x60, 0xa5, 0xfa]),
    Rgb([0x93, 0xc5, 0xfd]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconOption {
    BlueGlow,
    CopperSquare,
    Circuit,
    Diagonal,
    CopperDot,
    NavyCopperGlow,
    Hexagons,
    Bars,
    CopperWhite,
    DarkOutline,
}

impl IconOption {
    pub const ALL: [IconOption; 10] = [
        IconOption::BlueGlow,
        IconOption::CopperSquare,
        IconOption::Circuit,
        IconOption::Diagonal,
        IconOption::CopperDot,
        IconOption::NavyCopperGlow,
        IconOption::Hexagons,
        IconOption::Bars,
        IconOption::CopperWhite,
        IconOption::DarkOutline,
    ];

    /// Identifier used in file names, e.g. `option7`.
    pub fn id(self) -> &'static str {
        match self {
            IconOption::BlueGlow => "option1",
            IconOption::CopperSquare => "option2",
            IconOption::Circuit => "option3",
            IconOption::Diagonal => "option4",
            IconOption::CopperDot => "option5",
            IconOption::NavyCopperGlow => "option6",
            IconOption::Hexagons => "option7",
            IconOption::Bars => "option8",
            IconOption::CopperWhite => "option9",
            IconOption::DarkOutline => "option10",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IconOption::BlueGlow => "Minimalist with large centered text - blue gradient",
            IconOption::CopperSquare => "Geometric with square container - copper theme",
            IconOption::Circuit => "Technical circuit pattern",
            IconOption::Diagonal => "Modern diagonal gradient",
            IconOption::CopperDot => "Minimal copper accent",
            IconOption::NavyCopperGlow => "Dark blue with copper accent - modern",
            IconOption::Hexagons => "Geometric hexagon pattern",
            IconOption::Bars => "Gradient bars with LCM",
            IconOption::CopperWhite => "Copper gradient with white text",
            IconOption::DarkOutline => "Dark gradient with copper outline",
        }
    }

    /// Label em size as a fraction of the icon size.
    fn label_factor(self) -> f64 {
        match self {
            IconOption::BlueGlow | IconOption::Bars => 0.25,
            IconOption::CopperSquare => 0.20,
            IconOption::Circuit => 0.18,
            IconOption::Diagonal | IconOption::DarkOutline => 0.28,
            IconOption::CopperDot | IconOption::Hexagons => 0.22,
            IconOption::NavyCopperGlow | IconOption::CopperWhite => 0.26,
        }
    }

    /// Render the complete icon at `size`×`size`.
    pub fn render(self, size: u32, text: &str, font: &LabelFont) -> Canvas {
        let mut canvas = Canvas::new(size, DARK);
        self.paint_background(&mut canvas);
        self.draw_label(&mut canvas, text, font);
        self.paint_decorations(&mut canvas);
        canvas
    }

    /// Everything drawn underneath the label.
    pub fn paint_background(self, canvas: &mut Canvas) {
        let size = canvas.size();
        match self {
            IconOption::BlueGlow => canvas.vertical_gradient(|y| mirrored_blue(y, size)),
            IconOption::CopperSquare => {
                canvas.vertical_gradient(|y| vertical(DARK, COPPER, y, size));
                copper_container(canvas);
            }
            IconOption::Circuit => circuit_pattern(canvas),
            IconOption::Diagonal => canvas.diagonal_gradient(DARK, BLUE),
            IconOption::CopperDot | IconOption::CopperWhite => {
                canvas.vertical_gradient(|y| vertical(DARK, COPPER, y, size))
            }
            IconOption::NavyCopperGlow => {
                canvas.vertical_gradient(|y| vertical(DARK, NAVY, y, size))
            }
            IconOption::Hexagons => hexagon_pattern(canvas),
            IconOption::Bars => gradient_bars(canvas),
            IconOption::DarkOutline => {
                canvas.vertical_gradient(|y| vertical(DARK, SLATE, y, size))
            }
        }
    }

    fn draw_label(self, canvas: &mut Canvas, text: &str, font: &LabelFont) {
        let size = canvas.size();
        let em = scaled(size, self.label_factor());
        match self {
            IconOption::CopperSquare => {
                let bbox = font.text_bbox(text, em);
                let (origin, box_size) = container_box(size);
                let x = origin + (box_size - bbox.width()).div_euclid(2);
                let y = origin + (box_size - bbox.height()).div_euclid(2);
                font.draw_text(canvas, x, y, text, em, DARK);
            }
            IconOption::Circuit => {
                let (x, _) = font.centered_origin(size, text, em);
                let y = size as i64 - scaled(size, 0.15) as i64;
                font.draw_text(canvas, x, y, text, em, COPPER);
            }
            IconOption::BlueGlow => {
                let (x, y) = font.centered_origin(size, text, em);
                font.draw_glow(canvas, x, y, text, em, BLUE, 3);
            }
            IconOption::NavyCopperGlow => {
                let (x, y) = font.centered_origin(size, text, em);
                font.draw_glow(canvas, x, y, text, em, COPPER, 4);
            }
            IconOption::DarkOutline => {
                let (x, y) = font.centered_origin(size, text, em);
                font.draw_glow(canvas, x, y, text, em, BLUE, 4);
            }
            IconOption::Bars => {
                let (x, y) = font.centered_origin(size, text, em);
                font.draw_text(canvas, x, y, text, em, DARK);
            }
            IconOption::Diagonal
            | IconOption::CopperDot
            | IconOption::Hexagons
            | IconOption::CopperWhite => {
                let (x, y) = font.centered_origin(size, text, em);
                font.draw_text(canvas, x, y, text, em, WHITE);
            }
        }
    }

    /// Everything drawn over the label.
    pub fn paint_decorations(self, canvas: &mut Canvas) {
        let size = canvas.size();
        match self {
            IconOption::Diagonal => inset_border(canvas, 0.05, 3),
            IconOption::Hexagons => inset_border(canvas, 0.06, 3),
            IconOption::DarkOutline => inset_border(canvas, 0.06, 4),
            IconOption::CopperDot => {
                let half = (scaled(size, 0.03) / 2) as f64;
                let centre = (size / 2) as f64;
                let (near, far) = (centre - half, centre + half);
                canvas.fill_ellipse(near, near, far, far, COPPER);
            }
            IconOption::CopperWhite => {
                let dot = scaled(size, 0.025) as f64;
                for corner in [0.15, 0.85] {
                    let at = size as f64 * corner;
                    canvas.fill_ellipse(at, at, at + dot, at + dot, BLUE);
                }
            }
            IconOption::BlueGlow
            | IconOption::CopperSquare
            | IconOption::Circuit
            | IconOption::NavyCopperGlow
            | IconOption::Bars => {}
        }
    }
}

impl fmt::Display for IconOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IconOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconOption::ALL
            .into_iter()
            .find(|option| option.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown icon option '{s}', expected one of option1..option10")
            })
    }
}

/// `int(size * factor)`
fn scaled(size: u32, factor: f64) -> u32 {
    (size as f64 * factor) as u32
}

fn vertical(from: Rgb<u8>, to: Rgb<u8>, y: u32, size: u32) -> Rgb<u8> {
    lerp_color(from, to, y as f64 / size as f64)
}

/// Dark to blue over the top half, back to dark over the bottom half.
fn mirrored_blue(y: u32, size: u32) -> Rgb<u8> {
    let progress = y as f64 / size as f64;
    if progress < 0.5 {
        lerp_color(DARK, BLUE, progress * 2.0)
    } else {
        lerp_color(BLUE, DARK, (progress - 0.5) * 2.0)
    }
}

/// Top-left corner and edge length of the centred square container.
fn container_box(size: u32) -> (i64, i64) {
    let box_size = scaled(size, 0.5) as i64;
    ((size as i64 - box_size).div_euclid(2), box_size)
}

fn copper_container(canvas: &mut Canvas) {
    let (origin, box_size) = container_box(canvas.size());
    let far = origin + box_size;
    canvas.stroke_rect(origin, origin, far, far, 4, COPPER);

    let inner = (box_size as f64 * 0.8) as i64;
    let pad = (box_size - inner).div_euclid(2);
    canvas.fill_rect(origin + pad, origin + pad, far - pad, far - pad, COPPER);
}

fn circuit_pattern(canvas: &mut Canvas) {
    let size = canvas.size() as i64;
    let spacing = (scaled(canvas.size(), 0.08) as i64).max(1);
    let half = spacing / 2;
    for x in (0..size).step_by(spacing as usize) {
        for y in (0..size).step_by(spacing as usize) {
            canvas.fill_rect(x, y, x + half, y + half, BLUE);
            if x + spacing < size {
                canvas.fill_rect(x + half, y + half, x + spacing, y + spacing, BLUE);
            }
        }
    }
}

fn hexagon_pattern(canvas: &mut Canvas) {
    let size = canvas.size() as usize;
    let hex = (scaled(canvas.size(), 0.04) as usize).max(1);
    let h = hex as f64;
    for x in (0..size).step_by(hex * 2) {
        for y in (0..size).step_by(hex * 3) {
            let (x, y) = (x as f64, y as f64);
            let points = [
                (x, y),
                (x + h, y + h * 0.866),
                (x + h * 2.0, y),
                (x + h, y - h * 0.866),
            ];
            canvas.fill_polygon(&points, BLUE);
        }
    }
}

fn gradient_bars(canvas: &mut Canvas) {
    let size = canvas.size() as i64;
    let bar_height = size / BAR_COLORS.len() as i64;
    for (i, color) in BAR_COLORS.iter().enumerate() {
        let y = i as i64 * bar_height;
        canvas.fill_rect(0, y, size, y + bar_height, *color);
    }
}

fn inset_border(canvas: &mut Canvas, margin_factor: f64, width: u32) {
    let size = canvas.size() as i64;
    let margin = scaled(canvas.size(), margin_factor) as i64;
    canvas.stroke_rect(margin, margin, size - margin, size - margin, width, COPPER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::system_test_font;

    fn background(option: IconOption, size: u32) -> Canvas {
        let mut canvas = Canvas::new(size, DARK);
        option.paint_background(&mut canvas);
        canvas
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for option in IconOption::ALL {
            assert_eq!(option.id().parse::<IconOption>().unwrap(), option);
        }
        assert_eq!("OPTION10".parse::<IconOption>().unwrap(), IconOption::DarkOutline);
        assert!("option11".parse::<IconOption>().is_err());
    }

    #[test]
    fn blue_glow_background_is_mirrored() {
        let size = 192;
        let canvas = background(IconOption::BlueGlow, size);
        assert_eq!(canvas.pixel(0, 0), DARK);
        assert_eq!(canvas.pixel(5, 96), BLUE);
        // y = 48: ratio 0.5 on the rising half
        assert_eq!(canvas.pixel(100, 48), Rgb([36, 71, 129]));
        // y = 144: ratio 0.5 on the falling half, 59 - 23, 130 - 58.5, 246 - 116.5
        assert_eq!(canvas.pixel(100, 144), Rgb([36, 71, 129]));
    }

    #[test]
    fn copper_gradient_rows_match_formula() {
        let size = 512;
        let canvas = background(IconOption::CopperWhite, size);
        for y in [0u32, 1, 100, 255, 511] {
            let p = y as f64 / size as f64;
            let expected = Rgb([
                (13.0 + (201.0 - 13.0) * p) as u8,
                (13.0 + (162.0 - 13.0) * p) as u8,
                (13.0 + (39.0 - 13.0) * p) as u8,
            ]);
            assert_eq!(canvas.pixel(0, y), expected, "row {y}");
            assert_eq!(canvas.pixel(size - 1, y), expected, "row {y}");
        }
    }

    #[test]
    fn navy_and_slate_gradients_end_near_target() {
        let navy = background(IconOption::NavyCopperGlow, 192);
        assert_eq!(navy.pixel(0, 0), DARK);
        assert_eq!(navy.pixel(0, 191), vertical(DARK, NAVY, 191, 192));

        let slate = background(IconOption::DarkOutline, 192);
        assert_eq!(slate.pixel(7, 191), vertical(DARK, SLATE, 191, 192));
    }

    #[test]
    fn bars_leave_bottom_rows_dark_when_size_is_not_divisible() {
        let canvas = background(IconOption::Bars, 512);
        // bar_height = 85, last bar covers rows 425..=510
        assert_eq!(canvas.pixel(0, 0), BAR_COLORS[0]);
        assert_eq!(canvas.pixel(0, 85), BAR_COLORS[1]);
        assert_eq!(canvas.pixel(0, 84), BAR_COLORS[0]);
        assert_eq!(canvas.pixel(0, 510), BAR_COLORS[5]);
        assert_eq!(canvas.pixel(0, 511), DARK);

        let canvas = background(IconOption::Bars, 192);
        assert_eq!(canvas.pixel(0, 191), BAR_COLORS[5]);
    }

    #[test]
    fn circuit_tiles_follow_spacing() {
        let canvas = background(IconOption::Circuit, 192);
        // spacing 15, half 7
        assert_eq!(canvas.pixel(0, 0), BLUE);
        assert_eq!(canvas.pixel(7, 7), BLUE);
        assert_eq!(canvas.pixel(10, 3), DARK);
        assert_eq!(canvas.pixel(12, 12), BLUE);
        // last column starts at x = 180 with no trailing square
        assert_eq!(canvas.pixel(190, 190), DARK);
    }

    #[test]
    fn hexagons_are_blue_on_dark() {
        let canvas = background(IconOption::Hexagons, 192);
        // hex 7: rhombus around (7, 0) is clipped at the top edge
        assert_eq!(canvas.pixel(7, 2), BLUE);
        assert_eq!(canvas.pixel(7, 12), DARK);
        assert_eq!(canvas.pixel(7, 23), BLUE);
    }

    #[test]
    fn copper_square_has_outline_and_inner_fill() {
        let size = 192;
        let canvas = background(IconOption::CopperSquare, size);
        // box 96 at 48, inner 76 with pad 10
        assert_eq!(canvas.pixel(48, 100), COPPER);
        assert_eq!(canvas.pixel(51, 100), COPPER);
        assert_ne!(canvas.pixel(53, 100), COPPER);
        assert_eq!(canvas.pixel(58, 100), COPPER);
        assert_eq!(canvas.pixel(96, 96), COPPER);
    }

    #[test]
    fn diagonal_background_and_border() {
        let size = 192;
        let mut canvas = background(IconOption::Diagonal, size);
        IconOption::Diagonal.paint_decorations(&mut canvas);
        // margin 9, width 3
        assert_eq!(canvas.pixel(9, 100), COPPER);
        assert_eq!(canvas.pixel(11, 100), COPPER);
        assert_eq!(canvas.pixel(183, 100), COPPER);
        assert_eq!(canvas.pixel(8, 100), lerp_color(DARK, BLUE, 108.0 / 384.0));
    }

    #[test]
    fn accent_dots_are_placed() {
        let mut canvas = Canvas::new(512, DARK);
        IconOption::CopperDot.paint_decorations(&mut canvas);
        assert_eq!(canvas.pixel(256, 256), COPPER);
        assert_eq!(canvas.pixel(240, 240), DARK);

        let mut canvas = Canvas::new(512, DARK);
        IconOption::CopperWhite.paint_decorations(&mut canvas);
        // dot 12 starting at 76.8 and 435.2
        assert_eq!(canvas.pixel(82, 82), BLUE);
        assert_eq!(canvas.pixel(441, 441), BLUE);
        assert_eq!(canvas.pixel(256, 256), DARK);
    }

    #[test]
    fn every_option_renders_at_requested_size() {
        let Some(font) = system_test_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        for option in IconOption::ALL {
            let image = option.render(192, "LCM", &font).into_image();
            assert_eq!(image.dimensions(), (192, 192), "{option}");
        }
    }

    #[test]
    fn glow_label_changes_the_centre() {
        let Some(font) = system_test_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let plain = background(IconOption::NavyCopperGlow, 192).into_image();
        let rendered = IconOption::NavyCopperGlow.render(192, "LCM", &font).into_image();
        let changed = plain
            .pixels()
            .zip(rendered.pixels())
            .filter(|(a, b)| a != b)
            .count();
        assert!(changed > 0);
        assert_eq!(rendered.get_pixel(0, 0), plain.get_pixel(0, 0));
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of the pixels that differ.
    fn changed_extent(before: &Canvas, after: &Canvas) -> Option<(i64, i64, i64, i64)> {
        let mut extent: Option<(i64, i64, i64, i64)> = None;
        for y in 0..before.size() {
            for x in 0..before.size() {
                if before.pixel(x, y) == after.pixel(x, y) {
                    continue;
                }
                let (x, y) = (x as i64, y as i64);
                extent = Some(match extent {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        extent
    }

    #[test]
    fn copper_square_label_is_placed_by_text_size_in_the_container() {
        let Some(font) = system_test_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let size = 512;
        let em = scaled(size, 0.20);
        let bbox = font.text_bbox("LCM", em);
        let (origin, box_size) = container_box(size);
        let x = origin + (box_size - bbox.width()).div_euclid(2);
        let y = origin + (box_size - bbox.height()).div_euclid(2);

        let before = background(IconOption::CopperSquare, size);
        let after = IconOption::CopperSquare.render(size, "LCM", &font);
        let (min_x, min_y, max_x, max_y) =
            changed_extent(&before, &after).expect("label should leave ink");

        // Ink starts at the origin plus the glyph bearing, on both axes.
        assert!((x + bbox.left..=x + bbox.left + 1).contains(&min_x), "min_x {min_x}");
        assert!((y + bbox.top..=y + bbox.top + 1).contains(&min_y), "min_y {min_y}");
        assert!((x + bbox.right - 2..x + bbox.right).contains(&max_x), "max_x {max_x}");
        assert!((y + bbox.bottom - 2..y + bbox.bottom).contains(&max_y), "max_y {max_y}");

        // and stays inside the copper outline
        let far = origin + box_size;
        assert!(min_x > origin + 3 && max_x < far - 3);
        assert!(min_y > origin + 3 && max_y < far - 3);
    }

    #[test]
    fn circuit_label_sits_near_the_bottom() {
        let Some(font) = system_test_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let size = 512;
        let em = scaled(size, 0.18);
        let bbox = font.text_bbox("LCM", em);
        let (x, _) = font.centered_origin(size, "LCM", em);
        let y = size as i64 - scaled(size, 0.15) as i64;

        let before = background(IconOption::Circuit, size);
        let after = IconOption::Circuit.render(size, "LCM", &font);
        let (min_x, min_y, max_x, max_y) =
            changed_extent(&before, &after).expect("label should leave ink");

        assert!((y + bbox.top..=y + bbox.top + 1).contains(&min_y), "min_y {min_y}");
        assert!((x + bbox.left..=x + bbox.left + 1).contains(&min_x), "min_x {min_x}");
        assert!(max_x < x + bbox.right);
        assert!(max_y < size as i64);
    }

    #[test]
    fn blue_glow_stamps_radius_three_around_the_centred_origin() {
        let Some(font) = system_test_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let size = 192;
        let em = scaled(size, 0.25);
        let (x, y) = font.centered_origin(size, "LCM", em);

        let mut expected = background(IconOption::BlueGlow, size);
        for ox in -3..=3 {
            for oy in -3..=3 {
                font.draw_text(&mut expected, x + ox, y + oy, "LCM", em, BLUE);
            }
        }
        font.draw_text(&mut expected, x, y, "LCM", em, BLUE);

        let rendered = IconOption::BlueGlow.render(size, "LCM", &font);
        assert_eq!(rendered.into_image(), expected.into_image());
    }
}
