//! Chart Style Module
//! Palettes and color mapping shared by the gallery pages.

use palette::{Hsl, IntoColor, Mix, Srgb};
use plotly::common::color::Rgb;

/// Categorical palette (Category10).
pub const CATEGORY10: [(u8, u8, u8); 10] = [
    (31, 119, 180),  // Blue
    (255, 127, 14),  // Orange
    (44, 160, 44),   // Green
    (214, 39, 40),   // Red
    (148, 103, 189), // Purple
    (140, 86, 75),   // Brown
    (227, 119, 194), // Pink
    (127, 127, 127), // Gray
    (188, 189, 34),  // Olive
    (23, 190, 207),  // Cyan
];

/// Anchor stops of the viridis ramp, low to high.
pub const VIRIDIS_STOPS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Color for a category index, cycling through the palette.
pub fn category_color(index: usize) -> Rgb {
    let (r, g, b) = CATEGORY10[index % CATEGORY10.len()];
    Rgb::new(r, g, b)
}

/// Generates `n` visually distinct colors using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb::new(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Maps `value` in `[lo, hi]` onto a ramp defined by `stops`, interpolating
/// linearly between adjacent stops. Out-of-range values clamp to the ends.
pub fn ramp_color(stops: &[(u8, u8, u8)], value: f64, lo: f64, hi: f64) -> Rgb {
    debug_assert!(stops.len() >= 2, "ramp needs at least two stops");
    let t = if hi > lo {
        (((value - lo) / (hi - lo)) as f32).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let scaled = t * (stops.len() - 1) as f32;
    let i = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - i as f32;

    let a = stop_to_linear(stops[i]);
    let b = stop_to_linear(stops[i + 1]);
    let mixed: Srgb = Srgb::from_linear(a.mix(b, frac));
    Rgb::new(
        (mixed.red * 255.0) as u8,
        (mixed.green * 255.0) as u8,
        (mixed.blue * 255.0) as u8,
    )
}

fn stop_to_linear((r, g, b): (u8, u8, u8)) -> palette::LinSrgb<f32> {
    Srgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    )
    .into_linear()
}
