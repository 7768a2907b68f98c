//! Plain horizontal bar charts. No text is drawn; the bar order and
//! relative lengths carry the information, and the labels live in the
//! accompanying JSON and markdown outputs.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::PipelineError;

const WIDTH: u32 = 800;
const MARGIN: u32 = 20;
const BAR_HEIGHT: u32 = 24;
const BAR_GAP: u32 = 8;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Anchor colors of the viridis map, dark to light.
const VIRIDIS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

pub const DISTRIBUTION_FILE: &str = "category_distribution.png";

/// `"AI & Machine Learning"` → `"ai_machine_learning"`.
pub fn slug(category: &str) -> String {
    category.replace(" & ", "_").replace(' ', "_").to_lowercase()
}

pub fn keywords_file(category: &str) -> String {
    format!("keywords_{}.png", slug(category))
}

/// Color `i` of `n`, spread evenly across the palette.
fn palette(i: usize, n: usize) -> Rgb<u8> {
    if n <= 1 {
        return Rgb(VIRIDIS[0]);
    }
    let pos = i as f32 / (n - 1) as f32 * (VIRIDIS.len() - 1) as f32;
    let lo = (pos.floor() as usize).min(VIRIDIS.len() - 1);
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    let t = pos - lo as f32;
    let mix = |c: usize| (VIRIDIS[lo][c] as f32 * (1.0 - t) + VIRIDIS[hi][c] as f32 * t).round() as u8;
    Rgb([mix(0), mix(1), mix(2)])
}

fn bar_len(value: usize, max: usize) -> u32 {
    let span = WIDTH - 2 * MARGIN;
    if value == 0 || max == 0 {
        return 0;
    }
    ((value as u64 * span as u64) / max as u64).max(1) as u32
}

/// One bar per value, top to bottom, scaled to the largest value.
pub fn render_bars(values: &[usize]) -> RgbImage {
    let n = values.len() as u32;
    let height = 2 * MARGIN + n * BAR_HEIGHT + n.saturating_sub(1) * BAR_GAP;
    let mut img = RgbImage::from_pixel(WIDTH, height.max(2 * MARGIN), BACKGROUND);
    let max = values.iter().copied().max().unwrap_or(0);

    for (i, &value) in values.iter().enumerate() {
        let top = MARGIN + i as u32 * (BAR_HEIGHT + BAR_GAP);
        let color = palette(i, values.len());
        for y in top..top + BAR_HEIGHT {
            for x in MARGIN..MARGIN + bar_len(value, max) {
                img.put_pixel(x, y, color);
            }
        }
    }
    img
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, PipelineError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn bar_chart_png(values: &[usize]) -> Result<Vec<u8>, PipelineError> {
    encode_png(&render_bars(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_match_output_names() {
        assert_eq!(slug("AI & Machine Learning"), "ai_machine_learning");
        assert_eq!(slug("Miscellaneous & Other Topics"), "miscellaneous_other_topics");
        assert_eq!(keywords_file("Quantum Computing"), "keywords_quantum_computing.png");
    }

    #[test]
    fn bars_scale_to_largest() {
        let img = render_bars(&[10, 5]);
        let y0 = MARGIN + BAR_HEIGHT / 2;
        let y1 = y0 + BAR_HEIGHT + BAR_GAP;
        let full_end = WIDTH - MARGIN - 1;
        let half_end = MARGIN + (WIDTH - 2 * MARGIN) / 2 - 1;

        assert_ne!(*img.get_pixel(full_end, y0), BACKGROUND);
        assert_ne!(*img.get_pixel(half_end, y1), BACKGROUND);
        assert_eq!(*img.get_pixel(half_end + 1, y1), BACKGROUND);
        assert_eq!(*img.get_pixel(MARGIN - 1, y0), BACKGROUND);
    }

    #[test]
    fn palette_endpoints() {
        assert_eq!(palette(0, 5), Rgb(VIRIDIS[0]));
        assert_eq!(palette(4, 5), Rgb(VIRIDIS[4]));
        assert_eq!(palette(0, 1), Rgb(VIRIDIS[0]));
    }

    #[test]
    fn empty_chart_is_still_a_png() {
        let bytes = bar_chart_png(&[]).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
