//! Seven-segment score digits
//!
//! Scores are drawn with the same rectangle mesh as the paddles, so the
//! renderer needs no text support.

use glam::Vec2;

/// Axis-aligned rectangle given by its centre and full size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

/// Segment bits, `a` (top) is bit 0 through `g` (middle) at bit 6
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Size of one digit cell
#[derive(Debug, Clone, Copy)]
pub struct DigitStyle {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
    pub gap: f32,
}

impl Default for DigitStyle {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 28.0,
            thickness: 4.0,
            gap: 6.0,
        }
    }
}

/// Segment rectangles for one digit whose top-left corner is `origin`
pub fn digit_rects(digit: u8, origin: Vec2, style: &DigitStyle) -> Vec<Rect> {
    let (w, h, t) = (style.width, style.height, style.thickness);
    let horizontal = Vec2::new(w, t);
    let vertical = Vec2::new(t, h / 2.0);
    let segments = [
        (Vec2::new(w / 2.0, t / 2.0), horizontal),       // a
        (Vec2::new(w - t / 2.0, h / 4.0), vertical),     // b
        (Vec2::new(w - t / 2.0, h * 0.75), vertical),    // c
        (Vec2::new(w / 2.0, h - t / 2.0), horizontal),   // d
        (Vec2::new(t / 2.0, h * 0.75), vertical),        // e
        (Vec2::new(t / 2.0, h / 4.0), vertical),         // f
        (Vec2::new(w / 2.0, h / 2.0), horizontal),       // g
    ];

    let bits = DIGIT_SEGMENTS[usize::from(digit % 10)];
    segments
        .iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, (center, size))| Rect {
            center: origin + *center,
            size: *size,
        })
        .collect()
}

/// Lay out a whole number horizontally centred on `center_x`
pub fn score_rects(value: u32, center_x: f32, top: f32, style: &DigitStyle) -> Vec<Rect> {
    let digits: Vec<u8> = value
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();

    let count = digits.len() as f32;
    let total_width = count * style.width + (count - 1.0) * style.gap;
    let left = center_x - total_width / 2.0;

    digits
        .iter()
        .enumerate()
        .flat_map(|(i, digit)| {
            let x = left + i as f32 * (style.width + style.gap);
            digit_rects(*digit, Vec2::new(x, top), style)
        })
        .collect()
}
