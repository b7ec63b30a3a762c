//! Bitmap Text Rendering
//!
//! Procedural text rendering using a 5x7 bitmap font drawn with SDL2
//! rectangles. The HUD only prints numbers (the experience counter), so the
//! glyph table covers digits and a few punctuation marks; anything else
//! renders as a full block.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Advance per character in unscaled pixels (5px glyph + 1px spacing)
const CHAR_ADVANCE: u32 = 6;

/// Glyph height in unscaled pixels
const CHAR_HEIGHT: u32 = 7;

/// Returns the pixel size of a rendered text block at the given scale
///
/// Width includes the 1px spacing after every character, matching what
/// [`draw_text`] actually covers. Deterministic, so callers can anchor
/// text to screen edges before drawing.
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    (chars * CHAR_ADVANCE * scale, CHAR_HEIGHT * scale)
}

/// Renders bitmap text at the given top-left position
///
/// # Parameters
///
/// - `canvas`: SDL2 canvas to render to
/// - `text`: text string to render
/// - `x`, `y`: top-left position in pixels
/// - `color`: text color
/// - `scale`: scaling factor (1 = 5x7 pixel characters, 2 = 10x14, etc.)
///
/// # Returns
///
/// - `Ok(())` on success
/// - `Err(String)` if SDL2 rendering fails
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let char_width = CHAR_ADVANCE * scale;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + (i as i32 * char_width as i32);

        // 5x7 bitmap font patterns (1 = pixel on, 0 = pixel off)
        let pattern: &[u8] = match c {
            '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
            '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
            '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
            '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
            '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
            '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
            '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
            '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
            '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
            '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
            '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
            '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
            ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
            _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111], // Full block for unknown
        };

        // Draw the character pixel by pixel
        for (row, &pattern_row) in pattern.iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + (col * pixel_size),
                        y + (row as i32 * pixel_size),
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_size_scales_linearly() {
        assert_eq!(text_size("0", 1), (6, 7));
        assert_eq!(text_size("0", 2), (12, 14));
        assert_eq!(text_size("1234", 2), (48, 14));
    }

    #[test]
    fn test_text_size_empty() {
        assert_eq!(text_size("", 3), (0, 21));
    }

    #[test]
    fn test_text_size_grows_per_character() {
        let (w3, _) = text_size("123", 2);
        let (w4, _) = text_size("1234", 2);
        assert_eq!(w4 - w3, 12);
    }
}
