//! Frame drawing: shifted content plus overlaid thumbs.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use vscroll::{Axis, Point, RenderModel, ThumbView};

/// Fallback when the configured color can't be shown in a terminal.
const FALLBACK_THUMB: Color = Color::DarkGrey;

const GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Synthetic content extent in cells.
#[derive(Debug, Clone, Copy)]
pub struct Content {
    pub width: u32,
    pub height: u32,
}

impl Content {
    /// Character at a content coordinate, `None` past the edge.
    pub fn cell(&self, column: u32, row: u32) -> Option<char> {
        if column >= self.width || row >= self.height {
            return None;
        }
        if column == 0 || column + 1 == self.width || row == 0 || row + 1 == self.height {
            return Some('#');
        }
        if column % 20 == 0 || row % 10 == 0 {
            return Some('+');
        }
        let index = (column + row) as usize % GLYPHS.len();
        Some(GLYPHS[index] as char)
    }

    /// One visible row of content, shifted by the scroll offset.
    fn line(&self, offset: (u32, u32), row: u16, width: u16) -> String {
        let (scroll_x, scroll_y) = offset;
        let content_row = scroll_y + u32::from(row);
        (0..width)
            .map(|column| {
                self.cell(scroll_x + u32::from(column), content_row)
                    .unwrap_or(' ')
            })
            .collect()
    }
}

/// Draw one frame.
///
/// `transform` is the content translation reported by the widget.
pub fn frame(
    out: &mut impl Write,
    size: (u16, u16),
    content: &Content,
    transform: Point,
    model: &RenderModel,
) -> io::Result<()> {
    let (width, height) = size;
    let offset = (to_cell(-transform.x), to_cell(-transform.y));

    queue!(out, ResetColor, Clear(ClearType::All))?;
    for row in 0..height {
        queue!(out, MoveTo(0, row), Print(content.line(offset, row, width)))?;
    }

    if let Some(thumb) = &model.vertical {
        draw_thumb(out, size, thumb)?;
    }
    if let Some(thumb) = &model.horizontal {
        draw_thumb(out, size, thumb)?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn draw_thumb(out: &mut impl Write, size: (u16, u16), thumb: &ThumbView) -> io::Result<()> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Ok(());
    }
    let color = parse_color(&thumb.color).unwrap_or(FALLBACK_THUMB);
    let (start, end) = thumb_cells(thumb);
    queue!(out, SetBackgroundColor(color), SetForegroundColor(color))?;

    match thumb.axis {
        Axis::Y => {
            let column = width - 1;
            for row in start..end.min(height) {
                queue!(out, MoveTo(column, row), Print(' '))?;
            }
        }
        Axis::X => {
            let row = height - 1;
            let end = end.min(width);
            if start < end {
                let bar = " ".repeat(usize::from(end - start));
                queue!(out, MoveTo(start, row), Print(bar))?;
            }
        }
    }
    queue!(out, ResetColor)
}

/// Cell span `[start, end)` covered by a thumb. Always at least one cell.
pub fn thumb_cells(thumb: &ThumbView) -> (u16, u16) {
    let start = to_cell(thumb.offset).min(u32::from(u16::MAX)) as u16;
    let length = to_cell(thumb.length).max(1).min(u32::from(u16::MAX)) as u16;
    (start, start.saturating_add(length))
}

/// Check if a cell lies on a thumb.
pub fn hits_thumb(thumb: &ThumbView, cell: u16) -> bool {
    let (start, end) = thumb_cells(thumb);
    cell >= start && cell < end
}

fn to_cell(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Parse a CSS color into a terminal color.
///
/// Handles `#rgb`, `#rrggbb`, `rgb(...)` and `rgba(...)`. Alpha is blended
/// over a white page, which is what the thumb looks like in a browser.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let args = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let (channels, alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], 1.0),
        [r, g, b, a] => ([*r, *g, *b], a.parse::<f64>().ok()?.clamp(0.0, 1.0)),
        _ => return None,
    };

    let mut rgb = [0u8; 3];
    for (slot, channel) in rgb.iter_mut().zip(channels) {
        let channel = channel.parse::<f64>().ok()?.clamp(0.0, 255.0);
        *slot = (channel * alpha + 255.0 * (1.0 - alpha)).round() as u8;
    }
    let [r, g, b] = rgb;
    Some(Color::Rgb { r, g, b })
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    let (r, g, b) = match digits.as_slice() {
        [r, g, b] => (r * 17, g * 17, b * 17),
        [r1, r0, g1, g0, b1, b0] => (r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0),
        _ => return None,
    };
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_short_and_long() {
        assert_eq!(parse_color("#888"), Some(Color::Rgb { r: 136, g: 136, b: 136 }));
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb { r: 255, g: 0, b: 128 }));
        assert_eq!(parse_color("#12"), None);
    }

    #[test]
    fn test_parse_rgba_blends_over_white() {
        assert_eq!(
            parse_color("rgba(0, 0, 0, 0.2)"),
            Some(Color::Rgb { r: 204, g: 204, b: 204 })
        );
        assert_eq!(parse_color("rgb(10,20,30)"), Some(Color::Rgb { r: 10, g: 20, b: 30 }));
    }

    #[test]
    fn test_parse_unknown_color() {
        assert_eq!(parse_color("tomato"), None);
        assert_eq!(parse_color("rgba(1, 2)"), None);
    }

    #[test]
    fn test_thumb_cells_rounds_and_keeps_one_cell() {
        let thumb = ThumbView {
            axis: Axis::Y,
            length: 0.2,
            offset: 3.6,
            color: "#000".to_string(),
        };
        assert_eq!(thumb_cells(&thumb), (4, 5));
        assert!(hits_thumb(&thumb, 4));
        assert!(!hits_thumb(&thumb, 5));
    }

    #[test]
    fn test_content_cells() {
        let content = Content { width: 40, height: 20 };
        assert_eq!(content.cell(0, 5), Some('#'));
        assert_eq!(content.cell(20, 5), Some('+'));
        assert_eq!(content.cell(40, 5), None);
        assert_eq!(content.line((38, 0), 5, 4), "h#  ");
    }
}
