use std::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

/// An in-memory monochrome display rendered as text, `#` for lit pixels.
///
/// Pixels outside the canvas are dropped, as a real display driver would clip them.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    size: Size,
    pixels: Vec<bool>,
}

impl TextCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![false; (size.width * size.height) as usize],
        }
    }

    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        x < self.size.width && y < self.size.height && self.pixels[self.index(x, y)]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.size.width + x) as usize
    }

    /// One line per pixel row, each followed by `line_ending`.
    pub fn render(&self, line_ending: &str) -> String {
        let mut out = String::new();
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                out.push(if self.is_lit(x, y) { '#' } else { ' ' });
            }
            out.push_str(line_ending);
        }
        out
    }
}

impl OriginDimensions for TextCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for TextCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < self.size.width && y < self.size.height {
                let index = self.index(x, y);
                self.pixels[index] = color.is_on();
            }
        }
        Ok(())
    }
}
