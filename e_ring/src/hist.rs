//! hist
//!
//! This module provides implementation to draw histograms on a Display
//!

use crate::{FindRange, Range, Ring};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle};
use embedded_graphics::Drawable;

/// Represent a histogram with values contained in the `ring` but rescaled to fit in the window
/// of `size` pixels whose top left corner is `upper_left`.
///
/// Every slot of the ring owns one pixel column, the newest value is drawn on the rightmost column.
///
/// # Example
/// ```
/// use e_ring::hist::Hist;
/// use e_ring::Ring;
/// use embedded_graphics::geometry::{Point, Size};
/// use embedded_graphics::mock_display::MockDisplay;
/// use embedded_graphics::pixelcolor::BinaryColor;
///
/// let ring: Ring<i16, 3> = [1, 2, 3].into_iter().collect();
/// let hist = Hist::new(Point::zero(), Size::new(3, 5));
///
/// let mut display = MockDisplay::new();
/// display.set_allow_overdraw(true);
/// hist.draw(&ring, &mut display, BinaryColor::On, BinaryColor::Off).unwrap();
///
/// display.assert_pattern(&[
///     "..#", //
///     "..#", //
///     ".##", //
///     ".##", //
///     "###", //
/// ]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hist {
    upper_left: Point,
    size: Size,
}

/// Three points of a histogram column, from bottom to top.
///
/// `[A, B, C]` where `A` is the bottom pixel of the bar, `B` the top pixel of the bar and `C`
/// the top pixel of the window. A->B is foreground colored while B->C is background colored.
pub type ThreePoints = [Point; 3];

/// Errors in creating the histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The ring size must match the width (distance over the x axis) of the window
    #[error("hist width {width} does not match ring size {ring_size}")]
    RingSizeMismatch {
        /// The hist window width
        width: u32,
        /// The data size
        ring_size: usize,
    },
    /// The window must be at least one pixel high
    #[error("hist height must be greater than zero")]
    ZeroHeight,
    /// The window height does not fit the `i16` samples scale
    #[error("hist height {height} is too large")]
    HeightTooLarge {
        /// The hist window height
        height: u32,
    },
    /// The window corners do not fit the `i32` display coordinates
    #[error("hist window does not fit the display coordinates")]
    WindowOutOfBounds,
    /// Draw error
    #[error("failed to draw the hist on the display")]
    Draw,
}

impl Hist {
    /// Create an Hist, the size is checked against the ring when drawing
    pub fn new(upper_left: Point, size: Size) -> Hist {
        Hist { upper_left, size }
    }

    /// The hist window size
    pub fn size(&self) -> &Size {
        &self.size
    }

    /// The top left corner of the hist window
    pub fn upper_left(&self) -> &Point {
        &self.upper_left
    }

    /// Draw the histogram on a display.
    ///
    /// Only columns holding a value are drawn, when the ring is not full the leftmost columns
    /// are left untouched.
    pub fn draw<C: PixelColor, D: DrawTarget<Color = C>, const N: usize>(
        &self,
        ring: &Ring<i16, N>,
        display: &mut D,
        foreground: C,
        background: C,
    ) -> Result<(), Error> {
        let lines = self.draw_lines(ring)?;
        let background_style = PrimitiveStyle::with_stroke(background, 1);
        let foreground_style = PrimitiveStyle::with_stroke(foreground, 1);
        for [a, b, c] in lines.iter().take(ring.len()) {
            // background first, the foreground bar then overwrites B
            Line::new(*b, *c)
                .into_styled(background_style)
                .draw(display)
                .map_err(|_| Error::Draw)?;
            Line::new(*a, *b)
                .into_styled(foreground_style)
                .draw(display)
                .map_err(|_| Error::Draw)?;
        }
        Ok(())
    }

    /// Returns the `N` columns of the histogram, see [`ThreePoints`].
    ///
    /// Columns are right aligned, entries past `ring.len()` are `Point::zero()` triples.
    pub fn draw_lines<const N: usize>(
        &self,
        ring: &Ring<i16, N>,
    ) -> Result<[ThreePoints; N], Error> {
        if u32::try_from(N).ok() != Some(self.size.width) {
            log::debug!(
                "hist width {} does not match ring size {}",
                self.size.width,
                ring.size()
            );
            return Err(Error::RingSizeMismatch {
                width: self.size.width,
                ring_size: ring.size(),
            });
        }
        let height = self.height()?;
        let bottom_right = self.bottom_right(height).ok_or_else(|| {
            log::debug!(
                "hist window at {:?} overflows i32 coordinates",
                self.upper_left
            );
            Error::WindowOutOfBounds
        })?;
        let mut result = [ThreePoints::default(); N];
        let range = match ring.range() {
            Some(range) => range,
            None => return Ok(result),
        };
        let desired_range = Range::new(1i16, height).map_err(|_| Error::ZeroHeight)?;
        let top = self.upper_left.y;
        let bottom = bottom_right.y;
        // len <= N, so the stored columns fit the window checked above
        let stored = i32::try_from(ring.len())
            .map_err(|_| Error::WindowOutOfBounds)?;
        let first_column = bottom_right.x - (stored - 1);
        let columns = first_column..=bottom_right.x;
        let rescaled = ring.rescaled_iter(range, desired_range);
        for ((x, resc), points) in columns.zip(rescaled).zip(result.iter_mut()) {
            let bar = round_positive(resc).clamp(1, i32::from(height));
            let a = Point::new(x, bottom);
            let b = Point::new(x, bottom - (bar - 1));
            let c = Point::new(x, top);
            *points = [a, b, c];
        }
        Ok(result)
    }

    /// Bottom right pixel of the window, `None` when it does not fit the `i32` coordinates.
    fn bottom_right(&self, height: i16) -> Option<Point> {
        let dx = i32::try_from(self.size.width.saturating_sub(1)).ok()?;
        let dy = i32::from(height) - 1;
        let right = self.upper_left.x.checked_add(dx)?;
        let bottom = self.upper_left.y.checked_add(dy)?;
        Some(Point::new(right, bottom))
    }

    fn height(&self) -> Result<i16, Error> {
        match self.size.height {
            0 => {
                log::debug!("hist height must be greater than zero");
                Err(Error::ZeroHeight)
            }
            height => i16::try_from(height).map_err(|_| {
                log::debug!("hist height {} is too large", height);
                Error::HeightTooLarge { height }
            }),
        }
    }
}

/// `core` has no `f32::round`, values here are always positive.
fn round_positive(value: f32) -> i32 {
    (value + 0.5) as i32
}
