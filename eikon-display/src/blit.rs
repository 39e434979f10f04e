//! Run blitting onto a `DrawTarget`

use eikon_render::{BlitSink, Rgb565};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::primitives::Rectangle;

/// `BlitSink` over any RGB565 `DrawTarget`.
///
/// Each coalesced run becomes a single `fill_contiguous` over a 1-pixel-high
/// rectangle, which drivers turn into one window + RAM write. Expects a
/// `ByteOrder::Native` coalescer: `DrawTarget` colors are logical values,
/// and byte swapping for the bus is the driver's business.
pub struct EgBlit<'a, D> {
    target: &'a mut D,
}

impl<'a, D> EgBlit<'a, D>
where
    D: DrawTarget<Color = EgRgb565>,
{
    /// Wrap a draw target for the duration of a decode session.
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> BlitSink for EgBlit<'_, D>
where
    D: DrawTarget<Color = EgRgb565>,
{
    type Error = D::Error;

    fn blit_run(&mut self, x: i32, y: i32, colors: &[Rgb565]) -> Result<(), Self::Error> {
        let area = Rectangle::new(Point::new(x, y), Size::new(colors.len() as u32, 1));
        self.target.fill_contiguous(
            &area,
            colors.iter().map(|c| EgRgb565::from(RawU16::new(c.raw()))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn test_run_lands_pixel_per_pixel() {
        let mut display = MockDisplay::<EgRgb565>::new();
        {
            let mut sink = EgBlit::new(&mut display);
            let colors = [Rgb565(0xF800), Rgb565(0x07E0), Rgb565(0x001F)];
            sink.blit_run(2, 1, &colors).unwrap();
        }

        assert_eq!(display.get_pixel(Point::new(2, 1)), Some(EgRgb565::RED));
        assert_eq!(display.get_pixel(Point::new(3, 1)), Some(EgRgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(4, 1)), Some(EgRgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(5, 1)), None);
        assert_eq!(display.get_pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn test_empty_run_is_noop() {
        let mut display = MockDisplay::<EgRgb565>::new();
        {
            let mut sink = EgBlit::new(&mut display);
            sink.blit_run(0, 0, &[]).unwrap();
        }
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }
}
