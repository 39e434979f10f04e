//! Measured text drawing with mono fonts

use eikon_render::TextSurface;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

/// `TextSurface` over a `DrawTarget` and a mono font style.
///
/// Width is the style's advance (what the cursor moves, spaces included),
/// which is what greedy wrapping needs; drawing anchors the string's
/// top-left at the requested position.
pub struct EgText<'a, D> {
    target: &'a mut D,
    style: MonoTextStyle<'a, EgRgb565>,
}

impl<'a, D> EgText<'a, D>
where
    D: DrawTarget<Color = EgRgb565>,
{
    /// Wrap a draw target with the font/color style text will use.
    pub fn new(target: &'a mut D, style: MonoTextStyle<'a, EgRgb565>) -> Self {
        Self { target, style }
    }
}

impl<D> TextSurface for EgText<'_, D>
where
    D: DrawTarget<Color = EgRgb565>,
{
    type Error = D::Error;

    fn text_width(&self, text: &str) -> u32 {
        let metrics = self.style.measure_string(text, Point::zero(), Baseline::Top);
        metrics.next_position.x.max(0) as u32
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error> {
        Text::with_baseline(text, Point::new(x, y), self.style, Baseline::Top)
            .draw(self.target)
            .map(|_| ())
    }
}
