//! Capability traits for the display seam
//!
//! The rendering algorithms never talk to hardware directly. They consume
//! two narrow capabilities that a panel driver (or a test mock) implements:
//! a horizontal-run blitter for image data and a text surface for measured
//! string drawing. Font, color, and background state for text live behind
//! the surface, exactly as they do on the hardware side.

use crate::color::Rgb565;

/// Sink for coalesced horizontal pixel runs.
///
/// A run is a single display row: `colors[i]` lands at `(x + i, y)`.
/// Implementations decide how to push the pixels (window + RAM write,
/// framebuffer copy, ...); callers guarantee runs arrive in decode order.
pub trait BlitSink {
    /// Error reported by the underlying surface.
    type Error;

    /// Draw `colors.len()` pixels starting at `(x, y)` on one row.
    fn blit_run(&mut self, x: i32, y: i32, colors: &[Rgb565]) -> Result<(), Self::Error>;

    /// Called once before a decode session starts streaming runs.
    ///
    /// Drivers that batch bus transactions can open one here.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once after the final run of a session (including aborted
    /// sessions - the partial image stays on screen).
    fn end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Measured text drawing under externally-held font and style state.
pub trait TextSurface {
    /// Error reported by the underlying surface.
    type Error;

    /// Pixel width of `text` under the currently active font.
    fn text_width(&self, text: &str) -> u32;

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error>;
}
