//! embedded-graphics adapters for Eikon
//!
//! Any panel driver exposing an RGB565 `DrawTarget` (mipidsi, ssd1306-class
//! drivers, framebuffer targets) can serve as the display surface behind
//! the rendering core:
//!
//! - [`EgBlit`] implements `BlitSink` with one `fill_contiguous` call per
//!   coalesced run, so drivers with a fast-path rectangle fill keep their
//!   minimal call count.
//! - [`EgText`] implements `TextSurface` over a `MonoTextStyle`, providing
//!   the measurement the wrap engines center lines with.

#![no_std]
#![deny(unsafe_code)]

mod blit;
mod text;

pub use blit::EgBlit;
pub use text::EgText;
