//! Board-agnostic rendering core for streamed images and wrapped text
//!
//! This crate contains the algorithmic heart of Eikon, with no dependency
//! on any particular decoder, transport, or panel driver:
//!
//! - RGB565 color packing with runtime byte-order selection
//! - The pixel-run coalescer (batches decoded pixels into horizontal blits)
//! - Capability traits for the display seam (`BlitSink`, `TextSurface`)
//! - Greedy word wrapping inside circular and rectangular regions
//!
//! Everything here runs to completion synchronously and owns its state
//! explicitly, so the same code serves firmware targets and host tests.
//!
//! The crate is `no_std`; the wrap engine uses `alloc` for line assembly
//! (words are never split, so a line has no fixed capacity bound).

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod coalesce;
pub mod color;
pub mod traits;
pub mod wrap;

pub use coalesce::{PixelEvent, RunCoalescer, DEFAULT_RUN_CAPACITY};
pub use color::{ByteOrder, Rgb565, ALPHA_THRESHOLD};
pub use traits::{BlitSink, TextSurface};
pub use wrap::{CircleWrap, ColumnWrap, WrapRegion};
