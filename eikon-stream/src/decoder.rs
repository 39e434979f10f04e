//! Pixel decoder seam
//!
//! The image format is somebody else's problem: a decoder takes raw bytes
//! and calls back with pixels in raster order. This trait captures the
//! feed contract the session driver relies on, nothing more.

use eikon_render::PixelEvent;

/// Why a feed call stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedError<D, E> {
    /// The bitstream is malformed; the decoder cannot continue.
    Decode(D),
    /// The pixel callback failed; the bytes consumed so far are gone.
    Sink(E),
}

/// A streaming image decoder emitting pixels in raster order.
///
/// Implementations decode incrementally: each `feed` consumes as much of
/// `data` as possible, invokes `emit` once per decoded pixel, and returns
/// the number of bytes consumed. The caller presents unconsumed bytes
/// again, prefixed to the next chunk, so a decoder never has to buffer
/// partial input itself.
///
/// Pixels must come out row-major with non-decreasing `y`; gaps in `x`
/// (skipped transparent pixels) are fine.
pub trait PixelDecoder {
    /// Decode failure reported by the implementation.
    type Error;

    /// Consume a prefix of `data`, emitting decoded pixels.
    fn feed<F, E>(&mut self, data: &[u8], emit: F) -> Result<usize, FeedError<Self::Error, E>>
    where
        F: FnMut(PixelEvent) -> Result<(), E>;
}
