//! Pixel-run coalescing
//!
//! Streaming image decoders hand over one pixel per callback. Pushing each
//! pixel to the panel individually is dominated by per-call overhead, so
//! the coalescer batches contiguous opaque pixels of one row into a small
//! fixed-capacity buffer and emits them as single horizontal blits.
//!
//! The decoder's stream is row-major with non-decreasing `y`, but gaps in
//! `x` are normal: transparent pixels are skipped entirely and leave holes
//! that close the current run. Memory use is bounded by the buffer capacity
//! regardless of image size.

use heapless::Vec;

use crate::color::{ByteOrder, Rgb565, ALPHA_THRESHOLD};
use crate::traits::BlitSink;

/// Default run-buffer capacity in pixels.
///
/// 128 is the knee of the call-count/memory trade-off on SPI panels;
/// larger buffers shave little and cost RAM.
pub const DEFAULT_RUN_CAPACITY: usize = 128;

/// One decoded pixel, as reported by the image decoder.
///
/// Decoders that report a width/height per event describe repeated pixels;
/// this layer treats every event as a single pixel at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelEvent {
    /// Column in image coordinates.
    pub x: u32,
    /// Row in image coordinates.
    pub y: u32,
    /// 8-bit RGBA channels.
    pub rgba: [u8; 4],
}

impl PixelEvent {
    /// Whether this pixel passes the binary opacity threshold.
    pub const fn is_opaque(&self) -> bool {
        self.rgba[3] > ALPHA_THRESHOLD
    }
}

/// Coalesces a row-major pixel stream into horizontal-run blits.
///
/// The coalescer is an explicit state object owned by the caller of a
/// decode session; it holds the open run, the byte-order configuration,
/// and the session's translation offset. Feed it every decoded pixel in
/// stream order and flush it once when the stream ends. It never fails on
/// its own - the only errors that come back are the sink's.
#[derive(Debug, Clone)]
pub struct RunCoalescer<const N: usize = DEFAULT_RUN_CAPACITY> {
    /// Column of the first pixel in the open run (image coordinates).
    origin_x: u32,
    /// Row of the open run (image coordinates).
    origin_y: u32,
    /// Column the next contiguous pixel must have.
    next_x: u32,
    /// Buffered colors of the open run.
    run: Vec<Rgb565, N>,
    /// Packing byte order for the target sink.
    order: ByteOrder,
    /// Translation added to every emitted run origin.
    offset: (i32, i32),
}

impl<const N: usize> Default for RunCoalescer<N> {
    fn default() -> Self {
        Self::new(ByteOrder::Native)
    }
}

impl<const N: usize> RunCoalescer<N> {
    /// Create a coalescer with no translation offset.
    pub fn new(order: ByteOrder) -> Self {
        Self::with_offset(order, 0, 0)
    }

    /// Create a coalescer that translates every run origin by `(dx, dy)`.
    ///
    /// The offset positions the decoded image on the display. Set it before
    /// the decode session starts; it must not change while pixels stream.
    pub fn with_offset(order: ByteOrder, dx: i32, dy: i32) -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            next_x: 0,
            run: Vec::new(),
            order,
            offset: (dx, dy),
        }
    }

    /// Reposition the image origin between sessions.
    pub fn set_offset(&mut self, dx: i32, dy: i32) {
        self.offset = (dx, dy);
    }

    /// The current translation offset.
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    /// Number of pixels currently buffered.
    pub fn pending(&self) -> usize {
        self.run.len()
    }

    /// Feed one decoded pixel.
    ///
    /// Transparent pixels (alpha at or below the threshold) are discarded
    /// without touching buffered state; the hole they leave closes the run
    /// when a later non-contiguous opaque pixel arrives. A full buffer, a
    /// row change, or a gap in `x` emits the buffered run to `sink` first.
    pub fn feed<S: BlitSink>(&mut self, event: PixelEvent, sink: &mut S) -> Result<(), S::Error> {
        if !event.is_opaque() {
            return Ok(());
        }
        let color = self.order.pack(event.rgba);

        if self.run.is_full() {
            self.emit(sink)?;
            self.start(event.x, event.y, color);
        } else if event.x == self.next_x && event.y == self.origin_y {
            let _ = self.run.push(color);
            self.next_x += 1;
        } else {
            self.emit(sink)?;
            self.start(event.x, event.y, color);
        }
        Ok(())
    }

    /// Emit whatever is buffered and reset for the next session.
    ///
    /// Call once when the stream ends, including after decode errors - the
    /// pixels already buffered belong on screen.
    pub fn flush<S: BlitSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.emit(sink)?;
        self.origin_x = 0;
        self.origin_y = 0;
        self.next_x = 0;
        Ok(())
    }

    /// Blit the open run, if any, at its translated origin.
    fn emit<S: BlitSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        if self.run.is_empty() {
            return Ok(());
        }
        let x = self.origin_x as i32 + self.offset.0;
        let y = self.origin_y as i32 + self.offset.1;
        sink.blit_run(x, y, &self.run)?;
        self.run.clear();
        Ok(())
    }

    /// Open a new run whose sole pixel is `color` at `(x, y)`.
    fn start(&mut self, x: u32, y: u32, color: Rgb565) {
        self.run.clear();
        let _ = self.run.push(color);
        self.origin_x = x;
        self.origin_y = y;
        self.next_x = x + 1;
    }
}
