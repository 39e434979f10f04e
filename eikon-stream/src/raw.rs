//! Raw pixel-event wire format
//!
//! A minimal framed stream for pre-decoded images, and the reference
//! `PixelDecoder` implementation used by the session tests:
//!
//! ```text
//! ┌───────┬──────────────────────────────┐
//! │ MAGIC │ RECORDS                      │
//! │ "EK"  │ 8 bytes each: x y rgba       │
//! └───────┴──────────────────────────────┘
//! ```
//!
//! Each record is `x: u16 LE`, `y: u16 LE`, then the four RGBA channel
//! bytes. Records follow raster order like any other decoder's output.
//! The stream has no length field; it ends when the transport does. A
//! trailing partial record at end of stream is ignored.

use eikon_render::PixelEvent;

use crate::decoder::{FeedError, PixelDecoder};

/// Stream magic, first two bytes on the wire.
pub const RAW_MAGIC: [u8; 2] = *b"EK";

/// Size of one encoded pixel record in bytes.
pub const RAW_RECORD_SIZE: usize = 8;

/// Errors the raw decoder can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawStreamError {
    /// The stream does not start with [`RAW_MAGIC`].
    BadMagic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawState {
    /// Waiting for the magic bytes.
    Header,
    /// Consuming fixed-size records.
    Records,
}

/// Decoder for the raw pixel-event wire format.
#[derive(Debug, Clone)]
pub struct RawStreamDecoder {
    state: RawState,
}

impl Default for RawStreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RawStreamDecoder {
    /// Create a decoder expecting a fresh stream (magic first).
    pub fn new() -> Self {
        Self {
            state: RawState::Header,
        }
    }
}

impl PixelDecoder for RawStreamDecoder {
    type Error = RawStreamError;

    fn feed<F, E>(&mut self, data: &[u8], mut emit: F) -> Result<usize, FeedError<Self::Error, E>>
    where
        F: FnMut(PixelEvent) -> Result<(), E>,
    {
        let mut consumed = 0;

        if self.state == RawState::Header {
            if data.len() < RAW_MAGIC.len() {
                return Ok(0);
            }
            if data[..RAW_MAGIC.len()] != RAW_MAGIC {
                return Err(FeedError::Decode(RawStreamError::BadMagic));
            }
            consumed = RAW_MAGIC.len();
            self.state = RawState::Records;
        }

        while data.len() - consumed >= RAW_RECORD_SIZE {
            let rec = &data[consumed..consumed + RAW_RECORD_SIZE];
            let event = PixelEvent {
                x: u16::from_le_bytes([rec[0], rec[1]]) as u32,
                y: u16::from_le_bytes([rec[2], rec[3]]) as u32,
                rgba: [rec[4], rec[5], rec[6], rec[7]],
            };
            emit(event).map_err(FeedError::Sink)?;
            consumed += RAW_RECORD_SIZE;
        }

        Ok(consumed)
    }
}

/// Encode one pixel record (host-side helper for building streams).
pub fn encode_record(x: u16, y: u16, rgba: [u8; 4]) -> [u8; RAW_RECORD_SIZE] {
    let xb = x.to_le_bytes();
    let yb = y.to_le_bytes();
    [xb[0], xb[1], yb[0], yb[1], rgba[0], rgba[1], rgba[2], rgba[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn collect_feed(
        decoder: &mut RawStreamDecoder,
        data: &[u8],
    ) -> (usize, Vec<PixelEvent>) {
        let mut events = Vec::new();
        let consumed = decoder
            .feed::<_, core::convert::Infallible>(data, |e| {
                events.push(e);
                Ok(())
            })
            .unwrap();
        (consumed, events)
    }

    #[test]
    fn test_decode_whole_stream() {
        let mut data = Vec::from(RAW_MAGIC);
        data.extend_from_slice(&encode_record(3, 1, [10, 20, 30, 255]));
        data.extend_from_slice(&encode_record(4, 1, [40, 50, 60, 255]));

        let mut decoder = RawStreamDecoder::new();
        let (consumed, events) = collect_feed(&mut decoder, &data);

        assert_eq!(consumed, data.len());
        assert_eq!(events.len(), 2);
        assert_eq!((events[0].x, events[0].y), (3, 1));
        assert_eq!(events[1].rgba, [40, 50, 60, 255]);
    }

    #[test]
    fn test_partial_record_left_unconsumed() {
        let mut data = Vec::from(RAW_MAGIC);
        data.extend_from_slice(&encode_record(0, 0, [1, 2, 3, 255]));
        data.extend_from_slice(&[0xAA, 0xBB, 0xCC]); // 3 bytes of the next record

        let mut decoder = RawStreamDecoder::new();
        let (consumed, events) = collect_feed(&mut decoder, &data);

        assert_eq!(consumed, data.len() - 3);
        assert_eq!(events.len(), 1);

        // Re-present the remainder plus the missing bytes
        let mut rest = Vec::from(&data[consumed..]);
        rest.extend_from_slice(&encode_record(9, 9, [0, 0, 0, 255])[3..]);
        let (consumed2, events2) = collect_feed(&mut decoder, &rest);
        assert_eq!(consumed2, RAW_RECORD_SIZE);
        assert_eq!(events2[0].x, 0xBBAA as u32);
    }

    #[test]
    fn test_short_header_waits() {
        let mut decoder = RawStreamDecoder::new();
        let (consumed, events) = collect_feed(&mut decoder, &RAW_MAGIC[..1]);
        assert_eq!(consumed, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut decoder = RawStreamDecoder::new();
        let result = decoder.feed::<_, core::convert::Infallible>(b"PNG....", |_| Ok(()));
        assert!(matches!(
            result,
            Err(FeedError::Decode(RawStreamError::BadMagic))
        ));
    }
}
