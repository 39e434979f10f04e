//! Decode-session driver for streamed images
//!
//! A session pulls bytes from a transport (`embedded-io`), feeds them to a
//! black-box pixel decoder, and routes the decoded pixels through a
//! `RunCoalescer` to a blit sink. The loop owns the transport policy the
//! rendering core deliberately knows nothing about:
//!
//! - carry-over of bytes the decoder did not consume between feeds
//! - a bounded idle backoff while the transport has nothing to read
//! - a cumulative stall budget that abandons dead transfers
//!
//! Aborted sessions (stall or decode error) still flush the coalescer, so
//! whatever decoded before the abort stays on screen.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod decoder;
pub mod raw;
pub mod session;

pub use decoder::{FeedError, PixelDecoder};
pub use raw::{RawStreamDecoder, RawStreamError, RAW_MAGIC, RAW_RECORD_SIZE};
pub use session::{run_session, SessionConfig, SessionError};
