//! The blocking read/feed loop
//!
//! One call drives a whole transfer: poll the transport, read into the
//! feed buffer behind any carried-over bytes, hand the buffer to the
//! decoder, keep what it did not consume. The transport going quiet is
//! tolerated up to a cumulative idle budget; past that the transfer is
//! abandoned. All exits flush the coalescer first - an aborted session
//! leaves a partial image, not a missing run.

use eikon_render::{BlitSink, RunCoalescer};
use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady};

use crate::decoder::{FeedError, PixelDecoder};

/// Feed buffer size in bytes. Decoders never see more than this at once.
const FEED_BUF_SIZE: usize = 1024;

/// Transport-loop tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Idle polls tolerated over the whole session before it is abandoned.
    ///
    /// The count is cumulative, not consecutive: a transfer that keeps
    /// trickling but spends most polls idle still hits the budget.
    pub max_idle_polls: u32,
    /// Wait between idle polls, in milliseconds.
    pub idle_wait_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_idle_polls: 40_000,
            idle_wait_ms: 2,
        }
    }
}

/// Why a session ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError<T, D, B> {
    /// The transport failed.
    Transport(T),
    /// The decoder rejected the bitstream.
    Decode(D),
    /// The blit sink failed.
    Blit(B),
    /// The idle budget ran out before the stream ended.
    Stalled,
}

/// Run one decode session to completion.
///
/// Reads `source` until end of stream, feeding `decoder` and coalescing
/// its pixels into `sink`. `sink.begin()`/`sink.end()` bracket the
/// session; `delay` paces the idle backoff.
///
/// On any early exit the coalescer is flushed before the error is
/// returned, so the display keeps everything decoded up to that point.
/// The coalescer is left reset and reusable either way.
pub fn run_session<R, D, S, const N: usize>(
    source: &mut R,
    decoder: &mut D,
    coalescer: &mut RunCoalescer<N>,
    sink: &mut S,
    config: &SessionConfig,
    delay: &mut impl DelayNs,
) -> Result<(), SessionError<R::Error, D::Error, S::Error>>
where
    R: Read + ReadReady,
    D: PixelDecoder,
    S: BlitSink,
{
    sink.begin().map_err(SessionError::Blit)?;

    let mut buf = [0u8; FEED_BUF_SIZE];
    let mut remain = 0usize;
    let mut idle = 0u32;

    let outcome = loop {
        match source.read_ready() {
            Err(e) => break Err(SessionError::Transport(e)),
            Ok(false) => {
                if idle >= config.max_idle_polls {
                    break Err(SessionError::Stalled);
                }
                delay.delay_ms(config.idle_wait_ms);
                idle += 1;
                continue;
            }
            Ok(true) => {}
        }

        let n = match source.read(&mut buf[remain..]) {
            Ok(n) => n,
            Err(e) => break Err(SessionError::Transport(e)),
        };
        if n == 0 {
            // End of stream
            break Ok(());
        }
        let filled = remain + n;

        let fed = match decoder.feed(&buf[..filled], |event| coalescer.feed(event, sink)) {
            Ok(fed) => fed,
            Err(FeedError::Decode(e)) => break Err(SessionError::Decode(e)),
            Err(FeedError::Sink(e)) => break Err(SessionError::Blit(e)),
        };
        if fed == 0 && filled == buf.len() {
            // Decoder wants more lookahead than the feed buffer can hold;
            // treat like a dead transfer rather than spinning.
            break Err(SessionError::Stalled);
        }

        // Keep unconsumed bytes at the front for the next read
        buf.copy_within(fed..filled, 0);
        remain = filled - fed;
    };

    // Partial or complete, buffered pixels belong on screen.
    let flushed = coalescer.flush(sink);
    let ended = sink.end();

    outcome?;
    flushed.map_err(SessionError::Blit)?;
    ended.map_err(SessionError::Blit)?;
    Ok(())
}
