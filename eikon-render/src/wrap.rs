//! Greedy word wrapping inside shaped regions
//!
//! One engine drives both region shapes. Words (runs of characters between
//! spaces/newlines) are committed to the current line until the next word
//! would exceed the row's available width; the overflowing word is never
//! consumed early, so word boundaries survive the break. An explicit
//! newline always ends the line, even with width to spare. A word wider
//! than the region is placed on its own row rather than split.
//!
//! The shapes differ in two ways: the per-row width limit (a circle's
//! chord narrows toward the top and bottom and eventually exhausts the
//! region; a column is constant and never ends) and the width probe at a
//! word boundary (the circular layout reserves the trailing separator
//! space in the check, the column layout does not - the distinction is
//! deliberate and width-boundary cases depend on it).
//!
//! Every completed line is drawn immediately, centered for its own row.

use alloc::string::String;

use crate::traits::TextSurface;

/// Per-row geometry of a wrap region.
pub trait WrapRegion {
    /// Usable line width at row `y`, or `None` once the region is
    /// exhausted. Remaining text is not drawn after exhaustion; that is
    /// normal termination, not an error.
    fn max_line_width(&self, y: i32) -> Option<u32>;

    /// Left edge for a completed line of `line_width` pixels.
    ///
    /// Centering may place the edge outside the region when a single word
    /// is wider than the row; there is no clipping guarantee.
    fn line_left(&self, line_width: u32) -> i32;
}

/// What the width probe at a word boundary measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FitProbe {
    /// `line + word + " "` - the committed line keeps its separator space.
    WithSpace,
    /// `line + word` only.
    WordOnly,
}

/// How a line-building scan ended.
enum ScanStop {
    /// Ran out of input.
    End,
    /// The pending word would overflow; separator byte index recorded.
    Overflow(usize),
    /// Explicit newline consumed.
    Newline,
}

/// Circular wrap region: lines centered on `(cx, cy)`, each row limited to
/// the circle's chord at that height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CircleWrap {
    /// Circle center x.
    pub cx: i32,
    /// Circle center y.
    pub cy: i32,
    /// Circle radius in pixels.
    pub radius: u32,
    /// Fixed tuning offset added once to the starting row.
    pub y_offset: i32,
}

impl CircleWrap {
    /// Region centered at `(cx, cy)` with the given radius.
    pub const fn new(cx: i32, cy: i32, radius: u32) -> Self {
        Self {
            cx,
            cy,
            radius,
            y_offset: 0,
        }
    }

    /// Add a fixed vertical offset to the first line's row.
    pub const fn with_y_offset(mut self, y_offset: i32) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Lay out `text` from `start_y` downward, one line per `line_height`.
    ///
    /// Returns the number of lines drawn. Text that does not fit before
    /// the cursor leaves the circle is dropped.
    pub fn draw<T: TextSurface>(
        &self,
        surface: &mut T,
        text: &str,
        start_y: i32,
        line_height: u32,
    ) -> Result<u32, T::Error> {
        wrap_lines(
            surface,
            self,
            FitProbe::WithSpace,
            text,
            start_y + self.y_offset,
            line_height,
        )
    }
}

impl WrapRegion for CircleWrap {
    fn max_line_width(&self, y: i32) -> Option<u32> {
        let dy = (y - self.cy).unsigned_abs();
        if dy >= self.radius {
            return None;
        }
        let r = self.radius as f32;
        let dy = dy as f32;
        // Chord length at this height
        let chord = 2.0 * libm::sqrtf(r * r - dy * dy);
        Some(chord as u32)
    }

    fn line_left(&self, line_width: u32) -> i32 {
        self.cx - (line_width / 2) as i32
    }
}

/// Fixed-width column region: lines centered within `[left, left + width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColumnWrap {
    /// Column left edge.
    pub left: i32,
    /// Column width in pixels.
    pub width: u32,
}

impl ColumnWrap {
    /// Column starting at `left`, `width` pixels wide.
    pub const fn new(left: i32, width: u32) -> Self {
        Self { left, width }
    }

    /// Lay out all of `text` from `top_y` downward, one line per
    /// `line_height`. Returns the number of lines drawn.
    pub fn draw<T: TextSurface>(
        &self,
        surface: &mut T,
        text: &str,
        top_y: i32,
        line_height: u32,
    ) -> Result<u32, T::Error> {
        wrap_lines(surface, self, FitProbe::WordOnly, text, top_y, line_height)
    }
}

impl WrapRegion for ColumnWrap {
    fn max_line_width(&self, _y: i32) -> Option<u32> {
        Some(self.width)
    }

    fn line_left(&self, line_width: u32) -> i32 {
        self.left + (self.width as i32 - line_width as i32) / 2
    }
}

/// The shared engine: build and draw one line per iteration.
fn wrap_lines<T: TextSurface, R: WrapRegion>(
    surface: &mut T,
    region: &R,
    probe: FitProbe,
    text: &str,
    start_y: i32,
    line_height: u32,
) -> Result<u32, T::Error> {
    let mut remaining = text;
    let mut cursor_y = start_y;
    let mut lines_drawn = 0u32;

    while !remaining.is_empty() {
        let Some(max_width) = region.max_line_width(cursor_y) else {
            break;
        };

        let mut line = String::new();
        let mut word = String::new();
        // Byte index into `remaining` just past the last consumed input
        let mut consumed = 0usize;
        let mut stop = ScanStop::End;

        for (i, c) in remaining.char_indices() {
            if c == ' ' || c == '\n' {
                if !fits(surface, &line, &word, probe, max_width) {
                    // This word belongs to the next line; leave it and its
                    // separator unconsumed.
                    stop = ScanStop::Overflow(i);
                    break;
                }
                line.push_str(&word);
                line.push(' ');
                word.clear();
                consumed = i + 1;
                if c == '\n' {
                    stop = ScanStop::Newline;
                    break;
                }
            } else {
                word.push(c);
            }
        }

        // Trailing word at end of input: append if it fits, or force it
        // when the line is still empty (words are never split).
        if matches!(stop, ScanStop::End) && !word.is_empty() {
            let mut whole = line.clone();
            whole.push_str(&word);
            if surface.text_width(&whole) <= max_width || line.is_empty() {
                line = whole;
                word.clear();
                consumed = remaining.len();
            }
        }

        // Zero-progress guard: the row's first word overflows on its own.
        // Force it onto this line and consume it (plus its separator) so
        // layout always advances; the tail lays out on following rows.
        if line.is_empty() && !word.is_empty() {
            line.push_str(&word);
            word.clear();
            consumed = match stop {
                ScanStop::Overflow(i) => i + 1,
                _ => remaining.len(),
            };
        }

        if !line.is_empty() {
            let line_width = surface.text_width(&line);
            surface.draw_text(&line, region.line_left(line_width), cursor_y)?;
            lines_drawn += 1;
        }
        cursor_y += line_height as i32;

        if consumed == 0 || consumed > remaining.len() {
            // Nothing moved forward; bail rather than loop
            break;
        }
        remaining = &remaining[consumed..];
    }

    Ok(lines_drawn)
}

/// Would committing `word` (under the probe policy) keep the line inside
/// `max_width`?
fn fits<T: TextSurface>(
    surface: &T,
    line: &str,
    word: &str,
    probe: FitProbe,
    max_width: u32,
) -> bool {
    let mut candidate = String::with_capacity(line.len() + word.len() + 1);
    candidate.push_str(line);
    candidate.push_str(word);
    if probe == FitProbe::WithSpace {
        candidate.push(' ');
    }
    surface.text_width(&candidate) <= max_width
}
