//! Bounded formatted output: the kernel's `snprintf`.
//!
//! The format language is deliberately tiny. A two-state scanner walks the
//! format string; `%%` emits a percent sign and `%d` renders the next `i32`
//! argument in decimal. Every other conversion byte after `%` is dropped
//! without output. Growing this set is an interface change, not a fix.
//!
//! Output contract: truncate, no terminator. At most `capacity` bytes are
//! written; the byte at `capacity` and everything after it are never
//! touched, and no NUL is appended. The return value is the number of bytes
//! actually written.

use crate::stdlib::conversion::itoa;
use crate::string::str::strlen;

/// Longest `%d` rendering: `-2147483648` plus the NUL `itoa` appends.
const INT_TEXT_LEN: usize = 12;

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// Scanner state between format bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Copying literal bytes.
    Literal,
    /// A `%` was seen; the next byte selects the conversion.
    AfterPercent,
}

/// A piece of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSegment<'a> {
    /// Literal bytes to emit verbatim.
    Literal(&'a [u8]),
    /// `%%`: emit a single `%`.
    Percent,
    /// `%d`: render one signed integer argument.
    SignedInt,
    /// `%` followed by an unsupported conversion byte; emits nothing.
    Unsupported(u8),
}

/// Iterator over the segments of a format string.
///
/// The format ends at its first NUL or at the end of the slice. A `%` that
/// is the last byte of the format yields nothing.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    fmt: &'a [u8],
    pos: usize,
    state: ScanState,
}

impl<'a> Segments<'a> {
    #[must_use]
    pub fn new(fmt: &'a [u8]) -> Self {
        Self {
            fmt: &fmt[..strlen(fmt)],
            pos: 0,
            state: ScanState::Literal,
        }
    }

    /// Current scanner state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = FormatSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.fmt.len() {
            match self.state {
                ScanState::Literal => {
                    let start = self.pos;
                    while self.pos < self.fmt.len() && self.fmt[self.pos] != b'%' {
                        self.pos += 1;
                    }
                    let end = self.pos;
                    if self.pos < self.fmt.len() {
                        self.state = ScanState::AfterPercent;
                        self.pos += 1;
                    }
                    if end > start {
                        return Some(FormatSegment::Literal(&self.fmt[start..end]));
                    }
                }
                ScanState::AfterPercent => {
                    let conversion = self.fmt[self.pos];
                    self.pos += 1;
                    self.state = ScanState::Literal;
                    return Some(match conversion {
                        b'%' => FormatSegment::Percent,
                        b'd' => FormatSegment::SignedInt,
                        other => FormatSegment::Unsupported(other),
                    });
                }
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Bounded writer
// ---------------------------------------------------------------------------

/// Append-only view of an output buffer that refuses to grow past its
/// capacity.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    /// Wraps the first `min(capacity, buf.len())` bytes of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8], capacity: usize) -> Self {
        let limit = capacity.min(buf.len());
        Self {
            buf: &mut buf[..limit],
            written: 0,
            truncated: false,
        }
    }

    /// Appends as much of `bytes` as fits. Returns `false` once anything had
    /// to be cut.
    pub fn push(&mut self, bytes: &[u8]) -> bool {
        let room = self.buf.len() - self.written;
        let take = bytes.len().min(room);
        self.buf[self.written..self.written + take].copy_from_slice(&bytes[..take]);
        self.written += take;
        if take < bytes.len() {
            self.truncated = true;
        }
        !self.truncated
    }

    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Whether some output was cut at the capacity.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

// ---------------------------------------------------------------------------
// snprintf
// ---------------------------------------------------------------------------

/// Outcome of a bounded format call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOutcome {
    /// Bytes written to the output buffer.
    pub written: usize,
    /// Output was cut at the capacity.
    pub truncated: bool,
    /// `%d` directives consumed an argument.
    pub args_used: usize,
}

/// Formats `format` with `args` into `out`, writing at most `capacity`
/// bytes, and reports what happened.
///
/// `%d` directives take `args` in order; a `%d` with no argument left emits
/// nothing.
pub fn format_bounded(out: &mut [u8], capacity: usize, format: &[u8], args: &[i32]) -> FormatOutcome {
    let mut writer = BoundedWriter::new(out, capacity);
    let mut args = args.iter();
    let mut args_used = 0;

    for segment in Segments::new(format) {
        let fits = match segment {
            FormatSegment::Literal(bytes) => writer.push(bytes),
            FormatSegment::Percent => writer.push(b"%"),
            FormatSegment::SignedInt => match args.next() {
                Some(&value) => {
                    args_used += 1;
                    let mut text = [0u8; INT_TEXT_LEN];
                    match itoa(i64::from(value), 10, &mut text) {
                        Some(len) => writer.push(&text[..len]),
                        None => true,
                    }
                }
                None => true,
            },
            FormatSegment::Unsupported(_) => true,
        };
        if !fits {
            break;
        }
    }

    FormatOutcome {
        written: writer.written(),
        truncated: writer.truncated(),
        args_used,
    }
}

/// C-style `snprintf` over a slice of `%d` arguments.
///
/// Returns the number of bytes written, at most `capacity`. Output is never
/// NUL-terminated by this function.
pub fn snprintf(out: &mut [u8], capacity: usize, format: &[u8], args: &[i32]) -> usize {
    format_bounded(out, capacity, format, args).written
}
