// Copyright 2026 the Expandable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a style span does not describe a valid range of a [`StyledText`].
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range and the length of the text it
/// was applied to.
///
/// [`StyledText`]: crate::StyledText
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,

    /// The start byte index of the caller-provided range.
    start: usize,

    /// The end byte index (exclusive) of the caller-provided range.
    end: usize,

    /// The length in bytes of the text at the time of failure.
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the text the range was applied to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn check_range(text: &str, start: usize, end: usize) -> Result<(), Self> {
        let len = text.len();
        let kind = if start > end {
            ErrorKind::InvalidRange
        } else if end > len {
            ErrorKind::InvalidBounds
        } else if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            ErrorKind::NotOnCharBoundary
        } else {
            return Ok(());
        };
        Err(Self {
            kind,
            start,
            end,
            len,
        })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "style range {}..{} out of bounds for text of len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(
                    f,
                    "invalid style range {}..{}: start > end",
                    self.start, self.end
                )
            }
            ErrorKind::NotOnCharBoundary => write!(
                f,
                "style range {}..{} not on UTF-8 boundary",
                self.start, self.end
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range end was past the end of the text.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was inside a UTF-8 encoded character.
    NotOnCharBoundary,
}
