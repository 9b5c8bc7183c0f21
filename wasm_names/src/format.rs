// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding primitives for the WebAssembly binary container.

mod leb128;

pub use leb128::read_uleb128_u64;

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// Why a module was rejected as [`DecodeError::InvalidFormat`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatIssue {
    /// The leading four bytes are not `\0asm`.
    BadMagic,
    /// A variable-length integer does not fit the width it is decoded into.
    IntegerOverflow,
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "bad magic header"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
        }
    }
}

/// A decode error for WebAssembly module bytes.
///
/// Both variants carry the absolute byte offset (from the start of the module) at which decoding
/// failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not a well-formed module.
    InvalidFormat {
        /// Offset of the offending value.
        offset: usize,
        /// What was wrong with it.
        reason: FormatIssue,
    },
    /// A read ran past the end of the input (or of the enclosing section).
    UnexpectedEndOfInput {
        /// Offset at which more bytes were required.
        offset: usize,
    },
}

impl DecodeError {
    /// Returns the byte offset at which decoding failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            Self::InvalidFormat { offset, .. } | Self::UnexpectedEndOfInput { offset } => offset,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { offset, reason } => {
                write!(f, "invalid module format at offset {offset}: {reason}")
            }
            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "unexpected end of input at offset {offset}")
            }
        }
    }
}

impl core::error::Error for DecodeError {}

/// A sequential byte reader with bounds checks.
///
/// Offsets are absolute: a reader produced by [`Reader::bounded`] reports the same offsets as its
/// parent, it just cannot read past its own end.
///
/// A failed read never advances the offset.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader over `bytes`, positioned at offset 0.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the current cursor offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the offset one past the last readable byte.
    #[must_use]
    pub fn end(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the number of bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Returns `true` if no bytes are left to read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Repositions the cursor.
    ///
    /// `offset` must not exceed [`Reader::end`]; callers derive it from lengths that were already
    /// checked against the buffer.
    pub fn seek(&mut self, offset: usize) {
        debug_assert!(offset <= self.bytes.len(), "seek past end of input");
        self.offset = offset.min(self.bytes.len());
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let eof = DecodeError::UnexpectedEndOfInput {
            offset: self.bytes.len(),
        };
        let end = self.offset.checked_add(len).ok_or(eof.clone())?;
        let slice = self.bytes.get(self.offset..end).ok_or(eof)?;
        self.offset = end;
        Ok(slice)
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    /// Reads an unsigned LEB128 integer as `u64`.
    pub fn read_uleb128_u64(&mut self) -> Result<u64, DecodeError> {
        read_uleb128_u64(self.bytes, &mut self.offset)
    }

    /// Reads an unsigned LEB128 integer as `u32`.
    ///
    /// Returns [`FormatIssue::IntegerOverflow`] if the decoded value does not fit in `u32`.
    pub fn read_uleb128_u32(&mut self) -> Result<u32, DecodeError> {
        let start = self.offset;
        let v = self.read_uleb128_u64()?;
        u32::try_from(v).map_err(|_| {
            self.offset = start;
            overflow(start)
        })
    }

    /// Reads an unsigned LEB128 integer as a byte count.
    pub fn read_len(&mut self) -> Result<usize, DecodeError> {
        let start = self.offset;
        let v = self.read_uleb128_u64()?;
        usize::try_from(v).map_err(|_| {
            self.offset = start;
            overflow(start)
        })
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.take(len)
    }

    /// Reads a length-prefixed byte string without interpreting it.
    pub fn read_name_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let start = self.offset;
        let len = self.read_len()?;
        self.take(len).inspect_err(|_| self.offset = start)
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD` rather than rejected.
    pub fn read_name(&mut self) -> Result<Cow<'a, str>, DecodeError> {
        let bytes = self.read_name_bytes()?;
        Ok(String::from_utf8_lossy(bytes))
    }

    /// Returns a reader over the next `len` bytes without advancing this one.
    ///
    /// The returned reader starts at the current offset and ends at `offset + len`.
    pub fn bounded(&self, len: usize) -> Result<Self, DecodeError> {
        let bytes = self.bytes;
        let end = self
            .offset
            .checked_add(len)
            .filter(|&end| end <= bytes.len())
            .ok_or(DecodeError::UnexpectedEndOfInput {
                offset: bytes.len(),
            })?;
        Ok(Self {
            bytes: &bytes[..end],
            offset: self.offset,
        })
    }
}

fn overflow(offset: usize) -> DecodeError {
    DecodeError::InvalidFormat {
        offset,
        reason: FormatIssue::IntegerOverflow,
    }
}
