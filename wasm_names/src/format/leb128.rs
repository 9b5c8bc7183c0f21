// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! LEB128 variable-length integer decoding.

use super::{DecodeError, FormatIssue};

/// Reads an unsigned LEB128 integer from `bytes` starting at `*offset`.
///
/// On success `*offset` is advanced past the encoding. On failure `*offset` is left untouched.
///
/// Values with more than 64 significant bits are rejected with
/// [`FormatIssue::IntegerOverflow`] instead of being truncated.
pub fn read_uleb128_u64(bytes: &[u8], offset: &mut usize) -> Result<u64, DecodeError> {
    let start = *offset;
    let mut pos = start;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let Some(&byte) = bytes.get(pos) else {
            return Err(DecodeError::UnexpectedEndOfInput { offset: pos });
        };
        pos += 1;

        let low = u64::from(byte & 0x7f);
        // The 10th byte may only contribute the single remaining bit.
        if shift > 63 || (shift == 63 && low > 1) {
            return Err(DecodeError::InvalidFormat {
                offset: start,
                reason: FormatIssue::IntegerOverflow,
            });
        }
        result |= low << shift;

        if byte & 0x80 == 0 {
            *offset = pos;
            return Ok(result);
        }
        shift += 7;
    }
}
