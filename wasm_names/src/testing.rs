// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Byte-level fixture builders for unit tests.

use alloc::vec::Vec;

use crate::module::MAGIC;

pub(crate) fn write_uleb(out: &mut Vec<u8>, mut v: u64) {
    loop {
        let byte = v.to_le_bytes()[0] & 0x7f;
        v >>= 7;
        if v == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

pub(crate) fn write_name(out: &mut Vec<u8>, name: &[u8]) {
    write_uleb(out, name.len() as u64);
    out.extend_from_slice(name);
}

/// Wraps `payload` in an id byte and length prefix.
pub(crate) fn framed(id: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(id);
    write_uleb(&mut out, payload.len() as u64);
    out.extend_from_slice(payload);
    out
}

/// Payload of a function-names subsection.
pub(crate) fn function_names(entries: &[(u32, &str)]) -> Vec<u8> {
    let mut out = Vec::new();
    write_uleb(&mut out, entries.len() as u64);
    for &(index, name) in entries {
        write_uleb(&mut out, u64::from(index));
        write_name(&mut out, name.as_bytes());
    }
    out
}

/// Payload of a custom section: its name followed by `body`.
pub(crate) fn custom_payload(name: &[u8], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    write_name(&mut out, name);
    out.extend_from_slice(body);
    out
}

pub(crate) struct ModuleBytes {
    bytes: Vec<u8>,
}

impl ModuleBytes {
    pub(crate) fn new() -> Self {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&[1, 0, 0, 0]);
        Self { bytes }
    }

    pub(crate) fn section(mut self, id: u8, payload: &[u8]) -> Self {
        self.bytes.extend_from_slice(&framed(id, payload));
        self
    }

    /// Appends a `name` custom section made of the given `(id, payload)` subsections.
    pub(crate) fn name_section(self, subsections: &[(u8, Vec<u8>)]) -> Self {
        let mut body = Vec::new();
        for (id, payload) in subsections {
            body.extend_from_slice(&framed(*id, payload));
        }
        self.section(0, &custom_payload(b"name", &body))
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
