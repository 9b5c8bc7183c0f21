// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section walker for WebAssembly modules.
//!
//! Only the custom `name` section is interpreted, and within it only the function-names
//! subsection. Every other section and subsection is stepped over by its declared length, so
//! modules carrying sections this crate has never heard of still decode.

use crate::format::{DecodeError, FormatIssue, Reader};
use crate::names::NameIndex;
use crate::trace::{SectionAction, SectionInfo, TraceMask, TraceSink};

/// The four bytes every WebAssembly module starts with.
pub const MAGIC: [u8; 4] = *b"\0asm";

const VERSION_LEN: usize = 4;
const CUSTOM_SECTION_ID: u8 = 0;
const NAME_SECTION: &[u8] = b"name";
const FUNCTION_NAMES_ID: u8 = 1;

/// Decodes the function-name table of the module in `bytes`.
///
/// A module without a `name` section (or without function names in it) yields an empty
/// [`NameIndex`]. On error no partial table is returned.
///
/// # Example
///
/// ```
/// use wasm_names::module::decode_names;
///
/// let bytes = [
///     0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // header
///     0x00, 0x0b, // custom section, 11 bytes
///     0x04, b'n', b'a', b'm', b'e', // "name"
///     0x01, 0x04, // function names, 4 bytes
///     0x01, 0x07, 0x01, b'f', // 1 entry: 7 => "f"
/// ];
/// let names = decode_names(&bytes)?;
/// assert_eq!(names.resolve(7), Some("f"));
/// assert_eq!(names.resolve(8), None);
/// # Ok::<(), wasm_names::format::DecodeError>(())
/// ```
pub fn decode_names(bytes: &[u8]) -> Result<NameIndex, DecodeError> {
    decode_names_traced(bytes, None)
}

/// Like [`decode_names`], reporting progress to `trace`.
pub fn decode_names_traced(
    bytes: &[u8],
    trace: Option<&mut dyn TraceSink>,
) -> Result<NameIndex, DecodeError> {
    let mut tracer = Tracer::new(trace);
    let mut r = Reader::new(bytes);
    read_header(&mut r)?;

    let mut names = NameIndex::new();
    while !r.is_empty() {
        let (section, mut body) = read_framed(&mut r)?;
        let is_name_section =
            section.id == CUSTOM_SECTION_ID && body.read_name_bytes()? == NAME_SECTION;
        tracer.section(section, action(is_name_section));
        if is_name_section {
            decode_name_section(&mut body, &mut names, &mut tracer)?;
        }
        r.seek(section.end());
    }
    Ok(names)
}

fn read_header(r: &mut Reader<'_>) -> Result<(), DecodeError> {
    let start = r.offset();
    let magic = r.read_bytes(MAGIC.len())?;
    if magic != MAGIC.as_slice() {
        return Err(DecodeError::InvalidFormat {
            offset: start,
            reason: FormatIssue::BadMagic,
        });
    }
    // The version is not checked: the name section layout is the same across versions.
    r.read_bytes(VERSION_LEN)?;
    Ok(())
}

/// Reads an id byte and length prefix, returning the frame and a reader bounded to its payload.
///
/// `r` is left at the start of the payload.
fn read_framed<'a>(r: &mut Reader<'a>) -> Result<(SectionInfo, Reader<'a>), DecodeError> {
    let id = r.read_u8()?;
    let len = r.read_len()?;
    let info = SectionInfo {
        id,
        offset: r.offset(),
        len,
    };
    let body = r.bounded(len)?;
    Ok((info, body))
}

fn decode_name_section(
    body: &mut Reader<'_>,
    names: &mut NameIndex,
    tracer: &mut Tracer<'_>,
) -> Result<(), DecodeError> {
    while !body.is_empty() {
        let (subsection, mut payload) = read_framed(body)?;
        let is_function_names = subsection.id == FUNCTION_NAMES_ID;
        tracer.subsection(subsection, action(is_function_names));
        if is_function_names {
            decode_function_names(&mut payload, names, tracer)?;
        }
        body.seek(subsection.end());
    }
    Ok(())
}

fn decode_function_names(
    r: &mut Reader<'_>,
    names: &mut NameIndex,
    tracer: &mut Tracer<'_>,
) -> Result<(), DecodeError> {
    let count = r.read_uleb128_u32()?;
    for _ in 0..count {
        let index = r.read_uleb128_u32()?;
        let name = r.read_name()?.into_owned();
        tracer.function_name(index, &name, names.contains(index));
        names.insert(index, name);
    }
    Ok(())
}

fn action(interpreted: bool) -> SectionAction {
    if interpreted {
        SectionAction::Interpreted
    } else {
        SectionAction::Skipped
    }
}

/// Forwards events to an optional sink, filtered by its mask.
struct Tracer<'t> {
    sink: Option<&'t mut dyn TraceSink>,
    mask: TraceMask,
}

impl<'t> Tracer<'t> {
    fn new(sink: Option<&'t mut dyn TraceSink>) -> Self {
        let mask = sink.as_deref().map_or(TraceMask::NONE, |s| s.mask());
        Self { sink, mask }
    }

    fn enabled(&mut self, event: TraceMask) -> Option<&mut (dyn TraceSink + 't)> {
        if self.mask.contains(event) {
            self.sink.as_deref_mut()
        } else {
            None
        }
    }

    fn section(&mut self, info: SectionInfo, action: SectionAction) {
        if let Some(sink) = self.enabled(TraceMask::SECTIONS) {
            sink.section(info, action);
        }
    }

    fn subsection(&mut self, info: SectionInfo, action: SectionAction) {
        if let Some(sink) = self.enabled(TraceMask::SUBSECTIONS) {
            sink.subsection(info, action);
        }
    }

    fn function_name(&mut self, index: u32, name: &str, replaced: bool) {
        if let Some(sink) = self.enabled(TraceMask::NAMES) {
            sink.function_name(index, name, replaced);
        }
    }
}
