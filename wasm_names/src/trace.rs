// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing hooks for the name decoder.
//!
//! Tracing is optional and `no_std` friendly. The decoder only emits events requested by a
//! [`TraceMask`].
//!
//! To enable tracing, pass a [`TraceSink`] to [`decode_names_traced`].

#[cfg(doc)]
use crate::module::decode_names_traced;

/// A set of trace events requested by a [`TraceSink`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceMask(u32);

impl core::ops::BitOr for TraceMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for TraceMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TraceMask {
    /// No tracing.
    pub const NONE: Self = Self(0);
    /// Trace top-level sections.
    ///
    /// Enables:
    /// - [`TraceSink::section`]
    pub const SECTIONS: Self = Self(1 << 0);
    /// Trace subsections of the `name` custom section.
    ///
    /// Enables:
    /// - [`TraceSink::subsection`]
    pub const SUBSECTIONS: Self = Self(1 << 1);
    /// Trace each decoded function name.
    ///
    /// Enables:
    /// - [`TraceSink::function_name`]
    pub const NAMES: Self = Self(1 << 2);
    /// Every event.
    pub const ALL: Self = Self(Self::SECTIONS.0 | Self::SUBSECTIONS.0 | Self::NAMES.0);

    /// Returns `true` if this mask includes all bits in `other`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

/// Position and size of a section or subsection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SectionInfo {
    /// Section (or subsection) id byte.
    pub id: u8,
    /// Offset of the first payload byte.
    pub offset: usize,
    /// Declared payload length in bytes.
    pub len: usize,
}

impl SectionInfo {
    /// Offset one past the last payload byte.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// What the decoder did with a section.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SectionAction {
    /// The payload was decoded.
    Interpreted,
    /// The payload was stepped over unread.
    Skipped,
}

/// A trace sink that can receive decoder events.
pub trait TraceSink {
    /// Returns the set of events the sink wants.
    fn mask(&self) -> TraceMask {
        TraceMask::NONE
    }

    /// Called once per top-level section, before its payload is decoded or skipped.
    ///
    /// Called only if `mask()` includes [`TraceMask::SECTIONS`].
    fn section(&mut self, _section: SectionInfo, _action: SectionAction) {}

    /// Called once per subsection of the `name` section, before its payload is decoded or
    /// skipped.
    ///
    /// Called only if `mask()` includes [`TraceMask::SUBSECTIONS`].
    fn subsection(&mut self, _subsection: SectionInfo, _action: SectionAction) {}

    /// Called for each function-name entry, in stream order.
    ///
    /// Called only if `mask()` includes [`TraceMask::NAMES`].
    ///
    /// - `index`: function index
    /// - `name`: decoded name
    /// - `replaced`: whether an earlier entry for `index` was overwritten
    fn function_name(&mut self, _index: u32, _name: &str, _replaced: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_contains() {
        let m = TraceMask::SECTIONS | TraceMask::NAMES;
        assert!(m.contains(TraceMask::SECTIONS));
        assert!(m.contains(TraceMask::NAMES));
        assert!(!m.contains(TraceMask::SUBSECTIONS));
        assert!(m.contains(TraceMask::NONE));
        assert!(TraceMask::ALL.contains(m));

        let mut n = TraceMask::NONE;
        n |= TraceMask::SUBSECTIONS;
        assert!(!n.contains(TraceMask::SECTIONS));
    }
}
