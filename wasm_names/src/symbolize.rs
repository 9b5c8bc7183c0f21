// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Best-effort function naming for diagnostics.
//!
//! A [`Symbolizer`] never fails: if the module's name table is missing or malformed it still
//! renders numeric labels, and reports why names are unavailable through [`Symbolizer::status`].

use alloc::string::String;
use core::fmt;

use crate::format::DecodeError;
use crate::module::decode_names;
use crate::names::NameIndex;

const FUNCTION_REF: &str = "wasm-function[";

/// Resolves function indices in runtime diagnostics to names.
#[derive(Clone, Debug, Default)]
pub struct Symbolizer {
    names: NameIndex,
    error: Option<DecodeError>,
}

impl Symbolizer {
    /// Creates a symbolizer over an already decoded table.
    #[must_use]
    pub fn new(names: NameIndex) -> Self {
        Self { names, error: None }
    }

    /// Decodes the name table of `bytes`.
    ///
    /// A decode failure is kept (see [`Symbolizer::status`]) and the symbolizer behaves as if the
    /// module had no names.
    #[must_use]
    pub fn from_module(bytes: &[u8]) -> Self {
        match decode_names(bytes) {
            Ok(names) => Self::new(names),
            Err(error) => Self {
                names: NameIndex::new(),
                error: Some(error),
            },
        }
    }

    /// Returns the underlying table.
    #[must_use]
    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    /// Returns the name recorded for `index`.
    #[must_use]
    pub fn resolve(&self, index: u32) -> Option<&str> {
        self.names.resolve(index)
    }

    /// Reports whether names could be decoded.
    #[must_use]
    pub fn status(&self) -> NameStatus<'_> {
        match &self.error {
            Some(error) => NameStatus::Unavailable(error),
            None => NameStatus::Available {
                count: self.names.len(),
            },
        }
    }

    /// Returns a printable label for function `index`.
    #[must_use]
    pub fn label(&self, index: u32) -> FunctionLabel<'_> {
        FunctionLabel {
            index,
            name: self.names.resolve(index),
        }
    }

    /// Annotates every `wasm-function[N]` reference in `message` with the function's name.
    ///
    /// `wasm-function[12]` becomes `wasm-function[12]<foo>` when index 12 is named `foo`.
    /// References that do not resolve, or are not well formed, are copied unchanged.
    #[must_use]
    pub fn symbolize(&self, message: &str) -> String {
        let mut out = String::with_capacity(message.len());
        let mut rest = message;
        while let Some(pos) = rest.find(FUNCTION_REF) {
            let digits_start = pos + FUNCTION_REF.len();
            let digits = rest[digits_start..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            let digits_end = digits_start + digits;
            if digits == 0 || !rest[digits_end..].starts_with(']') {
                out.push_str(&rest[..digits_end]);
                rest = &rest[digits_end..];
                continue;
            }

            out.push_str(&rest[..=digits_end]);
            let name = rest[digits_start..digits_end]
                .parse::<u32>()
                .ok()
                .and_then(|index| self.names.resolve(index));
            if let Some(name) = name {
                out.push('<');
                out.push_str(name);
                out.push('>');
            }
            rest = &rest[digits_end + 1..];
        }
        out.push_str(rest);
        out
    }
}

/// Outcome of decoding a module's name table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameStatus<'a> {
    /// The table decoded (it may be empty).
    Available {
        /// Number of named functions.
        count: usize,
    },
    /// The table could not be decoded.
    Unavailable(&'a DecodeError),
}

impl fmt::Display for NameStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { count: 1 } => write!(f, "resolved 1 function name"),
            Self::Available { count } => write!(f, "resolved {count} function names"),
            Self::Unavailable(error) => write!(f, "could not resolve symbol names: {error}"),
        }
    }
}

/// A function name, or `func[N]` when the index has none.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FunctionLabel<'a> {
    /// Function index.
    pub index: u32,
    /// Resolved name, if any.
    pub name: Option<&'a str>,
}

impl fmt::Display for FunctionLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "func[{}]", self.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ModuleBytes, function_names};
    use alloc::format;
    use alloc::string::ToString;

    fn symbolizer() -> Symbolizer {
        let bytes = ModuleBytes::new()
            .name_section(&[(1, function_names(&[(12, "foo"), (45, "bar")]))])
            .finish();
        Symbolizer::from_module(&bytes)
    }

    #[test]
    fn labels_fall_back_to_index() {
        let s = symbolizer();
        assert_eq!(s.label(12).to_string(), "foo");
        assert_eq!(s.label(99).to_string(), "func[99]");
        assert_eq!(s.status(), NameStatus::Available { count: 2 });
        assert_eq!(s.status().to_string(), "resolved 2 function names");
    }

    #[test]
    fn rewrites_function_references() {
        let s = symbolizer();
        let msg = "RuntimeError: unreachable\n    at wasm-function[12]:0x1a2\n    at wasm-function[45]:0x9f\n    at wasm-function[7]:0x10";
        assert_eq!(
            s.symbolize(msg),
            "RuntimeError: unreachable\n    at wasm-function[12]<foo>:0x1a2\n    at wasm-function[45]<bar>:0x9f\n    at wasm-function[7]:0x10"
        );
    }

    #[test]
    fn malformed_references_are_copied() {
        let s = symbolizer();
        for msg in [
            "wasm-function[",
            "wasm-function[]",
            "wasm-function[12",
            "wasm-function[x12]",
            "wasm-function[99999999999999999999]",
            "wasm-function[wasm-function[12]]",
        ] {
            let expected = if msg == "wasm-function[wasm-function[12]]" {
                "wasm-function[wasm-function[12]<foo>]"
            } else {
                msg
            };
            assert_eq!(s.symbolize(msg), expected, "{msg}");
        }
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        let s = symbolizer();
        assert_eq!(
            s.symbolize("échec → wasm-function[45] ✓"),
            "échec → wasm-function[45]<bar> ✓"
        );
    }

    #[test]
    fn malformed_module_degrades_to_numeric_labels() {
        let s = Symbolizer::from_module(b"not a module");
        assert!(s.names().is_empty());
        assert_eq!(s.resolve(12), None);
        assert_eq!(s.label(12).to_string(), "func[12]");
        assert_eq!(s.symbolize("at wasm-function[12]"), "at wasm-function[12]");
        assert_eq!(
            format!("{}", s.status()),
            "could not resolve symbol names: invalid module format at offset 0: bad magic header"
        );
    }
}
