// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The decoded function-name table.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// A mapping from function index to function name.
///
/// Produced by [`decode_names`](crate::module::decode_names). Names are owned; the index does not
/// borrow the module bytes it was decoded from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameIndex {
    names: BTreeMap<u32, String>,
}

impl NameIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` for `index`, returning the name it replaced (if any).
    pub(crate) fn insert(&mut self, index: u32, name: String) -> Option<String> {
        self.names.insert(index, name)
    }

    /// Returns the name recorded for `index`.
    ///
    /// `None` means the module carries no name for `index`; a function explicitly named with the
    /// empty string resolves to `Some("")`.
    #[must_use]
    pub fn resolve(&self, index: u32) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    /// Returns `true` if a name is recorded for `index`.
    #[must_use]
    pub fn contains(&self, index: u32) -> bool {
        self.names.contains_key(&index)
    }

    /// Returns the number of resolved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names were decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(index, name)` pairs in ascending index order.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a NameIndex {
    type Item = (u32, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.names.iter(),
        }
    }
}

/// Iterator over the entries of a [`NameIndex`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: alloc::collections::btree_map::Iter<'a, u32, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&index, name)| (index, name.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(&index, name)| (index, name.as_str()))
    }
}

impl ExactSizeIterator for Iter<'_> {}
