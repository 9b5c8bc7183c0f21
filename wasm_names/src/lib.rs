// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `wasm_names`: resolve WebAssembly function indices to the names recorded in a module.
//!
//! Runtime errors from a WebAssembly engine usually identify functions by index only
//! (`wasm-function[1234]`). Modules built with debug names carry a custom `name` section that maps
//! those indices back to symbols; this crate decodes that table and nothing else.
//!
//! - [`format`]: bounds-checked byte [`Reader`](format::Reader) and [`DecodeError`](format::DecodeError).
//! - [`module`]: the section walker, [`decode_names`](module::decode_names).
//! - [`names`]: the decoded [`NameIndex`](names::NameIndex).
//! - [`symbolize`]: best-effort labels and message rewriting for diagnostics.
//! - [`trace`]: optional decode events.
//!
//! ## Example
//!
//! ```no_run
//! use wasm_names::module::decode_names;
//! use wasm_names::symbolize::Symbolizer;
//!
//! let bytes: &[u8] = &[/* module bytes */];
//!
//! let names = decode_names(bytes)?;
//! match names.resolve(1234) {
//!     Some(name) => println!("function 1234 is {name}"),
//!     None => println!("function 1234 has no name"),
//! }
//!
//! // Never fails; falls back to numeric labels.
//! let symbolizer = Symbolizer::from_module(bytes);
//! println!("{}", symbolizer.symbolize("trap in wasm-function[1234]"));
//! # Ok::<(), wasm_names::format::DecodeError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod format;
pub mod module;
pub mod names;
pub mod symbolize;
#[cfg(test)]
pub(crate) mod testing;
pub mod trace;
