// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conformance tests for `wasm_names` live in `tests/`.
//!
//! Run with:
//! `cargo test -p wasm_names_conformance`
