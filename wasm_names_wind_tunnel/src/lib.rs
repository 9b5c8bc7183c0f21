// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `wasm_names` live in `benches/`.
//!
//! Run with:
//! `cargo bench -p wasm_names_wind_tunnel`
