// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name resolution example.
//!
//! Run with:
//! `cargo run -p wasm_names --example resolve`
//!
//! or against a real module:
//! `cargo run -p wasm_names --example resolve -- path/to/module.wasm`

use wasm_names::symbolize::Symbolizer;

// Header, then a custom `name` section holding one function-names subsection:
// 12 => "foo", 45 => "bar".
const DEMO_MODULE: &[u8] = &[
    0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // "\0asm", version 1
    0x00, 0x12, // custom section, 18 bytes
    0x04, b'n', b'a', b'm', b'e', // "name"
    0x01, 0x0b, // function names, 11 bytes
    0x02, // 2 entries
    0x0c, 0x03, b'f', b'o', b'o', // 12 => "foo"
    0x2d, 0x03, b'b', b'a', b'r', // 45 => "bar"
];

fn main() {
    let bytes = match std::env::args().nth(1) {
        Some(path) => std::fs::read(&path).unwrap(),
        None => DEMO_MODULE.to_vec(),
    };

    let symbolizer = Symbolizer::from_module(&bytes);
    println!("{}", symbolizer.status());
    for (index, name) in symbolizer.names() {
        println!("{index:>6}  {name}");
    }

    let trap = "RuntimeError: unreachable\n    at wasm-function[45]:0x9f\n    at wasm-function[12]:0x1a2";
    println!();
    println!("{}", symbolizer.symbolize(trap));
}
