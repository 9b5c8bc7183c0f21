// Copyright 2026 the Wasm Names Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![doc = "Command-line front end for `wasm_names`.\n\n\
          This is a std-only tool crate. It reads a module from disk and prints or applies its \
          function-name table.\n"]

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use wasm_names::module::decode_names_traced;
use wasm_names::names::NameIndex;
use wasm_names::symbolize::{NameStatus, Symbolizer};
use wasm_names::trace::{SectionAction, SectionInfo, TraceMask, TraceSink};

#[derive(Parser, Debug)]
#[command(name = "wasm-names", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print every named function in index order.
    Dump {
        /// Path to the `.wasm` module.
        module: PathBuf,
        /// Emit JSON instead of a plain table.
        #[arg(long)]
        json: bool,
    },
    /// Print the names of the given function indices.
    Resolve {
        /// Path to the `.wasm` module.
        module: PathBuf,
        /// Function indices to look up.
        #[arg(required = true)]
        indices: Vec<u32>,
    },
    /// Annotate `wasm-function[N]` references in runtime messages with function names.
    ///
    /// A module without usable names is not an error: messages pass through unchanged.
    Symbolize {
        /// Path to the `.wasm` module.
        module: PathBuf,
        /// Read messages from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Forwards decoder events to the `log` facade.
struct LogSink;

impl TraceSink for LogSink {
    fn mask(&self) -> TraceMask {
        if log::log_enabled!(log::Level::Trace) {
            TraceMask::ALL
        } else if log::log_enabled!(log::Level::Debug) {
            TraceMask::SECTIONS | TraceMask::SUBSECTIONS
        } else {
            TraceMask::NONE
        }
    }

    fn section(&mut self, section: SectionInfo, action: SectionAction) {
        log::debug!(
            "section id={} offset={} len={} {:?}",
            section.id,
            section.offset,
            section.len,
            action
        );
    }

    fn subsection(&mut self, subsection: SectionInfo, action: SectionAction) {
        log::debug!(
            "  name subsection id={} offset={} len={} {:?}",
            subsection.id,
            subsection.offset,
            subsection.len,
            action
        );
    }

    fn function_name(&mut self, index: u32, name: &str, replaced: bool) {
        if replaced {
            log::trace!("    func {index} => {name:?} (replaces earlier entry)");
        } else {
            log::trace!("    func {index} => {name:?}");
        }
    }
}

#[derive(Serialize)]
struct DumpJson<'a> {
    count: usize,
    functions: Vec<FunctionJson<'a>>,
}

#[derive(Serialize)]
struct FunctionJson<'a> {
    index: u32,
    name: &'a str,
}

fn load_module(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    log::info!("loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

fn decode(bytes: &[u8], path: &Path) -> Result<NameIndex> {
    let names = decode_names_traced(bytes, Some(&mut LogSink))
        .with_context(|| format!("could not resolve symbol names in {}", path.display()))?;
    log::info!("decoded {} function names", names.len());
    Ok(names)
}

fn render_table(names: &NameIndex) -> String {
    let width = names
        .iter()
        .next_back()
        .map_or(1, |(index, _)| index.to_string().len());
    let mut out = String::new();
    for (index, name) in names {
        out.push_str(&format!("{index:>width$}  {name}\n"));
    }
    out
}

fn render_json(names: &NameIndex) -> Result<String> {
    let doc = DumpJson {
        count: names.len(),
        functions: names
            .iter()
            .map(|(index, name)| FunctionJson { index, name })
            .collect(),
    };
    let mut out = serde_json::to_string_pretty(&doc).context("serialize name table")?;
    out.push('\n');
    Ok(out)
}

fn render_resolved(names: &NameIndex, indices: &[u32]) -> String {
    let mut out = String::new();
    for &index in indices {
        match names.resolve(index) {
            Some(name) => out.push_str(&format!("{index}\t{name}\n")),
            None => out.push_str(&format!("{index}\t<not found>\n")),
        }
    }
    out
}

/// Builds a symbolizer, logging instead of failing when names are unavailable.
fn symbolizer_for(bytes: &[u8]) -> Symbolizer {
    let symbolizer = Symbolizer::from_module(bytes);
    match symbolizer.status() {
        status @ NameStatus::Unavailable(_) => log::warn!("{status}"),
        status @ NameStatus::Available { .. } => log::info!("{status}"),
    }
    symbolizer
}

fn read_messages(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read messages from stdin")?;
            Ok(text)
        }
    }
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    let rendered = match command {
        Command::Dump { module, json } => {
            let names = decode(&load_module(&module)?, &module)?;
            if json {
                render_json(&names)?
            } else {
                render_table(&names)
            }
        }
        Command::Resolve { module, indices } => {
            let names = decode(&load_module(&module)?, &module)?;
            render_resolved(&names, &indices)
        }
        Command::Symbolize { module, input } => {
            let symbolizer = match load_module(&module) {
                Ok(bytes) => symbolizer_for(&bytes),
                Err(err) => {
                    log::warn!("could not resolve symbol names: {err:#}");
                    Symbolizer::default()
                }
            };
            let messages = read_messages(input.as_deref())?;
            symbolizer.symbolize(&messages)
        }
    };
    out.write_all(rendered.as_bytes()).context("write output")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let args = Args::parse();
    run(args.command, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOO_BAR: &[u8] = &[
        0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // header
        0x00, 0x12, 0x04, b'n', b'a', b'm', b'e', // custom section "name"
        0x01, 0x0b, 0x02, // function names, 2 entries
        0x0c, 0x03, b'f', b'o', b'o', // 12 => "foo"
        0x2d, 0x03, b'b', b'a', b'r', // 45 => "bar"
    ];

    fn foo_bar() -> NameIndex {
        decode(FOO_BAR, Path::new("foo_bar.wasm")).unwrap()
    }

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["wasm-names", "resolve", "m.wasm", "12", "45"]).unwrap();
        assert_eq!(
            args.command,
            Command::Resolve {
                module: PathBuf::from("m.wasm"),
                indices: vec![12, 45],
            }
        );

        let args = Args::try_parse_from(["wasm-names", "dump", "--json", "m.wasm"]).unwrap();
        assert_eq!(
            args.command,
            Command::Dump {
                module: PathBuf::from("m.wasm"),
                json: true,
            }
        );

        let args =
            Args::try_parse_from(["wasm-names", "symbolize", "m.wasm", "-i", "log.txt"]).unwrap();
        assert_eq!(
            args.command,
            Command::Symbolize {
                module: PathBuf::from("m.wasm"),
                input: Some(PathBuf::from("log.txt")),
            }
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Args::try_parse_from(["wasm-names", "resolve", "m.wasm"]).is_err());
        assert!(Args::try_parse_from(["wasm-names", "resolve", "m.wasm", "-1"]).is_err());
        assert!(Args::try_parse_from(["wasm-names", "resolve", "m.wasm", "4294967296"]).is_err());
    }

    #[test]
    fn table_is_right_aligned() {
        assert_eq!(render_table(&foo_bar()), "12  foo\n45  bar\n");
        assert_eq!(render_table(&NameIndex::new()), "");
    }

    #[test]
    fn json_lists_functions_in_order() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&foo_bar()).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "count": 2,
                "functions": [
                    { "index": 12, "name": "foo" },
                    { "index": 45, "name": "bar" },
                ],
            })
        );
    }

    #[test]
    fn resolve_marks_missing_indices() {
        assert_eq!(
            render_resolved(&foo_bar(), &[45, 99, 12]),
            "45\tbar\n99\t<not found>\n12\tfoo\n"
        );
    }

    #[test]
    fn decode_error_names_the_module() {
        let err = decode(&FOO_BAR[..18], Path::new("broken.wasm")).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "could not resolve symbol names in broken.wasm: unexpected end of input at offset 18"
        );
    }

    #[test]
    fn symbolizer_passes_text_through_for_broken_modules() {
        let s = symbolizer_for(&FOO_BAR[..18]);
        assert_eq!(s.symbolize("at wasm-function[12]"), "at wasm-function[12]");

        let s = symbolizer_for(FOO_BAR);
        assert_eq!(s.symbolize("at wasm-function[12]"), "at wasm-function[12]<foo>");
    }

    #[test]
    fn missing_module_file_is_an_error_for_dump() {
        let mut out = Vec::new();
        let missing = std::env::temp_dir().join("wasm_names_tool_missing_module.wasm");
        let err = run(
            Command::Dump {
                module: missing.clone(),
                json: false,
            },
            &mut out,
        )
        .unwrap_err();
        assert!(format!("{err:#}").starts_with(&format!("read {}", missing.display())));
        assert!(out.is_empty());
    }

    #[test]
    fn symbolize_with_missing_module_still_prints_messages() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("wasm_names_tool_messages_{}.txt", std::process::id()));
        fs::write(&input, "trap at wasm-function[3]\n").unwrap();

        let mut out = Vec::new();
        run(
            Command::Symbolize {
                module: dir.join("wasm_names_tool_missing_module.wasm"),
                input: Some(input.clone()),
            },
            &mut out,
        )
        .unwrap();
        fs::remove_file(&input).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "trap at wasm-function[3]\n");
    }
}
