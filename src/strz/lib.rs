//! # strz
//!
//! A small command-line toolkit for string manipulation: lengths, case
//! conversion, trimming, shell quoting, joining, splitting, substring
//! extraction, and padding, applied to one or more operands.
//!
//! The library is UI-agnostic: everything from operand collection inward
//! takes plain Rust values and returns `Result<Vec<String>>` — the output
//! lines — without ever touching stdout, stderr, or the process exit code.
//! The binary (`main.rs` plus its private `args` module) owns argument
//! parsing, output, and exit status.
//!
//! ## Module overview
//!
//! - [`operands`]: builds the effective operand list for an invocation —
//!   explicit arguments first, then one operand per line piped on stdin.
//! - [`commands`]: one module per command family; each exposes `run`
//!   functions mapping an operand list (plus options) to output lines.
//! - [`index`]: position normalization shared by the two substring
//!   commands — 1-based inclusive ranges and 0-based offset/length, both
//!   clamped rather than failing.
//! - [`error`]: error types.
//!
//! ## Semantics in one paragraph
//!
//! Operands are processed independently and in order; every command emits
//! one line per result (`join` emits exactly one line total). All indexing
//! and width arithmetic counts Unicode scalar characters, never bytes.
//! Out-of-range substring bounds clamp to the string, and an unsatisfiable
//! range is the empty string. Only preconditions fail an invocation: an
//! empty operand list, a bad flag, or an unknown command.

pub mod commands;
pub mod error;
pub mod index;
pub mod operands;
