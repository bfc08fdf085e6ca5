// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Greeting library and entry point guard
//!
//! This crate prints a fixed greeting when it is launched as a program and
//! exposes the same greeter, without side effects, when it is linked as a
//! dependency.
//!
//! # Quick Start
//!
//! Greeting on standard output:
//!
//! ```no_run
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     hello_ts::greet()?;
//!     Ok(())
//! }
//! ```
//!
//! Greeting into any writer:
//!
//! ```
//! let mut out = Vec::new();
//! hello_ts::io::write_greeting(&mut out).expect("write");
//! assert_eq!(out, b"Hello from TypeScript\n");
//! ```
//!
//! # Entry Point
//!
//! Whether the greeting is printed is decided by which artifact is built, not
//! by inspecting the process at runtime. The `hello-ts` binary is the entry
//! point and always greets exactly once. Linking the `hello_ts` library never
//! prints anything until [greet] is called. [entry::Invocation] names both
//! modes for callers that need to make the choice explicitly.

pub mod display;
pub mod entry;
pub mod io;

pub use display::Greeting;
pub use entry::Invocation;
pub use io::{greet, write_greeting};

/// The greeting printed by [greet], without its trailing newline.
pub const GREETING: &str = "Hello from TypeScript";
