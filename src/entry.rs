// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{self, Write};

use crate::io::{greet, write_greeting};

/// How the current code was reached.
///
/// Only the `hello-ts` binary constructs [Invocation::EntryPoint]. When the
/// mode is unknown, [Invocation::default] is [Invocation::Dependency].
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Invocation {
    /// Selected by the process launcher as the program to run.
    EntryPoint,
    /// Linked in by some other code.
    #[default]
    Dependency,
}

impl Invocation {
    /// Whether the process launcher selected this code to run.
    pub fn is_entry_point(&self) -> bool {
        matches!(self, Self::EntryPoint)
    }

    /// Greets on standard output if this is the entry point, otherwise does
    /// nothing. Consumes the invocation so it is evaluated once:
    ///
    /// ```compile_fail,E0382
    /// use hello_ts::Invocation;
    ///
    /// let invocation = Invocation::EntryPoint;
    /// invocation.run().expect("first");
    /// invocation.run().expect("second");
    /// ```
    pub fn run(self) -> io::Result<()> {
        match self {
            Self::EntryPoint => greet(),
            Self::Dependency => Ok(()),
        }
    }

    /// Same as [Invocation::run], writing to `writer` instead of stdout.
    ///
    /// ```
    /// use hello_ts::Invocation;
    ///
    /// let mut out = Vec::new();
    /// Invocation::EntryPoint.run_with(&mut out).expect("greeting");
    /// assert_eq!(out, b"Hello from TypeScript\n");
    /// ```
    ///
    /// ```compile_fail,E0382
    /// use hello_ts::Invocation;
    ///
    /// let mut out = Vec::new();
    /// let invocation = Invocation::EntryPoint;
    /// invocation.run_with(&mut out).expect("first");
    /// invocation.run_with(&mut out).expect("second");
    /// ```
    pub fn run_with<W: Write>(self, writer: &mut W) -> io::Result<()> {
        match self {
            Self::EntryPoint => write_greeting(writer),
            Self::Dependency => Ok(()),
        }
    }
}
