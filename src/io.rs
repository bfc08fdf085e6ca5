// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{self, Write};

use crate::Greeting;

/// Writes the greeting followed by a newline to `writer`. Write errors are
/// returned as-is.
pub fn write_greeting<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", Greeting)
}

/// Writes the greeting line to standard output. Calling it twice writes two
/// identical lines.
pub fn greet() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_greeting(&mut stdout)?;
    stdout.flush()
}
