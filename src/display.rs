// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fmt::{Display, Formatter, Result};

use crate::GREETING;

/// The greeting as a displayable value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Greeting;

impl Display for Greeting {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(GREETING)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Greeting.to_string(), "Hello from TypeScript");
    }

    #[test]
    fn test_display_ignores_width() {
        // write_str ignores width, the greeting is always emitted verbatim
        assert_eq!(format!("{:>40}", Greeting), GREETING);
    }
}
