//! ANSI escape codes for terminal colours.
//!
//! The only module-level state in the render crate: a constant lookup from
//! colour name to escape sequence.

use std::fmt;

/// ANSI terminal colour codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiColour {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColour {
    /// The escape sequence for this colour.
    pub const fn code(self) -> &'static str {
        match self {
            AnsiColour::Reset => "\x1b[0m",
            AnsiColour::Red => "\x1b[31m",
            AnsiColour::Green => "\x1b[32m",
            AnsiColour::Yellow => "\x1b[33m",
            AnsiColour::Blue => "\x1b[34m",
            AnsiColour::Magenta => "\x1b[35m",
            AnsiColour::Cyan => "\x1b[36m",
            AnsiColour::White => "\x1b[37m",
            AnsiColour::Grey => "\x1b[90m",
            AnsiColour::BrightRed => "\x1b[91m",
            AnsiColour::BrightGreen => "\x1b[92m",
            AnsiColour::BrightYellow => "\x1b[93m",
            AnsiColour::BrightBlue => "\x1b[94m",
            AnsiColour::BrightMagenta => "\x1b[95m",
            AnsiColour::BrightCyan => "\x1b[96m",
            AnsiColour::BrightWhite => "\x1b[97m",
        }
    }
}

impl fmt::Display for AnsiColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
