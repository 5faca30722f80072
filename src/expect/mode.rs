//! Transfer modes.

use std::fmt;
use std::str::FromStr;

/// Which postconditions apply after the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Target appears, source disappears.
    Move,
    /// Target appears, source stays.
    Copy,
    /// Source disappears.
    Delete,
}

impl Mode {
    /// Copy is the only mode that leaves the source in place.
    #[inline]
    pub fn keeps_source(self) -> bool {
        matches!(self, Mode::Copy)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Move => "move",
            Mode::Copy => "copy",
            Mode::Delete => "delete",
        };
        f.write_str(s)
    }
}

impl FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(Mode::Move),
            "copy" => Ok(Mode::Copy),
            "delete" => Ok(Mode::Delete),
            _ => Err(format!("invalid transfer mode: '{s}'")),
        }
    }
}
