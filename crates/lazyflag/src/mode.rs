//! Lookup mode bitmask

use bitflags::bitflags;

bitflags! {
    /// Which token tables a lookup consults and whether absence is an error
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mode: u8 {
        /// Consult the `--name` table
        const LONG = 1;
        /// Consult the `-n` table
        const SHORT = 2;
        /// Absence yields `Error::NotFound`
        const REQUIRED = 4;
    }
}

impl Mode {
    pub fn is_required(self) -> bool {
        self.contains(Mode::REQUIRED)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::LONG
    }
}
