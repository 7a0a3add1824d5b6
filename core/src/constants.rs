//! Defaults shared by the library and the CLI.

/// Draw mode used when none is given (2 rows per glyph)
pub const DEFAULT_MODE: u8 = 2;

/// QR recovery level used when none is given (Medium)
pub const DEFAULT_LEVEL: u8 = 2;

/// Light modules added on every side of a QR bitmap
pub const DEFAULT_QUIET_ZONE: usize = 4;

/// Largest accepted quiet zone
pub const MAX_QUIET_ZONE: usize = 64;
