//! Uniqrode Core - boolean bitmaps as Unicode block pictures
//!
//! A bitmap is cut into fixed-size patches, each patch is folded into an
//! integer key, and the key picks a block-element glyph from the table of
//! the chosen draw mode. The `qr` module feeds QR module matrices into the
//! same renderer.

pub mod constants;
pub mod mapper;
pub mod qr;

mod error;

pub use error::{Error, Result};

/// Settings for turning a payload into a printed QR code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Draw mode id, see [`mapper::profiles`]
    pub mode: u8,
    /// QR recovery level id (1 = Low .. 4 = Highest)
    pub level: u8,
    /// Draw dark modules as filled glyphs instead of light ones
    pub inverse: bool,
    /// Light border width in modules
    pub quiet_zone: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: constants::DEFAULT_MODE,
            level: constants::DEFAULT_LEVEL,
            inverse: false,
            quiet_zone: constants::DEFAULT_QUIET_ZONE,
        }
    }
}

// Re-export key types for convenience
pub use mapper::{lookup, profiles, Renderer, ResolutionProfile};
pub use qr::RecoveryLevel;
