//! QR module matrices for the renderer

use qrcode::{Color, EcLevel, QrCode};
use tracing::{debug, info};

use crate::constants::MAX_QUIET_ZONE;
use crate::mapper::Renderer;
use crate::{Config, Error, Result};

/// How much of a QR code can be damaged and still be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryLevel {
    /// ~7%
    Low = 1,
    /// ~15%
    Medium = 2,
    /// ~25%
    High = 3,
    /// ~30%
    Highest = 4,
}

impl RecoveryLevel {
    fn ec_level(self) -> EcLevel {
        match self {
            Self::Low => EcLevel::L,
            Self::Medium => EcLevel::M,
            Self::High => EcLevel::Q,
            Self::Highest => EcLevel::H,
        }
    }
}

impl TryFrom<u8> for RecoveryLevel {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            4 => Ok(Self::Highest),
            _ => Err(Error::UnknownRecoveryLevel(id)),
        }
    }
}

/// Encode `data` and return its modules, `true` for dark.
///
/// The symbol is surrounded by `quiet_zone` light modules on every side,
/// at most [`MAX_QUIET_ZONE`].
pub fn bitmap(data: &[u8], level: RecoveryLevel, quiet_zone: usize) -> Result<Vec<Vec<bool>>> {
    if quiet_zone > MAX_QUIET_ZONE {
        return Err(Error::QuietZoneTooLarge(quiet_zone));
    }

    let code = QrCode::with_error_correction_level(data, level.ec_level())
        .map_err(|e| Error::QrEncode(e.to_string()))?;

    let width = code.width();
    let size = width + 2 * quiet_zone;
    debug!(bytes = data.len(), ?level, width, size, "encoded QR code");

    let mut bits = vec![vec![false; size]; size];
    for (y, modules) in code.to_colors().chunks(width).enumerate() {
        let row = &mut bits[y + quiet_zone][quiet_zone..quiet_zone + width];
        for (cell, color) in row.iter_mut().zip(modules) {
            *cell = *color == Color::Dark;
        }
    }

    Ok(bits)
}

/// Encode `data` and draw it with the settings in `config`.
pub fn render(data: &[u8], config: &Config) -> Result<String> {
    let level = RecoveryLevel::try_from(config.level)?;
    let bits = bitmap(data, level, config.quiet_zone)?;

    // Glyphs are drawn in the light foreground, so dark modules are the
    // inverted ones unless the caller asks otherwise.
    let renderer = Renderer::new(config.mode, !config.inverse, &bits)?;
    let picture = renderer.draw()?;

    info!(mode = config.mode, lines = picture.lines().count(), "rendered QR code");
    Ok(picture)
}
