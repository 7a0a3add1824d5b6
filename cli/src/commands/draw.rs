//! Draw command implementation.

use anyhow::Context;
use uniqrode_core::{qr, Config};

use crate::input::read_piped_input;

/// Encode piped stdin as a QR code and print it.
pub fn draw_qr(config: &Config) -> anyhow::Result<()> {
    let Some(input) = read_piped_input().context("failed to read stdin")? else {
        println!("Nothing to draw");
        return Ok(());
    };

    let picture = qr::render(input.as_bytes(), config)?;
    print!("{}", picture);

    Ok(())
}
