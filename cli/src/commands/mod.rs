//! CLI command implementations.

mod draw;
mod modes;

pub use draw::draw_qr;
pub use modes::list_modes;
