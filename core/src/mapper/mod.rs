//! Bitmap to glyph mapping

mod profile;
mod renderer;

pub use profile::{glyph_key, lookup, profiles, ResolutionProfile};
pub use renderer::Renderer;
