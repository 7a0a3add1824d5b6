//! Modes command implementation.

use uniqrode_core::profiles;

/// Print every draw mode with its patch size and glyphs.
pub fn list_modes() {
    println!("Draw modes (rows x columns per glyph):");
    for profile in profiles() {
        let glyphs: Vec<String> = profile
            .glyphs()
            .iter()
            .map(|g| format!("|{}|", g))
            .collect();
        println!(
            "  {}  {}x{}  {}",
            profile.id,
            profile.patch_height,
            profile.patch_width,
            glyphs.join(" ")
        );
    }
}
