//! Draw mode registry and glyph tables
//!
//! A glyph key is built from a patch by flattening it row-major (top row
//! first, left to right) and folding the cells into an integer, most
//! significant bit first. For a 2x2 patch that gives
//! `top-left, top-right, bottom-left, bottom-right`, so `{{0, 0}, {1, 1}}`
//! becomes 3 and `{{0, 1}, {1, 1}}` becomes 7.

use tracing::debug;

use crate::{Error, Result};

/// One cell per glyph. A terminal cell is about twice as tall as it is
/// wide, so each pixel is drawn two columns wide.
static GLYPHS_1X1: [&str; 2] = [
    "  ",               // empty
    "\u{2588}\u{2588}", // ██
];

/// Two stacked cells per glyph, top bit first.
static GLYPHS_2X1: [&str; 4] = [
    " ",        // empty
    "\u{2584}", // ▄ lower half
    "\u{2580}", // ▀ upper half
    "\u{2588}", // █ full
];

/// Four quadrant cells per glyph: top-left, top-right, bottom-left, bottom-right.
static GLYPHS_2X2: [&str; 16] = [
    " ",        // empty
    "\u{2597}", // ▗
    "\u{2596}", // ▖
    "\u{2584}", // ▄
    "\u{259D}", // ▝
    "\u{2590}", // ▐
    "\u{259E}", // ▞
    "\u{259F}", // ▟
    "\u{2598}", // ▘
    "\u{259A}", // ▚
    "\u{258C}", // ▌
    "\u{2599}", // ▙
    "\u{2580}", // ▀
    "\u{259C}", // ▜
    "\u{259B}", // ▛
    "\u{2588}", // █
];

static PROFILES: [ResolutionProfile; 3] = [
    ResolutionProfile { id: 1, patch_height: 1, patch_width: 1, glyphs: &GLYPHS_1X1 },
    ResolutionProfile { id: 2, patch_height: 2, patch_width: 1, glyphs: &GLYPHS_2X1 },
    ResolutionProfile { id: 3, patch_height: 2, patch_width: 2, glyphs: &GLYPHS_2X2 },
];

/// Patch geometry plus the glyph table used for it
#[derive(Debug, PartialEq, Eq)]
pub struct ResolutionProfile {
    pub id: u8,
    /// Matrix rows per glyph
    pub patch_height: usize,
    /// Matrix columns per glyph
    pub patch_width: usize,
    glyphs: &'static [&'static str],
}

impl ResolutionProfile {
    /// Number of cells in one patch
    pub fn cells(&self) -> usize {
        self.patch_height * self.patch_width
    }

    /// Size of the key space, `2^cells`
    pub fn key_count(&self) -> usize {
        1 << self.cells()
    }

    /// Glyph for a key, `None` if the key is outside the table.
    pub fn glyph(&self, key: usize) -> Option<&'static str> {
        self.glyphs.get(key).copied()
    }

    /// Every glyph of the table, indexed by key
    pub fn glyphs(&self) -> &'static [&'static str] {
        self.glyphs
    }

    /// Key of the same patch with every cell flipped.
    pub fn complement(&self, key: usize) -> usize {
        key ^ (self.key_count() - 1)
    }
}

/// Look up a draw mode by id.
pub fn lookup(id: u8) -> Result<&'static ResolutionProfile> {
    let profile = PROFILES
        .iter()
        .find(|p| p.id == id)
        .ok_or(Error::UnknownProfile(id))?;

    debug!(
        id,
        patch_height = profile.patch_height,
        patch_width = profile.patch_width,
        "resolved draw mode"
    );
    Ok(profile)
}

/// All draw modes, in id order.
pub fn profiles() -> impl Iterator<Item = &'static ResolutionProfile> {
    PROFILES.iter()
}

/// Fold bits into a glyph key, first bit most significant.
pub fn glyph_key<I>(bits: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    bits.into_iter()
        .fold(0, |key, bit| (key << 1) | usize::from(bit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids() {
        let ids: Vec<u8> = profiles().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_profile_dimensions() {
        let dims: Vec<(usize, usize, usize)> = profiles()
            .map(|p| (p.patch_height, p.patch_width, p.glyphs().len()))
            .collect();
        assert_eq!(dims, vec![(1, 1, 2), (2, 1, 4), (2, 2, 16)]);
    }

    #[test]
    fn test_tables_are_complete() {
        for profile in profiles() {
            assert_eq!(profile.glyphs().len(), profile.key_count());
            assert!(profile.glyph(profile.key_count()).is_none());
        }
    }

    #[test]
    fn test_unknown_profile() {
        assert_eq!(lookup(0), Err(Error::UnknownProfile(0)));
        assert_eq!(lookup(4), Err(Error::UnknownProfile(4)));
        assert_eq!(lookup(u8::MAX), Err(Error::UnknownProfile(u8::MAX)));
    }

    #[test]
    fn test_unknown_profile_message_names_id() {
        let err = lookup(7).unwrap_err();
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_glyph_key_row_major() {
        // {{0, 0}, {1, 1}} and {{0, 1}, {1, 1}}
        assert_eq!(glyph_key([false, false, true, true]), 3);
        assert_eq!(glyph_key([false, true, true, true]), 7);
        assert_eq!(glyph_key([true, false, false, false]), 8);
        assert_eq!(glyph_key(std::iter::empty::<bool>()), 0);
    }

    #[test]
    fn test_half_blocks() {
        let profile = lookup(2).unwrap();
        assert_eq!(profile.glyph(glyph_key([true, false])), Some("▀"));
        assert_eq!(profile.glyph(glyph_key([false, true])), Some("▄"));
        assert_eq!(profile.glyph(0), Some(" "));
        assert_eq!(profile.glyph(3), Some("█"));
    }

    #[test]
    fn test_quadrants() {
        let profile = lookup(3).unwrap();
        assert_eq!(profile.glyph(glyph_key([true, false, false, false])), Some("▘"));
        assert_eq!(profile.glyph(glyph_key([false, true, false, false])), Some("▝"));
        assert_eq!(profile.glyph(glyph_key([false, false, true, false])), Some("▖"));
        assert_eq!(profile.glyph(glyph_key([false, false, false, true])), Some("▗"));
        assert_eq!(profile.glyph(glyph_key([true, false, true, false])), Some("▌"));
        assert_eq!(profile.glyph(glyph_key([true, false, false, true])), Some("▚"));
    }

    #[test]
    fn test_complement() {
        let profile = lookup(3).unwrap();
        for key in 0..profile.key_count() {
            assert_eq!(profile.complement(key), 15 - key);
        }
        let profile = lookup(1).unwrap();
        assert_eq!(profile.complement(0), 1);
        assert_eq!(profile.complement(1), 0);
    }

    #[test]
    fn test_glyph_widths() {
        // Double width for mode 1 keeps pixels square
        for glyph in lookup(1).unwrap().glyphs() {
            assert_eq!(glyph.chars().count(), 2);
        }
        for id in [2, 3] {
            for glyph in lookup(id).unwrap().glyphs() {
                assert_eq!(glyph.chars().count(), 1);
            }
        }
    }
}
