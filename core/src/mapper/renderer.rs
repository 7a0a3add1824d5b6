//! Patch scanning and glyph output

use tracing::debug;

use super::profile::{glyph_key, lookup, ResolutionProfile};
use crate::{Error, Result};

/// Draws a borrowed boolean matrix with one draw mode.
///
/// Rows are `AsRef<[bool]>`, so `Vec<Vec<bool>>`, `&[[bool; N]]` and similar
/// all work. The matrix is only read.
pub struct Renderer<'a, R> {
    /// Flip every pixel before lookup
    pub invert: bool,
    profile: &'static ResolutionProfile,
    matrix: &'a [R],
}

impl<'a, R: AsRef<[bool]>> Renderer<'a, R> {
    /// Create a renderer for draw mode `mode`.
    pub fn new(mode: u8, invert: bool, matrix: &'a [R]) -> Result<Self> {
        let profile = lookup(mode)?;
        Ok(Self {
            invert,
            profile,
            matrix,
        })
    }

    /// The draw mode this renderer uses
    pub fn profile(&self) -> &'static ResolutionProfile {
        self.profile
    }

    /// Render the matrix, one line per row-block.
    ///
    /// Each row-block is `patch_height` rows tall and takes its width from
    /// its first row. Trailing rows and columns that do not fill a whole
    /// patch are dropped. A block too narrow for a single patch gives an
    /// empty line, unless every block is, in which case the result is `""`.
    /// Every line ends with `\n`.
    ///
    /// Fails with [`Error::MalformedMatrix`] if a row in a block is shorter
    /// than the part of the block that gets drawn.
    pub fn draw(&self) -> Result<String> {
        let step_y = self.profile.patch_height;
        let step_x = self.profile.patch_width;
        let height = self.matrix.len();

        let mut out = String::new();
        let mut drawn = false;
        for y in (0..height / step_y).map(|block| block * step_y) {
            let rows = &self.matrix[y..y + step_y];
            let width = rows[0].as_ref().len();
            let covered = width / step_x * step_x;
            if covered == 0 {
                out.push('\n');
                continue;
            }
            drawn = true;

            for (offset, row) in rows.iter().enumerate() {
                let len = row.as_ref().len();
                if len < covered {
                    return Err(Error::MalformedMatrix {
                        row: y + offset,
                        len,
                        needed: covered,
                    });
                }
            }

            for x in (0..covered).step_by(step_x) {
                out.push_str(self.patch_glyph(rows, x));
            }
            out.push('\n');
        }

        debug!(
            mode = self.profile.id,
            invert = self.invert,
            rows = height,
            dropped_rows = height % step_y,
            "drew matrix"
        );

        if !drawn {
            out.clear();
        }
        Ok(out)
    }

    fn patch_glyph(&self, rows: &[R], x: usize) -> &'static str {
        let bits = rows
            .iter()
            .flat_map(|row| &row.as_ref()[x..x + self.profile.patch_width])
            .map(|&pixel| pixel != self.invert);

        // Keys are below 2^cells, which is the table length
        self.profile.glyphs()[glyph_key(bits)]
    }
}
