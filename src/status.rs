use std::io::{self, Write};

use crate::keymap::{Selection, ShadingParams};

/// Erase the current line before rewriting it
const ERASE_LINE: &str = "\x1b[2K";

/// In-place console status block
///
/// Writes one line per viewer setting after each frame and repositions the
/// cursor so the next frame overwrites the block. Nothing is erased after
/// the last frame - the final settings stay on screen when the loop exits.
pub struct StatusDisplay<W: Write> {
    out: W,
    printed: bool,
}

impl<W: Write> StatusDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed: false,
        }
    }

    /// Consume the display and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print(&mut self, selection: &Selection, params: &ShadingParams) -> io::Result<()> {
        let lines = [
            format!("model index:          {}", selection.model_index),
            format!("texture index:        {}", selection.texture_index),
            format!("orientation mode:     {}", params.use_orientation),
            format!("orientation exponent: {:.1}", params.orientation_exp),
            format!("depth mode:           {}", !params.use_orientation),
            format!("depth scale:          {:.1}", params.depth_scale),
            format!("depth zmin:           {:.1}", params.zmin),
        ];

        // Reposition over the previous block; the distance comes from the
        // block itself so it cannot drift from the line count
        if self.printed {
            write!(self.out, "\x1b[{}A", lines.len())?;
        }

        for line in &lines {
            writeln!(self.out, "{ERASE_LINE}{line}")?;
        }
        self.out.flush()?;
        self.printed = true;
        Ok(())
    }
}

impl StatusDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}
