//! The rotating progress glyph shown while suites run.

const GLYPHS: [char; 6] = ['|', '/', '-', '|', '\\', '-'];

/// Frame counter for the spinner. Rendering is done by [`crate::output::Console`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// Moves to the next frame and returns its glyph.
    pub fn advance(&mut self) -> char {
        self.frame = (self.frame + 1) % GLYPHS.len();
        GLYPHS[self.frame]
    }

    pub fn frame(&self) -> usize {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_advance_after_reset_is_slash() {
        let mut spinner = Spinner::default();
        spinner.advance();
        spinner.reset();
        assert_eq!(spinner.advance(), '/');
    }

    #[test]
    fn wraps_after_six_frames() {
        let mut spinner = Spinner::default();
        let frames: String = (0..7).map(|_| spinner.advance()).collect();
        assert_eq!(frames, "/-|\\-|/");
        assert_eq!(spinner.frame(), 1);
    }
}
