/// 10 caractères — compact, bon contraste. Ramp par défaut.
pub const RAMP_CLASSIC: &str = " .:-=+*#%@";

/// 70 caractères — Paul Bourke extended, bon équilibre.
pub const RAMP_EXTENDED: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Ordered glyph palette, darkest → brightest.
///
/// Maps a 16-bit-scale brightness value onto one of its glyphs.
///
/// # Example
/// ```
/// use lum_core::ramp::Ramp;
/// let ramp = Ramp::new(" .:-=+*#%@");
/// assert_eq!(ramp.glyph_for(0), ' ');
/// assert_eq!(ramp.glyph_for(65535), '@');
/// ```
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Ramp {
    /// Build a ramp from a string ordered darkest→brightest.
    ///
    /// A string with fewer than 2 glyphs falls back to the minimal `" @"`.
    ///
    /// # Example
    /// ```
    /// use lum_core::ramp::Ramp;
    /// let ramp = Ramp::new("@");
    /// assert_eq!(ramp.glyph_count(), 2);
    /// ```
    #[must_use]
    pub fn new(ramp: &str) -> Self {
        let glyphs: Vec<char> = ramp.chars().collect();
        if glyphs.len() < 2 {
            return Self::new(" @");
        }
        Self { glyphs }
    }

    /// Number of glyphs in the palette. Always ≥ 2.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Map a brightness value [0..65535] to a glyph.
    ///
    /// `index = glyph_count × brightness / 65536`; brightness above the
    /// 16-bit scale is clamped so the index stays in range.
    ///
    /// # Example
    /// ```
    /// use lum_core::ramp::Ramp;
    /// let ramp = Ramp::new(" .:#@");
    /// assert_eq!(ramp.glyph_for(32768), ':');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn glyph_for(&self, brightness: u32) -> char {
        let idx = self.glyphs.len() * brightness.min(65535) as usize / 65536;
        self.glyphs[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_maps_extremes() {
        let ramp = Ramp::new(RAMP_CLASSIC);
        assert_eq!(ramp.glyph_for(0), ' ');
        assert_eq!(ramp.glyph_for(65535), '@');
    }

    #[test]
    fn ramp_monotonic() {
        let ramp = Ramp::new(RAMP_CLASSIC);
        let glyphs: Vec<char> = RAMP_CLASSIC.chars().collect();
        let mut prev_idx = 0usize;
        for b in (0..=65535u32).step_by(7) {
            let ch = ramp.glyph_for(b);
            let idx = glyphs.iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev_idx, "ramp non monotone à brightness {b}");
            prev_idx = idx;
        }
    }

    #[test]
    fn short_ramp_falls_back() {
        let ramp = Ramp::new("");
        assert_eq!(ramp.glyph_count(), 2);
        assert_eq!(ramp.glyph_for(0), ' ');
        assert_eq!(ramp.glyph_for(65535), '@');
    }

    #[test]
    fn out_of_scale_brightness_clamps() {
        let ramp = Ramp::new(RAMP_CLASSIC);
        assert_eq!(ramp.glyph_for(u32::MAX), '@');
    }

    #[test]
    fn extended_ramp_stays_in_bounds() {
        let ramp = Ramp::new(RAMP_EXTENDED);
        assert_eq!(ramp.glyph_for(65535), '$');
    }
}
