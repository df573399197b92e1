use crate::error::CoreError;

/// Grille de pixels décodée. Immuable pendant tout le rendu.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use lum_core::frame::PixelFrame;
/// let frame = PixelFrame::new(10, 10);
/// assert_eq!(frame.data.len(), 400);
/// ```
#[derive(Debug)]
pub struct PixelFrame {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelFrame {
    /// Crée une frame noire aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use lum_core::frame::PixelFrame;
    /// let frame = PixelFrame::new(100, 50);
    /// assert_eq!(frame.width, 100);
    /// assert_eq!(frame.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Wrap a raw RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if the byte length does not
    /// equal `width × height × 4`.
    ///
    /// # Example
    /// ```
    /// use lum_core::frame::PixelFrame;
    /// let frame = PixelFrame::from_raw(vec![255u8; 16], 2, 2).unwrap();
    /// assert_eq!(frame.pixel(1, 1), (255, 255, 255, 255));
    /// assert!(PixelFrame::from_raw(vec![0u8; 5], 2, 2).is_err());
    /// ```
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use lum_core::frame::PixelFrame;
    /// let frame = PixelFrame::new(10, 10);
    /// assert_eq!(frame.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Luma BT.601 sur l'échelle 16 bits [0..65535]. Alpha ignoré.
    ///
    /// Channels are widened 8 → 16 bits (`c × 257`, so 0xFF ↦ 0xFFFF) before
    /// weighting, matching the color model the renderer quantizes against.
    ///
    /// # Example
    /// ```
    /// use lum_core::frame::PixelFrame;
    /// let frame = PixelFrame::from_raw(vec![128, 128, 128, 255], 1, 1).unwrap();
    /// assert_eq!(frame.luma16(0, 0), 32896);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luma16(&self, x: u32, y: u32) -> u32 {
        let (r, g, b, _) = self.pixel(x, y);
        let r = f64::from(u32::from(r) * 257);
        let g = f64::from(u32::from(g) * 257);
        let b = f64::from(u32::from(b) * 257);
        (0.299 * r + 0.587 * g + 0.114 * b) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_bad_length() {
        let err = PixelFrame::from_raw(vec![0u8; 7], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidDimensions {
                width: 2,
                height: 2,
                len: 7
            }
        ));
    }

    #[test]
    fn luma_black_and_white() {
        let mut frame = PixelFrame::new(1, 1);
        assert_eq!(frame.luma16(0, 0), 0);
        frame.data = vec![255; 4];
        // Les poids f64 somment juste sous 1.0 : le blanc tronque à 65534.
        assert_eq!(frame.luma16(0, 0), 65534);
    }

    #[test]
    fn luma_mid_gray_truncates() {
        // 128 × 257 = 32896 sur chaque canal, poids sommant à 1.0.
        let frame = PixelFrame::from_raw(vec![128, 128, 128, 255], 1, 1).unwrap();
        assert_eq!(frame.luma16(0, 0), 32896);
    }

    #[test]
    fn luma_weights_green_heaviest() {
        let red = PixelFrame::from_raw(vec![255, 0, 0, 255], 1, 1).unwrap();
        let green = PixelFrame::from_raw(vec![0, 255, 0, 255], 1, 1).unwrap();
        let blue = PixelFrame::from_raw(vec![0, 0, 255, 255], 1, 1).unwrap();
        assert!(green.luma16(0, 0) > red.luma16(0, 0));
        assert!(red.luma16(0, 0) > blue.luma16(0, 0));
    }

    #[test]
    fn luma_ignores_alpha() {
        let opaque = PixelFrame::from_raw(vec![90, 90, 90, 255], 1, 1).unwrap();
        let clear = PixelFrame::from_raw(vec![90, 90, 90, 0], 1, 1).unwrap();
        assert_eq!(opaque.luma16(0, 0), clear.luma16(0, 0));
    }
}
