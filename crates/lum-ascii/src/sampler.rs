use lum_core::frame::PixelFrame;

/// Average 16-bit luma over one block, clipped to the frame extent.
///
/// Sums `luma16` for every pixel of the `block_width × block_height` block
/// anchored at `(origin_x, origin_y)`, keeping only the pixels that exist,
/// and divides by the count actually summed (integer division). A block
/// clipped down to zero pixels returns 0.
///
/// # Example
/// ```
/// use lum_core::frame::PixelFrame;
/// use lum_ascii::sampler::block_average;
///
/// let frame = PixelFrame::from_raw(vec![128u8; 16], 2, 2).unwrap();
/// assert_eq!(block_average(&frame, 0, 0, 4, 2), 32896);
/// ```
#[must_use]
pub fn block_average(
    frame: &PixelFrame,
    origin_x: u32,
    origin_y: u32,
    block_width: u32,
    block_height: u32,
) -> u32 {
    let max_x = frame.width.min(origin_x.saturating_add(block_width));
    let max_y = frame.height.min(origin_y.saturating_add(block_height));

    let mut sum = 0u64;
    let mut count = 0u64;
    for y in origin_y..max_y {
        for x in origin_x..max_x {
            sum += u64::from(frame.luma16(x, y));
            count += 1;
        }
    }

    if count == 0 {
        return 0;
    }
    (sum / count) as u32
}
