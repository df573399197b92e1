use lum_core::config::RenderConfig;
use lum_core::frame::PixelFrame;
use lum_core::ramp::Ramp;

use crate::sampler::block_average;

/// Render a frame to ASCII text, row-major, one line per block row.
///
/// Scans the frame at `config.row_step` × `config.column_step` strides,
/// averages one `block_width × block_height` block per grid cell, and maps
/// each average through the ramp. Every line is terminated by `'\n'`, with
/// nothing after the last one; a frame with a zero dimension renders the
/// empty string.
///
/// Deterministic: same frame and config, byte-identical output.
///
/// # Example
/// ```
/// use lum_core::config::RenderConfig;
/// use lum_core::frame::PixelFrame;
/// use lum_ascii::render::render;
///
/// let frame = PixelFrame::new(2, 2);
/// let art = render(&frame, &RenderConfig::default());
/// assert_eq!(art, " \n");
/// ```
#[must_use]
pub fn render(frame: &PixelFrame, config: &RenderConfig) -> String {
    let ramp = Ramp::new(&config.ramp);

    let cols = frame.width.div_ceil(config.column_step.max(1)) as usize;
    let rows = frame.height.div_ceil(config.row_step.max(1)) as usize;
    log::debug!(
        "rendu {}×{} px → grille {cols}×{rows} ({} glyphes)",
        frame.width,
        frame.height,
        ramp.glyph_count()
    );

    let mut output = String::with_capacity(rows * (cols + 1));
    let mut y = 0;
    while y < frame.height {
        let mut x = 0;
        while x < frame.width {
            let avg = block_average(frame, x, y, config.block_width, config.block_height);
            output.push(ramp.glyph_for(avg));
            x += config.column_step.max(1);
        }
        output.push('\n');
        y += config.row_step.max(1);
    }

    output
}
