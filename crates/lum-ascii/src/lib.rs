/// ASCII conversion engine for lumascii.
///
/// Converts a pixel frame to a block-averaged ASCII text rendering.

pub mod render;
pub mod sampler;

pub use render::render;
pub use sampler::block_average;
