/// Image decoding for lumascii.
///
/// Turns a file on disk into a [`lum_core::frame::PixelFrame`].

pub mod image;

pub use image::load_image;
