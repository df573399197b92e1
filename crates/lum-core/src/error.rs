use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Dimensions invalides : {width}×{height} pour {len} octets")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
        /// Actual byte length of the buffer.
        len: usize,
    },
}
