/// Configuration, types, and shared structures for lumascii.
///
/// This crate contains all shared types and configuration logic
/// used across the lumascii workspace.

pub mod config;
pub mod error;
pub mod frame;
pub mod ramp;

pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::PixelFrame;
pub use ramp::Ramp;
