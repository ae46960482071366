//! The resize pipeline.
//!
//! - **discovery**: expand dropped directories into image files
//! - **validate**: pre-decode checks (existence, emptiness, size)
//! - **decode**: load pixel data with content-based format detection
//! - **resize**: size policy decisions and resampling
//! - **persist**: PNG encoding into the temp directory
//! - **processor**: runs one original through all of the above

pub mod decode;
pub mod discovery;
pub mod persist;
pub mod processor;
pub mod resize;
pub mod validate;

pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::FileDiscovery;
pub use persist::PngWriter;
pub use processor::ImageChecker;
pub use resize::{proportional_dimensions, ImageResizer, ResizeDecision};
pub use validate::Validator;
