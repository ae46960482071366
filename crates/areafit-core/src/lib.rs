//! areafit core - pixel-area checks and proportional downsizing for dropped images.
//!
//! Dropped files are grouped into original/focused pairs by base name. Each
//! original is then checked against a pixel-area budget and, when over it,
//! scaled down with its aspect ratio intact and written out as a PNG.
//!
//! ```text
//! drop -> pair by base name -> validate -> decode -> classify -> resize -> PNG
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use areafit_core::{Config, Session};
//!
//! let config = Config::load()?;
//! let mut session = Session::new(&config);
//! session.add_reference("photos/cat.png");
//! session.add_reference("photos/Focused cat.png");
//!
//! for result in &session.check_and_resize().results {
//!     println!("{}: {}", result.original.display_name(), result.classification.label());
//! }
//! ```

pub mod config;
pub mod error;
pub mod inbox;
pub mod pairing;
pub mod pipeline;
pub mod session;
pub mod types;

pub use config::{Config, ResizePolicy};
pub use error::{ConfigError, PipelineError, SaveError};
pub use inbox::DropSender;
pub use pairing::{PairingMap, PairingResolver};
pub use pipeline::{FileDiscovery, ImageChecker};
pub use session::Session;
pub use types::{
    Classification, ClassificationResult, FailureStage, FileReference, HistoryEntry, Pair,
    PairView, Role, SessionSnapshot,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
