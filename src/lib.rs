//! # Chartgen
//!
//! Synthetic Chart.js dataset generation with JSON export and a local
//! browser preview.
//!
//! ## Quick Start
//!
//! ```rust
//! use chartgen::ChartKind;
//!
//! // Resolve a menu key and generate with the kind's default count
//! let kind = ChartKind::from_key("1").unwrap();
//! let data = kind.generate(None);
//!
//! assert_eq!(data.labels.as_ref().map(|labels| labels.len()), Some(7));
//! assert_eq!(data.datasets.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - `providers`: random words, names, dates, and `rgba(...)` colors
//! - `dataset`: the serde model of the Chart.js `data` payload
//! - `generate`: one generator function per chart kind
//! - `registry`: the `ChartKind` enum tying menu keys to generators
//! - `session`: the per-run dataset plus JSON file persistence
//! - `server`: the axum preview server (`/` page, `/data` JSON)

pub mod dataset;
pub mod errors;
pub mod generate;
pub mod providers;
pub mod registry;
pub mod server;
pub mod session;

// Re-export commonly used types for convenience
pub use dataset::{ChartData, ColorSpec, Point, Series, SeriesData};
pub use errors::{ChartGenError, Result};
pub use registry::ChartKind;
pub use session::Session;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
