//! Error types for chart data generation and preview

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for chartgen operations
pub type Result<T> = std::result::Result<T, ChartGenError>;

/// Errors that can occur while generating, saving, or serving chart data
#[derive(Error, Debug)]
pub enum ChartGenError {
    /// Menu input that names none of the eight chart kinds
    #[error("Invalid choice. Please enter a number between 1 and 8.")]
    InvalidSelection { input: String },

    /// The generated dataset could not be written to disk
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The preview server could not bind its listen address
    #[error("failed to bind {addr}: {source}")]
    ServerStart {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("JSON serialization error: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
