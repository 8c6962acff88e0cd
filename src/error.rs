//! # Error Types
//!
//! This module defines error types used throughout the barcode-printer library.

use thiserror::Error;

use crate::code128::EncodeError;

/// Main error type for barcode-printer operations
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The text cannot be encoded as Code 128 Subset B
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The barcode or text does not fit the label layout
    #[error("Layout error: {0}")]
    Layout(String),

    /// Invalid page setup or label configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
