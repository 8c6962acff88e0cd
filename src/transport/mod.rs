//! # Printer Transport Layer
//!
//! This module provides communication backends for sending data to printers.
//!
//! ## Available Transports
//!
//! - [`serial`]: Raw writes to a printer device node (RFCOMM or line printer)

pub mod serial;

pub use serial::{DeviceTransport, discover_devices};
